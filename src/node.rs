//! Generic document nodes produced by the renderer.
//!
//! The tree is a closed set of variants: lists, list items, links and text runs. It carries the
//! information a document serializer needs (bullet marker, link destination, whether text is
//! already escaped) and nothing about concrete syntax. [`Node::dump`] draws the tree as an
//! outline for inspection and debugging.

use serde::{Serialize, Serializer};
use std::fmt::Write;

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// A node of the generated list tree.
pub enum Node {
    /// Bullet list whose children are list items.
    List {
        #[serde(serialize_with = "serialize_marker")]
        /// Bullet symbol the serializer should use for this list.
        marker: u8,
        /// List items in display order.
        children: Vec<Node>,
    },
    /// Entry of a list: a title node optionally followed by a nested list.
    ListItem {
        /// Title node and sub-list, in that order.
        children: Vec<Node>,
    },
    /// Hyperlink wrapping its children.
    Link {
        /// Link target, e.g. `#introduction`.
        destination: String,
        /// Link text.
        children: Vec<Node>,
    },
    /// Run of text.
    Text {
        /// Text content.
        content: String,
        /// Set when the content must be emitted verbatim instead of escaped.
        raw: bool,
    },
}

impl Node {
    #[must_use]
    /// Child nodes in order; text runs have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::List { children, .. }
            | Node::ListItem { children }
            | Node::Link { children, .. } => children.as_slice(),
            Node::Text { .. } => &[],
        }
    }

    #[must_use]
    /// Lowercase variant name, matching the `kind` field of the JSON form.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::List { .. } => "list",
            Node::ListItem { .. } => "list_item",
            Node::Link { .. } => "link",
            Node::Text { .. } => "text",
        }
    }

    #[must_use]
    /// Number of nested lists along the deepest path through this node.
    pub fn depth(&self) -> usize {
        let below = self.children().iter().map(Node::depth).max().unwrap_or(0);
        match self {
            Node::List { .. } => below + 1,
            _ => below,
        }
    }

    #[must_use]
    /// Draws the tree with box-drawing characters, one node per line.
    ///
    /// ```text
    /// List '*'
    /// └── ListItem
    ///     └── Link "#foo"
    ///         └── Text "Foo" (raw)
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, "", None);
        out
    }

    fn dump_into(&self, out: &mut String, indent: &str, is_last: Option<bool>) {
        let (branch, child_indent) = match is_last {
            None => ("", indent.to_string()),
            Some(true) => ("└── ", format!("{indent}    ")),
            Some(false) => ("├── ", format!("{indent}│   ")),
        };
        let _ = writeln!(out, "{indent}{branch}{}", self.label());

        let children = self.children();
        for (i, child) in children.iter().enumerate() {
            child.dump_into(out, &child_indent, Some(i + 1 == children.len()));
        }
    }

    fn label(&self) -> String {
        match self {
            Node::List { marker, .. } => format!("List {:?}", char::from(*marker)),
            Node::ListItem { .. } => "ListItem".to_string(),
            Node::Link { destination, .. } => format!("Link {destination:?}"),
            Node::Text { content, raw: true } => format!("Text {content:?} (raw)"),
            Node::Text { content, raw: false } => format!("Text {content:?}"),
        }
    }
}

fn serialize_marker<S: Serializer>(marker: &u8, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_char(char::from(*marker))
}

#[cfg(test)]
#[path = "tests/node.rs"]
mod tests;

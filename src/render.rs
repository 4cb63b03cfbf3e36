//! Turns a table of contents into a nested bullet list.
//!
//! For example, the headings
//!
//! ```text
//! # Foo
//! ## Bar
//! ## Baz
//! # Qux
//! ```
//!
//! become the list
//!
//! ```text
//! * Foo
//!   * Bar
//!   * Baz
//! * Qux
//! ```
//!
//! Every entry becomes a list item whose title links to `#<id>` when the entry has an anchor.
//! Entries are never dropped or reordered; only an empty sequence of entries collapses to no list.

use crate::node::Node;
use crate::toc::{Item, Toc};

/// Bullet symbol used when the renderer is left unconfigured.
pub const DEFAULT_MARKER: u8 = b'*';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Builds a nested list from a table of contents.
pub struct ListRenderer {
    /// Marker for elements of the list, e.g. `-` or `*`. Zero selects [`DEFAULT_MARKER`].
    pub marker: u8,
}

impl ListRenderer {
    #[must_use]
    /// Creates a renderer tagging every generated list with `marker`.
    pub fn new(marker: u8) -> Self {
        Self { marker }
    }

    #[must_use]
    /// Marker that generated lists will carry.
    pub fn effective_marker(&self) -> u8 {
        if self.marker == 0 {
            DEFAULT_MARKER
        } else {
            self.marker
        }
    }

    #[must_use]
    /// Renders the table of contents, or `None` when it has no entries.
    pub fn render(&self, toc: &Toc) -> Option<Node> {
        self.render_items(&toc.items)
    }

    fn render_items(&self, items: &[Item]) -> Option<Node> {
        if items.is_empty() {
            return None;
        }

        let marker = self.effective_marker();
        log::trace!(
            "rendering list of {} items with marker {:?}",
            items.len(),
            char::from(marker)
        );

        Some(Node::List {
            marker,
            children: items.iter().map(|item| self.render_item(item)).collect(),
        })
    }

    fn render_item(&self, item: &Item) -> Node {
        let mut children = Vec::with_capacity(2);

        if !item.title.is_empty() {
            let title = Node::Text {
                content: item.title.clone(),
                raw: true,
            };
            if item.id.is_empty() {
                children.push(title);
            } else {
                children.push(Node::Link {
                    destination: format!("#{}", item.id),
                    children: vec![title],
                });
            }
        }

        if let Some(list) = self.render_items(&item.items) {
            children.push(list);
        }

        Node::ListItem { children }
    }
}

#[must_use]
/// Renders a table of contents with the default renderer configuration.
pub fn render_list(toc: &Toc) -> Option<Node> {
    ListRenderer::default().render(toc)
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;

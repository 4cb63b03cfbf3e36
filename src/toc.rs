//! Table of contents model handed to the renderer.
//!
//! A TOC is an ordered tree of heading entries. Whoever scans the document decides titles and
//! anchor identifiers; this crate only consumes the finished tree. Absent values are spelled as
//! empty strings and empty vectors rather than `Option`, since "no anchor" and "no children" are
//! ordinary states of a heading and not errors.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// Ordered collection of top-level headings.
pub struct Toc {
    #[serde(default)]
    /// Top-level entries in document order.
    pub items: Vec<Item>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
/// One heading entry, possibly with nested sub-headings.
pub struct Item {
    #[serde(default)]
    /// Display text, already in the form the downstream serializer expects.
    pub title: String,
    #[serde(default)]
    /// Anchor identifier of the heading; empty when the heading cannot be linked to.
    pub id: String,
    #[serde(default)]
    /// Sub-headings in document order.
    pub items: Vec<Item>,
}

impl Toc {
    #[must_use]
    /// Wraps a list of top-level entries.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    #[must_use]
    /// True when there are no top-level entries to render.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    /// Deepest nesting level of the tree, 0 for an empty TOC.
    pub fn depth(&self) -> usize {
        depth_of(&self.items)
    }
}

impl Item {
    #[must_use]
    /// Creates an unlinked entry with no children.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    /// Sets the anchor identifier the rendered title links to.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    /// Replaces the sub-headings of this entry.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }
}

fn depth_of(items: &[Item]) -> usize {
    items
        .iter()
        .map(|item| 1 + depth_of(&item.items))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;

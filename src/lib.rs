//! toclist: render a table of contents as a nested list of document nodes.
//!
//! A [`toc::Toc`] built from a document's headings goes in, a [`node::Node`] tree of lists, list
//! items, links and text runs comes out, ready for a document serializer to place wherever the
//! outline belongs.
//!
//! ```
//! use toclist::render::render_list;
//! use toclist::toc::{Item, Toc};
//!
//! let toc = Toc::new(vec![Item::new("Intro").with_id("intro")]);
//! let list = render_list(&toc).unwrap();
//! assert_eq!(list.children().len(), 1);
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod input;
pub mod node;
pub mod render;
pub mod toc;

//! Rendering backend for a markdown to HTML pipeline.
//!
//! Callers build a tree of [`HtmlNode`]s, either by hand, with the fluent
//! builders in [`dsl`], or by handing over a JSON tree document, and then
//! render the root to a markup string:
//!
//! ```
//! use mdhtml::{LeafNode, ParentNode, Render};
//!
//! let page = ParentNode::new(
//!     "div",
//!     vec![LeafNode::new(Some("a"), "Google")
//!         .attr("href", "https://www.google.com")
//!         .into()],
//! );
//! assert_eq!(
//!     page.render().unwrap(),
//!     "<div><a href=\"https://www.google.com\">Google</a></div>"
//! );
//! ```

pub mod document;
pub mod error;

pub use document::{parse_tree, parse_tree_value, render_json, render_json_value, to_json};
pub use error::HtmlError;
pub use mdhtml_dsl as dsl;
pub use mdhtml_node::{Attributes, HtmlNode, LeafNode, NodeError, ParentNode, Render};

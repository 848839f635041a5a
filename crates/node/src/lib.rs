//! Markup node tree model and its recursive HTML rendering.
//!
//! A tree is built from two node shapes:
//! - [`LeafNode`]: a text value, optionally wrapped in one element
//! - [`ParentNode`]: an element wrapping an ordered list of children
//!
//! Both are unified by [`HtmlNode`] and rendered through the [`Render`]
//! trait. Rendering is structural only: text and attribute values are
//! written verbatim, without escaping.
//!
//! ```
//! use mdhtml_node::{LeafNode, ParentNode, Render};
//!
//! let node = ParentNode::new(
//!     "p",
//!     vec![
//!         LeafNode::new(Some("b"), "Bold text").into(),
//!         LeafNode::new(None, "Normal text").into(),
//!     ],
//! );
//! assert_eq!(node.render().unwrap(), "<p><b>Bold text</b>Normal text</p>");
//! ```

mod attributes;
mod error;
mod leaf;
mod node;
mod parent;
mod render;

pub use attributes::Attributes;
pub use error::NodeError;
pub use leaf::LeafNode;
pub use node::HtmlNode;
pub use parent::ParentNode;
pub use render::Render;

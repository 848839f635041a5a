//! A fluent, code-based API for building markup node trees.
//!
//! The builders here produce [`mdhtml_node::HtmlNode`] trees without spelling
//! out every `Option` and `Vec` by hand. Reusable pieces are plain functions
//! returning a builder:
//!
//! ```
//! use mdhtml_dsl::builders::*;
//! use mdhtml_dsl::{TreeBuilder, bold, link};
//! use mdhtml_node::Render;
//!
//! fn card(title: &str, child: impl TreeBuilder + 'static) -> Element {
//!     Element::new("div")
//!         .attr("class", "card")
//!         .child(Element::new("h2").text(title))
//!         .child(child)
//! }
//!
//! let node = mdhtml_dsl::build(card(
//!     "Links",
//!     Element::new("p")
//!         .child(bold("See"))
//!         .text(" ")
//!         .child(link("the docs", "https://example.com")),
//! ));
//! assert_eq!(
//!     node.render().unwrap(),
//!     "<div class=\"card\"><h2>Links</h2><p><b>See</b> <a href=\"https://example.com\">the docs</a></p></div>"
//! );
//! ```

mod element;
mod node;
mod text;
mod widgets;


/// Contains all the building blocks for creating a tree.
///
/// Import with `use mdhtml_dsl::builders::*;` for convenience.
pub mod builders {
    pub use super::element::Element;
    pub use super::text::{Leaf, Text};
}

pub use self::node::TreeBuilder;
pub use self::widgets::*;

use mdhtml_node::HtmlNode;

/// Consumes a builder and returns the node tree it describes.
pub fn build(builder: impl TreeBuilder + 'static) -> HtmlNode {
    Box::new(builder).build()
}

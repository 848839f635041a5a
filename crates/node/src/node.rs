use crate::attributes::Attributes;
use crate::error::NodeError;
use crate::leaf::LeafNode;
use crate::parent::ParentNode;
use crate::render::Render;
use serde::{Deserialize, Serialize};

/// A node in the markup tree.
///
/// Leaves and parents share one type so a parent's children can mix both
/// shapes at any depth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HtmlNode {
    /// A text value, optionally wrapped in a single element.
    Leaf(LeafNode),
    /// An element wrapping an ordered list of child nodes.
    Parent(ParentNode),
}

impl HtmlNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag.as_deref(),
            HtmlNode::Parent(parent) => parent.tag.as_deref(),
        }
    }

    /// The text value of a leaf. Parents never carry one.
    pub fn value(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.value.as_deref(),
            HtmlNode::Parent(_) => None,
        }
    }

    /// The children of a parent, or an empty slice for leaves and for parents
    /// whose child list is absent.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => parent.children.as_deref().unwrap_or(&[]),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => &leaf.attributes,
            HtmlNode::Parent(parent) => &parent.attributes,
        }
    }

    /// Returns a string identifier for the node shape.
    pub fn kind(&self) -> &'static str {
        match self {
            HtmlNode::Leaf(_) => "leaf",
            HtmlNode::Parent(_) => "parent",
        }
    }

    /// Serializes this node's attributes for splicing after its tag name.
    pub fn attributes_to_html(&self) -> String {
        self.attributes().to_html()
    }
}

impl Render for HtmlNode {
    fn render_into(&self, out: &mut String) -> Result<(), NodeError> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.render_into(out),
            HtmlNode::Parent(parent) => parent.render_into(out),
        }
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

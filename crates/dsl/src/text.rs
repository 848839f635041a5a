use crate::node::TreeBuilder;
use mdhtml_node::{Attributes, HtmlNode, LeafNode};

/// Builder for untagged inline text.
#[derive(Clone)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

impl TreeBuilder for Text {
    fn build(self: Box<Self>) -> HtmlNode {
        LeafNode::text(self.content).into()
    }
}

/// Builder for a single element wrapping a text value, e.g. `<b>bold</b>`.
#[derive(Clone)]
pub struct Leaf {
    tag: String,
    value: String,
    attributes: Attributes,
}

impl Leaf {
    pub fn new(tag: &str, value: &str) -> Self {
        Self {
            tag: tag.to_string(),
            value: value.to_string(),
            attributes: Attributes::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name, value);
        self
    }
}

impl TreeBuilder for Leaf {
    fn build(self: Box<Self>) -> HtmlNode {
        let Leaf {
            tag,
            value,
            attributes,
        } = *self;
        LeafNode::new(Some(tag.as_str()), value)
            .with_attributes(attributes)
            .into()
    }
}

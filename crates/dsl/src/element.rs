use crate::builders::Text;
use crate::node::TreeBuilder;
use mdhtml_node::{Attributes, HtmlNode, ParentNode};

/// Builder for an element containing child nodes.
#[derive(Clone)]
pub struct Element {
    tag: String,
    attributes: Attributes,
    children: Vec<Box<dyn TreeBuilder>>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Attributes::new(),
            children: vec![],
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Adds a child node (e.g. `Text`, `Leaf` or another `Element`).
    pub fn child(mut self, child: impl TreeBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    /// Adds every builder from `children`, in order.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Box<dyn TreeBuilder>>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Convenience method to add a plain text node.
    pub fn text(self, content: &str) -> Self {
        self.child(Text::new(content))
    }
}

impl TreeBuilder for Element {
    fn build(self: Box<Self>) -> HtmlNode {
        let Element {
            tag,
            attributes,
            children,
        } = *self;
        ParentNode::new(&tag, children.into_iter().map(|c| c.build()).collect())
            .with_attributes(attributes)
            .into()
    }
}

macro_rules! impl_into_boxed_builder {
    ($($name:ty),+) => {
        $(
            impl From<$name> for Box<dyn TreeBuilder> {
                fn from(builder: $name) -> Self {
                    Box::new(builder)
                }
            }
        )+
    };
}

impl_into_boxed_builder!(Element, Text, crate::builders::Leaf, HtmlNode);

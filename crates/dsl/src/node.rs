use mdhtml_node::HtmlNode;

/// The core trait for all builder objects.
///
/// Any struct that can be turned into an [`HtmlNode`] implements it, so
/// elements, text and user-defined widgets can be mixed as children.
pub trait TreeBuilder: TreeBuilderClone {
    /// Consumes the builder and produces the node it describes.
    fn build(self: Box<Self>) -> HtmlNode;
}

pub trait TreeBuilderClone {
    fn clone_box(&self) -> Box<dyn TreeBuilder>;
}

impl<T> TreeBuilderClone for T
where
    T: 'static + TreeBuilder + Clone,
{
    fn clone_box(&self) -> Box<dyn TreeBuilder> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn TreeBuilder> {
    fn clone(&self) -> Box<dyn TreeBuilder> {
        self.clone_box()
    }
}

// Already-built nodes can be dropped into a builder tree as-is.
impl TreeBuilder for HtmlNode {
    fn build(self: Box<Self>) -> HtmlNode {
        *self
    }
}

impl From<&str> for Box<dyn TreeBuilder> {
    fn from(s: &str) -> Self {
        Box::new(crate::builders::Text::new(s))
    }
}

impl From<String> for Box<dyn TreeBuilder> {
    fn from(s: String) -> Self {
        Box::new(crate::builders::Text::new(&s))
    }
}

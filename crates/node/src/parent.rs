use crate::attributes::Attributes;
use crate::error::NodeError;
use crate::node::HtmlNode;
use crate::render::{Render, write_element};
use serde::{Deserialize, Serialize};

/// A node wrapping an ordered sequence of children in an element.
///
/// `children: None` is an invalid node, while `Some(vec![])` renders as an
/// empty element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParentNode {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<HtmlNode>>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl ParentNode {
    pub fn new(tag: &str, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.to_string()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    pub fn with_attributes(mut self, attributes: impl Into<Attributes>) -> Self {
        self.attributes = attributes.into();
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Appends a child, creating the child list if it was absent.
    pub fn child(mut self, child: impl Into<HtmlNode>) -> Self {
        self.children.get_or_insert_with(Vec::new).push(child.into());
        self
    }
}

impl Render for ParentNode {
    fn render_into(&self, out: &mut String) -> Result<(), NodeError> {
        let tag = match self.tag.as_deref() {
            None | Some("") => return Err(NodeError::invalid("a parent node must have a tag")),
            Some(tag) => tag,
        };
        let children = self
            .children
            .as_ref()
            .ok_or_else(|| NodeError::invalid("a parent node must have children"))?;

        log::trace!("Rendering parent <{}> with {} children", tag, children.len());
        write_element(out, tag, &self.attributes, |out| {
            for child in children {
                child.render_into(out)?;
            }
            Ok(())
        })
    }
}

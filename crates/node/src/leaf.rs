use crate::attributes::Attributes;
use crate::error::NodeError;
use crate::render::{Render, write_element};
use serde::{Deserialize, Serialize};

/// A node holding a text value and no children.
///
/// With no tag (or an empty one) the leaf renders as bare text, which lets a
/// parent mix elements and inline text freely.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeafNode {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl LeafNode {
    /// Creates a leaf. Pass `None` as the tag for plain text.
    pub fn new(tag: Option<&str>, value: impl Into<String>) -> Self {
        Self {
            tag: tag.map(str::to_string),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Creates an untagged leaf that renders as its value verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        Self::new(None, value)
    }

    pub fn with_attributes(mut self, attributes: impl Into<Attributes>) -> Self {
        self.attributes = attributes.into();
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }
}

impl Render for LeafNode {
    fn render_into(&self, out: &mut String) -> Result<(), NodeError> {
        let value = self
            .value
            .as_deref()
            .ok_or_else(|| NodeError::invalid("a leaf node must have a value"))?;

        match self.tag.as_deref() {
            None | Some("") => {
                log::trace!("Rendering text leaf ({} bytes)", value.len());
                out.push_str(value);
                Ok(())
            }
            Some(tag) => {
                log::trace!("Rendering leaf <{}>", tag);
                write_element(out, tag, &self.attributes, |out| {
                    out.push_str(value);
                    Ok(())
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_to_html_p() {
        let node = LeafNode::new(Some("p"), "Hello, world!");
        assert_eq!(node.render().unwrap(), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_leaf_no_tag() {
        assert_eq!(
            LeafNode::new(None, "Hello, world!").render().unwrap(),
            "Hello, world!"
        );
        assert_eq!(
            LeafNode::new(Some(""), "Hello, world!").render().unwrap(),
            "Hello, world!"
        );
    }

    #[test]
    fn test_leaf_to_html_a_with_attributes() {
        let node = LeafNode::new(Some("a"), "Google!")
            .attr("href", "https://www.google.com")
            .attr("target", "_blank");
        assert_eq!(
            node.render().unwrap(),
            "<a href=\"https://www.google.com\" target=\"_blank\">Google!</a>"
        );
    }

    #[test]
    fn test_leaf_missing_value_is_invalid() {
        let node = LeafNode {
            tag: Some("p".to_string()),
            value: None,
            attributes: Attributes::new(),
        };
        assert!(matches!(node.render(), Err(NodeError::InvalidNode(_))));
    }

    #[test]
    fn test_leaf_empty_value_is_valid() {
        assert_eq!(LeafNode::new(Some(""), "").render().unwrap(), "");
        assert_eq!(LeafNode::new(Some("td"), "").render().unwrap(), "<td></td>");
    }

    #[test]
    fn test_leaf_attributes_ignored_without_tag() {
        let node = LeafNode::text("plain").attr("class", "unused");
        assert_eq!(node.render().unwrap(), "plain");
    }

    #[test]
    fn test_leaf_value_is_not_escaped() {
        let node = LeafNode::new(Some("code"), "a < b && c");
        assert_eq!(node.render().unwrap(), "<code>a < b && c</code>");
    }
}

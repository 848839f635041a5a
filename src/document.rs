//! The JSON tree document format.
//!
//! A tree document is the serde encoding of [`HtmlNode`]: every node is an
//! object with a `"type"` of `"Leaf"` or `"Parent"`, and optional `tag`,
//! `value`, `children` and `attributes` fields. A leaf without `value` or a
//! parent without `children` still parses, and is rejected when rendered.

use crate::error::HtmlError;
use mdhtml_node::{HtmlNode, Render};
use serde::Deserialize;
use serde_json::Value;

/// Parses a tree document from a JSON string.
pub fn parse_tree(json: &str) -> Result<HtmlNode, HtmlError> {
    let node: HtmlNode = serde_json::from_str(json)?;
    log::debug!("Parsed tree document with root {:?}", node.tag());
    Ok(node)
}

/// Parses a tree document from an already-decoded JSON value.
pub fn parse_tree_value(value: &Value) -> Result<HtmlNode, HtmlError> {
    let node = HtmlNode::deserialize(value)?;
    log::debug!("Parsed tree value with root {:?}", node.tag());
    Ok(node)
}

/// Parses a tree document and renders it to markup.
pub fn render_json(json: &str) -> Result<String, HtmlError> {
    Ok(parse_tree(json)?.render()?)
}

/// Renders a tree document held as a JSON value.
pub fn render_json_value(value: &Value) -> Result<String, HtmlError> {
    Ok(parse_tree_value(value)?.render()?)
}

/// Encodes a node tree as a tree document.
pub fn to_json(node: &HtmlNode) -> Result<String, HtmlError> {
    Ok(serde_json::to_string(node)?)
}

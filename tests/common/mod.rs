pub mod fixtures;

use mdhtml::{HtmlError, HtmlNode, Render};
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Render a JSON tree document held as a `serde_json::Value`
pub fn render_document(document: &Value) -> Result<String, HtmlError> {
    mdhtml::render_json_value(document)
}

/// Render a node built in code
pub fn render_node(node: impl Into<HtmlNode>) -> Result<String, HtmlError> {
    Ok(node.into().render()?)
}

/// Assert that a JSON document and a node built in code render to the same markup
#[macro_export]
macro_rules! assert_same_markup {
    ($document:expr, $node:expr) => {{
        let from_json = $crate::common::render_document(&$document)?;
        let from_code = $crate::common::render_node($node)?;
        assert_eq!(
            from_json, from_code,
            "JSON document and built node rendered differently"
        );
        from_json
    }};
}

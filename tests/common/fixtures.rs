use serde_json::{Value, json};

/// Create a leaf node document
pub fn leaf(tag: Option<&str>, value: &str) -> Value {
    match tag {
        Some(tag) => json!({ "type": "Leaf", "tag": tag, "value": value }),
        None => json!({ "type": "Leaf", "value": value }),
    }
}

/// Create a leaf node document with attributes
pub fn leaf_with_attributes(tag: &str, value: &str, attributes: Value) -> Value {
    json!({
        "type": "Leaf",
        "tag": tag,
        "value": value,
        "attributes": attributes
    })
}

/// Create a parent node document
pub fn parent(tag: &str, children: Vec<Value>) -> Value {
    json!({ "type": "Parent", "tag": tag, "children": children })
}

/// The `<a>` used throughout the nesting scenarios
pub fn google_link(text: &str) -> Value {
    leaf_with_attributes(
        "a",
        text,
        json!({ "href": "https://www.google.com", "target": "_blank" }),
    )
}

/// A `<p>` mixing bold, plain and italic runs
pub fn mixed_paragraph() -> Value {
    parent(
        "p",
        vec![
            leaf(Some("b"), "Bold text"),
            leaf(None, "Normal text"),
            leaf(Some("i"), "italic text"),
            leaf(None, "Normal text"),
        ],
    )
}

/// Build a chain of `depth` nested `<div>`s around a single text leaf
pub fn nested_divs(depth: usize, text: &str) -> Value {
    (0..depth).fold(leaf(None, text), |inner, _| parent("div", vec![inner]))
}

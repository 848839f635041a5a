// src/error.rs
use mdhtml_node::NodeError;
use thiserror::Error;

/// The error type for turning tree documents into markup.
#[derive(Error, Debug)]
pub enum HtmlError {
    #[error("Rendering failed: {0}")]
    Node(#[from] NodeError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

use thiserror::Error;

/// The error raised when a node cannot be rendered.
///
/// Rendering never recovers from this internally: the first invalid node
/// aborts the render of the whole tree it belongs to.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("Invalid node: {0}")]
    InvalidNode(String),
}

impl NodeError {
    pub(crate) fn invalid(reason: &str) -> Self {
        log::debug!("Rejecting node: {}", reason);
        NodeError::InvalidNode(reason.to_string())
    }
}

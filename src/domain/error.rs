// Render pipeline errors
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The estimate document is missing a field or has one of the wrong shape
    #[error("malformed estimate: {0}")]
    MalformedEstimate(String),

    /// A rendering collaborator refused a spec or markup update
    #[error("rendering surface error: {0}")]
    Surface(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::MalformedEstimate(err.to_string())
    }
}

//! Operation error type.

use press_renderer::RenderError;
use serde::Serialize;

/// Operation error.
#[derive(Debug, thiserror::Error)]
pub enum OpError {
    /// The markdown engine failed while rendering content.
    #[error("markdown rendering failed: {0}")]
    Render(#[from] RenderError),

    /// The external diagram backend failed.
    #[error("diagram rendering failed: {0}")]
    DiagramRenderFailed(String),

    /// The external PDF backend failed.
    #[error("pdf rendering failed: {0}")]
    PdfRenderFailed(String),

    /// The request is structurally valid but unusable.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl OpError {
    /// Stable machine-readable error code for the response envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Render(_) => "MARKDOWN_PARSE_FAILED",
            Self::DiagramRenderFailed(_) => "DIAGRAM_RENDER_FAILED",
            Self::PdfRenderFailed(_) => "PDF_RENDER_FAILED",
            Self::InvalidRequest(_) => "INVALID_REQUEST",
        }
    }

    /// Serializable error body.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Error payload returned to callers.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Stable error code.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

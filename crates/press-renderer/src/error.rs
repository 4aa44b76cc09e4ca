//! Error types for markdown rendering.

/// Rendering error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The underlying markdown engine failed to produce output.
    #[error("markdown parse failed: {0}")]
    MarkdownParseFailed(String),

    /// Syntax highlighting of a code block failed.
    #[error("syntax highlighting failed: {0}")]
    Highlight(#[from] syntect::Error),
}

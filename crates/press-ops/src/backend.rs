//! Trait seams for the external collaborators.

use press_template::PdfLayout;

/// Result type for backend calls.
pub type BackendResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// External diagram compiler.
///
/// Implementations typically shell out to a diagram CLI; they own their own
/// timeouts and retries.
pub trait DiagramBackend: Send + Sync {
    /// Compile diagram source text to an SVG string.
    fn render_svg(&self, source: &str) -> BackendResult<String>;
}

/// External PDF rasterizer.
///
/// Implementations typically drive a headless browser; they own their own
/// timeouts and retries.
pub trait PdfBackend: Send + Sync {
    /// Rasterize a complete HTML document into PDF bytes.
    fn render_pdf(&self, document_html: &str, layout: &PdfLayout) -> BackendResult<Vec<u8>>;
}

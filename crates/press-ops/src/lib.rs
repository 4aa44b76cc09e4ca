//! Operation surface for press.
//!
//! Three composable operations turn report markdown into a PDF:
//!
//! - `render_diagram` — compile one diagram source to SVG via the external
//!   diagram backend, scaled for print DPI;
//! - `render_content` — render markdown (callouts included) to HTML and
//!   inline pre-rendered diagram SVGs;
//! - `generate_pdf` — render content, build the pipeline context, and hand
//!   it to the PDF backend.
//!
//! Transport is out of scope here; the operations are plain functions over
//! serde request/response types so any command layer can wrap them. The
//! external collaborators (diagram compiler, headless-browser rasterizer)
//! plug in through the [`DiagramBackend`] and [`PdfBackend`] traits.

mod backend;
mod error;
mod ops;
mod types;

pub use backend::{BackendResult, DiagramBackend, PdfBackend};
pub use error::{ErrorBody, OpError};
pub use ops::Operations;
pub use types::{
    GeneratePdfRequest, GeneratePdfResponse, RenderContentRequest, RenderContentResponse,
    RenderDiagramRequest, RenderDiagramResponse,
};

//! Diagram embedding for press reports.
//!
//! Diagrams are rendered to SVG by an external compiler; this crate only
//! composes the results into HTML. Rendered markdown references a diagram by
//! name with a `{{diagram:<name>}}` placeholder, which
//! [`substitute_diagrams`] replaces with a wrapper block embedding the SVG
//! verbatim. [`scale_svg_dimensions`] adjusts SVG pixel dimensions for the
//! print DPI the PDF rasterizer runs at.

mod embed;
mod scale;

pub use embed::{NamedSvg, substitute_diagrams};
pub use scale::{DEFAULT_DPI, STANDARD_DPI, scale_svg_dimensions};

//! Data handed from the rendering core to the template/PDF layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Everything the template collaborator needs to produce the final document.
///
/// Constructed once per PDF-generation request by the orchestrating layer,
/// consumed by template compilation, then discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineContext {
    /// Rendered body HTML with diagrams already substituted.
    pub body_html: String,
    /// Diagram name to SVG content, for templates that place diagrams
    /// outside the body (e.g. a cover figure).
    #[serde(default)]
    pub diagrams: BTreeMap<String, String>,
    /// Report metadata.
    pub meta: ReportMeta,
    /// Resolved PDF layout options.
    pub pdf: PdfLayout,
    /// Theme configuration.
    pub theme: Theme,
}

/// Report metadata shown on the cover and in headers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMeta {
    /// Report title.
    pub title: String,
    /// Optional subtitle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Optional logo reference (URL or data URI).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// Pre-formatted date string.
    pub date: String,
}

/// PDF layout options passed through to the rasterizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfLayout {
    /// Page format name (e.g. "A4", "Letter").
    pub format: String,
    /// Landscape orientation.
    pub landscape: bool,
    /// Uniform page margin in CSS units.
    pub margin: String,
}

impl Default for PdfLayout {
    fn default() -> Self {
        Self {
            format: "A4".to_owned(),
            landscape: false,
            margin: "20mm".to_owned(),
        }
    }
}

/// Theme configuration.
///
/// The palette is carried as supplied data; deriving palette entries from
/// the primary color happens outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Theme {
    /// Primary accent color.
    pub primary_color: String,
    /// Cover page background color.
    pub cover_color: String,
    /// Derived color palette, keyed by role.
    pub palette: BTreeMap<String, String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary_color: "#2563EB".to_owned(),
            cover_color: "#1E3A8A".to_owned(),
            palette: BTreeMap::new(),
        }
    }
}

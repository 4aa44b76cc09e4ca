//! Request and response types for the three operations.

use press_diagrams::NamedSvg;
use press_template::{PdfLayout, ReportMeta, Theme};
use serde::{Deserialize, Serialize};

/// Request for `render_diagram`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDiagramRequest {
    /// Name the rendered diagram will be addressed by.
    pub name: String,
    /// Diagram source text.
    pub source: String,
    /// DPI the backend renders at; defaults to the print DPI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpi: Option<u32>,
}

/// Response for `render_diagram`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderDiagramResponse {
    /// Rendered, print-scaled diagram.
    #[serde(flatten)]
    pub diagram: NamedSvg,
}

/// Request for `render_content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContentRequest {
    /// Report markdown.
    pub markdown: String,
    /// Pre-rendered diagrams to inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagrams: Option<Vec<NamedSvg>>,
}

/// Response for `render_content`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderContentResponse {
    /// Rendered HTML with diagrams substituted.
    pub html: String,
}

/// Request for `generate_pdf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfRequest {
    /// Report markdown.
    pub markdown: String,
    /// Pre-rendered diagrams to inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagrams: Option<Vec<NamedSvg>>,
    /// Report metadata.
    pub meta: ReportMeta,
    /// PDF layout options.
    #[serde(default)]
    pub pdf: PdfLayout,
    /// Theme configuration.
    #[serde(default)]
    pub theme: Theme,
}

/// Response for `generate_pdf`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfResponse {
    /// PDF document bytes.
    pub pdf: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render_content_request_json_shape() {
        let request: RenderContentRequest =
            serde_json::from_str(r##"{"markdown": "# Hi"}"##).unwrap();
        assert_eq!(request.markdown, "# Hi");
        assert!(request.diagrams.is_none());

        let request: RenderContentRequest = serde_json::from_str(
            r#"{"markdown": "x", "diagrams": [{"name": "a", "svg": "<svg/>"}]}"#,
        )
        .unwrap();
        let diagrams = request.diagrams.unwrap();
        assert_eq!(diagrams.len(), 1);
        assert_eq!(diagrams[0].name, "a");
    }

    #[test]
    fn test_render_diagram_response_flattens() {
        let response = RenderDiagramResponse {
            diagram: NamedSvg {
                name: "flow".to_owned(),
                svg: "<svg/>".to_owned(),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["name"], "flow");
        assert_eq!(json["svg"], "<svg/>");
    }
}

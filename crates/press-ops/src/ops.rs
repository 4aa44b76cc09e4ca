//! Operation handlers.

use std::collections::BTreeMap;

use tracing::{debug, info};

use press_diagrams::{scale_svg_dimensions, substitute_diagrams};
use press_renderer::{MarkdownComposer, escape_html};
use press_template::{PipelineContext, TemplateCache};

use crate::backend::{DiagramBackend, PdfBackend};
use crate::error::OpError;
use crate::types::{
    GeneratePdfRequest, GeneratePdfResponse, RenderContentRequest, RenderContentResponse,
    RenderDiagramRequest, RenderDiagramResponse,
};

/// Built-in document shell the rendered body is framed in before PDF
/// rasterization. Compiled templates are memoized in the operations-owned
/// [`TemplateCache`].
const DOCUMENT_SHELL: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{{title}}</title>
</head>
<body style="font-family: -apple-system, 'Segoe UI', sans-serif; color: #1F2937">
<header style="border-bottom: 3px solid {{primaryColor}}; margin-bottom: 24px; padding-bottom: 12px">
<h1 style="color: {{primaryColor}}; margin: 0">{{title}}</h1>
<p style="color: #6B7280; margin: 4px 0 0">{{subtitle}} {{date}}</p>
</header>
{{body}}
</body>
</html>
"#;

/// The three press operations, wired to their external backends.
///
/// Owns the markdown composer and the template cache for the life of the
/// process; every operation call is otherwise stateless and independent.
pub struct Operations<D, P> {
    composer: MarkdownComposer,
    templates: TemplateCache<String>,
    diagram_backend: D,
    pdf_backend: P,
}

impl<D: DiagramBackend, P: PdfBackend> Operations<D, P> {
    /// Create the operation set.
    #[must_use]
    pub fn new(diagram_backend: D, pdf_backend: P) -> Self {
        Self {
            composer: MarkdownComposer::new(),
            templates: TemplateCache::new(),
            diagram_backend,
            pdf_backend,
        }
    }

    /// `render_diagram`: compile one diagram source to print-scaled SVG.
    pub fn render_diagram(
        &self,
        request: RenderDiagramRequest,
    ) -> Result<RenderDiagramResponse, OpError> {
        if request.source.trim().is_empty() {
            return Err(OpError::InvalidRequest(
                "diagram source must not be empty".to_owned(),
            ));
        }
        let svg = self
            .diagram_backend
            .render_svg(&request.source)
            .map_err(|e| OpError::DiagramRenderFailed(e.to_string()))?;
        let svg = scale_svg_dimensions(&svg, request.dpi);
        debug!(name = %request.name, bytes = svg.len(), "diagram rendered");
        Ok(RenderDiagramResponse {
            diagram: press_diagrams::NamedSvg {
                name: request.name,
                svg,
            },
        })
    }

    /// `render_content`: markdown to HTML with diagram SVGs inlined.
    pub fn render_content(
        &self,
        request: RenderContentRequest,
    ) -> Result<RenderContentResponse, OpError> {
        let html = self.composer.render_markdown(&request.markdown)?;
        let html = substitute_diagrams(&html, request.diagrams.as_deref().unwrap_or(&[]));
        Ok(RenderContentResponse { html })
    }

    /// `generate_pdf`: render content, frame it in the document shell, and
    /// hand the result to the PDF backend.
    pub fn generate_pdf(
        &self,
        request: GeneratePdfRequest,
    ) -> Result<GeneratePdfResponse, OpError> {
        if request.meta.title.trim().is_empty() {
            return Err(OpError::InvalidRequest(
                "report title must not be empty".to_owned(),
            ));
        }

        let content = self.render_content(RenderContentRequest {
            markdown: request.markdown,
            diagrams: request.diagrams.clone(),
        })?;

        let context = PipelineContext {
            body_html: content.html,
            diagrams: request
                .diagrams
                .unwrap_or_default()
                .into_iter()
                .map(|d| (d.name, d.svg))
                .collect::<BTreeMap<_, _>>(),
            meta: request.meta,
            pdf: request.pdf,
            theme: request.theme,
        };

        let shell = self
            .templates
            .get_or_insert_with("document", || DOCUMENT_SHELL.to_owned());
        let document_html = apply_shell(&shell, &context);

        let pdf = self
            .pdf_backend
            .render_pdf(&document_html, &context.pdf)
            .map_err(|e| OpError::PdfRenderFailed(e.to_string()))?;
        info!(title = %context.meta.title, bytes = pdf.len(), "pdf generated");
        Ok(GeneratePdfResponse { pdf })
    }
}

/// Fill the document shell with context values.
///
/// Metadata strings are escaped; the body is already HTML and embedded
/// as-is.
fn apply_shell(shell: &str, context: &PipelineContext) -> String {
    shell
        .replace("{{title}}", &escape_html(&context.meta.title))
        .replace(
            "{{subtitle}}",
            &escape_html(context.meta.subtitle.as_deref().unwrap_or("")),
        )
        .replace("{{date}}", &escape_html(&context.meta.date))
        .replace("{{primaryColor}}", &escape_html(&context.theme.primary_color))
        .replace("{{body}}", &context.body_html)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use press_diagrams::NamedSvg;
    use press_template::{PdfLayout, ReportMeta, Theme};

    use super::*;
    use crate::backend::BackendResult;

    struct FakeDiagrams;

    impl DiagramBackend for FakeDiagrams {
        fn render_svg(&self, source: &str) -> BackendResult<String> {
            if source.contains("fail") {
                return Err("compiler exited with status 1".into());
            }
            Ok(format!(r#"<svg width="400" height="200"><!-- {source} --></svg>"#))
        }
    }

    struct FakePdf;

    impl PdfBackend for FakePdf {
        fn render_pdf(&self, document_html: &str, _layout: &PdfLayout) -> BackendResult<Vec<u8>> {
            Ok(document_html.as_bytes().to_vec())
        }
    }

    fn operations() -> Operations<FakeDiagrams, FakePdf> {
        Operations::new(FakeDiagrams, FakePdf)
    }

    fn meta(title: &str) -> ReportMeta {
        ReportMeta {
            title: title.to_owned(),
            subtitle: Some("Subtitle".to_owned()),
            logo: None,
            date: "2026-08-27".to_owned(),
        }
    }

    #[test]
    fn test_render_diagram_scales_for_print() {
        let response = operations()
            .render_diagram(RenderDiagramRequest {
                name: "flow".to_owned(),
                source: "a -> b".to_owned(),
                dpi: None,
            })
            .unwrap();
        assert_eq!(response.diagram.name, "flow");
        assert!(response.diagram.svg.contains(r#"width="200""#));
    }

    #[test]
    fn test_render_diagram_empty_source_rejected() {
        let err = operations()
            .render_diagram(RenderDiagramRequest {
                name: "x".to_owned(),
                source: "   ".to_owned(),
                dpi: None,
            })
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_REQUEST");
    }

    #[test]
    fn test_render_diagram_backend_failure_mapped() {
        let err = operations()
            .render_diagram(RenderDiagramRequest {
                name: "x".to_owned(),
                source: "fail".to_owned(),
                dpi: None,
            })
            .unwrap_err();
        assert_eq!(err.code(), "DIAGRAM_RENDER_FAILED");
    }

    #[test]
    fn test_render_content_with_diagrams() {
        let response = operations()
            .render_content(RenderContentRequest {
                markdown: "# Intro\n\n{{diagram:flow}}".to_owned(),
                diagrams: Some(vec![NamedSvg {
                    name: "flow".to_owned(),
                    svg: "<svg/>".to_owned(),
                }]),
            })
            .unwrap();
        assert!(response.html.contains(r#"id="intro""#));
        assert!(response.html.contains("<svg/>"));
        assert!(!response.html.contains("{{diagram:flow}}"));
    }

    #[test]
    fn test_render_content_without_diagrams() {
        let response = operations()
            .render_content(RenderContentRequest {
                markdown: ":::tip Note\nBody\n:::".to_owned(),
                diagrams: None,
            })
            .unwrap();
        assert!(response.html.contains("callout-tip"));
    }

    #[test]
    fn test_generate_pdf_frames_content() {
        let response = operations()
            .generate_pdf(GeneratePdfRequest {
                markdown: "Hello **world**".to_owned(),
                diagrams: None,
                meta: meta("Q3 Report"),
                pdf: PdfLayout::default(),
                theme: Theme::default(),
            })
            .unwrap();
        let document = String::from_utf8(response.pdf).unwrap();
        assert!(document.contains("<title>Q3 Report</title>"));
        assert!(document.contains("Subtitle"));
        assert!(document.contains("<strong>world</strong>"));
        assert!(document.contains(Theme::default().primary_color.as_str()));
    }

    #[test]
    fn test_generate_pdf_requires_title() {
        let err = operations()
            .generate_pdf(GeneratePdfRequest {
                markdown: "x".to_owned(),
                diagrams: None,
                meta: meta(" "),
                pdf: PdfLayout::default(),
                theme: Theme::default(),
            })
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_REQUEST");
    }

    #[test]
    fn test_generate_pdf_title_escaped() {
        let response = operations()
            .generate_pdf(GeneratePdfRequest {
                markdown: "x".to_owned(),
                diagrams: None,
                meta: meta("Ops & Eng <Review>"),
                pdf: PdfLayout::default(),
                theme: Theme::default(),
            })
            .unwrap();
        let document = String::from_utf8(response.pdf).unwrap();
        assert!(document.contains("Ops &amp; Eng &lt;Review&gt;"));
    }

    #[test]
    fn test_shell_compiled_once() {
        let ops = operations();
        for _ in 0..2 {
            ops.generate_pdf(GeneratePdfRequest {
                markdown: "x".to_owned(),
                diagrams: None,
                meta: meta("T"),
                pdf: PdfLayout::default(),
                theme: Theme::default(),
            })
            .unwrap();
        }
        assert_eq!(ops.templates.len(), 1);
    }
}

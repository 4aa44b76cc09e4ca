//! End-to-end tests for the `render_content` operation.

use press_diagrams::NamedSvg;
use press_ops::{
    BackendResult, DiagramBackend, Operations, PdfBackend, RenderContentRequest,
};
use press_template::PdfLayout;

struct NoDiagrams;

impl DiagramBackend for NoDiagrams {
    fn render_svg(&self, _source: &str) -> BackendResult<String> {
        Err("no diagram backend in this test".into())
    }
}

struct NoPdf;

impl PdfBackend for NoPdf {
    fn render_pdf(&self, _document_html: &str, _layout: &PdfLayout) -> BackendResult<Vec<u8>> {
        Err("no pdf backend in this test".into())
    }
}

fn render(markdown: &str, diagrams: Option<Vec<NamedSvg>>) -> String {
    Operations::new(NoDiagrams, NoPdf)
        .render_content(RenderContentRequest {
            markdown: markdown.to_owned(),
            diagrams,
        })
        .unwrap()
        .html
}

#[test]
fn callout_between_prose_and_heading() {
    let html = render(
        "# Intro\n\n:::warning Heads Up\nBe careful.\n:::\n\nDone.",
        None,
    );
    assert!(html.contains(r#"id="intro""#));
    assert!(html.contains("callout-warning"));
    assert!(html.contains("Heads Up"));
    assert!(html.contains("Be careful."));
    assert!(html.contains("<p>Done.</p>"));
}

#[test]
fn fenced_callout_survives_as_literal_text() {
    let html = render(
        "```\n:::info fake\nx\n:::\n```\n\n:::info Real\nY\n:::",
        None,
    );
    assert!(html.contains(":::info fake"));
    assert_eq!(html.matches("callout-info").count(), 1);
    assert!(html.contains("Real"));
}

#[test]
fn document_without_callouts_renders_plain_markdown() {
    let html = render("A paragraph with **bold** text.\n\n- one\n- two", None);
    assert!(html.contains("<strong>bold</strong>"));
    assert_eq!(html.matches("<li>").count(), 2);
    assert!(!html.contains("callout"));
}

#[test]
fn diagram_placeholders_inline_all_occurrences() {
    let html = render(
        "{{diagram:x}} and {{diagram:x}}",
        Some(vec![NamedSvg {
            name: "x".to_owned(),
            svg: "<svg/>".to_owned(),
        }]),
    );
    assert_eq!(html.matches("<svg/>").count(), 2);
    assert!(!html.contains("{{diagram:x}}"));
}

#[test]
fn unknown_diagram_placeholder_left_literal() {
    let html = render("see {{diagram:missing}}", Some(vec![]));
    assert!(html.contains("{{diagram:missing}}"));
}

#[test]
fn table_with_callout_and_code() {
    let markdown = "\
## Findings

| Severity | Count |
|----------|-------|
| High     | 2     |

:::critical Act Now
Patch `service-a` this week.
:::

```bash
kubectl rollout restart deploy/service-a
```
";
    let html = render(markdown, None);
    assert!(html.contains(r#"id="findings""#));
    assert!(html.contains("<table>"));
    assert!(html.contains("callout-critical"));
    assert!(html.contains(r#"class="language-bash""#));
    assert!(html.contains("rollout"));
}

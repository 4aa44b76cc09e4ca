//! Placeholder replacement with rendered diagram content.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One pre-rendered diagram, addressed by placeholder name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedSvg {
    /// Placeholder name, matched case-sensitively.
    pub name: String,
    /// SVG markup, embedded verbatim.
    pub svg: String,
}

const WRAPPER_OPEN: &str =
    r#"<div class="diagram-block" style="text-align: center; margin: 20px 0; page-break-inside: avoid"><div class="diagram-frame">"#;
const WRAPPER_CLOSE: &str = "</div></div>";

/// Replace every `{{diagram:<name>}}` occurrence in `html` with its rendered
/// SVG wrapped in the diagram block markup.
///
/// All occurrences of a placeholder are replaced, not just the first.
/// Diagrams with no referencing placeholder are ignored; placeholders naming
/// a diagram that was not supplied stay literal.
#[must_use]
pub fn substitute_diagrams(html: &str, diagrams: &[NamedSvg]) -> String {
    if diagrams.is_empty() {
        return html.to_owned();
    }

    let mut output = html.to_owned();
    for diagram in diagrams {
        let token = format!("{{{{diagram:{}}}}}", diagram.name);
        if !output.contains(&token) {
            debug!(name = %diagram.name, "diagram not referenced by any placeholder");
            continue;
        }
        let replacement = format!("{WRAPPER_OPEN}{}{WRAPPER_CLOSE}", diagram.svg);
        output = output.replace(&token, &replacement);
    }

    if output.contains("{{diagram:") {
        warn!("unresolved diagram placeholders left in output");
    }
    output
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn svg(name: &str, body: &str) -> NamedSvg {
        NamedSvg {
            name: name.to_owned(),
            svg: body.to_owned(),
        }
    }

    #[test]
    fn test_empty_list_returns_input_unchanged() {
        let html = "before {{diagram:x}} after";
        assert_eq!(substitute_diagrams(html, &[]), html);
    }

    #[test]
    fn test_single_substitution() {
        let out = substitute_diagrams("intro {{diagram:flow}} outro", &[svg("flow", "<svg/>")]);
        assert!(out.contains("<svg/>"));
        assert!(out.contains("diagram-block"));
        assert!(!out.contains("{{diagram:flow}}"));
        assert!(out.starts_with("intro "));
        assert!(out.ends_with(" outro"));
    }

    #[test]
    fn test_all_occurrences_replaced() {
        let out = substitute_diagrams("{{diagram:x}} and {{diagram:x}}", &[svg("x", "<svg/>")]);
        assert_eq!(out.matches("<svg/>").count(), 2);
        assert_eq!(out.matches("{{diagram:x}}").count(), 0);
    }

    #[test]
    fn test_unreferenced_diagram_ignored() {
        let out = substitute_diagrams("no placeholders here", &[svg("unused", "<svg/>")]);
        assert_eq!(out, "no placeholders here");
    }

    #[test]
    fn test_unknown_placeholder_stays_literal() {
        let out = substitute_diagrams("{{diagram:missing}}", &[svg("other", "<svg/>")]);
        assert_eq!(out, "{{diagram:missing}}");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let out = substitute_diagrams("{{diagram:Flow}}", &[svg("flow", "<svg/>")]);
        assert_eq!(out, "{{diagram:Flow}}");
    }

    #[test]
    fn test_multiple_diagrams() {
        let out = substitute_diagrams(
            "{{diagram:a}} {{diagram:b}}",
            &[svg("a", "<svg id=\"a\"/>"), svg("b", "<svg id=\"b\"/>")],
        );
        assert!(out.contains("<svg id=\"a\"/>"));
        assert!(out.contains("<svg id=\"b\"/>"));
    }

    #[test]
    fn test_wrapper_is_two_levels() {
        let out = substitute_diagrams("{{diagram:x}}", &[svg("x", "<svg/>")]);
        assert_eq!(out.matches("<div").count(), 2);
        assert_eq!(out.matches("</div>").count(), 2);
    }
}

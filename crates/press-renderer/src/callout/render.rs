//! Callout HTML rendering.

use crate::error::RenderError;
use crate::slug::escape_html;

use super::extract::CalloutMatch;
use super::style::style_for;

/// Render one extracted callout into an HTML fragment.
///
/// The CSS class keeps the original type token even when style lookup falls
/// back to `info`. `render_body` renders the body markdown with the same
/// engine used for the outer document; the body div is omitted entirely when
/// the trimmed body is empty.
pub fn render_callout<F>(matched: &CalloutMatch, render_body: F) -> Result<String, RenderError>
where
    F: Fn(&str) -> Result<String, RenderError>,
{
    let style = style_for(&matched.kind);

    let container_style = [
        format!("border-left: 4px solid {}", style.border_color),
        format!("background-color: {}", style.background_color),
        "padding: 12px 16px".to_owned(),
        "margin: 16px 0".to_owned(),
        "border-radius: 6px".to_owned(),
        "page-break-inside: avoid".to_owned(),
    ]
    .join("; ");

    let title_style = [
        "font-weight: bold".to_owned(),
        "font-size: 15px".to_owned(),
        format!("color: {}", style.title_color),
        "margin-bottom: 6px".to_owned(),
    ]
    .join("; ");

    let mut fragment = format!(
        r#"<div class="callout callout-{}" style="{container_style}"><div class="callout-title" style="{title_style}">{} {}</div>"#,
        matched.kind,
        style.icon,
        escape_html(&matched.title),
    );

    if !matched.body.is_empty() {
        let body_style = [
            format!("color: {}", style.body_color),
            "font-size: 14px".to_owned(),
            "line-height: 1.6".to_owned(),
        ]
        .join("; ");
        let body_html = render_body(&matched.body)?;
        fragment.push_str(&format!(
            r#"<div class="callout-body" style="{body_style}">{body_html}</div>"#
        ));
    }

    fragment.push_str("</div>");
    Ok(fragment)
}

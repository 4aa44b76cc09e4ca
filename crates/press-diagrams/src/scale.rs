//! SVG dimension scaling for print output.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Baseline screen DPI; at this DPI dimensions are unchanged.
pub const STANDARD_DPI: u32 = 96;

/// Default DPI the external diagram compiler renders at (2x for crisp PDF
/// output).
pub const DEFAULT_DPI: u32 = 192;

/// `width="400"` / `height="200px"` XML attributes. The leading whitespace
/// keeps compound names like `stroke-width` out.
static ATTR_DIM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s(width|height)="(\d+)(?:px)?""#).unwrap());

/// `width:136px` / `height: 210px` style properties, with the same
/// compound-name guard.
static STYLE_DIM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^-\w])(width|height)(:\s*)(\d+)px").unwrap());

/// Scale SVG width and height for the DPI the diagram was rendered at.
///
/// A diagram rendered at 192 DPI has its dimensions halved so it occupies
/// its intended physical size on the page. Only the root `<svg>` tag is
/// rewritten, in both its XML attributes (`width="136"`) and inline style
/// properties (`width:136px`); dimensions of nested elements and the
/// `viewBox` stay untouched. At 96 DPI the input is returned unchanged.
#[must_use]
pub fn scale_svg_dimensions(svg: &str, dpi: Option<u32>) -> String {
    let dpi = dpi.unwrap_or(DEFAULT_DPI);
    if dpi == STANDARD_DPI {
        return svg.to_owned();
    }
    let Some(tag_start) = svg.find("<svg") else {
        return svg.to_owned();
    };
    let tag_end = svg[tag_start..]
        .find('>')
        .map_or(svg.len(), |i| tag_start + i + 1);

    let factor = f64::from(STANDARD_DPI) / f64::from(dpi);
    let root = &svg[tag_start..tag_end];
    let root = ATTR_DIM_RE.replace_all(root, |caps: &Captures| {
        format!(r#" {}="{}""#, &caps[1], rescale(&caps[2], factor))
    });
    let root = STYLE_DIM_RE.replace_all(&root, |caps: &Captures| {
        format!("{}{}{}{}px", &caps[1], &caps[2], &caps[3], rescale(&caps[4], factor))
    });

    let mut out = String::with_capacity(svg.len());
    out.push_str(&svg[..tag_start]);
    out.push_str(&root);
    out.push_str(&svg[tag_end..]);
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rescale(raw: &str, factor: f64) -> u32 {
    let value: f64 = raw.parse().unwrap_or(0.0);
    (value * factor).round() as u32
}

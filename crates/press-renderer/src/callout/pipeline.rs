//! Callout rewrite pipeline.

use tracing::debug;

use crate::error::RenderError;

use super::extract::extract_callouts;
use super::fence::find_code_fence_ranges;
use super::render::render_callout;

/// Rewrite every callout occurrence in `markdown` into its HTML fragment,
/// leaving all other text untouched.
///
/// Two passes over the original input: fence ranges first, then callout
/// extraction. A match whose opening offset falls inside any fence range is
/// discarded and its text stays literal. Substitutions run in reverse
/// document order so earlier offsets stay valid while later matches are
/// spliced in.
pub fn process_callouts<F>(markdown: &str, render_body: F) -> Result<String, RenderError>
where
    F: Fn(&str) -> Result<String, RenderError>,
{
    let fences = find_code_fence_ranges(markdown);
    let matches = extract_callouts(markdown);
    if matches.is_empty() {
        return Ok(markdown.to_owned());
    }

    let mut output = markdown.to_owned();
    let mut rendered = 0usize;

    for m in matches.iter().rev() {
        if fences.iter().any(|range| range.contains(m.offset)) {
            debug!(offset = m.offset, kind = %m.kind, "callout inside code fence left literal");
            continue;
        }
        let fragment = render_callout(m, &render_body)?;
        output.replace_range(m.offset..m.offset + m.full_text.len(), &fragment);
        rendered += 1;
    }

    debug!(
        candidates = matches.len(),
        rendered, "callout pipeline finished"
    );
    Ok(output)
}

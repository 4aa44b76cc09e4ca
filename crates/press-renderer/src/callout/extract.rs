//! Callout occurrence extraction.

use super::fence::line_table;

/// One callout occurrence found in raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutMatch {
    /// Exact matched substring, opening marker through closing marker.
    pub full_text: String,
    /// Type token, captured verbatim even when unrecognized.
    pub kind: String,
    /// Title text with the gap after the type token fully consumed.
    pub title: String,
    /// Body markdown, trimmed; empty when absent or all-whitespace.
    pub body: String,
    /// Byte offset of the opening line in the scanned text.
    pub offset: usize,
}

/// Extract all callout occurrences from `text`, in document order.
///
/// Grammar, matched line by line:
///
/// - opening line: `:::` at start of line, a word-character type token, one
///   or more spaces or tabs, then the rest of the line as the title;
/// - body: every following line up to, but not including, the first line
///   that is exactly `:::`;
/// - closing line: that bare `:::` line, consumed as part of the match.
///
/// A colon run that is not alone on its own line never opens or closes a
/// block, an opening with no later bare `:::` line produces no match, and
/// consecutive blocks are captured independently. Never fails; malformed
/// syntax is simply not matched.
#[must_use]
pub fn extract_callouts(text: &str) -> Vec<CalloutMatch> {
    let lines = line_table(text);
    let mut matches = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let (start, content) = lines[i];
        let Some((kind, title)) = parse_opening(content) else {
            i += 1;
            continue;
        };

        // Non-greedy: the first bare ::: line terminates the block.
        let closing = lines[i + 1..]
            .iter()
            .position(|(_, c)| *c == ":::")
            .map(|off| i + 1 + off);

        let Some(j) = closing else {
            // Unterminated block; nothing later can close it either, but the
            // lines it would have covered may still open their own blocks.
            i += 1;
            continue;
        };

        let (close_start, _) = lines[j];
        let end = close_start + 3;
        let body_lines: Vec<&str> = lines[i + 1..j].iter().map(|(_, c)| *c).collect();

        matches.push(CalloutMatch {
            full_text: text[start..end].to_owned(),
            kind: kind.to_owned(),
            title: title.to_owned(),
            body: body_lines.join("\n").trim().to_owned(),
            offset: start,
        });

        i = j + 1;
    }

    matches
}

/// Parse a callout opening line into `(type, title)`.
///
/// The whitespace between the type token and the title is consumed entirely,
/// so the captured title has no leading whitespace; internal spacing within
/// the title is preserved verbatim.
fn parse_opening(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix(":::")?;

    let kind_len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count();
    if kind_len == 0 {
        return None;
    }

    let after = &rest[kind_len..];
    let gap = after.bytes().take_while(|b| *b == b' ' || *b == b'\t').count();
    if gap == 0 {
        return None;
    }

    Some((&rest[..kind_len], after[gap..].trim_end()))
}

//! Fenced code-block range scanning.
//!
//! Callout syntax inside a fenced code block must stay literal. The scanner
//! locates every fenced region up front so the pipeline can filter callout
//! matches by a point-in-interval test.

/// Half-open byte range `[start, end)` of a fenced code block, including the
/// fence delimiter lines themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeFenceRange {
    /// Offset of the opening fence line.
    pub start: usize,
    /// Offset just past the closing fence's final backtick.
    pub end: usize,
}

impl CodeFenceRange {
    /// Whether `pos` lies inside this range.
    ///
    /// The position exactly at the closing-fence start is still inside; the
    /// position immediately after the range is outside.
    #[must_use]
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}

/// Locate all fenced code-block ranges in `text`.
///
/// A fence opens on a line starting with three backticks (optionally
/// followed by a language tag) and closes on the next line that is exactly
/// three backticks and nothing else. Unterminated fences produce no range.
/// After a range is found the scan restarts strictly past its end, so fences
/// never nest or overlap and ranges are reported in document order.
#[must_use]
pub fn find_code_fence_ranges(text: &str) -> Vec<CodeFenceRange> {
    let lines = line_table(text);
    let mut ranges = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let (start, content) = lines[i];
        if !content.starts_with("```") {
            i += 1;
            continue;
        }

        // Opening fence found; look for the first bare ``` line after it.
        let closing = lines[i + 1..]
            .iter()
            .position(|(_, c)| *c == "```")
            .map(|off| i + 1 + off);

        match closing {
            Some(j) => {
                let (close_start, _) = lines[j];
                ranges.push(CodeFenceRange {
                    start,
                    end: close_start + 3,
                });
                i = j + 1;
            }
            None => {
                // Unterminated fence: invisible to the scanner.
                i += 1;
            }
        }
    }

    ranges
}

/// Split `text` into `(byte_offset, content)` lines, with line terminators
/// stripped from the content.
pub(crate) fn line_table(text: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut offset = 0;
    for segment in text.split_inclusive('\n') {
        let content = segment.strip_suffix('\n').unwrap_or(segment);
        let content = content.strip_suffix('\r').unwrap_or(content);
        lines.push((offset, content));
        offset += segment.len();
    }
    lines
}

//! Syntax highlighting for fenced code blocks.

use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{IncludeBackground, styled_line_to_highlighted_html};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::error::RenderError;

const THEME_NAME: &str = "InspiredGitHub";

/// Inline-styled syntax highlighter backed by syntect.
///
/// Styles are emitted inline rather than as CSS classes because the HTML is
/// consumed by the PDF rasterizer without an external stylesheet.
pub struct CodeHighlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter {
    /// Create a highlighter with the bundled syntax and theme sets.
    #[must_use]
    pub fn new() -> Self {
        let mut themes = ThemeSet::load_defaults();
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme: themes.themes.remove(THEME_NAME).unwrap_or_default(),
        }
    }

    /// Highlight `code`, using `lang` when it names a known syntax and
    /// first-line auto-detection otherwise.
    pub fn highlight(&self, lang: Option<&str>, code: &str) -> Result<String, RenderError> {
        let syntax = lang
            .and_then(|tag| self.syntaxes.find_syntax_by_token(tag))
            .unwrap_or_else(|| self.detect(code));

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut html = String::with_capacity(code.len() * 2);
        for line in LinesWithEndings::from(code) {
            let regions = highlighter.highlight_line(line, &self.syntaxes)?;
            html.push_str(&styled_line_to_highlighted_html(
                &regions,
                IncludeBackground::No,
            )?);
        }
        Ok(html)
    }

    fn detect(&self, code: &str) -> &SyntaxReference {
        code.lines()
            .next()
            .and_then(|first| self.syntaxes.find_syntax_by_first_line(first))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text())
    }
}

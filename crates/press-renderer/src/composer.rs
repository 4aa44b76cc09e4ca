//! Markdown composition: callout pipeline plus pulldown-cmark rendering.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::callout::process_callouts;
use crate::error::RenderError;
use crate::highlight::CodeHighlighter;
use crate::slug::{escape_html, slugify};

/// Markdown-to-HTML composer.
///
/// Runs the callout pipeline over the raw markdown, then renders the result
/// with pulldown-cmark. Tables and strikethrough are enabled; a lone newline
/// inside a paragraph does not force a line break. Headings get an `id`
/// attribute from [`slugify`] and fenced code blocks are syntax-highlighted.
///
/// Stateless apart from the loaded syntax/theme sets; every call to
/// [`render_markdown`](Self::render_markdown) is independent.
pub struct MarkdownComposer {
    highlighter: CodeHighlighter,
}

/// Heading events buffered between `Start(Heading)` and `End(Heading)`.
struct HeadingCapture<'a> {
    level: HeadingLevel,
    inner: Vec<Event<'a>>,
    text: String,
}

impl Default for MarkdownComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownComposer {
    /// Create a composer with the default highlighter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            highlighter: CodeHighlighter::new(),
        }
    }

    fn parser_options() -> Options {
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH
    }

    /// Render report markdown to HTML.
    ///
    /// Callout bodies are rendered recursively with the same underlying
    /// renderer, so markdown inside a callout behaves exactly like top-level
    /// markdown.
    pub fn render_markdown(&self, markdown: &str) -> Result<String, RenderError> {
        let processed = process_callouts(markdown, |body| self.render_document(body))?;
        self.render_document(&processed)
    }

    /// Render already-callout-substituted markdown through pulldown-cmark.
    fn render_document(&self, markdown: &str) -> Result<String, RenderError> {
        let parser = Parser::new_ext(markdown, Self::parser_options());

        let mut events: Vec<Event> = Vec::new();
        let mut heading: Option<HeadingCapture> = None;
        let mut in_code = false;
        let mut code_lang: Option<String> = None;
        let mut code_buf = String::new();

        for event in parser {
            if in_code {
                match event {
                    Event::Text(text) => code_buf.push_str(&text),
                    Event::End(TagEnd::CodeBlock) => {
                        in_code = false;
                        let html = self.code_block_html(code_lang.take().as_deref(), &code_buf)?;
                        events.push(Event::Html(html.into()));
                        code_buf.clear();
                    }
                    // pulldown-cmark emits only text between code block tags
                    _ => {}
                }
                continue;
            }

            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    in_code = true;
                    code_lang = fence_language(&kind);
                }
                Event::Start(Tag::Heading { level, .. }) => {
                    heading = Some(HeadingCapture {
                        level,
                        inner: Vec::new(),
                        text: String::new(),
                    });
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(capture) = heading.take() {
                        let level = heading_level_to_num(capture.level);
                        let id = slugify(&capture.text);
                        events.push(Event::Html(format!(r#"<h{level} id="{id}">"#).into()));
                        events.extend(capture.inner);
                        events.push(Event::Html(format!("</h{level}>").into()));
                    }
                }
                other => {
                    if let Some(capture) = heading.as_mut() {
                        match &other {
                            Event::Text(text) | Event::Code(text) => capture.text.push_str(text),
                            _ => {}
                        }
                        capture.inner.push(other);
                    } else {
                        events.push(other);
                    }
                }
            }
        }

        let mut html = String::with_capacity(markdown.len() * 2);
        pulldown_cmark::html::push_html(&mut html, events.into_iter());
        Ok(html)
    }

    fn code_block_html(&self, lang: Option<&str>, source: &str) -> Result<String, RenderError> {
        let highlighted = self.highlighter.highlight(lang, source)?;
        Ok(match lang {
            Some(tag) => format!(
                r#"<pre><code class="language-{}">{highlighted}</code></pre>"#,
                escape_html(tag)
            ),
            None => format!("<pre><code>{highlighted}</code></pre>"),
        })
    }
}

/// First token of the fence info string, or `None` for bare and indented
/// blocks.
fn fence_language(kind: &CodeBlockKind) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) => info.split_whitespace().next().map(str::to_owned),
        CodeBlockKind::Indented => None,
    }
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

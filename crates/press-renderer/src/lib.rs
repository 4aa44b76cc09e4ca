//! Markdown-to-HTML rendering for press reports.
//!
//! This crate turns report markdown into styled HTML in two stages:
//!
//! 1. The callout pipeline rewrites `:::type Title` blocks into styled
//!    `<div>` fragments, skipping any occurrence inside a fenced code block.
//! 2. [`MarkdownComposer`] renders the result with pulldown-cmark, assigning
//!    heading anchors via [`slugify`] and syntax-highlighting code blocks.
//!
//! # Example
//!
//! ```
//! use press_renderer::MarkdownComposer;
//!
//! let composer = MarkdownComposer::new();
//! let html = composer
//!     .render_markdown("# Intro\n\n:::warning Heads Up\nBe careful.\n:::")
//!     .unwrap();
//! assert!(html.contains(r#"id="intro""#));
//! assert!(html.contains("callout-warning"));
//! ```

pub mod callout;
mod composer;
mod error;
mod highlight;
mod slug;

pub use callout::{
    CalloutMatch, CalloutStyle, CodeFenceRange, extract_callouts, find_code_fence_ranges,
    process_callouts, render_callout, style_for,
};
pub use composer::MarkdownComposer;
pub use error::RenderError;
pub use highlight::CodeHighlighter;
pub use slug::{escape_html, slugify};

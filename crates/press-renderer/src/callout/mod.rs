//! Callout block extension.
//!
//! Callouts use triple-colon syntax layered on top of standard markdown:
//!
//! ```text
//! :::warning Heads Up
//! Body markdown, zero or more lines.
//! :::
//! ```
//!
//! Processing is a two-pass, region-based algorithm: first all fenced
//! code-block ranges are located, then callout matches are extracted and any
//! match whose opening line falls inside a fence is left as literal text.

mod extract;
mod fence;
mod pipeline;
mod render;
mod style;

pub use extract::{CalloutMatch, extract_callouts};
pub use fence::{CodeFenceRange, find_code_fence_ranges};
pub use pipeline::process_callouts;
pub use render::render_callout;
pub use style::{CalloutStyle, style_for};

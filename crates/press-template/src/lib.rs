//! Template-layer data model for press.
//!
//! The template and PDF collaborators are external to the rendering core;
//! this crate defines what crosses that boundary: the [`PipelineContext`]
//! handed to template compilation, the `press.toml` configuration that
//! seeds it, and the process-lifetime [`TemplateCache`] for compiled
//! templates.

mod cache;
mod config;
mod context;

pub use cache::TemplateCache;
pub use config::{ConfigError, PressConfig};
pub use context::{PdfLayout, PipelineContext, ReportMeta, Theme};

//! `press.toml` configuration parsing.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::context::{PdfLayout, ReportMeta, Theme};

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML syntax or type error.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Application configuration loaded from `press.toml`.
///
/// Every section is optional; missing sections fall back to defaults.
/// Sections use snake_case TOML keys and resolve into the camelCase-facing
/// context types.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PressConfig {
    /// Report metadata defaults.
    pub report: ReportSection,
    /// PDF layout.
    pdf: PdfSection,
    /// Theme colors.
    theme: ThemeSection,
}

/// `[report]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// Default report title.
    pub title: String,
    /// Default subtitle.
    pub subtitle: Option<String>,
    /// Logo reference.
    pub logo: Option<String>,
}

/// `[pdf]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct PdfSection {
    format: String,
    landscape: bool,
    margin: String,
}

impl Default for PdfSection {
    fn default() -> Self {
        let layout = PdfLayout::default();
        Self {
            format: layout.format,
            landscape: layout.landscape,
            margin: layout.margin,
        }
    }
}

/// `[theme]` section.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct ThemeSection {
    primary_color: String,
    cover_color: String,
    palette: BTreeMap<String, String>,
}

impl Default for ThemeSection {
    fn default() -> Self {
        let theme = Theme::default();
        Self {
            primary_color: theme.primary_color,
            cover_color: theme.cover_color,
            palette: theme.palette,
        }
    }
}

impl PressConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Build report metadata from the `[report]` section and a formatted
    /// date string.
    #[must_use]
    pub fn report_meta(&self, date: impl Into<String>) -> ReportMeta {
        ReportMeta {
            title: self.report.title.clone(),
            subtitle: self.report.subtitle.clone(),
            logo: self.report.logo.clone(),
            date: date.into(),
        }
    }

    /// Resolved PDF layout.
    #[must_use]
    pub fn pdf_layout(&self) -> PdfLayout {
        PdfLayout {
            format: self.pdf.format.clone(),
            landscape: self.pdf.landscape,
            margin: self.pdf.margin.clone(),
        }
    }

    /// Resolved theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme {
            primary_color: self.theme.primary_color.clone(),
            cover_color: self.theme.cover_color.clone(),
            palette: self.theme.palette.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = PressConfig::from_toml_str("").unwrap();
        assert_eq!(config.pdf_layout().format, "A4");
        assert_eq!(config.theme().primary_color, "#2563EB");
        assert_eq!(config.report.title, "");
    }

    #[test]
    fn test_sections_parsed() {
        let config = PressConfig::from_toml_str(
            r##"
[report]
title = "Quarterly Review"
subtitle = "Q3 2026"

[pdf]
format = "Letter"
landscape = true
margin = "15mm"

[theme]
primary_color = "#FF0000"

[theme.palette]
accent = "#00FF00"
"##,
        )
        .unwrap();
        assert_eq!(config.report.title, "Quarterly Review");
        assert_eq!(config.report.subtitle.as_deref(), Some("Q3 2026"));
        let layout = config.pdf_layout();
        assert_eq!(layout.format, "Letter");
        assert!(layout.landscape);
        assert_eq!(layout.margin, "15mm");
        let theme = config.theme();
        assert_eq!(theme.primary_color, "#FF0000");
        assert_eq!(theme.cover_color, "#1E3A8A");
        assert_eq!(theme.palette.get("accent").map(String::as_str), Some("#00FF00"));
    }

    #[test]
    fn test_report_meta_carries_date() {
        let config = PressConfig::from_toml_str("[report]\ntitle = \"T\"\n").unwrap();
        let meta = config.report_meta("2026-08-27");
        assert_eq!(meta.title, "T");
        assert_eq!(meta.date, "2026-08-27");
        assert_eq!(meta.subtitle, None);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(PressConfig::from_toml_str("[report\ntitle =").is_err());
    }
}

//! Visual definitions for the built-in callout types.

/// Visual definition for one callout type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalloutStyle {
    /// Icon glyph shown before the title.
    pub icon: &'static str,
    /// Left-border color.
    pub border_color: &'static str,
    /// Block background color.
    pub background_color: &'static str,
    /// Title text color.
    pub title_color: &'static str,
    /// Body text color.
    pub body_color: &'static str,
}

const INFO: CalloutStyle = CalloutStyle {
    icon: "\u{2139}\u{fe0f}",
    border_color: "#3B82F6",
    background_color: "#EFF6FF",
    title_color: "#1E40AF",
    body_color: "#1E3A8A",
};

/// Built-in callout types, looked up by name.
const STYLES: &[(&str, CalloutStyle)] = &[
    (
        "idea",
        CalloutStyle {
            icon: "\u{1f4a1}",
            border_color: "#F59E0B",
            background_color: "#FFFBEB",
            title_color: "#92400E",
            body_color: "#78350F",
        },
    ),
    (
        "automation",
        CalloutStyle {
            icon: "\u{2699}\u{fe0f}",
            border_color: "#6366F1",
            background_color: "#EEF2FF",
            title_color: "#3730A3",
            body_color: "#312E81",
        },
    ),
    (
        "warning",
        CalloutStyle {
            icon: "\u{26a0}\u{fe0f}",
            border_color: "#F97316",
            background_color: "#FFF7ED",
            title_color: "#9A3412",
            body_color: "#7C2D12",
        },
    ),
    (
        "success",
        CalloutStyle {
            icon: "\u{2705}",
            border_color: "#22C55E",
            background_color: "#F0FDF4",
            title_color: "#166534",
            body_color: "#14532D",
        },
    ),
    ("info", INFO),
    (
        "critical",
        CalloutStyle {
            icon: "\u{1f6a8}",
            border_color: "#EF4444",
            background_color: "#FEF2F2",
            title_color: "#991B1B",
            body_color: "#7F1D1D",
        },
    ),
    (
        "business",
        CalloutStyle {
            icon: "\u{1f4bc}",
            border_color: "#8B5CF6",
            background_color: "#F5F3FF",
            title_color: "#5B21B6",
            body_color: "#4C1D95",
        },
    ),
    (
        "expert",
        CalloutStyle {
            icon: "\u{1f393}",
            border_color: "#0EA5E9",
            background_color: "#F0F9FF",
            title_color: "#075985",
            body_color: "#0C4A6E",
        },
    ),
    (
        "tip",
        CalloutStyle {
            icon: "\u{2728}",
            border_color: "#14B8A6",
            background_color: "#F0FDFA",
            title_color: "#115E59",
            body_color: "#134E4A",
        },
    ),
];

/// Number of built-in callout types.
pub(crate) const BUILTIN_TYPE_COUNT: usize = STYLES.len();

/// Look up the style for a callout type name.
///
/// Unrecognized names fall back to the `info` definition. The caller keeps
/// the original name for CSS classing regardless of the fallback.
#[must_use]
pub fn style_for(kind: &str) -> &'static CalloutStyle {
    STYLES
        .iter()
        .find(|(name, _)| *name == kind)
        .map_or(&INFO, |(_, style)| style)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_nine_builtin_types() {
        assert_eq!(BUILTIN_TYPE_COUNT, 9);
    }

    #[test]
    fn test_each_type_has_distinct_border() {
        for (name, style) in STYLES {
            assert_eq!(style_for(name).border_color, style.border_color);
        }
        let mut borders: Vec<&str> = STYLES.iter().map(|(_, s)| s.border_color).collect();
        borders.sort_unstable();
        borders.dedup();
        assert_eq!(borders.len(), BUILTIN_TYPE_COUNT);
    }

    #[test]
    fn test_unknown_falls_back_to_info() {
        assert_eq!(style_for("totallyUnknown"), style_for("info"));
        assert_eq!(style_for(""), style_for("info"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(style_for("Warning"), style_for("info"));
    }
}

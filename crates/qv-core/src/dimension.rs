use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QvError;

/// One of the eight life dimensions used to tag quests and achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Learning, study, mental challenges.
    Intellectual,
    /// Fitness, health, bodily feats.
    Physical,
    /// Money, investments, material resources.
    Financial,
    /// Home, nature, surroundings.
    Environmental,
    /// Career, craft, professional skill.
    Vocational,
    /// Relationships and community.
    Social,
    /// Resilience, self-regulation, inner life.
    Emotional,
    /// Meaning, practice, transcendence.
    Spiritual,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; 8] = [
        Dimension::Intellectual,
        Dimension::Physical,
        Dimension::Financial,
        Dimension::Environmental,
        Dimension::Vocational,
        Dimension::Social,
        Dimension::Emotional,
        Dimension::Spiritual,
    ];

    /// Case-insensitively parse a raw dimension tag. Returns `None` for
    /// anything outside the closed set.
    pub fn parse(s: &str) -> Option<Dimension> {
        match s.to_lowercase().as_str() {
            "intellectual" => Some(Dimension::Intellectual),
            "physical" => Some(Dimension::Physical),
            "financial" => Some(Dimension::Financial),
            "environmental" => Some(Dimension::Environmental),
            "vocational" => Some(Dimension::Vocational),
            "social" => Some(Dimension::Social),
            "emotional" => Some(Dimension::Emotional),
            "spiritual" => Some(Dimension::Spiritual),
            _ => None,
        }
    }

    /// Canonical lower-case name.
    pub fn name(self) -> &'static str {
        self.theme().key
    }

    /// The display theme for this dimension.
    pub fn theme(self) -> &'static DimensionTheme {
        match self {
            Dimension::Intellectual => &INTELLECTUAL,
            Dimension::Physical => &PHYSICAL,
            Dimension::Financial => &FINANCIAL,
            Dimension::Environmental => &ENVIRONMENTAL,
            Dimension::Vocational => &VOCATIONAL,
            Dimension::Social => &SOCIAL,
            Dimension::Emotional => &EMOTIONAL,
            Dimension::Spiritual => &SPIRITUAL,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Dimension {
    type Err = QvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::parse(s).ok_or_else(|| QvError::UnknownDimension(s.to_string()))
    }
}

/// Abstract color name a renderer maps onto its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Purple / violet.
    Purple,
    /// Red.
    Red,
    /// Yellow / gold.
    Yellow,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Cyan.
    Cyan,
    /// Magenta / pink.
    Magenta,
    /// Neutral gray, used by the default theme.
    Gray,
}

/// Static display treatment for a dimension: icon glyph and color.
#[derive(Debug, PartialEq, Eq)]
pub struct DimensionTheme {
    /// Canonical lower-case dimension name, or `"default"`.
    pub key: &'static str,
    /// Icon glyph shown when no image is available.
    pub icon: &'static str,
    /// Color the renderer should use for the icon and connector node.
    pub color: ColorToken,
}

const INTELLECTUAL: DimensionTheme = DimensionTheme {
    key: "intellectual",
    icon: "🧠",
    color: ColorToken::Purple,
};
const PHYSICAL: DimensionTheme = DimensionTheme {
    key: "physical",
    icon: "⚔",
    color: ColorToken::Red,
};
const FINANCIAL: DimensionTheme = DimensionTheme {
    key: "financial",
    icon: "🪙",
    color: ColorToken::Yellow,
};
const ENVIRONMENTAL: DimensionTheme = DimensionTheme {
    key: "environmental",
    icon: "🍃",
    color: ColorToken::Green,
};
const VOCATIONAL: DimensionTheme = DimensionTheme {
    key: "vocational",
    icon: "💼",
    color: ColorToken::Blue,
};
const SOCIAL: DimensionTheme = DimensionTheme {
    key: "social",
    icon: "👥",
    color: ColorToken::Cyan,
};
const EMOTIONAL: DimensionTheme = DimensionTheme {
    key: "emotional",
    icon: "❤",
    color: ColorToken::Magenta,
};
const SPIRITUAL: DimensionTheme = DimensionTheme {
    key: "spiritual",
    icon: "✨",
    color: ColorToken::Yellow,
};

/// Fallback theme for unknown or missing dimension tags: a generic scroll.
pub const DEFAULT_THEME: DimensionTheme = DimensionTheme {
    key: "default",
    icon: "📜",
    color: ColorToken::Gray,
};

/// Resolve a raw dimension tag to its display theme.
///
/// Total: unknown tags, empty strings, and `None` all resolve to
/// [`DEFAULT_THEME`], never to an error.
pub fn resolve_theme(dimension: Option<&str>) -> &'static DimensionTheme {
    dimension
        .and_then(Dimension::parse)
        .map(Dimension::theme)
        .unwrap_or(&DEFAULT_THEME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Dimension::parse("PHYSICAL"), Some(Dimension::Physical));
        assert_eq!(Dimension::parse("physical"), Some(Dimension::Physical));
        assert_eq!(Dimension::parse("Spiritual"), Some(Dimension::Spiritual));
    }

    #[test]
    fn resolve_theme_case_insensitive() {
        assert_eq!(resolve_theme(Some("PHYSICAL")), resolve_theme(Some("physical")));
    }

    #[test]
    fn unknown_and_missing_fall_back_to_default() {
        assert_eq!(resolve_theme(Some("unknown-tag")).key, "default");
        assert_eq!(resolve_theme(None).key, "default");
        assert_eq!(resolve_theme(Some("")).key, "default");
    }

    #[test]
    fn every_dimension_has_a_distinct_theme_key() {
        for dim in Dimension::ALL {
            assert_eq!(dim.theme().key, dim.name());
            assert_ne!(dim.theme().key, "default");
        }
    }

    #[test]
    fn from_str_errors_on_unknown() {
        assert!("arcane".parse::<Dimension>().is_err());
        assert_eq!("social".parse::<Dimension>().unwrap(), Dimension::Social);
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Dimension::Vocational).unwrap();
        assert_eq!(json, "\"vocational\"");
        let dim: Dimension = serde_json::from_str("\"emotional\"").unwrap();
        assert_eq!(dim, Dimension::Emotional);
    }
}

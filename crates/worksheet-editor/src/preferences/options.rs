//! Allowed values for the enumerated editor preferences.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Editor color theme.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
pub enum Theme {
    /// Follows the light/dark setting of the surrounding application.
    #[default]
    #[serde(rename = "automatic")]
    #[strum(serialize = "automatic")]
    Automatic,
    #[serde(rename = "vs")]
    #[strum(serialize = "vs")]
    Light,
    #[serde(rename = "vs-dark")]
    #[strum(serialize = "vs-dark")]
    Dark,
    #[serde(rename = "hc-black")]
    #[strum(serialize = "hc-black")]
    HighContrastDark,
}

/// When to show the minimap.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Minimap {
    On,
    Off,
    /// Only for documents of at least [`Minimap::CONDITIONAL_MIN_LINES`] lines.
    #[default]
    Conditional,
}

impl Minimap {
    /// Line count from which a conditional minimap is shown.
    pub const CONDITIONAL_MIN_LINES: usize = 100;

    /// Whether the minimap is visible for a document with `line_count` lines.
    pub fn is_visible(self, line_count: usize) -> bool {
        match self {
            Self::On => true,
            Self::Off => false,
            Self::Conditional => line_count >= Self::CONDITIONAL_MIN_LINES,
        }
    }
}

/// Indent and tab width. Stored as a string (`"4"`), not a number.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
pub enum SizeOption {
    #[serde(rename = "2")]
    #[strum(serialize = "2")]
    Two,
    #[serde(rename = "3")]
    #[strum(serialize = "3")]
    Three,
    #[default]
    #[serde(rename = "4")]
    #[strum(serialize = "4")]
    Four,
    #[serde(rename = "8")]
    #[strum(serialize = "8")]
    Eight,
}

impl SizeOption {
    /// Width in columns.
    pub fn columns(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Eight => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_theme_strings() {
        let values: Vec<String> = Theme::iter().map(|t| t.to_string()).collect();
        assert_eq!(values, vec!["automatic", "vs", "vs-dark", "hc-black"]);
        assert_eq!(Theme::from_str("vs-dark").unwrap(), Theme::Dark);
        assert!(Theme::from_str("solarized").is_err());
    }

    #[test]
    fn test_theme_serde_matches_strum() {
        for theme in Theme::iter() {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.as_ref()));
        }
    }

    #[test]
    fn test_minimap_visibility() {
        assert!(Minimap::On.is_visible(1));
        assert!(!Minimap::Off.is_visible(1_000));
        assert!(!Minimap::Conditional.is_visible(99));
        assert!(Minimap::Conditional.is_visible(100));
        assert_eq!(Minimap::from_str("conditional").unwrap(), Minimap::Conditional);
    }

    #[test]
    fn test_size_option() {
        assert_eq!(SizeOption::from_str("8").unwrap().columns(), 8);
        assert!(SizeOption::from_str("5").is_err());
        assert_eq!(serde_json::to_string(&SizeOption::Two).unwrap(), "\"2\"");
    }
}

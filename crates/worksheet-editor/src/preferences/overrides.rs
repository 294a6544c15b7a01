//! Parsing of stored preference strings.
//!
//! Stored strings may come from older versions or be edited by hand, so the
//! default parser keeps whatever is valid and drops the rest with a warning.
//! A strict parser is available for tooling that wants to reject bad input.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::options::{Minimap, SizeOption, Theme};

const THEME: &str = "theme";
const TABS_INSERT_SPACES: &str = "tabsInsertSpaces";
const INDENT_SIZE: &str = "indentSize";
const TAB_SIZE: &str = "tabSize";
const RULER: &str = "ruler";
const MINIMAP: &str = "minimap";
const ACCESSIBILITY_MODE: &str = "accessibilityMode";
const LINE_NUMBERS: &str = "lineNumbers";
const WHITESPACE: &str = "whitespace";
const SHOW_SUGGESTIONS: &str = "showSuggestions";
const BRACKET_PAIR_COLORIZATION: &str = "bracketPairColorization";

/// Preferences read from a stored string. `None` means "keep the current
/// value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabs_insert_spaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_size: Option<SizeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_size: Option<SizeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruler: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimap: Option<Minimap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_numbers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whitespace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_suggestions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bracket_pair_colorization: Option<bool>,
}

impl PreferenceOverrides {
    /// Parse a stored preference string, keeping only valid values.
    ///
    /// - An empty string, invalid JSON, or anything but a JSON object yields
    ///   no overrides.
    /// - `theme`, `minimap`, `indentSize` and `tabSize` are kept only when
    ///   they hold one of the allowed strings; otherwise they are dropped.
    /// - Boolean preferences are coerced by truthiness, so a missing boolean
    ///   reads as `false`.
    /// - Unknown keys are ignored.
    pub fn from_preferences_string(value: &str) -> Self {
        if value.trim().is_empty() {
            return Self::default();
        }

        let raw = match serde_json::from_str::<Value>(value) {
            Ok(Value::Object(map)) => map,
            Ok(other) => {
                tracing::warn!("Preference string is not an object: {}", other);
                return Self::default();
            }
            Err(err) => {
                tracing::warn!("Could not parse preference string: {}", err);
                return Self::default();
            }
        };

        Self {
            theme: lenient_choice(&raw, THEME),
            tabs_insert_spaces: Some(truthy(raw.get(TABS_INSERT_SPACES))),
            indent_size: lenient_choice(&raw, INDENT_SIZE),
            tab_size: lenient_choice(&raw, TAB_SIZE),
            ruler: Some(truthy(raw.get(RULER))),
            minimap: lenient_choice(&raw, MINIMAP),
            accessibility_mode: Some(truthy(raw.get(ACCESSIBILITY_MODE))),
            line_numbers: Some(truthy(raw.get(LINE_NUMBERS))),
            whitespace: Some(truthy(raw.get(WHITESPACE))),
            show_suggestions: Some(truthy(raw.get(SHOW_SUGGESTIONS))),
            bracket_pair_colorization: Some(truthy(raw.get(BRACKET_PAIR_COLORIZATION))),
        }
    }

    /// Parse a stored preference string, rejecting anything invalid.
    ///
    /// Missing keys are left unset. Booleans must be JSON booleans.
    ///
    /// # Errors
    /// Returns an error for invalid JSON, a non-object value, or a key with a
    /// value outside its allowed set.
    pub fn parse_strict(value: &str) -> Result<Self, PreferencesError> {
        let raw = match serde_json::from_str::<Value>(value)? {
            Value::Object(map) => map,
            _ => return Err(PreferencesError::NotAnObject),
        };

        Ok(Self {
            theme: strict_choice(&raw, THEME)?,
            tabs_insert_spaces: strict_bool(&raw, TABS_INSERT_SPACES)?,
            indent_size: strict_choice(&raw, INDENT_SIZE)?,
            tab_size: strict_choice(&raw, TAB_SIZE)?,
            ruler: strict_bool(&raw, RULER)?,
            minimap: strict_choice(&raw, MINIMAP)?,
            accessibility_mode: strict_bool(&raw, ACCESSIBILITY_MODE)?,
            line_numbers: strict_bool(&raw, LINE_NUMBERS)?,
            whitespace: strict_bool(&raw, WHITESPACE)?,
            show_suggestions: strict_bool(&raw, SHOW_SUGGESTIONS)?,
            bracket_pair_colorization: strict_bool(&raw, BRACKET_PAIR_COLORIZATION)?,
        })
    }

    /// Check if no preference is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// JavaScript-style truthiness, matching how the values were written.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

fn lenient_choice<T: FromStr>(raw: &Map<String, Value>, key: &str) -> Option<T> {
    match strict_choice(raw, key) {
        Ok(choice) => choice,
        Err(_) => {
            tracing::warn!(key, value = %raw[key], "Ignoring invalid preference value");
            None
        }
    }
}

fn strict_choice<T: FromStr>(
    raw: &Map<String, Value>,
    key: &str,
) -> Result<Option<T>, PreferencesError> {
    match raw.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => s
            .parse()
            .map(Some)
            .map_err(|_| PreferencesError::invalid_value(key, s)),
        Some(other) => Err(PreferencesError::invalid_value(key, other)),
    }
}

fn strict_bool(raw: &Map<String, Value>, key: &str) -> Result<Option<bool>, PreferencesError> {
    match raw.get(key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(PreferencesError::invalid_value(key, other)),
    }
}

/// Errors that can occur when reading or writing preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    /// The string is not valid JSON, or serialization failed.
    #[error("Invalid preference JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JSON value is not an object.
    #[error("Preference string must be a JSON object")]
    NotAnObject,

    /// A known key holds a value outside its allowed set.
    #[error("Invalid value for preference '{key}': {value}")]
    InvalidValue { key: String, value: String },
}

impl PreferencesError {
    fn invalid_value(key: &str, value: impl std::fmt::Display) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_string_has_no_overrides() {
        assert!(PreferenceOverrides::from_preferences_string("").is_empty());
        assert!(PreferenceOverrides::from_preferences_string("   ").is_empty());
    }

    #[test]
    fn test_invalid_json_has_no_overrides() {
        assert!(PreferenceOverrides::from_preferences_string("{theme:").is_empty());
        assert!(PreferenceOverrides::from_preferences_string("[1, 2]").is_empty());
    }

    #[test]
    fn test_valid_values_kept() {
        let overrides = PreferenceOverrides::from_preferences_string(indoc! {r#"
            {
                "theme": "hc-black",
                "indentSize": "8",
                "tabSize": "2",
                "minimap": "on",
                "lineNumbers": true
            }
        "#});

        assert_eq!(overrides.theme, Some(Theme::HighContrastDark));
        assert_eq!(overrides.indent_size, Some(SizeOption::Eight));
        assert_eq!(overrides.tab_size, Some(SizeOption::Two));
        assert_eq!(overrides.minimap, Some(Minimap::On));
        assert_eq!(overrides.line_numbers, Some(true));
    }

    #[test]
    fn test_invalid_values_dropped() {
        let overrides = PreferenceOverrides::from_preferences_string(
            r#"{"theme":"solarized","indentSize":4,"tabSize":"5","minimap":"sometimes"}"#,
        );

        assert_eq!(overrides.theme, None);
        assert_eq!(overrides.indent_size, None);
        assert_eq!(overrides.tab_size, None);
        assert_eq!(overrides.minimap, None);
    }

    #[test]
    fn test_missing_booleans_read_as_false() {
        let overrides = PreferenceOverrides::from_preferences_string(r#"{"theme":"vs"}"#);

        assert_eq!(overrides.theme, Some(Theme::Light));
        assert_eq!(overrides.tabs_insert_spaces, Some(false));
        assert_eq!(overrides.line_numbers, Some(false));
        assert_eq!(overrides.show_suggestions, Some(false));
    }

    #[test]
    fn test_boolean_truthiness() {
        let overrides = PreferenceOverrides::from_preferences_string(
            r#"{"ruler":1,"whitespace":"","lineNumbers":"yes","accessibilityMode":null,"showSuggestions":0,"bracketPairColorization":{}}"#,
        );

        assert_eq!(overrides.ruler, Some(true));
        assert_eq!(overrides.whitespace, Some(false));
        assert_eq!(overrides.line_numbers, Some(true));
        assert_eq!(overrides.accessibility_mode, Some(false));
        assert_eq!(overrides.show_suggestions, Some(false));
        assert_eq!(overrides.bracket_pair_colorization, Some(true));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let overrides =
            PreferenceOverrides::from_preferences_string(r#"{"fontSize":14,"theme":"vs-dark"}"#);
        assert_eq!(overrides.theme, Some(Theme::Dark));
    }

    #[test]
    fn test_strict_accepts_partial() {
        let overrides = PreferenceOverrides::parse_strict(r#"{"ruler":true}"#).unwrap();
        assert_eq!(
            overrides,
            PreferenceOverrides {
                ruler: Some(true),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_strict_rejects_bad_values() {
        let err = PreferenceOverrides::parse_strict(r#"{"theme":"solarized"}"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for preference 'theme': solarized"
        );

        let err = PreferenceOverrides::parse_strict(r#"{"ruler":1}"#).unwrap_err();
        assert!(matches!(err, PreferencesError::InvalidValue { ref key, .. } if key == "ruler"));

        assert!(matches!(
            PreferenceOverrides::parse_strict("true"),
            Err(PreferencesError::NotAnObject)
        ));
        assert!(matches!(
            PreferenceOverrides::parse_strict("{"),
            Err(PreferencesError::Json(_))
        ));
    }

    #[test]
    fn test_overrides_serialize_only_set_keys() {
        let overrides = PreferenceOverrides {
            tab_size: Some(SizeOption::Three),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&overrides).unwrap(), r#"{"tabSize":"3"}"#);
    }
}

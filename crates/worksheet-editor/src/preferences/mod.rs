//! Editor User Preferences
//!
//! Preferences are stored on the server as a serialized JSON object. The key
//! names are fixed by data that already exists, so they must not change.
//!
//! # Example
//!
//! ```
//! use worksheet_editor::preferences::{EditorPreferences, SizeOption, Theme};
//!
//! let prefs = EditorPreferences::from_preferences_string(
//!     r#"{"theme":"vs-dark","indentSize":"2","ruler":true}"#,
//! );
//!
//! assert_eq!(prefs.theme, Theme::Dark);
//! assert_eq!(prefs.indent_size, SizeOption::Two);
//! assert!(prefs.ruler);
//! ```

mod options;
mod overrides;

pub use options::{Minimap, SizeOption, Theme};
pub use overrides::{PreferenceOverrides, PreferencesError};

use serde::{Deserialize, Serialize};

/// The full set of editor preferences, with every value resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorPreferences {
    pub theme: Theme,
    pub tabs_insert_spaces: bool,
    pub indent_size: SizeOption,
    pub tab_size: SizeOption,
    /// Vertical ruler at the print margin
    pub ruler: bool,
    pub minimap: Minimap,
    pub accessibility_mode: bool,
    pub line_numbers: bool,
    /// Render whitespace characters
    pub whitespace: bool,
    /// Show autocomplete suggestions while typing
    pub show_suggestions: bool,
    pub bracket_pair_colorization: bool,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            theme: Theme::Automatic,
            tabs_insert_spaces: true,
            indent_size: SizeOption::Four,
            tab_size: SizeOption::Four,
            ruler: false,
            minimap: Minimap::Conditional,
            accessibility_mode: false,
            line_numbers: true,
            whitespace: false,
            show_suggestions: true,
            bracket_pair_colorization: false,
        }
    }
}

impl EditorPreferences {
    /// Creates preferences with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by whatever is valid in a stored preference string.
    ///
    /// Never fails; see [`PreferenceOverrides::from_preferences_string`].
    pub fn from_preferences_string(value: &str) -> Self {
        let mut prefs = Self::default();
        prefs.apply(&PreferenceOverrides::from_preferences_string(value));
        prefs
    }

    /// Overwrite every preference that `overrides` sets.
    pub fn apply(&mut self, overrides: &PreferenceOverrides) {
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(value) = overrides.tabs_insert_spaces {
            self.tabs_insert_spaces = value;
        }
        if let Some(size) = overrides.indent_size {
            self.indent_size = size;
        }
        if let Some(size) = overrides.tab_size {
            self.tab_size = size;
        }
        if let Some(value) = overrides.ruler {
            self.ruler = value;
        }
        if let Some(minimap) = overrides.minimap {
            self.minimap = minimap;
        }
        if let Some(value) = overrides.accessibility_mode {
            self.accessibility_mode = value;
        }
        if let Some(value) = overrides.line_numbers {
            self.line_numbers = value;
        }
        if let Some(value) = overrides.whitespace {
            self.whitespace = value;
        }
        if let Some(value) = overrides.show_suggestions {
            self.show_suggestions = value;
        }
        if let Some(value) = overrides.bracket_pair_colorization {
            self.bracket_pair_colorization = value;
        }
    }

    /// Sets the theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the minimap mode
    pub fn with_minimap(mut self, minimap: Minimap) -> Self {
        self.minimap = minimap;
        self
    }

    /// Serialize every preference into the stored string form.
    ///
    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn to_preferences_string(&self) -> Result<String, PreferencesError> {
        Ok(serde_json::to_string(self)?)
    }
}

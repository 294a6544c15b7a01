//! Worksheet Editor - text tools for the SQL worksheet code editor
//!
//! This crate provides the text-level pieces behind the editor widget:
//! - Case toggling that leaves quoted literals alone
//! - Case actions over multiple selections, returned as one edit batch
//! - User preferences as stored on the server (lenient parsing, defaults)

pub mod case_transform;
pub mod preferences;
pub mod selection;

pub use case_transform::{
    CaseDirection, Segment, SegmentKind, convert_case, quoted_spans, segments, transform_case,
};
pub use preferences::{
    EditorPreferences, Minimap, PreferenceOverrides, PreferencesError, SizeOption, Theme,
};
pub use selection::{CaseAction, EditError, Selection, TextEdit, apply_edits, case_edits};

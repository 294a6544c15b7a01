//! Case actions over editor selections.
//!
//! The editor runs a case action against every selection at once and applies
//! the resulting edits as a single undo step. This module computes those
//! edits and can apply a batch to a document string.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::case_transform::transform_case;

/// A selected byte range in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Byte offset of the start of the selection.
    pub start: usize,
    /// Byte offset of the end of the selection (exclusive).
    pub end: usize,
}

impl Selection {
    /// Create a selection from an anchor and a head offset, in either order.
    pub fn new(anchor: usize, head: usize) -> Self {
        Self {
            start: anchor.min(head),
            end: anchor.max(head),
        }
    }

    /// A collapsed selection (a caret) at `offset`.
    pub fn caret(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Get the byte range of this selection.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if the selection is collapsed.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Selection {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Which case action to run on the selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CaseAction {
    /// Lowercase, or uppercase if already lower; quoted spans are kept.
    #[default]
    ToggleCase,
    /// Uppercase everything in the selection.
    Uppercase,
    /// Lowercase everything in the selection.
    Lowercase,
}

impl CaseAction {
    /// Run the action on a piece of text.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::ToggleCase => transform_case(text),
            Self::Uppercase => text.to_uppercase(),
            Self::Lowercase => text.to_lowercase(),
        }
    }
}

/// Replacement of a byte range of the original document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Range in the original document.
    pub range: Range<usize>,
    /// New text for the range.
    pub text: String,
}

impl TextEdit {
    /// Create a new edit.
    pub fn new(range: Range<usize>, text: impl Into<String>) -> Self {
        Self {
            range,
            text: text.into(),
        }
    }
}

/// Compute the edits for running `action` on each non-empty selection.
///
/// Collapsed selections are skipped. The edits are returned in the order of
/// the selections.
///
/// # Errors
/// Returns an error if a selection lies outside `document` or splits a
/// multi-byte character.
pub fn case_edits(
    document: &str,
    selections: &[Selection],
    action: CaseAction,
) -> Result<Vec<TextEdit>, EditError> {
    let mut edits = Vec::with_capacity(selections.len());

    for selection in selections.iter().filter(|s| !s.is_empty()) {
        check_range(document, &selection.range())?;
        let text = &document[selection.range()];
        edits.push(TextEdit::new(selection.range(), action.apply(text)));
    }

    tracing::debug!(
        ?action,
        selections = selections.len(),
        edits = edits.len(),
        "Computed case edits"
    );

    Ok(edits)
}

/// Apply a batch of edits to `document` in one step.
///
/// All ranges refer to the original document, so edits do not shift each
/// other. Edits may be given in any order but must not overlap.
///
/// # Errors
/// Returns an error if an edit is out of bounds, splits a character, or
/// overlaps another edit.
pub fn apply_edits(document: &str, edits: &[TextEdit]) -> Result<String, EditError> {
    let mut ordered: Vec<&TextEdit> = edits.iter().collect();
    ordered.sort_by_key(|edit| (edit.range.start, edit.range.end));

    let mut result = String::with_capacity(document.len());
    let mut cursor = 0;

    for edit in ordered {
        check_range(document, &edit.range)?;
        if edit.range.start < cursor {
            return Err(EditError::Overlapping {
                start: edit.range.start,
                end: edit.range.end,
            });
        }
        result.push_str(&document[cursor..edit.range.start]);
        result.push_str(&edit.text);
        cursor = edit.range.end;
    }

    result.push_str(&document[cursor..]);
    Ok(result)
}

fn check_range(document: &str, range: &Range<usize>) -> Result<(), EditError> {
    if range.start > range.end || range.end > document.len() {
        return Err(EditError::OutOfBounds {
            start: range.start,
            end: range.end,
            len: document.len(),
        });
    }

    for offset in [range.start, range.end] {
        if !document.is_char_boundary(offset) {
            return Err(EditError::NotCharBoundary(offset));
        }
    }

    Ok(())
}

/// Errors that can occur when computing or applying edits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// Range does not fit in the document.
    #[error("Range {start}..{end} is out of bounds for document of length {len}")]
    OutOfBounds { start: usize, end: usize, len: usize },

    /// Offset falls inside a multi-byte character.
    #[error("Offset {0} is not on a character boundary")]
    NotCharBoundary(usize),

    /// Two edits touch the same part of the document.
    #[error("Edit {start}..{end} overlaps a previous edit")]
    Overlapping { start: usize, end: usize },
}

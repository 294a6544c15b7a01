//! Quoted span discovery and segment partitioning.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// A quote character followed by the shortest run up to the same quote
/// character. The two alternatives stand in for a backreference.
static QUOTED_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"'[^']*'|"[^"]*""#).expect("valid regex"));

/// Whether a segment's case may be changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Inside a quoted span; kept verbatim.
    Literal,
    /// Outside any quoted span.
    Transformable,
}

/// A contiguous byte range of the input with its kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Byte offset of the start of the segment.
    pub start: usize,
    /// Byte offset of the end of the segment (exclusive).
    pub end: usize,
    /// Literal or transformable.
    pub kind: SegmentKind,
}

impl Segment {
    fn new(range: Range<usize>, kind: SegmentKind) -> Self {
        Self {
            start: range.start,
            end: range.end,
            kind,
        }
    }

    /// Get the byte range of this segment.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Get the length of the segment in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the segment is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if the segment is a quoted literal.
    pub fn is_literal(&self) -> bool {
        self.kind == SegmentKind::Literal
    }

    /// Borrow the segment's text out of the string it was computed from.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }
}

/// Find every balanced quoted span in `text`, in order of appearance.
///
/// Each span starts at the next quote after the previous span ends, so spans
/// never overlap. An opening quote without a matching closing quote of the
/// same character produces no span.
pub fn quoted_spans(text: &str) -> Vec<Range<usize>> {
    QUOTED_SPAN_REGEX
        .find_iter(text)
        .map(|m| m.range())
        .collect()
}

/// Partition `text` into literal and transformable segments.
///
/// The segments are ordered, do not overlap and cover the whole input.
/// Zero-length gaps (between adjacent quoted spans, or at either end) are not
/// emitted, so an empty input yields no segments.
pub fn segments(text: &str) -> Vec<Segment> {
    let mut result = Vec::new();
    let mut cursor = 0;

    for span in quoted_spans(text) {
        if cursor < span.start {
            result.push(Segment::new(cursor..span.start, SegmentKind::Transformable));
        }
        cursor = span.end;
        result.push(Segment::new(span, SegmentKind::Literal));
    }

    if cursor < text.len() {
        result.push(Segment::new(cursor..text.len(), SegmentKind::Transformable));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_spans_single_and_double() {
        let text = r#"select 'a', "B" from t"#;
        assert_eq!(quoted_spans(text), vec![7..10, 12..15]);
    }

    #[test]
    fn test_quoted_spans_do_not_pair_different_quotes() {
        assert_eq!(quoted_spans(r#"'abc" x"#), Vec::<Range<usize>>::new());
        assert_eq!(quoted_spans(r#"'a"b' "c'd""#), vec![0..5, 6..11]);
    }

    #[test]
    fn test_quoted_spans_unterminated() {
        assert!(quoted_spans("SELECT 'abc FROM Dual").is_empty());
        // The first pair closes, the trailing quote stays open.
        assert_eq!(quoted_spans("'a' 'b"), vec![0..3]);
    }

    #[test]
    fn test_quoted_spans_are_non_greedy() {
        assert_eq!(quoted_spans("'a' || 'b'"), vec![0..3, 7..10]);
    }

    #[test]
    fn test_quoted_span_across_lines() {
        let text = "x := 'line one\nline two';";
        assert_eq!(quoted_spans(text), vec![5..24]);
    }

    #[test]
    fn test_segments_cover_input() {
        let text = "SELECT 'MixedCase' FROM Dual";
        let segs = segments(text);

        assert_eq!(segs.len(), 3);
        assert_eq!(segs[0].slice(text), "SELECT ");
        assert_eq!(segs[0].kind, SegmentKind::Transformable);
        assert_eq!(segs[1].slice(text), "'MixedCase'");
        assert!(segs[1].is_literal());
        assert_eq!(segs[2].slice(text), " FROM Dual");
    }

    #[test]
    fn test_segments_adjacent_spans() {
        let text = "'AB''CD'";
        let segs = segments(text);

        assert_eq!(
            segs,
            vec![
                Segment::new(0..4, SegmentKind::Literal),
                Segment::new(4..8, SegmentKind::Literal),
            ]
        );
    }

    #[test]
    fn test_segments_empty_and_plain() {
        assert!(segments("").is_empty());

        let segs = segments("no quotes");
        assert_eq!(segs, vec![Segment::new(0..9, SegmentKind::Transformable)]);
    }

    #[test]
    fn test_segments_single_character_tail() {
        // A one-character tail after the last span must not be dropped.
        let text = "'a'b";
        let segs = segments(text);

        assert_eq!(segs.len(), 2);
        assert_eq!(segs[1].slice(text), "b");
    }
}

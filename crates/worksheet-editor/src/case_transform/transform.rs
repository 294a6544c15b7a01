//! Case conversion over the transformable segments of a text.

use serde::{Deserialize, Serialize};

use super::segments::{SegmentKind, segments};

/// Direction of a case conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseDirection {
    Lower,
    Upper,
}

impl CaseDirection {
    fn apply(self, text: &str) -> String {
        match self {
            Self::Lower => text.to_lowercase(),
            Self::Upper => text.to_uppercase(),
        }
    }
}

/// Convert the case of everything outside quoted spans.
///
/// Quoted spans are copied through byte for byte. Conversion uses full
/// Unicode case mapping, so a segment may change length.
pub fn convert_case(text: &str, direction: CaseDirection) -> String {
    let mut result = String::with_capacity(text.len());

    for segment in segments(text) {
        let part = segment.slice(text);
        match segment.kind {
            SegmentKind::Literal => result.push_str(part),
            SegmentKind::Transformable => result.push_str(&direction.apply(part)),
        }
    }

    result
}

/// Toggle the case of `text`, leaving quoted spans untouched.
///
/// Lowercases the text outside quotes. If that changes nothing anywhere in
/// the string, uppercases it instead, so repeated calls alternate between the
/// two.
pub fn transform_case(text: &str) -> String {
    let lowered = convert_case(text, CaseDirection::Lower);
    if lowered != text {
        return lowered;
    }

    convert_case(text, CaseDirection::Upper)
}

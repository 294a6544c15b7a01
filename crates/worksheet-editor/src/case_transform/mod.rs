//! Case Toggling Module
//!
//! Flips the letter case of SQL or JavaScript source while keeping quoted
//! strings and case-sensitive aliases (`'...'`, `"..."`) exactly as written.
//!
//! # Quick Start
//!
//! ```
//! use worksheet_editor::case_transform::transform_case;
//!
//! // First press lowercases
//! assert_eq!(
//!     transform_case("SELECT 'MixedCase' FROM Dual"),
//!     "select 'MixedCase' from dual"
//! );
//!
//! // Already lowercase outside the quotes, so it uppercases instead
//! assert_eq!(
//!     transform_case("select 'ABC' from dual"),
//!     "SELECT 'ABC' FROM DUAL"
//! );
//! ```

mod segments;
mod transform;


pub use segments::{Segment, SegmentKind, quoted_spans, segments};
pub use transform::{CaseDirection, convert_case, transform_case};

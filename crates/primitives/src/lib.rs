//! Core types for text editing: ranges, UTF-16 offsets and transactions.

/// Text range type over char indices.
pub mod range;
/// Rope line helpers.
pub mod rope;
/// Undo-able change primitives.
pub mod transaction;
/// Conversions between char indices and UTF-16 code units.
pub mod utf16;

pub use range::{CharIdx, CharLen, Range};
pub use rope::{line_content_end, line_text};
pub use ropey::{Rope, RopeSlice};
pub use transaction::{Change, ChangeSet, Transaction};
pub use utf16::{Utf16Error, Utf16Range, utf16_len};

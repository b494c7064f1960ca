//! UTF-16 code unit offsets.
//!
//! Many host text widgets report cursor and selection positions in UTF-16
//! code units, where every scalar value above U+FFFF takes two units. All
//! styled characters except italic `h` live above U+FFFF, so a selection
//! over styled text is twice as long in UTF-16 units as in chars.

use ropey::RopeSlice;
use thiserror::Error;

use crate::range::{CharIdx, Range};

/// Errors converting a UTF-16 offset into a char index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Utf16Error {
	/// The offset lies past the end of the text.
	#[error("UTF-16 offset {offset} is past the end of the text ({len} code units)")]
	OutOfBounds { offset: usize, len: usize },
	/// The offset points at the low half of a surrogate pair.
	#[error("UTF-16 offset {offset} splits a surrogate pair")]
	SplitSurrogate { offset: usize },
}

/// A half-open span measured in UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Utf16Range {
	/// Start offset (inclusive).
	pub start: usize,
	/// End offset (exclusive).
	pub end: usize,
}

impl Utf16Range {
	/// Creates a span, ordering the ends.
	pub fn new(a: usize, b: usize) -> Self {
		Self {
			start: a.min(b),
			end: a.max(b),
		}
	}

	/// Length in code units.
	pub fn len(&self) -> usize {
		self.end - self.start
	}

	/// Returns true if the span is empty.
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}

/// Counts the UTF-16 code units needed to encode `text`.
#[inline]
pub fn utf16_len(text: &str) -> usize {
	text.chars().map(char::len_utf16).sum()
}

/// Converts a char index into a UTF-16 offset.
///
/// `pos` past the end is clamped to the end of the text.
pub fn char_to_utf16(text: RopeSlice, pos: CharIdx) -> usize {
	text.char_to_utf16_cu(pos.min(text.len_chars()))
}

/// Converts a UTF-16 offset into a char index.
pub fn utf16_to_char(text: RopeSlice, offset: usize) -> Result<CharIdx, Utf16Error> {
	let len = text.len_utf16_cu();
	if offset > len {
		return Err(Utf16Error::OutOfBounds { offset, len });
	}

	let pos = text.utf16_cu_to_char(offset);
	if text.char_to_utf16_cu(pos) != offset {
		return Err(Utf16Error::SplitSurrogate { offset });
	}
	Ok(pos)
}

/// Converts a char range into a UTF-16 span.
pub fn range_to_utf16(text: RopeSlice, range: Range) -> Utf16Range {
	Utf16Range::new(char_to_utf16(text, range.from()), char_to_utf16(text, range.to()))
}

/// Converts UTF-16 anchor and head offsets into a char range.
pub fn range_from_utf16(text: RopeSlice, anchor: usize, head: usize) -> Result<Range, Utf16Error> {
	Ok(Range::new(utf16_to_char(text, anchor)?, utf16_to_char(text, head)?))
}

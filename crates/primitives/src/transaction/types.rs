use crate::range::{CharIdx, CharLen};

/// Replaces the char range `[start, end)` with `replacement`.
///
/// An empty replacement is a pure deletion; `start == end` is a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
	/// The starting char index of the change.
	pub start: CharIdx,
	/// The ending char index of the change (exclusive).
	pub end: CharIdx,
	/// The replacement text.
	pub replacement: String,
}

impl Change {
	/// Replaces `[start, end)` with `text`.
	pub fn replace(start: CharIdx, end: CharIdx, text: impl Into<String>) -> Self {
		Self {
			start,
			end,
			replacement: text.into(),
		}
	}

	/// Inserts `text` at `pos`.
	pub fn insert(pos: CharIdx, text: impl Into<String>) -> Self {
		Self::replace(pos, pos, text)
	}
}

/// Inserted text with its cached char length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
	text: String,
	char_len: CharLen,
}

impl Insertion {
	/// Creates an insertion, counting chars once.
	pub fn new(text: String) -> Self {
		let char_len = text.chars().count();
		Self { text, char_len }
	}

	/// Returns the inserted text.
	#[inline]
	pub fn text(&self) -> &str {
		&self.text
	}

	/// Returns the cached char length.
	#[inline]
	pub fn char_len(&self) -> CharLen {
		self.char_len
	}

	pub(super) fn push_str(&mut self, text: &str) {
		self.text.push_str(text);
		self.char_len += text.chars().count();
	}
}

/// A single operation in a [`ChangeSet`](super::ChangeSet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
	/// Keep the next N chars of the source document.
	Retain(CharLen),
	/// Drop the next N chars of the source document.
	Delete(CharLen),
	/// Insert new text at the current position.
	Insert(Insertion),
}

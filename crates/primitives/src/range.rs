/// A position in the text, measured in chars (Unicode scalar values).
///
/// This is the canonical coordinate space of the buffer. UTF-16 offsets only
/// exist at the host boundary, see [`crate::utf16`].
pub type CharIdx = usize;

/// A length measured in chars.
pub type CharLen = usize;

/// A text range defined by anchor and head positions.
///
/// The anchor is the fixed end and the head is the cursor. The covered text
/// is the half-open interval `[from, to)`; a range whose ends coincide is a
/// bare cursor and selects nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
	/// The fixed end of the range.
	pub anchor: CharIdx,
	/// The moving end of the range (cursor position).
	pub head: CharIdx,
}

impl Range {
	/// Creates a new range from anchor to head.
	pub fn new(anchor: CharIdx, head: CharIdx) -> Self {
		Self { anchor, head }
	}

	/// Creates a zero-width range (cursor) at the given position.
	pub fn point(pos: CharIdx) -> Self {
		Self::new(pos, pos)
	}

	/// Start of the covered text (inclusive).
	#[inline]
	pub fn from(&self) -> CharIdx {
		self.anchor.min(self.head)
	}

	/// End of the covered text (exclusive).
	#[inline]
	pub fn to(&self) -> CharIdx {
		self.anchor.max(self.head)
	}

	/// Returns the length of the range in chars.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.to() - self.from()
	}

	/// Returns true if anchor equals head.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.anchor == self.head
	}

	/// Applies a function to both anchor and head.
	pub fn map(self, mut f: impl FnMut(CharIdx) -> CharIdx) -> Self {
		Self {
			anchor: f(self.anchor),
			head: f(self.head),
		}
	}

	/// Clamps anchor and head to `[0, max_char]`.
	pub fn clamp(&self, max_char: CharIdx) -> Self {
		Self {
			anchor: self.anchor.min(max_char),
			head: self.head.min(max_char),
		}
	}
}

impl Default for Range {
	fn default() -> Self {
		Self::point(0)
	}
}

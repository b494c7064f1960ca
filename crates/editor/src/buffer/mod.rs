//! The editable text buffer.
//!
//! A [`Buffer`] owns a rope, exactly one selection and the undo history.
//! Positions are char indices; hosts that count UTF-16 code units go
//! through [`Buffer::selection_utf16`] and [`Buffer::set_selection_utf16`].

use postlette_primitives::rope::{line_range, line_text};
use postlette_primitives::utf16::{self, Utf16Error, Utf16Range};
use postlette_primitives::{CharIdx, Range, Rope, RopeSlice, Transaction};
use tracing::warn;

use crate::history::History;


/// Rope text with a single selection and undo history.
#[derive(Debug, Default)]
pub struct Buffer {
	text: Rope,
	selection: Range,
	history: History,
	/// Bumped on every content change, including undo and redo.
	revision: u64,
}

impl Buffer {
	/// Creates an empty buffer.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a buffer holding `text` with the cursor at the start.
	pub fn from_text(text: &str) -> Self {
		Self {
			text: Rope::from(text),
			..Self::default()
		}
	}

	/// Returns the rope.
	pub fn text(&self) -> &Rope {
		&self.text
	}

	/// Returns a slice over the whole text.
	pub fn slice(&self) -> RopeSlice<'_> {
		self.text.slice(..)
	}

	/// Returns the full text as a `String`.
	pub fn contents(&self) -> String {
		self.text.to_string()
	}

	/// Number of chars (Unicode scalar values) in the buffer.
	pub fn len_chars(&self) -> usize {
		self.text.len_chars()
	}

	/// Returns true if the buffer holds no text.
	pub fn is_empty(&self) -> bool {
		self.text.len_chars() == 0
	}

	/// Content revision, bumped by every edit.
	pub fn revision(&self) -> u64 {
		self.revision
	}

	/// Returns the current selection.
	pub fn selection(&self) -> Range {
		self.selection
	}

	/// Returns the cursor position (the selection head).
	pub fn cursor(&self) -> CharIdx {
		self.selection.head
	}

	/// Returns true if the selection covers at least one char.
	pub fn has_selection(&self) -> bool {
		!self.selection.is_empty()
	}

	/// Returns the selected text, or `None` when nothing is selected.
	pub fn selected_text(&self) -> Option<String> {
		if self.selection.is_empty() {
			return None;
		}
		Some(self.text.slice(self.selection.from()..self.selection.to()).to_string())
	}

	/// Sets the selection, clamped to the text.
	pub fn set_selection(&mut self, selection: Range) {
		self.selection = selection.clamp(self.text.len_chars());
	}

	/// Collapses the selection to a cursor at `pos`.
	pub fn set_cursor(&mut self, pos: CharIdx) {
		self.set_selection(Range::point(pos));
	}

	/// Selects the whole text.
	pub fn select_all(&mut self) {
		self.selection = Range::new(0, self.text.len_chars());
	}

	/// Moves the cursor to the end of the text.
	pub fn move_to_end(&mut self) {
		self.selection = Range::point(self.text.len_chars());
	}

	/// Returns the selection in UTF-16 code units.
	pub fn selection_utf16(&self) -> Utf16Range {
		utf16::range_to_utf16(self.slice(), self.selection)
	}

	/// Returns the cursor position in UTF-16 code units.
	pub fn cursor_utf16(&self) -> usize {
		utf16::char_to_utf16(self.slice(), self.selection.head)
	}

	/// Sets the selection from UTF-16 anchor and head offsets.
	pub fn set_selection_utf16(&mut self, anchor: usize, head: usize) -> Result<(), Utf16Error> {
		self.selection = utf16::range_from_utf16(self.slice(), anchor, head)?;
		Ok(())
	}

	/// Line index holding the cursor.
	pub fn cursor_line(&self) -> usize {
		self.text.char_to_line(self.selection.head)
	}

	/// Content span of `line_idx`, without its line break.
	pub fn line_range(&self, line_idx: usize) -> Range {
		line_range(self.slice(), line_idx)
	}

	/// Content of `line_idx`, without its line break.
	pub fn line_text(&self, line_idx: usize) -> String {
		line_text(self.slice(), line_idx)
	}

	/// Applies `tx` and records it for undo.
	///
	/// The selection becomes the transaction's selection if it has one,
	/// otherwise the old selection mapped through the changes. A transaction
	/// that leaves the text unchanged only moves the selection: it records no
	/// undo step and keeps the revision. Returns false if the transaction was
	/// built for a different document length.
	pub fn apply(&mut self, tx: &Transaction) -> bool {
		if tx.changes().len() != self.text.len_chars() {
			warn!(
				expected = tx.changes().len(),
				actual = self.text.len_chars(),
				"transaction does not match buffer length"
			);
			return false;
		}
		if tx.changes().is_identity() {
			if let Some(selection) = tx.selection() {
				self.set_selection(selection);
			}
			return true;
		}

		let before = self.text.clone();
		if !tx.apply(&mut self.text) {
			return false;
		}

		let selection_before = self.selection;
		let selection_after = tx.selection().unwrap_or_else(|| tx.map_range(selection_before));
		self.set_selection(selection_after);
		self.history.record(&before, tx, selection_before, self.selection);
		self.revision += 1;
		true
	}

	/// Replaces the whole text, resetting selection and history.
	pub fn replace_all(&mut self, text: &str) {
		self.text = Rope::from(text);
		self.selection = Range::default();
		self.history.clear();
		self.revision += 1;
	}

	/// Returns whether undo is available.
	pub fn can_undo(&self) -> bool {
		self.history.can_undo()
	}

	/// Returns whether redo is available.
	pub fn can_redo(&self) -> bool {
		self.history.can_redo()
	}

	/// Reverts the newest edit and restores the selection it replaced.
	pub fn undo(&mut self) -> bool {
		let Some(step) = self.history.undo() else {
			return false;
		};
		if !step.undo_tx.apply(&mut self.text) {
			warn!("undo step does not match buffer length");
			return false;
		}
		self.set_selection(step.selection_before);
		self.revision += 1;
		true
	}

	/// Re-applies the newest undone edit.
	pub fn redo(&mut self) -> bool {
		let Some(step) = self.history.redo() else {
			return false;
		};
		if !step.redo_tx.apply(&mut self.text) {
			warn!("redo step does not match buffer length");
			return false;
		}
		self.set_selection(step.selection_after);
		self.revision += 1;
		true
	}
}

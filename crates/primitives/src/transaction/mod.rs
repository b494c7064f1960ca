//! Undo-able change primitives.
//!
//! A [`Transaction`] is a [`ChangeSet`] plus the selection the buffer should
//! take once it is applied. Inverting a transaction against the document it
//! was built for yields the edit that undoes it.

mod changeset;
mod types;


pub use changeset::ChangeSet;
pub use types::{Change, Insertion, Operation};

use crate::range::{CharIdx, Range};
use crate::{Rope, RopeSlice};

/// A set of changes together with an optional resulting selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
	changes: ChangeSet,
	selection: Option<Range>,
}

impl Transaction {
	/// Builds a transaction from sorted, non-overlapping changes.
	///
	/// Change bounds past the end of `doc` are clamped.
	pub fn change(doc: RopeSlice, changes: impl IntoIterator<Item = Change>) -> Self {
		let len = doc.len_chars();
		let mut cs = ChangeSet::new();
		let mut last = 0;

		for change in changes {
			debug_assert!(change.start >= last, "changes must be sorted and non-overlapping");
			let start = change.start.clamp(last, len);
			let end = change.end.clamp(start, len);

			cs.retain(start - last);
			cs.delete(end - start);
			cs.insert(&change.replacement);
			last = end;
		}
		cs.retain(len - last);

		Self {
			changes: cs,
			selection: None,
		}
	}

	/// Replaces the text covered by `range` with `text`.
	pub fn replace(doc: RopeSlice, range: Range, text: impl Into<String>) -> Self {
		Self::change(doc, [Change::replace(range.from(), range.to(), text)])
	}

	/// Inserts `text` at `pos`.
	pub fn insert(doc: RopeSlice, pos: CharIdx, text: impl Into<String>) -> Self {
		Self::change(doc, [Change::insert(pos, text)])
	}

	/// Sets the selection the buffer takes after this transaction.
	pub fn with_selection(mut self, selection: Range) -> Self {
		self.selection = Some(selection);
		self
	}

	/// Returns the selection set by [`with_selection`](Self::with_selection).
	pub fn selection(&self) -> Option<Range> {
		self.selection
	}

	/// Returns the underlying changeset.
	pub fn changes(&self) -> &ChangeSet {
		&self.changes
	}

	/// Applies the changes to `doc`. See [`ChangeSet::apply`].
	pub fn apply(&self, doc: &mut Rope) -> bool {
		self.changes.apply(doc)
	}

	/// Builds the transaction that undoes this one.
	///
	/// `original` must be the document before this transaction was applied.
	/// The inverse carries no selection; history restores it separately.
	pub fn invert(&self, original: &Rope) -> Transaction {
		Transaction {
			changes: self.changes.invert(original.slice(..)),
			selection: None,
		}
	}

	/// Maps a range through the changes, keeping its direction.
	pub fn map_range(&self, range: Range) -> Range {
		range.map(|pos| self.changes.map_pos(pos))
	}
}

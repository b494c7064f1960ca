use super::types::{Insertion, Operation};
use crate::range::{CharIdx, CharLen};
use crate::{Rope, RopeSlice};

/// A sequence of retain, delete and insert operations over a whole document.
///
/// `len` is the char length the changeset expects to be applied to.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeSet {
	pub(super) changes: Vec<Operation>,
	pub(super) len: usize,
}

impl ChangeSet {
	/// Creates an empty changeset.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the length of the source document.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns true if applying this changeset leaves a document unchanged.
	pub fn is_identity(&self) -> bool {
		self.changes.iter().all(|op| matches!(op, Operation::Retain(_)))
	}

	/// Returns all operations.
	pub fn changes(&self) -> &[Operation] {
		&self.changes
	}

	/// Keeps the next `n` chars. Consecutive retains merge.
	pub(crate) fn retain(&mut self, n: CharLen) {
		if n == 0 {
			return;
		}

		self.len += n;

		if let Some(Operation::Retain(count)) = self.changes.last_mut() {
			*count += n;
		} else {
			self.changes.push(Operation::Retain(n));
		}
	}

	/// Drops the next `n` chars. Consecutive deletes merge.
	pub(crate) fn delete(&mut self, n: CharLen) {
		if n == 0 {
			return;
		}

		self.len += n;

		if let Some(Operation::Delete(count)) = self.changes.last_mut() {
			*count += n;
		} else {
			self.changes.push(Operation::Delete(n));
		}
	}

	/// Inserts `text` at the current position. Consecutive inserts merge.
	pub(crate) fn insert(&mut self, text: &str) {
		if text.is_empty() {
			return;
		}

		if let Some(Operation::Insert(prev)) = self.changes.last_mut() {
			prev.push_str(text);
		} else {
			self.changes.push(Operation::Insert(Insertion::new(text.to_string())));
		}
	}

	/// Applies this changeset to `doc`.
	///
	/// Returns false, leaving `doc` untouched, if the document length does not
	/// match the length this changeset was built for.
	pub fn apply(&self, doc: &mut Rope) -> bool {
		if doc.len_chars() != self.len {
			return false;
		}

		let mut pos = 0;
		for op in &self.changes {
			match op {
				Operation::Retain(n) => pos += n,
				Operation::Delete(n) => doc.remove(pos..pos + n),
				Operation::Insert(ins) => {
					doc.insert(pos, ins.text());
					pos += ins.char_len();
				}
			}
		}
		true
	}

	/// Builds the changeset that undoes this one.
	///
	/// `original` must be the document this changeset applies to.
	pub fn invert(&self, original: RopeSlice) -> ChangeSet {
		let mut result = ChangeSet::new();

		let mut pos = 0;
		for op in &self.changes {
			match op {
				Operation::Retain(n) => {
					result.retain(*n);
					pos += n;
				}
				Operation::Delete(n) => {
					let deleted = original.slice(pos..pos + n).to_string();
					result.insert(&deleted);
					pos += n;
				}
				Operation::Insert(ins) => result.delete(ins.char_len()),
			}
		}

		result
	}

	/// Maps a position in the source document to the changed document.
	///
	/// A position at an insertion point moves past the inserted text.
	pub fn map_pos(&self, pos: CharIdx) -> CharIdx {
		let mut old_pos = 0;
		let mut new_pos = 0;

		for op in &self.changes {
			if old_pos > pos {
				break;
			}

			match op {
				Operation::Retain(n) => {
					if old_pos + n > pos {
						return new_pos + (pos - old_pos);
					}
					old_pos += n;
					new_pos += n;
				}
				Operation::Delete(n) => {
					if old_pos + n > pos {
						return new_pos;
					}
					old_pos += n;
				}
				Operation::Insert(ins) => new_pos += ins.char_len(),
			}
		}

		new_pos + (pos - old_pos)
	}
}

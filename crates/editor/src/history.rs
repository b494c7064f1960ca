//! Transaction-based undo history.

use postlette_primitives::{Range, Rope, Transaction};

/// Maximum undo history size.
pub const MAX_UNDO: usize = 100;

/// One undoable edit: both directions plus the selections around it.
#[derive(Debug, Clone)]
pub(crate) struct UndoStep {
	pub undo_tx: Transaction,
	pub redo_tx: Transaction,
	pub selection_before: Range,
	pub selection_after: Range,
}

#[derive(Debug, Default)]
pub(crate) struct History {
	undo_stack: Vec<UndoStep>,
	redo_stack: Vec<UndoStep>,
}

impl History {
	pub fn can_undo(&self) -> bool {
		!self.undo_stack.is_empty()
	}

	pub fn can_redo(&self) -> bool {
		!self.redo_stack.is_empty()
	}

	/// Records `tx`, which is about to be applied to `before`.
	///
	/// Clears the redo stack and drops the oldest step past [`MAX_UNDO`].
	pub fn record(&mut self, before: &Rope, tx: &Transaction, selection_before: Range, selection_after: Range) {
		self.undo_stack.push(UndoStep {
			undo_tx: tx.invert(before),
			redo_tx: tx.clone(),
			selection_before,
			selection_after,
		});
		self.redo_stack.clear();

		if self.undo_stack.len() > MAX_UNDO {
			self.undo_stack.remove(0);
		}
	}

	/// Moves the newest step onto the redo stack and returns it.
	pub fn undo(&mut self) -> Option<UndoStep> {
		let step = self.undo_stack.pop()?;
		self.redo_stack.push(step.clone());
		Some(step)
	}

	/// Moves the newest undone step back onto the undo stack and returns it.
	pub fn redo(&mut self) -> Option<UndoStep> {
		let step = self.redo_stack.pop()?;
		self.undo_stack.push(step.clone());
		Some(step)
	}

	pub fn clear(&mut self) {
		self.undo_stack.clear();
		self.redo_stack.clear();
	}

	#[cfg(test)]
	pub fn undo_len(&self) -> usize {
		self.undo_stack.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn step(doc: &Rope, at: usize) -> Transaction {
		Transaction::insert(doc.slice(..), at, "x")
	}

	#[test]
	fn record_clears_redo() {
		let doc = Rope::from("abc");
		let mut history = History::default();
		history.record(&doc, &step(&doc, 0), Range::point(0), Range::point(1));
		assert!(history.undo().is_some());
		assert!(history.can_redo());

		history.record(&doc, &step(&doc, 1), Range::point(1), Range::point(2));
		assert!(!history.can_redo());
		assert!(history.can_undo());
	}

	#[test]
	fn history_is_bounded() {
		let doc = Rope::from("abc");
		let mut history = History::default();
		for _ in 0..MAX_UNDO + 5 {
			history.record(&doc, &step(&doc, 0), Range::point(0), Range::point(1));
		}
		assert_eq!(history.undo_len(), MAX_UNDO);
	}

	#[test]
	fn undo_then_redo_returns_same_step() {
		let doc = Rope::from("abc");
		let mut history = History::default();
		let tx = step(&doc, 2);
		history.record(&doc, &tx, Range::new(0, 2), Range::point(3));

		let undone = history.undo().unwrap();
		assert_eq!(undone.selection_before, Range::new(0, 2));
		let redone = history.redo().unwrap();
		assert_eq!(redone.redo_tx, tx);
		assert_eq!(redone.selection_after, Range::point(3));
		assert!(history.redo().is_none());
	}
}

use postlette_primitives::{Change, Range, Transaction};
use tracing::debug;

use super::{ListPrefix, parse_line};
use crate::Buffer;

/// What a line break did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
	/// A bare `\n` was inserted, replacing any selection.
	Plain,
	/// The list continued on a new line with this marker.
	Continued(ListPrefix),
	/// An empty list item was cleared down to its indent.
	Exited,
}

/// Handles the line-break key.
///
/// With the cursor at the end of a list line and nothing selected, the list
/// continues on the next line, or ends if the current item is blank.
/// Everything else gets a plain line break.
pub fn handle_line_break(buffer: &mut Buffer) -> LineBreak {
	let selection = buffer.selection();
	let cursor = buffer.cursor();
	let line_idx = buffer.cursor_line();
	let line_range = buffer.line_range(line_idx);

	if selection.is_empty() && cursor == line_range.to() {
		let line = buffer.line_text(line_idx);
		if let Some(item) = parse_line(&line) {
			if item.is_empty_item() {
				let replacement = format!("{}\n", item.indent);
				let end = line_range.from() + replacement.chars().count();
				debug!(line = line_idx, "leaving list on empty item");
				apply(buffer, line_range, replacement, end);
				return LineBreak::Exited;
			}

			if let Some(next) = item.prefix.next() {
				let insert = format!("\n{}{}", item.indent, next.literal());
				let end = cursor + insert.chars().count();
				debug!(line = line_idx, ?next, "continuing list");
				apply(buffer, Range::point(cursor), insert, end);
				return LineBreak::Continued(next);
			}
		}
	}

	apply(buffer, selection, "\n".to_string(), selection.from() + 1);
	LineBreak::Plain
}

fn apply(buffer: &mut Buffer, range: Range, text: String, cursor: usize) {
	let tx = Transaction::change(buffer.slice(), [Change::replace(range.from(), range.to(), text)])
		.with_selection(Range::point(cursor));
	let applied = buffer.apply(&tx);
	debug_assert!(applied, "transaction built from the buffer itself");
}

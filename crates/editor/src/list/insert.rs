use postlette_primitives::{Change, Range, Transaction};
use tracing::debug;

use super::{ListStyle, leading_whitespace, parse_line, rewrite_lines};
use crate::Buffer;
use crate::transform::{TransformOutcome, transform_selection_with};

/// Turns the selected lines, or the cursor's line, into a `style` list.
///
/// With a selection every line gets a fresh marker and the selection covers
/// the rewritten block. Otherwise the cursor's line gets a single marker
/// (`1. ` for numbers) after its indent, replacing any marker it had, and the
/// cursor keeps its place in the line content.
pub fn insert_list(buffer: &mut Buffer, style: ListStyle) -> TransformOutcome {
	if buffer.has_selection() {
		debug!(?style, "rewriting selected lines as list");
		return transform_selection_with(buffer, |text| rewrite_lines(text, style));
	}

	let line_idx = buffer.cursor_line();
	let line = buffer.line_text(line_idx);
	let line_start = buffer.line_range(line_idx).from();

	let (indent, marker) = match parse_line(&line) {
		Some(item) => (item.indent, item.marker),
		None => (leading_whitespace(&line), ""),
	};
	let prefix = style.prefix_at(0).literal();

	let marker_start = line_start + indent.chars().count();
	let old_content = marker_start + marker.chars().count();
	let new_content = marker_start + prefix.chars().count();

	let cursor = buffer.cursor();
	let new_cursor = if cursor >= old_content {
		cursor - old_content + new_content
	} else if cursor >= marker_start {
		new_content
	} else {
		cursor
	};

	debug!(?style, line = line_idx, "inserting list marker");
	let tx = Transaction::change(buffer.slice(), [Change::replace(marker_start, old_content, prefix)])
		.with_selection(Range::point(new_cursor));
	let applied = buffer.apply(&tx);
	debug_assert!(applied, "transaction built from the buffer itself");
	TransformOutcome::Applied {
		selection: buffer.selection(),
	}
}

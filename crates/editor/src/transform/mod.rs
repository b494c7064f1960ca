//! Selection-preserving text transforms.
//!
//! A transform rewrites the selected text and leaves a new selection that
//! covers exactly the rewritten output, so a second transform (bold, then
//! unstyle) applies to the same span without reselecting.
//!
//! The selection length is counted in chars. Styled characters are one char
//! but two UTF-16 code units; [`Buffer::selection_utf16`] reports the span in
//! those units for hosts that need them.

use postlette_primitives::{Range, Transaction};
use postlette_styles::{Style, decode, encode};
use tracing::debug;

use crate::Buffer;
use crate::list::{self, ListStyle};


/// The closed set of transforms the editor offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextTransform {
	Bold,
	Italic,
	BoldItalic,
	/// Reverts styled characters only.
	Unstyle,
	/// Strips list prefixes from every line, then unstyles.
	UnstyleWithLists,
	/// Replaces list prefixes on every line.
	ListRewrite(ListStyle),
}

impl TextTransform {
	/// Runs the transform over `text`.
	pub fn apply(&self, text: &str) -> String {
		match *self {
			TextTransform::Bold => encode(Style::Bold, text),
			TextTransform::Italic => encode(Style::Italic, text),
			TextTransform::BoldItalic => encode(Style::BoldItalic, text),
			TextTransform::Unstyle => decode(text),
			TextTransform::UnstyleWithLists => list::unstyle_with_lists(text),
			TextTransform::ListRewrite(style) => list::rewrite_lines(text, style),
		}
	}

	/// Short name used in logs.
	pub fn name(&self) -> &'static str {
		match self {
			TextTransform::Bold => "bold",
			TextTransform::Italic => "italic",
			TextTransform::BoldItalic => "bold-italic",
			TextTransform::Unstyle => "unstyle",
			TextTransform::UnstyleWithLists => "unstyle-with-lists",
			TextTransform::ListRewrite(_) => "list-rewrite",
		}
	}
}

impl From<Style> for TextTransform {
	fn from(style: Style) -> Self {
		match style {
			Style::Bold => TextTransform::Bold,
			Style::Italic => TextTransform::Italic,
			Style::BoldItalic => TextTransform::BoldItalic,
		}
	}
}

/// Result of running a transform over the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformOutcome {
	/// The selection was replaced; `selection` covers the output.
	Applied { selection: Range },
	/// Nothing was selected and the buffer is untouched.
	NoSelection,
}

impl TransformOutcome {
	/// Returns true if the buffer was changed.
	pub fn is_applied(&self) -> bool {
		matches!(self, TransformOutcome::Applied { .. })
	}
}

/// Applies `transform` to the buffer's selection.
pub fn apply_selection_transform(buffer: &mut Buffer, transform: TextTransform) -> TransformOutcome {
	debug!(transform = transform.name(), "applying selection transform");
	transform_selection_with(buffer, |text| transform.apply(text))
}

/// Applies an arbitrary string transform to the buffer's selection.
///
/// `f` never sees an empty string. Its output is accepted as-is and becomes
/// the new selection `[start, start + len(output))`.
pub fn transform_selection_with(buffer: &mut Buffer, f: impl FnOnce(&str) -> String) -> TransformOutcome {
	let Some(selected) = buffer.selected_text() else {
		return TransformOutcome::NoSelection;
	};

	let range = buffer.selection();
	let output = f(&selected);
	let start = range.from();
	let selection = Range::new(start, start + output.chars().count());

	let tx = Transaction::replace(buffer.slice(), range, output).with_selection(selection);
	let applied = buffer.apply(&tx);
	debug_assert!(applied, "transaction built from the buffer itself");
	TransformOutcome::Applied { selection }
}

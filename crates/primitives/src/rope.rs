//! Rope line helpers.
//!
//! Ropey counts every Unicode line break (LF, CRLF, CR, VT, FF, NEL, LS, PS)
//! as ending a line. These helpers separate a line's content from its break.

use ropey::RopeSlice;

use crate::range::{CharIdx, CharLen, Range};

/// Returns the number of chars taken by the line break at the end of `line`.
pub fn line_ending_len(line: RopeSlice) -> CharLen {
	let len = line.len_chars();
	if len == 0 {
		return 0;
	}

	match line.char(len - 1) {
		'\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
		'\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => 1,
		_ => 0,
	}
}

/// Returns the char index just past the content of `line_idx`, before its break.
pub fn line_content_end(text: RopeSlice, line_idx: usize) -> CharIdx {
	let line = text.line(line_idx);
	text.line_to_char(line_idx) + line.len_chars() - line_ending_len(line)
}

/// Returns the content span of `line_idx`, excluding the line break.
pub fn line_range(text: RopeSlice, line_idx: usize) -> Range {
	Range::new(text.line_to_char(line_idx), line_content_end(text, line_idx))
}

/// Returns the content of `line_idx` without its line break.
pub fn line_text(text: RopeSlice, line_idx: usize) -> String {
	let range = line_range(text, line_idx);
	text.slice(range.from()..range.to()).to_string()
}

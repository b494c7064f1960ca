use postlette_styles::decode;
use smallvec::SmallVec;

use super::{ListStyle, leading_whitespace, normalize_line_breaks, parse_line};

/// Lines of a typical selection fit inline.
type Lines<'a> = SmallVec<[&'a str; 16]>;

fn split_lines(text: &str) -> Lines<'_> {
	text.lines().collect()
}

/// Splits `line` into indent and content, dropping any list marker.
fn strip_line(line: &str) -> (&str, &str) {
	match parse_line(line) {
		Some(item) => (item.indent, item.rest),
		None => {
			let indent = leading_whitespace(line);
			(indent, &line[indent.len()..])
		}
	}
}

/// Replaces the list marker of every line in `text` with `style`'s.
///
/// Line breaks are normalized to `\n`, a trailing break does not start an
/// extra line and the result has no trailing break. Numbers count from 1.
pub fn rewrite_lines(text: &str, style: ListStyle) -> String {
	let text = normalize_line_breaks(text);
	let lines = split_lines(&text);

	let mut out = String::with_capacity(text.len() + lines.len() * 4);
	for (idx, line) in lines.iter().enumerate() {
		if idx > 0 {
			out.push('\n');
		}
		let (indent, rest) = strip_line(line);
		out.push_str(indent);
		out.push_str(&style.prefix_at(idx).literal());
		out.push_str(rest);
	}
	out
}

/// Removes the list marker from every line in `text`, keeping indents.
pub fn strip_list_prefixes(text: &str) -> String {
	let text = normalize_line_breaks(text);
	let lines = split_lines(&text);

	let mut out = String::with_capacity(text.len());
	for (idx, line) in lines.iter().enumerate() {
		if idx > 0 {
			out.push('\n');
		}
		let (indent, rest) = strip_line(line);
		out.push_str(indent);
		out.push_str(rest);
	}
	out
}

/// Strips list markers, then reverts styled characters.
pub fn unstyle_with_lists(text: &str) -> String {
	decode(&strip_list_prefixes(text))
}

//! Bullet, dash and numbered lists.
//!
//! A list line is `indent prefix rest`, where the prefix is one of `• `,
//! `- ` or `N. `. The space after the marker may be any single whitespace
//! char when recognizing; generated prefixes always use a plain space.
//! Recognition tries numbered, then bulleted, then dashed.
//!
//! Numbers are ASCII digits only. Other Unicode decimal digits, such as
//! `١`, are deliberately not list numbers: a line starting `١. ` is plain
//! text and Enter after it is a plain line break.

mod continuation;
mod insert;
mod rewrite;

#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::sync::LazyLock;

pub use continuation::{LineBreak, handle_line_break};
pub use insert::insert_list;
use regex::Regex;
pub use rewrite::{rewrite_lines, strip_list_prefixes, unstyle_with_lists};

/// The list kind a user asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListStyle {
	Bullets,
	Numbers,
	Dashes,
}

impl ListStyle {
	/// Prefix for the line at `index` (0-based) of a rewritten block.
	pub fn prefix_at(self, index: usize) -> ListPrefix {
		match self {
			ListStyle::Bullets => ListPrefix::Bullet,
			ListStyle::Dashes => ListPrefix::Dash,
			ListStyle::Numbers => ListPrefix::Number(index as u64 + 1),
		}
	}
}

/// A recognized line-leading list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListPrefix {
	Bullet,
	Dash,
	Number(u64),
}

impl ListPrefix {
	/// The canonical prefix text, trailing space included.
	pub fn literal(&self) -> Cow<'static, str> {
		match self {
			ListPrefix::Bullet => Cow::Borrowed("• "),
			ListPrefix::Dash => Cow::Borrowed("- "),
			ListPrefix::Number(n) => Cow::Owned(format!("{n}. ")),
		}
	}

	/// The prefix for the following list item.
	///
	/// `None` when a number cannot be incremented.
	pub fn next(&self) -> Option<ListPrefix> {
		match *self {
			ListPrefix::Number(n) => n.checked_add(1).map(ListPrefix::Number),
			other => Some(other),
		}
	}
}

/// A line split into indent, list marker and content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
	/// Leading whitespace.
	pub indent: &'a str,
	/// The marker as written, including its trailing whitespace char.
	pub marker: &'a str,
	pub prefix: ListPrefix,
	/// Everything after the marker.
	pub rest: &'a str,
}

impl ListLine<'_> {
	/// Returns true if there is nothing but whitespace after the marker.
	pub fn is_empty_item(&self) -> bool {
		self.rest.trim().is_empty()
	}
}

struct Patterns {
	number: Regex,
	bullet: Regex,
	dash: Regex,
}

fn compile(pattern: &str) -> Regex {
	Regex::new(pattern).unwrap_or_else(|e| panic!("list prefix pattern {pattern:?}: {e}"))
}

static PATTERNS: LazyLock<Patterns> = LazyLock::new(|| Patterns {
	number: compile(r"^(?P<indent>\s*)(?P<marker>(?P<num>[0-9]+)\.\s)(?P<rest>.*)$"),
	bullet: compile(r"^(?P<indent>\s*)(?P<marker>•\s)(?P<rest>.*)$"),
	dash: compile(r"^(?P<indent>\s*)(?P<marker>-\s)(?P<rest>.*)$"),
});

/// Splits `line` into its list parts, or `None` if it is not a list line.
///
/// `line` must not contain a line break. Numbers too large for `u64`
/// saturate, so they are still recognized (and stripped) but never
/// continued.
pub fn parse_line(line: &str) -> Option<ListLine<'_>> {
	let patterns = &*PATTERNS;

	if let Some(caps) = patterns.number.captures(line) {
		let n = caps["num"].parse::<u64>().unwrap_or(u64::MAX);
		return Some(list_line(&caps, line, ListPrefix::Number(n)));
	}
	if let Some(caps) = patterns.bullet.captures(line) {
		return Some(list_line(&caps, line, ListPrefix::Bullet));
	}
	if let Some(caps) = patterns.dash.captures(line) {
		return Some(list_line(&caps, line, ListPrefix::Dash));
	}
	None
}

fn list_line<'a>(caps: &regex::Captures<'a>, line: &'a str, prefix: ListPrefix) -> ListLine<'a> {
	let group = |name: &str| caps.name(name).map_or("", |m| &line[m.range()]);
	ListLine {
		indent: group("indent"),
		marker: group("marker"),
		prefix,
		rest: group("rest"),
	}
}

/// Returns the leading whitespace of `line`.
pub fn leading_whitespace(line: &str) -> &str {
	let content = line.trim_start();
	&line[..line.len() - content.len()]
}

/// Rewrites every Unicode line break to `\n`.
///
/// Host widgets hand over selections with U+2029 between paragraphs; CRLF
/// and the other breaks a rope recognizes are folded in too.
pub fn normalize_line_breaks(text: &str) -> Cow<'_, str> {
	const BREAKS: &[char] = &['\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{2028}', '\u{2029}'];
	if !text.contains(BREAKS) {
		return Cow::Borrowed(text);
	}
	Cow::Owned(text.replace("\r\n", "\n").replace(BREAKS, "\n"))
}

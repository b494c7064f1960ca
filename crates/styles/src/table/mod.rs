//! Style map construction and the process-wide table.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::Style;


/// First codepoint of each style's `A`..`Z` run; `a`..`z` follows directly.
const BOLD_LETTERS: u32 = 0x1D400;
const ITALIC_LETTERS: u32 = 0x1D434;
const BOLD_ITALIC_LETTERS: u32 = 0x1D468;
/// First codepoint of the bold `0`..`9` run.
const BOLD_DIGITS: u32 = 0x1D7CE;
/// PLANCK CONSTANT. Mathematical italic small h (U+1D455) is unassigned.
const ITALIC_SMALL_H: char = '\u{210E}';

/// Errors raised while building style maps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
	/// Two source characters map to the same styled character.
	///
	/// Either a single map is not injective or two maps overlap; in both
	/// cases unstyling would be ambiguous.
	#[error(
		"styled char U+{:04X} claimed by {first} {first_source:?} and {second} {second_source:?}",
		u32::from(*styled)
	)]
	Collision {
		styled: char,
		first: Style,
		first_source: char,
		second: Style,
		second_source: char,
	},

	/// A computed codepoint is not a valid `char`.
	#[error("U+{0:04X} is not a valid char")]
	InvalidCodepoint(u32),
}

type Result<T> = std::result::Result<T, StyleError>;

fn ascii_letters() -> impl Iterator<Item = char> {
	('A'..='Z').chain('a'..='z')
}

fn offset_char(base: u32, offset: usize) -> Result<char> {
	// Offsets stay below 52, the conversion cannot truncate.
	let cp = base + offset as u32;
	char::from_u32(cp).ok_or(StyleError::InvalidCodepoint(cp))
}

/// An injective map from ASCII source characters to styled characters.
#[derive(Debug, Clone)]
pub struct StyleMap {
	style: Style,
	forward: FxHashMap<char, char>,
}

impl StyleMap {
	/// Builds a map from `(source, styled)` pairs.
	///
	/// Later pairs for the same source replace earlier ones. Fails if two
	/// sources end up sharing a styled character.
	pub fn from_pairs(style: Style, pairs: impl IntoIterator<Item = (char, char)>) -> Result<Self> {
		let mut forward = FxHashMap::default();
		for (source, styled) in pairs {
			forward.insert(source, styled);
		}

		let mut seen: FxHashMap<char, char> = FxHashMap::default();
		let mut entries: Vec<_> = forward.iter().map(|(&s, &t)| (s, t)).collect();
		entries.sort_unstable();
		for (source, styled) in entries {
			if let Some(&first_source) = seen.get(&styled) {
				return Err(StyleError::Collision {
					styled,
					first: style,
					first_source,
					second: style,
					second_source: source,
				});
			}
			seen.insert(styled, source);
		}

		Ok(Self { style, forward })
	}

	/// Builds the standard map for `style`.
	pub fn standard(style: Style) -> Result<Self> {
		let base = match style {
			Style::Bold => BOLD_LETTERS,
			Style::Italic => ITALIC_LETTERS,
			Style::BoldItalic => BOLD_ITALIC_LETTERS,
		};

		let mut pairs = Vec::with_capacity(62);
		for (i, c) in ascii_letters().enumerate() {
			pairs.push((c, offset_char(base, i)?));
		}
		if style.maps_digits() {
			for (i, c) in ('0'..='9').enumerate() {
				pairs.push((c, offset_char(BOLD_DIGITS, i)?));
			}
		}
		if style == Style::Italic {
			pairs.push(('h', ITALIC_SMALL_H));
		}

		Self::from_pairs(style, pairs)
	}

	/// The style this map produces.
	pub fn style(&self) -> Style {
		self.style
	}

	/// Returns the styled counterpart of `c`.
	#[inline]
	pub fn get(&self, c: char) -> Option<char> {
		self.forward.get(&c).copied()
	}

	/// Number of mapped source characters.
	pub fn len(&self) -> usize {
		self.forward.len()
	}

	/// Returns true if nothing is mapped.
	pub fn is_empty(&self) -> bool {
		self.forward.is_empty()
	}

	/// Iterates `(source, styled)` pairs in no particular order.
	pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
		self.forward.iter().map(|(&s, &t)| (s, t))
	}

	/// Maps every character of `text`, leaving unmapped ones alone.
	pub fn apply(&self, text: &str) -> String {
		text.chars().map(|c| self.get(c).unwrap_or(c)).collect()
	}
}

/// All three forward maps plus their merged inverse.
#[derive(Debug, Clone)]
pub struct StyleTable {
	bold: StyleMap,
	italic: StyleMap,
	bold_italic: StyleMap,
	unstyle: FxHashMap<char, (char, Style)>,
}

impl StyleTable {
	/// Builds the standard tables.
	pub fn build() -> Result<Self> {
		Self::from_maps(
			StyleMap::standard(Style::Bold)?,
			StyleMap::standard(Style::Italic)?,
			StyleMap::standard(Style::BoldItalic)?,
		)
	}

	/// Merges three forward maps into a table.
	///
	/// The forward maps must have pairwise-disjoint destination sets. A styled
	/// character claimed by more than one map is rejected instead of letting
	/// the last merged map win.
	pub fn from_maps(bold: StyleMap, italic: StyleMap, bold_italic: StyleMap) -> Result<Self> {
		let mut unstyle: FxHashMap<char, (char, Style)> = FxHashMap::default();
		for map in [&bold, &italic, &bold_italic] {
			let mut pairs: Vec<_> = map.iter().collect();
			pairs.sort_unstable();
			for (source, styled) in pairs {
				if let Some(&(first_source, first)) = unstyle.get(&styled) {
					return Err(StyleError::Collision {
						styled,
						first,
						first_source,
						second: map.style(),
						second_source: source,
					});
				}
				unstyle.insert(styled, (source, map.style()));
			}
		}

		Ok(Self {
			bold,
			italic,
			bold_italic,
			unstyle,
		})
	}

	/// Returns the forward map for `style`.
	pub fn map(&self, style: Style) -> &StyleMap {
		match style {
			Style::Bold => &self.bold,
			Style::Italic => &self.italic,
			Style::BoldItalic => &self.bold_italic,
		}
	}

	/// See [`encode`](crate::encode).
	pub fn encode(&self, style: Style, text: &str) -> String {
		self.map(style).apply(text)
	}

	/// See [`decode`](crate::decode).
	pub fn decode(&self, text: &str) -> String {
		text.chars().map(|c| self.source_of(c).unwrap_or(c)).collect()
	}

	/// Returns the ASCII source of a styled character.
	pub fn source_of(&self, c: char) -> Option<char> {
		self.unstyle.get(&c).map(|&(source, _)| source)
	}

	/// Returns the style a styled character belongs to.
	pub fn style_of(&self, c: char) -> Option<Style> {
		self.unstyle.get(&c).map(|&(_, style)| style)
	}
}

static TABLE: LazyLock<StyleTable> =
	LazyLock::new(|| StyleTable::build().unwrap_or_else(|e| panic!("style table: {e}")));

/// Returns the process-wide style table, building it on first use.
pub fn table() -> &'static StyleTable {
	&TABLE
}

//! Unicode "styled text" transforms.
//!
//! Social platforms render plain text only, so bold and italic are faked by
//! swapping ASCII letters for their look-alikes in the Mathematical
//! Alphanumeric Symbols block. This crate owns those mappings:
//!
//! - [`encode`] maps ASCII onto one [`Style`]
//! - [`decode`] maps any styled character back to ASCII
//!
//! Both are total: characters outside a map's domain pass through unchanged.
//!
//! # Tables
//!
//! | Style | Uppercase | Lowercase | Digits |
//! |-------|-----------|-----------|--------|
//! | Bold | U+1D400.. | U+1D41A.. | U+1D7CE.. |
//! | Italic | U+1D434.. | U+1D44E.. (`h` is U+210E) | - |
//! | BoldItalic | U+1D468.. | U+1D482.. | - |
//!
//! The tables are built once per process (see [`table`]) and shared
//! read-only afterwards.

mod style;
mod table;

pub use style::Style;
pub use table::{StyleError, StyleMap, StyleTable, table};

/// Maps every character of `text` that has an entry in `style`'s map.
///
/// ```
/// use postlette_styles::{Style, encode};
///
/// assert_eq!(encode(Style::Bold, "Hi 5"), "\u{1D407}\u{1D422} \u{1D7D3}");
/// ```
pub fn encode(style: Style, text: &str) -> String {
	table().encode(style, text)
}

/// Reverts styled characters from any of the three styles back to ASCII.
///
/// ```
/// use postlette_styles::{Style, decode, encode};
///
/// let styled = encode(Style::BoldItalic, "post");
/// assert_eq!(decode(&styled), "post");
/// ```
pub fn decode(text: &str) -> String {
	table().decode(text)
}

/// Returns the style that produced `c`, if `c` is a styled character.
pub fn style_of(c: char) -> Option<Style> {
	table().style_of(c)
}

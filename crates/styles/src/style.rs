use std::fmt;

/// A forward style variant.
///
/// Unstyling is not a variant: it is the merged inverse of all three, see
/// [`decode`](crate::decode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
	/// Mathematical Bold. The only style that maps digits.
	Bold,
	/// Mathematical Italic.
	Italic,
	/// Mathematical Bold Italic.
	BoldItalic,
}

impl Style {
	/// All styles, in unstyle merge order.
	pub const ALL: [Style; 3] = [Style::Bold, Style::Italic, Style::BoldItalic];

	/// Canonical kebab-case name.
	pub const fn name(self) -> &'static str {
		match self {
			Style::Bold => "bold",
			Style::Italic => "italic",
			Style::BoldItalic => "bold-italic",
		}
	}

	/// Returns true if this style has a digit mapping.
	pub const fn maps_digits(self) -> bool {
		matches!(self, Style::Bold)
	}
}

impl fmt::Display for Style {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

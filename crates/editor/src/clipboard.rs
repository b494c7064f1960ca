//! System clipboard seam.

/// Something that can receive copied text.
///
/// GUI shells wrap the platform clipboard; [`MemoryClipboard`] serves
/// headless use and tests.
pub trait Clipboard {
	fn set_text(&mut self, text: &str);
}

/// A clipboard that keeps the last copied text in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryClipboard {
	text: Option<String>,
}

impl MemoryClipboard {
	pub fn new() -> Self {
		Self::default()
	}

	/// The last copied text.
	pub fn text(&self) -> Option<&str> {
		self.text.as_deref()
	}
}

impl Clipboard for MemoryClipboard {
	fn set_text(&mut self, text: &str) {
		self.text = Some(text.to_string());
	}
}

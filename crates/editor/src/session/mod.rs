//! Headless model of the editor window.
//!
//! A [`Session`] ties a [`Buffer`] to a file path, tracks unsaved changes
//! and turns every user action into buffer edits plus status notices. GUI
//! shells render [`Session::title`], [`Session::status`] and
//! [`Session::char_count_label`], drain [`Session::take_notices`] and hand
//! focus back to the text widget when [`Session::take_focus_request`] says so.

mod options;


use std::path::{Path, PathBuf};

use postlette_primitives::{Range, Transaction};
use postlette_styles::Style;
use tracing::{debug, warn};

pub use self::options::SessionOptions;
use crate::Buffer;
use crate::clipboard::Clipboard;
use crate::file::{self, FileError};
use crate::list::{self, LineBreak, ListStyle};
use crate::notice::{AutoDismiss, Notice, NoticeCenter, NoticeKind};
use crate::transform::{TextTransform, TransformOutcome, apply_selection_transform};

const APP_NAME: &str = "Postlette";
const UNTITLED: &str = "Untitled";

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
	/// Written to this path; the session is clean.
	Saved(PathBuf),
	/// No path yet; the shell should ask for one and call
	/// [`Session::save_as`].
	NeedsPath,
	/// Writing failed; an error notice was shown.
	Failed,
}

/// One open document plus its window state.
#[derive(Debug)]
pub struct Session {
	buffer: Buffer,
	path: Option<PathBuf>,
	/// Buffer revision at the last open or save.
	clean_revision: u64,
	notices: NoticeCenter,
	focus_requested: bool,
	options: SessionOptions,
}

impl Default for Session {
	fn default() -> Self {
		Self::new(SessionOptions::default())
	}
}

impl Session {
	/// Creates an untitled, empty session showing "Ready".
	pub fn new(options: SessionOptions) -> Self {
		let mut notices = NoticeCenter::new();
		notices.push(Notice::persistent("Ready"));
		Self {
			buffer: Buffer::new(),
			path: None,
			clean_revision: 0,
			notices,
			focus_requested: false,
			options,
		}
	}

	pub fn buffer(&self) -> &Buffer {
		&self.buffer
	}

	/// Mutable buffer access for cursor and selection changes.
	///
	/// Edits made here count toward the dirty state like any other.
	pub fn buffer_mut(&mut self) -> &mut Buffer {
		&mut self.buffer
	}

	pub fn path(&self) -> Option<&Path> {
		self.path.as_deref()
	}

	/// Styles the selection.
	pub fn apply_style(&mut self, style: Style) -> TransformOutcome {
		self.transform(TextTransform::from(style))
	}

	/// Strips list markers and styling from the selection.
	pub fn unstyle(&mut self) -> TransformOutcome {
		self.transform(TextTransform::UnstyleWithLists)
	}

	/// Runs `transform` over the selection, hinting when nothing is selected.
	pub fn transform(&mut self, transform: TextTransform) -> TransformOutcome {
		let outcome = apply_selection_transform(&mut self.buffer, transform);
		if outcome == TransformOutcome::NoSelection {
			self.hint("Select text to style.");
		}
		self.focus_requested = true;
		outcome
	}

	/// Turns the selected lines, or the cursor's line, into a list.
	pub fn insert_list(&mut self, style: ListStyle) -> TransformOutcome {
		let outcome = list::insert_list(&mut self.buffer, style);
		self.focus_requested = true;
		outcome
	}

	/// Replaces the selection with `text` and puts the cursor after it.
	pub fn insert_text(&mut self, text: &str) {
		let selection = self.buffer.selection();
		let cursor = selection.from() + text.chars().count();
		let tx = Transaction::replace(self.buffer.slice(), selection, text).with_selection(Range::point(cursor));
		let applied = self.buffer.apply(&tx);
		debug_assert!(applied, "transaction built from the buffer itself");
		self.focus_requested = true;
	}

	pub fn insert_em_dash(&mut self) {
		let dash = self.options.em_dash.clone();
		self.insert_text(&dash);
	}

	pub fn insert_separator(&mut self) {
		let separator = self.options.separator.clone();
		self.insert_text(&separator);
	}

	/// Inserts an emoji chosen from a picker.
	pub fn insert_emoji(&mut self, emoji: &str) {
		self.insert_text(emoji);
	}

	/// Handles the line-break key with list continuation.
	pub fn line_break(&mut self) -> LineBreak {
		list::handle_line_break(&mut self.buffer)
	}

	/// Copies the whole document to `clipboard`.
	pub fn copy(&mut self, clipboard: &mut impl Clipboard) {
		clipboard.set_text(&self.buffer.contents());
		self.info("Copied");
	}

	/// Number of Unicode scalar values in the document.
	pub fn char_count(&self) -> usize {
		self.buffer.len_chars()
	}

	pub fn char_count_label(&self) -> String {
		format!("{} chars", self.char_count())
	}

	/// Returns true if the document changed since it was opened or saved.
	pub fn is_dirty(&self) -> bool {
		self.buffer.revision() != self.clean_revision
	}

	/// Whether closing or opening another file must ask first.
	pub fn needs_discard_confirmation(&self) -> bool {
		self.is_dirty()
	}

	/// Window title: `Postlette — name`, with `*` when dirty.
	pub fn title(&self) -> String {
		let name = self.path.as_deref().map_or_else(|| UNTITLED.to_string(), file::display_name);
		let marker = if self.is_dirty() { "*" } else { "" };
		format!("{APP_NAME} — {name}{marker}")
	}

	/// Loads `path`, replacing the document.
	///
	/// On failure the document is untouched and an error notice is shown.
	pub fn open(&mut self, path: impl AsRef<Path>) -> Result<(), FileError> {
		let path = path.as_ref();
		let text = match file::read_text(path) {
			Ok(text) => text,
			Err(err) => {
				warn!(error = %err, "open failed");
				let message = match err {
					FileError::InvalidEncoding { .. } => "Could not open file. Invalid encoding.",
					FileError::Io { .. } => "Could not open file.",
				};
				self.error(message);
				return Err(err);
			}
		};

		self.buffer.replace_all(&text);
		self.clean_revision = self.buffer.revision();
		self.path = Some(path.to_path_buf());
		debug!(path = %path.display(), chars = self.char_count(), "opened");
		self.info(format!("Opened: {}", file::display_name(path)));
		Ok(())
	}

	/// Saves to the current path.
	pub fn save(&mut self) -> SaveOutcome {
		match self.path.clone() {
			Some(path) => self.save_to(path),
			None => SaveOutcome::NeedsPath,
		}
	}

	/// Saves to `path`, adding the default extension if it has none.
	pub fn save_as(&mut self, path: impl AsRef<Path>) -> SaveOutcome {
		let path = file::with_default_extension(path.as_ref(), &self.options.default_extension);
		self.save_to(path)
	}

	fn save_to(&mut self, path: PathBuf) -> SaveOutcome {
		if let Err(err) = file::write_text(&path, &self.buffer.contents()) {
			warn!(error = %err, "save failed");
			self.error("Could not save file.");
			return SaveOutcome::Failed;
		}

		self.clean_revision = self.buffer.revision();
		debug!(path = %path.display(), "saved");
		self.info(format!("Saved: {}", file::display_name(&path)));
		self.path = Some(path.clone());
		SaveOutcome::Saved(path)
	}

	pub fn undo(&mut self) -> bool {
		self.buffer.undo()
	}

	pub fn redo(&mut self) -> bool {
		self.buffer.redo()
	}

	/// The notice currently shown in the status bar.
	pub fn status(&self) -> Option<&Notice> {
		self.notices.current()
	}

	/// Drains notices raised since the last call.
	pub fn take_notices(&mut self) -> Vec<Notice> {
		self.notices.take_pending()
	}

	/// Returns and clears the request to focus the text widget.
	pub fn take_focus_request(&mut self) -> bool {
		std::mem::take(&mut self.focus_requested)
	}

	fn hint(&mut self, text: impl Into<String>) {
		self.push(NoticeKind::Hint, self.options.hint_timeout, text);
	}

	fn info(&mut self, text: impl Into<String>) {
		self.push(NoticeKind::Info, self.options.info_timeout, text);
	}

	fn error(&mut self, text: impl Into<String>) {
		self.push(NoticeKind::Error, self.options.error_timeout, text);
	}

	fn push(&mut self, kind: NoticeKind, timeout: std::time::Duration, text: impl Into<String>) {
		self.notices.push(Notice::new(kind, AutoDismiss::After(timeout), text));
	}
}

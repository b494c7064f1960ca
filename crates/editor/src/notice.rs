//! Status-bar notices.
//!
//! The session queues notices here; shells drain them with
//! [`NoticeCenter::take_pending`] and own the display timers.

use std::collections::VecDeque;
use std::time::Duration;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoticeKind {
	/// Confirmation of something that happened (default).
	#[default]
	Info,
	/// Guidance after an action that did nothing.
	Hint,
	/// A failed file operation.
	Error,
}

/// Controls automatic dismissal of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoDismiss {
	/// Stays until replaced.
	Never,
	/// Clears after the given duration.
	After(Duration),
}

/// A transient status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub kind: NoticeKind,
	pub dismiss: AutoDismiss,
	pub text: String,
}

impl Notice {
	pub fn new(kind: NoticeKind, dismiss: AutoDismiss, text: impl Into<String>) -> Self {
		Self {
			kind,
			dismiss,
			text: text.into(),
		}
	}

	/// A notice that never times out.
	pub fn persistent(text: impl Into<String>) -> Self {
		Self::new(NoticeKind::Info, AutoDismiss::Never, text)
	}

	/// Display duration, `None` for persistent notices.
	pub fn timeout(&self) -> Option<Duration> {
		match self.dismiss {
			AutoDismiss::Never => None,
			AutoDismiss::After(d) => Some(d),
		}
	}
}

/// Queue of notices plus the one currently shown.
#[derive(Debug, Default)]
pub struct NoticeCenter {
	pending: VecDeque<Notice>,
	current: Option<Notice>,
}

impl NoticeCenter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Shows `notice` and queues it for the shell.
	pub fn push(&mut self, notice: Notice) {
		self.current = Some(notice.clone());
		self.pending.push_back(notice);
	}

	/// The most recent notice.
	pub fn current(&self) -> Option<&Notice> {
		self.current.as_ref()
	}

	/// Drains notices pushed since the last call.
	pub fn take_pending(&mut self) -> Vec<Notice> {
		self.pending.drain(..).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn push_sets_current_and_queues() {
		let mut center = NoticeCenter::new();
		center.push(Notice::persistent("Ready"));
		center.push(Notice::new(NoticeKind::Hint, AutoDismiss::After(Duration::from_secs(3)), "Select text to style."));

		assert_eq!(center.current().map(|n| n.text.as_str()), Some("Select text to style."));
		let drained = center.take_pending();
		assert_eq!(drained.len(), 2);
		assert_eq!(drained[0].timeout(), None);
		assert_eq!(drained[1].timeout(), Some(Duration::from_millis(3000)));
		assert!(center.take_pending().is_empty());
		assert!(center.current().is_some());
	}
}

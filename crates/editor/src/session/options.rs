use std::time::Duration;

/// Tunables for a [`Session`](super::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
	/// How long hints stay visible.
	pub hint_timeout: Duration,
	/// How long confirmations stay visible.
	pub info_timeout: Duration,
	/// How long file errors stay visible.
	pub error_timeout: Duration,
	/// Text inserted by the em dash action.
	pub em_dash: String,
	/// Text inserted by the separator action.
	pub separator: String,
	/// Extension added by save-as when the chosen path has none.
	pub default_extension: String,
}

impl SessionOptions {
	pub const DEFAULT_HINT_MS: u64 = 3000;
	pub const DEFAULT_INFO_MS: u64 = 3000;
	pub const DEFAULT_ERROR_MS: u64 = 5000;
	pub const DEFAULT_EM_DASH: &'static str = "—";
	pub const DEFAULT_SEPARATOR: &'static str = "────────";
	pub const DEFAULT_EXTENSION: &'static str = "txt";
}

impl Default for SessionOptions {
	fn default() -> Self {
		Self {
			hint_timeout: Duration::from_millis(Self::DEFAULT_HINT_MS),
			info_timeout: Duration::from_millis(Self::DEFAULT_INFO_MS),
			error_timeout: Duration::from_millis(Self::DEFAULT_ERROR_MS),
			em_dash: Self::DEFAULT_EM_DASH.to_string(),
			separator: Self::DEFAULT_SEPARATOR.to_string(),
			default_extension: Self::DEFAULT_EXTENSION.to_string(),
		}
	}
}

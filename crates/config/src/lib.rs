//! Configuration for Postlette.
//!
//! Configuration is a single TOML file. Every field is optional and falls
//! back to the built-in default:
//!
//! ```toml
//! [notices]
//! hint_ms = 3000
//! info_ms = 3000
//! error_ms = 5000
//!
//! [snippets]
//! em_dash = "—"
//! separator = "────────"
//!
//! [files]
//! default_extension = "txt"
//!
//! [log]
//! filter = "postlette=debug"
//! ```
//!
//! # Configuration Files
//!
//! [`Config::load_default`] reads `postlette/config.toml` under the platform
//! config directory (`$XDG_CONFIG_HOME` or `~/.config` on Linux). A missing
//! file is not an error.

pub mod error;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use error::{ConfigError, Result};
use postlette_editor::SessionOptions;
use serde::Deserialize;

/// Directory name under the platform config dir.
const APP_DIR: &str = "postlette";
const CONFIG_FILE: &str = "config.toml";

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub notices: NoticeConfig,
	pub snippets: SnippetConfig,
	pub files: FileConfig,
	pub log: LogConfig,
}

/// Status notice durations, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoticeConfig {
	pub hint_ms: u64,
	pub info_ms: u64,
	pub error_ms: u64,
}

impl Default for NoticeConfig {
	fn default() -> Self {
		Self {
			hint_ms: SessionOptions::DEFAULT_HINT_MS,
			info_ms: SessionOptions::DEFAULT_INFO_MS,
			error_ms: SessionOptions::DEFAULT_ERROR_MS,
		}
	}
}

/// Text inserted by the snippet actions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnippetConfig {
	pub em_dash: String,
	pub separator: String,
}

impl Default for SnippetConfig {
	fn default() -> Self {
		Self {
			em_dash: SessionOptions::DEFAULT_EM_DASH.to_string(),
			separator: SessionOptions::DEFAULT_SEPARATOR.to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
	/// Extension appended on save-as when the path has none.
	pub default_extension: String,
}

impl Default for FileConfig {
	fn default() -> Self {
		Self {
			default_extension: SessionOptions::DEFAULT_EXTENSION.to_string(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
	/// `tracing` filter directive, overridden by `POSTLETTE_LOG`.
	pub filter: Option<String>,
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	pub fn parse(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Load the user's config file, or defaults if there is none.
	pub fn load_default() -> Result<Self> {
		match default_path() {
			Some(path) if path.is_file() => Self::load(path),
			_ => Ok(Self::default()),
		}
	}

	/// Session tunables derived from this config.
	pub fn session_options(&self) -> SessionOptions {
		SessionOptions {
			hint_timeout: Duration::from_millis(self.notices.hint_ms),
			info_timeout: Duration::from_millis(self.notices.info_ms),
			error_timeout: Duration::from_millis(self.notices.error_ms),
			em_dash: self.snippets.em_dash.clone(),
			separator: self.snippets.separator.clone(),
			default_extension: self.files.default_extension.clone(),
		}
	}
}

/// Path of the user config file, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

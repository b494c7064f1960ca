//! Plain UTF-8 file I/O.

use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors from reading or writing a document.
#[derive(Debug, Error)]
pub enum FileError {
	/// The file is not valid UTF-8.
	#[error("{path} is not valid UTF-8: {source}")]
	InvalidEncoding {
		path: PathBuf,
		#[source]
		source: FromUtf8Error,
	},

	/// Any other I/O failure.
	#[error("I/O error on {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl FileError {
	fn io(path: &Path, source: std::io::Error) -> Self {
		FileError::Io {
			path: path.to_path_buf(),
			source,
		}
	}
}

/// Reads `path` as UTF-8 text, verbatim.
pub fn read_text(path: &Path) -> Result<String, FileError> {
	let bytes = std::fs::read(path).map_err(|e| FileError::io(path, e))?;
	String::from_utf8(bytes).map_err(|source| FileError::InvalidEncoding {
		path: path.to_path_buf(),
		source,
	})
}

/// Writes `text` to `path` as UTF-8, replacing the file.
pub fn write_text(path: &Path, text: &str) -> Result<(), FileError> {
	std::fs::write(path, text).map_err(|e| FileError::io(path, e))
}

/// Appends `.{extension}` to `path` if it has no extension.
pub fn with_default_extension(path: &Path, extension: &str) -> PathBuf {
	if path.extension().is_some() || extension.is_empty() {
		return path.to_path_buf();
	}
	path.with_extension(extension)
}

/// The file name shown in titles and notices.
pub fn display_name(path: &Path) -> String {
	path.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.unwrap_or_else(|| path.display().to_string())
}

use std::time::Duration;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_config_is_default() {
	let config = Config::parse("").unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(config.session_options(), SessionOptions::default());
}

#[test]
fn partial_sections_keep_defaults() {
	let config = Config::parse(
		r#"
		[notices]
		error_ms = 8000

		[snippets]
		separator = "* * *"
		"#,
	)
	.unwrap();

	let options = config.session_options();
	assert_eq!(options.error_timeout, Duration::from_millis(8000));
	assert_eq!(options.hint_timeout, Duration::from_millis(3000));
	assert_eq!(options.separator, "* * *");
	assert_eq!(options.em_dash, "—");
	assert_eq!(options.default_extension, "txt");
	assert_eq!(config.log.filter, None);
}

#[test]
fn full_config() {
	let config = Config::parse(
		r#"
		[notices]
		hint_ms = 1000
		info_ms = 2000
		error_ms = 4000

		[snippets]
		em_dash = "--"
		separator = "~~~"

		[files]
		default_extension = "md"

		[log]
		filter = "postlette_editor=trace"
		"#,
	)
	.unwrap();

	assert_eq!(config.notices.info_ms, 2000);
	assert_eq!(config.files.default_extension, "md");
	assert_eq!(config.log.filter.as_deref(), Some("postlette_editor=trace"));
	assert_eq!(config.session_options().em_dash, "--");
}

#[test]
fn unknown_keys_are_rejected() {
	assert!(matches!(Config::parse("[notices]\nhint = 5"), Err(ConfigError::Parse(_))));
	assert!(matches!(Config::parse("[theme]\nname = \"dark\""), Err(ConfigError::Parse(_))));
}

#[test]
fn wrong_types_are_rejected() {
	assert!(matches!(Config::parse("[notices]\nhint_ms = \"soon\""), Err(ConfigError::Parse(_))));
}

#[test]
fn load_from_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("config.toml");
	std::fs::write(&path, "[files]\ndefault_extension = \"text\"\n").unwrap();

	let config = Config::load(&path).unwrap();
	assert_eq!(config.files.default_extension, "text");
}

#[test]
fn missing_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("absent.toml");
	match Config::load(&path) {
		Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
		other => panic!("expected I/O error, got {other:?}"),
	}
}

#[test]
fn default_path_ends_with_app_file() {
	if let Some(path) = default_path() {
		assert!(path.ends_with("postlette/config.toml"));
	}
}

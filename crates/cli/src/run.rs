//! Subcommand execution.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, bail};
use postlette_config::Config;
use postlette_editor::{NoticeKind, SaveOutcome, Session, TextTransform};
use tracing::{info, warn};

use crate::cli::{Command, IoArgs};

/// Runs `command` and writes its result.
pub fn execute(command: Command, config: &Config) -> anyhow::Result<()> {
	match command {
		Command::Style { style, keep_lists, io } => edit(config, &io, style.transform(keep_lists)),
		Command::List { kind, io } => edit(config, &io, TextTransform::ListRewrite(kind.into())),
		Command::Count { input } => {
			let session = load(config, input.as_deref())?;
			println!("{}", session.char_count_label());
			Ok(())
		}
	}
}

/// Loads the input, applies `transform` to all of it and writes the result.
fn edit(config: &Config, io: &IoArgs, transform: TextTransform) -> anyhow::Result<()> {
	let mut session = load(config, io.input.as_deref())?;
	let ends_with_break = session.buffer().contents().ends_with('\n');
	session.buffer_mut().select_all();
	session.transform(transform);
	// List rewrites drop the final line break; restore the input's.
	if ends_with_break && !session.buffer().contents().ends_with('\n') {
		session.buffer_mut().move_to_end();
		session.insert_text("\n");
	}

	let result = match &io.output {
		Some(path) => save(&mut session, path),
		None => {
			let mut stdout = std::io::stdout().lock();
			stdout
				.write_all(session.buffer().contents().as_bytes())
				.and_then(|()| stdout.flush())
				.context("writing to stdout")
		}
	};
	report(&mut session);
	result
}

fn load(config: &Config, input: Option<&Path>) -> anyhow::Result<Session> {
	let mut session = Session::new(config.session_options());
	session.take_notices();
	match input {
		Some(path) => {
			let opened = session.open(path);
			report(&mut session);
			opened.with_context(|| format!("reading {}", path.display()))?;
		}
		None => {
			let mut text = String::new();
			std::io::stdin()
				.read_to_string(&mut text)
				.context("reading stdin")?;
			session.insert_text(&text);
			session.take_notices();
		}
	}
	Ok(session)
}

fn save(session: &mut Session, path: &Path) -> anyhow::Result<()> {
	match session.save_as(path) {
		SaveOutcome::Saved(_) => Ok(()),
		SaveOutcome::NeedsPath | SaveOutcome::Failed => bail!("could not write {}", path.display()),
	}
}

/// Logs pending session notices.
fn report(session: &mut Session) {
	for notice in session.take_notices() {
		match notice.kind {
			NoticeKind::Error => warn!("{}", notice.text),
			NoticeKind::Info | NoticeKind::Hint => info!("{}", notice.text),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::fs;
	use std::path::PathBuf;

	use postlette_editor::ListStyle;
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::cli::StyleArg;

	fn io(input: PathBuf, output: PathBuf) -> IoArgs {
		IoArgs {
			input: Some(input),
			output: Some(output),
		}
	}

	#[test]
	fn style_file_to_file() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("in.txt");
		fs::write(&input, "Hi 2u").unwrap();

		let command = Command::Style {
			style: StyleArg::Bold,
			keep_lists: false,
			io: io(input, dir.path().join("out")),
		};
		execute(command, &Config::default()).unwrap();

		let written = fs::read_to_string(dir.path().join("out.txt")).unwrap();
		assert_eq!(written, "\u{1D407}\u{1D422} \u{1D7D0}\u{1D42E}");
	}

	#[test]
	fn list_then_unstyle_round_trip() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("in.txt");
		let listed = dir.path().join("listed.txt");
		let plain = dir.path().join("plain.txt");
		fs::write(&input, "eggs\nmilk\n").unwrap();

		let list = Command::List {
			kind: crate::cli::ListArg::Numbers,
			io: io(input, listed.clone()),
		};
		execute(list, &Config::default()).unwrap();
		assert_eq!(fs::read_to_string(&listed).unwrap(), "1. eggs\n2. milk\n");

		let unstyle = Command::Style {
			style: StyleArg::Unstyle,
			keep_lists: false,
			io: io(listed, plain.clone()),
		};
		execute(unstyle, &Config::default()).unwrap();
		assert_eq!(fs::read_to_string(&plain).unwrap(), "eggs\nmilk\n");
		assert_eq!(ListStyle::from(crate::cli::ListArg::Dashes), ListStyle::Dashes);
	}

	#[test]
	fn final_break_follows_the_input() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("in.txt");
		let output = dir.path().join("out.txt");

		fs::write(&input, "a\nb").unwrap();
		let list = Command::List {
			kind: crate::cli::ListArg::Dashes,
			io: io(input.clone(), output.clone()),
		};
		execute(list, &Config::default()).unwrap();
		assert_eq!(fs::read_to_string(&output).unwrap(), "- a\n- b");

		fs::write(&input, "bold\n").unwrap();
		let bold = Command::Style {
			style: StyleArg::Bold,
			keep_lists: false,
			io: io(input, output.clone()),
		};
		execute(bold, &Config::default()).unwrap();
		assert_eq!(fs::read_to_string(&output).unwrap(), "\u{1D41B}\u{1D428}\u{1D425}\u{1D41D}\n");
	}

	#[test]
	fn configured_extension_applies_to_output() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("in.txt");
		fs::write(&input, "x").unwrap();
		let config = Config::parse("[files]\ndefault_extension = \"md\"").unwrap();

		let command = Command::Style {
			style: StyleArg::Italic,
			keep_lists: false,
			io: io(input, dir.path().join("post")),
		};
		execute(command, &config).unwrap();
		assert!(dir.path().join("post.md").is_file());
	}

	#[test]
	fn invalid_input_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("bad.txt");
		fs::write(&input, [0xC3, 0x28]).unwrap();

		let command = Command::Count { input: Some(input) };
		let err = execute(command, &Config::default()).unwrap_err();
		assert!(err.to_string().starts_with("reading "));
	}

	#[test]
	fn unwritable_output_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		let input = dir.path().join("in.txt");
		fs::write(&input, "x").unwrap();

		let command = Command::List {
			kind: crate::cli::ListArg::Bullets,
			io: io(input, dir.path().join("missing/dir/out.txt")),
		};
		assert!(execute(command, &Config::default()).is_err());
	}
}

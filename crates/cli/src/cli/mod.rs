//! CLI schema for the postlette binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use postlette_editor::{ListStyle, Style, TextTransform};


#[derive(Parser, Debug)]
#[command(name = "postlette")]
#[command(about = "Unicode bold and italic text for places that only take plain text")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file to use instead of the default location
	#[arg(long, global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Style or unstyle the whole input
	Style {
		/// Style to apply
		#[arg(value_enum)]
		style: StyleArg,

		/// With `unstyle`, leave list markers in place
		#[arg(long)]
		keep_lists: bool,

		#[command(flatten)]
		io: IoArgs,
	},
	/// Turn every input line into a list item
	List {
		/// List kind
		#[arg(value_enum)]
		kind: ListArg,

		#[command(flatten)]
		io: IoArgs,
	},
	/// Print the number of characters in the input
	Count {
		/// Input file (stdin if omitted)
		input: Option<PathBuf>,
	},
}

/// Input and output locations shared by the editing subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct IoArgs {
	/// Input file (stdin if omitted)
	pub input: Option<PathBuf>,

	/// Output file (stdout if omitted); `.txt` is added when it has no extension
	#[arg(short, long, value_name = "PATH")]
	pub output: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleArg {
	Bold,
	Italic,
	BoldItalic,
	Unstyle,
}

impl StyleArg {
	/// The transform this argument selects.
	pub fn transform(self, keep_lists: bool) -> TextTransform {
		match self {
			StyleArg::Bold => Style::Bold.into(),
			StyleArg::Italic => Style::Italic.into(),
			StyleArg::BoldItalic => Style::BoldItalic.into(),
			StyleArg::Unstyle if keep_lists => TextTransform::Unstyle,
			StyleArg::Unstyle => TextTransform::UnstyleWithLists,
		}
	}
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListArg {
	Bullets,
	Numbers,
	Dashes,
}

impl From<ListArg> for ListStyle {
	fn from(arg: ListArg) -> Self {
		match arg {
			ListArg::Bullets => ListStyle::Bullets,
			ListArg::Numbers => ListStyle::Numbers,
			ListArg::Dashes => ListStyle::Dashes,
		}
	}
}

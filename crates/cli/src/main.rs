//! Postlette command-line frontend.
//!
//! Runs the editing core over whole files or stdin: the entire input is
//! selected, transformed and written back out.

mod cli;
mod run;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use postlette_config::Config;
use tracing::debug;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "POSTLETTE_LOG";

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	let config = match &cli.config {
		Some(path) => Config::load(path).with_context(|| format!("loading config {}", path.display()))?,
		None => Config::load_default().context("loading config")?,
	};
	setup_tracing(cli.verbose, config.log.filter.as_deref());
	debug!(command = ?cli.command, "starting postlette");

	run::execute(cli.command, &config)
}

fn setup_tracing(verbose: bool, configured: Option<&str>) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| match configured {
		Some(directive) => EnvFilter::new(directive),
		None if verbose => EnvFilter::new("postlette=debug,postlette_editor=debug,info"),
		None => EnvFilter::new("info"),
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}

//! CLI runner for the social login commands
//!
//! Parses the command line, installs the log subscriber and runs the
//! requested command with a [`CommandContext`] built from the parsed flags.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::{BaseCommand, CommandContext, InstallCommand};

/// Reinhardt social login management CLI
#[derive(Debug, Parser)]
#[command(name = "reinhardt-social")]
#[command(about = "Reinhardt social login management interface", long_about = None)]
#[command(version)]
pub struct Cli {
	/// Subcommand to execute
	#[command(subcommand)]
	pub command: Commands,

	/// Verbosity level (can be repeated for more output)
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	pub verbosity: u8,
}

/// Available commands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
	/// Install package config and migrations
	Install {
		/// Overwrite any existing files
		#[arg(long)]
		force: bool,

		/// Directory the config file is published to
		#[arg(long, value_name = "DIR", default_value = "config")]
		config_dir: PathBuf,

		/// Directory the migration is published to
		#[arg(long, value_name = "DIR", default_value = "migrations")]
		migrations_dir: PathBuf,
	},
}

/// Parses `std::env::args` and runs the selected command
pub async fn execute_from_command_line() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();
	init_tracing(cli.verbosity);
	run_command(cli.command, cli.verbosity).await
}

/// Runs an already-parsed command
pub async fn run_command(
	command: Commands,
	verbosity: u8,
) -> Result<(), Box<dyn std::error::Error>> {
	match command {
		Commands::Install {
			force,
			config_dir,
			migrations_dir,
		} => execute_install(force, config_dir, migrations_dir, verbosity).await,
	}
}

async fn execute_install(
	force: bool,
	config_dir: PathBuf,
	migrations_dir: PathBuf,
	verbosity: u8,
) -> Result<(), Box<dyn std::error::Error>> {
	let mut ctx = CommandContext::default();
	ctx.set_verbosity(verbosity);

	if force {
		ctx.set_option("force".to_string(), "true".to_string());
	}
	ctx.set_option(
		"config-dir".to_string(),
		config_dir.to_string_lossy().into_owned(),
	);
	ctx.set_option(
		"migrations-dir".to_string(),
		migrations_dir.to_string_lossy().into_owned(),
	);

	let cmd = InstallCommand;
	cmd.execute(&ctx).await.map_err(|e| e.into())
}

/// Installs a stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count:
/// none is `warn`, then `info`, `debug` and `trace`. Calling this twice is a
/// no-op.
pub fn init_tracing(verbosity: u8) {
	let level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false)
		.with_writer(std::io::stderr)
		.try_init();
}

//! Command trait, option metadata and errors

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use crate::CommandContext;

/// Command errors
#[derive(Debug, Error)]
pub enum CommandError {
	/// Destination already exists and `--force` was not given
	#[error("File already exists: {}", .0.display())]
	FileExists(PathBuf),

	#[error("Invalid arguments: {0}")]
	InvalidArguments(String),

	#[error("Execution error: {0}")]
	ExecutionError(String),

	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Named option accepted by a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOption {
	pub short: Option<char>,
	pub long: String,
	pub help: String,
	/// Flags take no value
	pub takes_value: bool,
	pub default: Option<String>,
}

impl CommandOption {
	/// Boolean switch such as `--force`
	pub fn flag(short: Option<char>, long: &str, help: &str) -> Self {
		Self {
			short,
			long: long.to_string(),
			help: help.to_string(),
			takes_value: false,
			default: None,
		}
	}

	/// Option carrying a value such as `--config-dir config`
	pub fn option(short: Option<char>, long: &str, help: &str) -> Self {
		Self {
			short,
			long: long.to_string(),
			help: help.to_string(),
			takes_value: true,
			default: None,
		}
	}

	pub fn with_default(mut self, default: &str) -> Self {
		self.default = Some(default.to_string());
		self
	}
}

/// A console command
#[async_trait]
pub trait BaseCommand: Send + Sync {
	fn name(&self) -> &str;

	fn description(&self) -> &str;

	fn options(&self) -> Vec<CommandOption> {
		Vec::new()
	}

	/// Value of `long` in `ctx`, falling back to the option's declared default
	fn option_or_default(&self, ctx: &CommandContext, long: &str) -> Option<String> {
		ctx.option(long).cloned().or_else(|| {
			self.options()
				.into_iter()
				.find(|option| option.long == long)
				.and_then(|option| option.default)
		})
	}

	async fn execute(&self, ctx: &CommandContext) -> CommandResult<()>;
}

//! `install` command: publishes the configuration file and identities migration

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::embedded_templates::{CONFIG_TEMPLATE, MIGRATION_TEMPLATE, TemplateAssets};
use crate::{BaseCommand, CommandContext, CommandError, CommandOption, CommandResult};

/// Name of the published configuration file
pub const CONFIG_FILE_NAME: &str = "social_auth.toml";

/// Migration name passed to the [`MigrationCreator`]
pub const MIGRATION_NAME: &str = "create_oauth_identities_table";

const ALREADY_INSTALLED: &str =
	"It looks like this package has already been installed. Use --force to override.";

const INSTALLED: &str = "Package configuration and migrations installed!";

/// Chooses where a new migration file goes
pub trait MigrationCreator: Send + Sync {
	/// Path for a new migration called `name` inside `directory`
	fn create(&self, name: &str, directory: &Path) -> PathBuf;
}

/// Names migrations `<YYYY_MM_DD_HHMMSS>_<name>.sql` using UTC time
#[derive(Debug, Clone, Default)]
pub struct TimestampMigrationCreator {
	fixed: Option<DateTime<Utc>>,
}

impl TimestampMigrationCreator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Always stamps migrations with `timestamp`
	pub fn at(timestamp: DateTime<Utc>) -> Self {
		Self {
			fixed: Some(timestamp),
		}
	}
}

impl MigrationCreator for TimestampMigrationCreator {
	fn create(&self, name: &str, directory: &Path) -> PathBuf {
		let timestamp = self.fixed.unwrap_or_else(Utc::now);
		directory.join(format!("{}_{}.sql", timestamp.format("%Y_%m_%d_%H%M%S"), name))
	}
}

/// Source of a published file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateFile {
	/// File bundled into the binary
	Embedded(&'static str),
	/// File on disk
	Path(PathBuf),
}

impl TemplateFile {
	fn contents(&self) -> CommandResult<Cow<'static, [u8]>> {
		match self {
			TemplateFile::Embedded(name) => TemplateAssets::get(name)
				.map(|file| file.data)
				.ok_or_else(|| {
					CommandError::ExecutionError(format!("missing bundled template: {}", name))
				}),
			TemplateFile::Path(path) => Ok(Cow::Owned(fs::read(path)?)),
		}
	}
}

/// Copies the bundled files into a host application
pub struct Installer {
	config_dir: PathBuf,
	migrations_dir: PathBuf,
	force: bool,
	creator: Box<dyn MigrationCreator>,
}

impl Installer {
	pub fn new(config_dir: impl Into<PathBuf>, migrations_dir: impl Into<PathBuf>) -> Self {
		Self {
			config_dir: config_dir.into(),
			migrations_dir: migrations_dir.into(),
			force: false,
			creator: Box::new(TimestampMigrationCreator::new()),
		}
	}

	/// Overwrite existing files
	pub fn force(mut self, force: bool) -> Self {
		self.force = force;
		self
	}

	pub fn with_migration_creator(mut self, creator: impl MigrationCreator + 'static) -> Self {
		self.creator = Box::new(creator);
		self
	}

	/// Publishes the config file then the migration
	///
	/// An existing destination is reported rather than returned as an error,
	/// and the closing notice is printed either way. Other failures propagate.
	pub fn handle(&self, ctx: &CommandContext) -> CommandResult<()> {
		match self.publish_config(ctx).and_then(|_| self.publish_migrations(ctx)) {
			Ok(_) => {}
			Err(CommandError::FileExists(path)) => {
				tracing::warn!(path = %path.display(), "install target already exists");
				ctx.error(ALREADY_INSTALLED);
			}
			Err(e) => return Err(e),
		}

		ctx.success(INSTALLED);
		Ok(())
	}

	/// Writes the bundled config to `<config_dir>/social_auth.toml`
	pub fn publish_config(&self, ctx: &CommandContext) -> CommandResult<PathBuf> {
		let to = self.config_dir.join(CONFIG_FILE_NAME);
		self.publish_file(&TemplateFile::Embedded(CONFIG_TEMPLATE), &to)?;
		ctx.info("Configuration published.");
		Ok(to)
	}

	/// Writes the bundled migration stub under a timestamped name
	///
	/// A migration from an earlier install blocks publishing unless forced, in
	/// which case that file is overwritten instead of adding a second one.
	pub fn publish_migrations(&self, ctx: &CommandContext) -> CommandResult<PathBuf> {
		let to = match self.existing_migration()? {
			Some(existing) if !self.force => return Err(CommandError::FileExists(existing)),
			Some(existing) => existing,
			None => self.creator.create(MIGRATION_NAME, &self.migrations_dir),
		};

		self.publish_file(&TemplateFile::Embedded(MIGRATION_TEMPLATE), &to)?;
		ctx.verbose(&format!("Migration written to {}", to.display()));
		Ok(to)
	}

	/// Copies `from` to `to`, refusing to replace an existing file unless forced
	pub fn publish_file(&self, from: &TemplateFile, to: &Path) -> CommandResult<()> {
		if to.exists() && !self.force {
			return Err(CommandError::FileExists(to.to_path_buf()));
		}

		let contents = from.contents()?;
		if let Some(parent) = to.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent)?;
		}
		fs::write(to, contents)?;

		tracing::debug!(path = %to.display(), "file published");
		Ok(())
	}

	fn existing_migration(&self) -> CommandResult<Option<PathBuf>> {
		let suffix = format!("_{}.sql", MIGRATION_NAME);
		let entries = match fs::read_dir(&self.migrations_dir) {
			Ok(entries) => entries,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
			Err(e) => return Err(e.into()),
		};

		let mut matches = Vec::new();
		for entry in entries {
			let path = entry?.path();
			let is_match = path
				.file_name()
				.and_then(|name| name.to_str())
				.is_some_and(|name| name.ends_with(&suffix));
			if is_match && path.is_file() {
				matches.push(path);
			}
		}
		matches.sort();
		Ok(matches.pop())
	}
}

/// Install package config and migrations
pub struct InstallCommand;

#[async_trait]
impl BaseCommand for InstallCommand {
	fn name(&self) -> &str {
		"install"
	}

	fn description(&self) -> &str {
		"Install package config and migrations"
	}

	fn options(&self) -> Vec<CommandOption> {
		vec![
			CommandOption::flag(None, "force", "Overwrite any existing files."),
			CommandOption::option(None, "config-dir", "Directory the config file is published to")
				.with_default("config"),
			CommandOption::option(
				None,
				"migrations-dir",
				"Directory the migration is published to",
			)
			.with_default("migrations"),
		]
	}

	async fn execute(&self, ctx: &CommandContext) -> CommandResult<()> {
		let config_dir = self
			.option_or_default(ctx, "config-dir")
			.ok_or_else(|| CommandError::InvalidArguments("missing --config-dir".to_string()))?;
		let migrations_dir = self
			.option_or_default(ctx, "migrations-dir")
			.ok_or_else(|| CommandError::InvalidArguments("missing --migrations-dir".to_string()))?;

		tracing::info!(
			command = self.name(),
			%config_dir,
			%migrations_dir,
			force = ctx.has_option("force"),
			"installing"
		);

		Installer::new(config_dir, migrations_dir)
			.force(ctx.has_option("force"))
			.handle(ctx)
	}
}

//! # Reinhardt Social Commands
//!
//! Console tooling for Reinhardt social login.
//!
//! The `install` command copies the bundled `social_auth.toml` into the host's
//! config directory and writes a timestamped `create_oauth_identities_table`
//! migration into its migrations directory.
//!
//! ```bash
//! reinhardt-social install
//! reinhardt-social -v install --force --config-dir settings --migrations-dir db/migrations
//! ```

pub mod base;
pub mod cli;
pub mod context;
pub mod embedded_templates;
pub mod install;

pub use base::{BaseCommand, CommandError, CommandOption, CommandResult};
pub use cli::{Cli, Commands, execute_from_command_line, init_tracing, run_command};
pub use context::CommandContext;
pub use embedded_templates::TemplateAssets;
pub use install::{
	InstallCommand, Installer, MigrationCreator, TemplateFile, TimestampMigrationCreator,
};

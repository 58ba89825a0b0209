//! Installer templates embedded into the binary at compile time

use rust_embed::RustEmbed;

/// Embedded template directory
#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct TemplateAssets;

/// Bundled configuration file
pub const CONFIG_TEMPLATE: &str = "social_auth.toml";

/// Bundled migration stub
pub const MIGRATION_TEMPLATE: &str = "create_oauth_identities_table.sql";

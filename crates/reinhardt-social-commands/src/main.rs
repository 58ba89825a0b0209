//! Reinhardt Social CLI
//!
//! ## Usage
//!
//! ```bash
//! reinhardt-social install
//! reinhardt-social install --force
//! ```

use std::process;

#[tokio::main]
async fn main() {
	if let Err(e) = reinhardt_social_commands::execute_from_command_line().await {
		eprintln!("Error: {}", e);
		process::exit(1);
	}
}

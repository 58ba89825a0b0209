//! Command execution context

use colored::Colorize;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Options and console output of a single command run
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
	pub options: HashMap<String, Vec<String>>,
	pub verbosity: u8,
	captured: Option<Arc<Mutex<Vec<String>>>>,
}

impl CommandContext {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records output lines instead of printing them
	///
	/// Lines are stored as `"[LEVEL] message"`; see [`captured_output`](Self::captured_output).
	pub fn with_captured_output(mut self) -> Self {
		self.captured = Some(Arc::new(Mutex::new(Vec::new())));
		self
	}

	/// Lines recorded so far when output capture is enabled
	pub fn captured_output(&self) -> Vec<String> {
		self.captured
			.as_ref()
			.map(|lines| lines.lock().clone())
			.unwrap_or_default()
	}

	pub fn option(&self, key: &str) -> Option<&String> {
		self.options.get(key).and_then(|v| v.first())
	}

	pub fn has_option(&self, key: &str) -> bool {
		self.options.contains_key(key)
	}

	fn emit(&self, level: &str, message: &str, styled: String, to_stderr: bool) {
		if let Some(lines) = &self.captured {
			lines.lock().push(format!("[{}] {}", level, message));
			return;
		}
		if to_stderr {
			eprintln!("{}", styled);
		} else {
			println!("{}", styled);
		}
	}

	pub fn info(&self, message: &str) {
		self.emit("INFO", message, message.green().to_string(), false);
	}

	pub fn success(&self, message: &str) {
		self.emit("SUCCESS", message, message.green().bold().to_string(), false);
	}

	pub fn error(&self, message: &str) {
		self.emit("ERROR", message, message.red().bold().to_string(), true);
	}

	/// Printed only with `-v` or higher
	pub fn verbose(&self, message: &str) {
		if self.verbosity > 0 {
			self.emit("VERBOSE", message, message.dimmed().to_string(), false);
		}
	}

	pub fn set_option(&mut self, key: String, value: String) {
		self.options.insert(key, vec![value]);
	}

	/// Set the verbosity level
	pub fn set_verbosity(&mut self, level: u8) {
		self.verbosity = level;
	}
}

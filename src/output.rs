//! Output formatting for human and JSON modes
//!
//! Human output is a status report on stderr so it never mixes with data
//! piped from stdout. JSON output goes to stdout.

use serde::Serialize;

use crate::converter::ConvertSummary;
use crate::error::ConvertError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl ConvertSummary {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        eprintln!(
            "Converted {} domain(s) -> {}",
            self.written,
            self.output.display()
        );
        if self.valid_lines != self.written {
            eprintln!(
                "  {} valid line(s), {} duplicate(s) removed",
                self.valid_lines,
                self.valid_lines - self.written
            );
        }
        if !self.skipped.is_empty() {
            eprintln!("  {} invalid line(s) skipped", self.skipped.len());
        }
        if let Some(first) = &self.first_rule {
            eprintln!("  First rule: {first}");
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Serializable error data for JSON output
#[derive(Debug, Serialize)]
pub struct ErrorData {
    /// Error code string
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl From<&ConvertError> for ErrorData {
    fn from(err: &ConvertError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

impl ConvertError {
    /// Render the error based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => {
                let body = serde_json::json!({ "error": ErrorData::from(self) });
                println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
            },
        }
    }

    fn render_human(&self) {
        eprintln!("error: {self}");
        match self {
            Self::InputNotFound { cwd, listing, .. } => {
                eprintln!("  Current directory: {}", cwd.display());
                if listing.is_empty() {
                    eprintln!("  Directory contains no files");
                } else {
                    eprintln!("  Files: {}", listing.join(", "));
                }
            },
            Self::NoValidDomains { .. } => {
                eprintln!("  Check the input format: one domain per line, e.g. example.com");
            },
            _ => {},
        }
    }
}

//! CLI layer for domain-ruleset
//!
//! - [`app`] - CLI definitions, logging setup and exit codes

pub mod app;

// Re-export main entry point
pub use app::run;

//! Conversion errors and their exit codes

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a conversion
///
/// Invalid lines are not errors; they are counted in the normalize report and
/// only surface as [`ConvertError::NoValidDomains`] when nothing else is left.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input path does not exist
    #[error("input file does not exist: {}", path.display())]
    InputNotFound {
        /// Path that was looked up
        path: PathBuf,
        /// Working directory at the time of the lookup
        cwd: PathBuf,
        /// Regular files found in `cwd`, sorted by name
        listing: Vec<String>,
    },

    /// Input exists but could not be read as UTF-8 text
    #[error("failed to read input file {}: {source}", path.display())]
    InputUnreadable {
        /// Input path
        path: PathBuf,
        /// Underlying I/O or decoding error
        #[source]
        source: std::io::Error,
    },

    /// Every line was blank, a comment, or invalid
    #[error("no valid domains found ({skipped} invalid line(s) skipped)")]
    NoValidDomains {
        /// Number of lines rejected by the grammar
        skipped: usize,
    },

    /// Destination could not be created or written
    #[error("failed to write output file {}: {source}", path.display())]
    OutputWriteFailed {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be loaded
    #[error("invalid config file {}: {message}", path.display())]
    Config {
        /// Config file path
        path: PathBuf,
        /// What went wrong
        message: String,
    },
}

impl ConvertError {
    /// Process exit code for this error
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InputNotFound { .. } => 3,
            Self::InputUnreadable { .. } => 4,
            Self::NoValidDomains { .. } => 5,
            Self::OutputWriteFailed { .. } => 6,
            Self::Config { .. } => 7,
        }
    }

    /// Stable machine-readable error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InputNotFound { .. } => "INPUT_NOT_FOUND",
            Self::InputUnreadable { .. } => "INPUT_UNREADABLE",
            Self::NoValidDomains { .. } => "NO_VALID_DOMAINS",
            Self::OutputWriteFailed { .. } => "OUTPUT_WRITE_FAILED",
            Self::Config { .. } => "CONFIG_INVALID",
        }
    }
}

/// Result alias for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

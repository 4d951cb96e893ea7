//! Configuration management
//!
//! Settings come from three layers, lowest precedence first:
//!
//! 1. Built-in defaults (`domain.txt` in, `rules.yaml` out, subdomain scope)
//! 2. A TOML config file, `.domain-ruleset.toml` in the working directory or
//!    an explicit `--config` path
//! 3. Command-line flags
//!
//! ```toml
//! input = "lists/domain.txt"
//! output = "rules.yaml"
//! exact = false
//! wildcard = "strip"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::converter::ConvertOptions;
use crate::error::{ConvertError, Result};
use crate::normalizer::{NormalizeOptions, WildcardMode};

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = ".domain-ruleset.toml";

/// Default input path
pub const DEFAULT_INPUT: &str = "domain.txt";

/// Default output path
pub const DEFAULT_OUTPUT: &str = "rules.yaml";

/// One layer of settings; unset fields fall through to the layer below
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    /// Input domain list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,
    /// Output YAML path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Exact-match mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact: Option<bool>,
    /// Wildcard handling in exact-match mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcard: Option<WildcardMode>,
}

impl ConfigLayer {
    /// Parse a layer from TOML text
    pub fn from_toml(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConvertError::Config {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })
    }

    /// Load a layer from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConvertError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(path, &content)
    }

    /// Find the config file to use
    ///
    /// An explicit path must exist. Without one, [`CONFIG_FILE`] in `dir` is
    /// used when present.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Option<Self>> {
        if let Some(path) = explicit {
            return Self::load(path).map(Some);
        }

        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            log::debug!("Using config file {}", path.display());
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Stack `self` on top of `lower`
    #[must_use]
    pub fn over(self, lower: Self) -> Self {
        Self {
            input: self.input.or(lower.input),
            output: self.output.or(lower.output),
            exact: self.exact.or(lower.exact),
            wildcard: self.wildcard.or(lower.wildcard),
        }
    }

    /// Fill remaining gaps with defaults
    #[must_use]
    pub fn resolve(self) -> ConvertOptions {
        ConvertOptions {
            input: self.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            output: self.output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            normalize: NormalizeOptions {
                exact: self.exact.unwrap_or(false),
                wildcard: self.wildcard.unwrap_or_default(),
            },
        }
    }
}

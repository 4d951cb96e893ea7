//! File-level conversion
//!
//! Reads a domain list, normalizes it and writes the rule-set YAML. The
//! destination is only touched once the whole document is ready, and the
//! write goes through a temp file in the same directory so readers never see
//! a partial file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::error::{ConvertError, Result};
use crate::normalizer::{self, NormalizeOptions, SkippedLine};

/// What to convert and how
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Input domain list
    pub input: PathBuf,
    /// Output YAML path
    pub output: PathBuf,
    /// Token rendering options
    pub normalize: NormalizeOptions,
}

/// Result of a successful conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConvertSummary {
    /// Input path
    pub input: PathBuf,
    /// Output path
    pub output: PathBuf,
    /// Unique rules written
    pub written: usize,
    /// Lines accepted by the grammar, duplicates included
    pub valid_lines: usize,
    /// Lines rejected by the grammar
    pub skipped: Vec<SkippedLine>,
    /// First rule in the document
    pub first_rule: Option<String>,
}

/// Convert `options.input` into `options.output`
pub fn convert(options: &ConvertOptions) -> Result<ConvertSummary> {
    let content = read_input(&options.input)?;
    let report = normalizer::normalize(&content, options.normalize)?;

    write_atomic(&options.output, &report.rules.to_yaml())?;
    log::debug!("Wrote {} rule(s) to {}", report.rules.len(), options.output.display());

    Ok(ConvertSummary {
        input: options.input.clone(),
        output: options.output.clone(),
        written: report.rules.len(),
        valid_lines: report.valid_lines,
        first_rule: report.rules.first().map(String::from),
        skipped: report.skipped,
    })
}

/// Read the input list as UTF-8
pub fn read_input(path: &Path) -> Result<String> {
    if !path.exists() {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let listing = list_files(&cwd);
        return Err(ConvertError::InputNotFound {
            path: path.to_path_buf(),
            cwd,
            listing,
        });
    }

    log::debug!("Reading {}", path.display());
    fs::read_to_string(path).map_err(|source| ConvertError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `content` in one step
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let fail = |source| ConvertError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
    // Temp files are created owner-only; keep the destination's mode instead
    let permissions = match fs::metadata(path) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    };
    if let Some(permissions) = permissions {
        tmp.as_file().set_permissions(permissions).map_err(fail)?;
    }
    tmp.write_all(content.as_bytes()).map_err(fail)?;
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|e| fail(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
const fn default_permissions() -> Option<fs::Permissions> {
    None
}

/// Names of regular files directly inside `dir`, sorted
fn list_files(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect()
}

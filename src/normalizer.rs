//! Domain list normalization
//!
//! Turns the text of a domain list into a [`RuleSet`]. Each line is cleaned,
//! validated against the domain grammar and rendered with the configured
//! scope; lines that fail validation are recorded and skipped.
//!
//! # Examples
//!
//! ```
//! use domain_ruleset::normalizer::{NormalizeOptions, normalize};
//!
//! let input = "example.com\n*.foo.com\n# comment\n\nbad..domain\n";
//! let report = normalize(input, NormalizeOptions::default()).unwrap();
//!
//! let tokens: Vec<_> = report.rules.iter().collect();
//! assert_eq!(tokens, vec!["+.example.com", "+.foo.com"]);
//! assert_eq!(report.skipped.len(), 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Candidate, Scope, clean_line};
use crate::error::{ConvertError, Result};
use crate::ruleset::RuleSet;

/// Skipped lines logged individually before switching to a summary
pub const MAX_REPORTED_SKIPS: usize = 5;

/// Skipped line text is cut to this many characters
const SKIPPED_TEXT_LIMIT: usize = 50;

/// How `*.` lines are scoped in exact-match mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WildcardMode {
    /// Treat `*.foo.com` exactly like `foo.com`
    #[default]
    Strip,
    /// Keep subdomain scope for `*.foo.com` even in exact-match mode
    Preserve,
}

impl fmt::Display for WildcardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strip => write!(f, "strip"),
            Self::Preserve => write!(f, "preserve"),
        }
    }
}

impl std::str::FromStr for WildcardMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strip" => Ok(Self::Strip),
            "preserve" => Ok(Self::Preserve),
            _ => Err(format!("invalid wildcard mode '{s}' (expected strip or preserve)")),
        }
    }
}

/// Options controlling token rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Emit bare domains without the subdomain prefix
    pub exact: bool,
    /// Wildcard handling in exact-match mode
    pub wildcard: WildcardMode,
}

impl NormalizeOptions {
    /// Scope used for a given candidate
    #[must_use]
    pub const fn scope_for(&self, candidate: &Candidate) -> Scope {
        if !self.exact {
            return Scope::Subdomains;
        }
        match self.wildcard {
            WildcardMode::Preserve if candidate.is_wildcard() => Scope::Subdomains,
            _ => Scope::Exact,
        }
    }
}

/// A line rejected by the domain grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 1-based line number
    pub line: usize,
    /// Cleaned line text, truncated
    pub text: String,
}

/// Outcome of a successful normalization
#[derive(Debug, Clone)]
pub struct Normalized {
    /// Sorted unique tokens
    pub rules: RuleSet,
    /// Lines accepted by the grammar, duplicates included
    pub valid_lines: usize,
    /// Every rejected line, in input order
    pub skipped: Vec<SkippedLine>,
}

/// Normalize the text of a domain list
///
/// Fails with [`ConvertError::NoValidDomains`] when no line survives.
pub fn normalize(input: &str, options: NormalizeOptions) -> Result<Normalized> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);

    let mut rules = RuleSet::new();
    let mut valid_lines = 0;
    let mut skipped = Vec::new();

    for (idx, raw) in split_lines(input).enumerate() {
        let line_num = idx + 1;
        let Some(text) = clean_line(raw) else {
            continue;
        };

        match Candidate::parse(text) {
            Some(candidate) => {
                valid_lines += 1;
                rules.insert(candidate.token(options.scope_for(&candidate)));
            },
            None => {
                let text: String = text.chars().take(SKIPPED_TEXT_LIMIT).collect();
                if skipped.len() < MAX_REPORTED_SKIPS {
                    log::warn!("Skipping invalid line #{line_num}: {text}");
                }
                skipped.push(SkippedLine {
                    line: line_num,
                    text,
                });
            },
        }
    }

    if skipped.len() > MAX_REPORTED_SKIPS {
        log::warn!(
            "Skipped {} invalid line(s) in total (only the first {MAX_REPORTED_SKIPS} shown)",
            skipped.len()
        );
    }

    if rules.is_empty() {
        return Err(ConvertError::NoValidDomains {
            skipped: skipped.len(),
        });
    }

    log::debug!("Normalized {valid_lines} valid line(s) into {} rule(s)", rules.len());

    Ok(Normalized {
        rules,
        valid_lines,
        skipped,
    })
}

/// Split on `\r\n`, `\n` or a lone `\r`, without a trailing empty line
fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(pos) = rest.find(['\r', '\n']) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..pos];
        let break_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + break_len..];
        Some(line)
    })
}

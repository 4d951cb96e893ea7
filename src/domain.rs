//! Domain grammar and line cleaning
//!
//! A raw input line goes through three steps before it becomes a rule token:
//!
//! 1. [`clean_line`] drops blanks and comments and strips trailing junk
//! 2. [`Candidate::parse`] validates the text against the domain grammar
//! 3. [`Candidate::token`] renders it with the requested [`Scope`]
//!
//! # Examples
//!
//! ```
//! use domain_ruleset::domain::{Candidate, Scope, clean_line};
//!
//! let text = clean_line("  *.example.com;, ").unwrap();
//! let candidate = Candidate::parse(text).unwrap();
//! assert!(candidate.is_wildcard());
//! assert_eq!(candidate.token(Scope::Subdomains), "+.example.com");
//! assert_eq!(candidate.token(Scope::Exact), "example.com");
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Prefix marking a token as "this domain and all of its subdomains"
pub const SUBDOMAIN_PREFIX: &str = "+.";

/// Optional `*.`, dot-terminated labels, then an alphabetic TLD
const DOMAIN_PATTERN: &str =
    r"^(\*\.)?([a-zA-Z0-9]([a-zA-Z0-9\-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,}$";

static DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DOMAIN_PATTERN).expect("domain pattern compiles"));

/// Matching scope of an emitted token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Match the domain and every subdomain (`+.example.com`)
    #[default]
    Subdomains,
    /// Match the bare domain only (`example.com`)
    Exact,
}

impl Scope {
    /// Prefix prepended to the bare domain for this scope
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Subdomains => SUBDOMAIN_PREFIX,
            Self::Exact => "",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subdomains => write!(f, "subdomains"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

/// Clean a raw input line
///
/// Returns `None` for blank lines and for `#` / `//` comments. Otherwise the
/// line is trimmed and any trailing run of commas, semicolons and whitespace
/// is removed.
#[must_use]
pub fn clean_line(raw: &str) -> Option<&str> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
        return None;
    }
    Some(line.trim_end_matches(|c: char| c == ',' || c == ';' || c.is_whitespace()))
}

/// Check `text` against the domain grammar
#[must_use]
pub fn is_valid_domain(text: &str) -> bool {
    DOMAIN_RE.is_match(text)
}

/// A line that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    bare: String,
    wildcard: bool,
}

impl Candidate {
    /// Validate `text` and strip its wildcard marker
    ///
    /// Returns `None` when the text does not match the domain grammar.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        if !is_valid_domain(text) {
            return None;
        }
        let bare = text.trim_start_matches(['*', '.']);
        Some(Self {
            bare: bare.to_string(),
            wildcard: bare.len() != text.len(),
        })
    }

    /// The domain without any wildcard marker
    #[must_use]
    pub fn bare(&self) -> &str {
        &self.bare
    }

    /// Whether the line was written as `*.domain`
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Render the rule token for `scope`
    #[must_use]
    pub fn token(&self, scope: Scope) -> String {
        format!("{}{}", scope.prefix(), self.bare)
    }
}

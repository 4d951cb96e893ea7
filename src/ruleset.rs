//! Rule-set document
//!
//! A [`RuleSet`] is the sorted, de-duplicated list of rule tokens that ends up
//! under the `payload` key of the output YAML.

use std::collections::BTreeSet;
use std::fmt::Write as _;

/// Top-level key of the rule-set document
pub const PAYLOAD_KEY: &str = "payload";

/// Sorted set of rule tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    tokens: BTreeSet<String>,
}

impl RuleSet {
    /// Create an empty rule set
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tokens: BTreeSet::new(),
        }
    }

    /// Build a rule set from tokens, dropping duplicates
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Insert a token, returning `false` if it was already present
    pub fn insert(&mut self, token: impl Into<String>) -> bool {
        self.tokens.insert(token.into())
    }

    /// Number of unique tokens
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the set holds no tokens
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate tokens in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// The lowest token, if any
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// Render the document as YAML
    ///
    /// ```text
    /// payload:
    ///   - '+.example.com'
    ///   - '+.foo.com'
    /// ```
    #[must_use]
    pub fn to_yaml(&self) -> String {
        let mut out = format!("{PAYLOAD_KEY}:\n");
        for token in &self.tokens {
            // Writing to a String cannot fail
            let _ = writeln!(out, "  - '{}'", token.replace('\'', "''"));
        }
        out
    }
}

impl<S: Into<String>> FromIterator<S> for RuleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

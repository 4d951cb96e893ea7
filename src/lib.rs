//! domain-ruleset - Convert plaintext domain lists into rule-set payload YAML
//!
//! This library validates, cleans, de-duplicates and sorts domain lists and
//! renders them as the `payload` document consumed by Clash.Meta rule-set
//! compilation.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod converter;
pub mod domain;
pub mod error;
pub mod normalizer;
pub mod output;
pub mod ruleset;

pub use converter::{ConvertOptions, ConvertSummary, convert};
pub use error::ConvertError;

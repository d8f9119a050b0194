//! Error types for Feedtext operations.
//!
//! This module defines the main error type [`FeedtextError`] which represents
//! all possible errors that can occur while loading custom conversion rules
//! and driving the library from the command line.
//!
//! The classifier and converter APIs themselves are total: malformed JSON,
//! unknown language hints, and unknown conversion modes all degrade to a
//! deterministic fallback instead of an error.
//!
//! # Example
//!
//! ```rust
//! use feedtext_core::{FeedtextError, Result, parse_rules_json};
//!
//! fn load_rules(json: &str) -> Result<usize> {
//!     let rules = parse_rules_json(json)?;
//!     Ok(rules.len())
//! }
//!
//! assert!(matches!(load_rules("not json"), Err(FeedtextError::RulesParse(_))));
//! ```

use thiserror::Error;

/// Main error type for feedtext operations.
///
/// This enum represents all possible errors that can occur when parsing
/// persisted custom-rule files and when strict mode parsing is requested
/// (the CLI refuses typos rather than silently disabling conversion).
#[derive(Error, Debug)]
pub enum FeedtextError {
    /// Custom conversion rules could not be parsed.
    ///
    /// Returned when a rules file is not a JSON array of `{from, to}` objects.
    #[error("Failed to parse custom conversion rules: {0}")]
    RulesParse(String),

    /// Unknown conversion mode label.
    ///
    /// Returned by the strict `FromStr` parser. Library callers reading
    /// persisted preferences should use the lenient
    /// [`ConversionMode::from_label`](crate::ConversionMode::from_label)
    /// instead, which maps unknown labels to `Off`.
    #[error("Unknown conversion mode: {0} (valid: off, s2t, s2tw, s2hk, t2s, t2tw, t2hk)")]
    UnknownMode(String),
}

/// Result type alias for FeedtextError.
///
/// This is a convenience alias for `std::result::Result<T, FeedtextError>`.
pub type Result<T> = std::result::Result<T, FeedtextError>;

//! Lookup error types

use thiserror::Error;

/// Errors returned by [`FuzzyEngine::lookup`](super::FuzzyEngine::lookup).
///
/// "No match" is not an error; it is [`MatchKind::NotFound`](super::MatchKind::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Query is empty or whitespace-only
    #[error("invalid query: name must not be empty")]
    InvalidQuery,
}

/// Result type for lookups
pub type Result<T> = std::result::Result<T, LookupError>;

//! Fuzzy Matching Engine
//!
//! Resolves a free-form name query against a [`Directory`](crate::directory::Directory)
//! in three short-circuiting stages:
//!
//! 1. Exact match on the normalized (trimmed, lowercased) name
//! 2. Partial match: the query is, or is contained in, one whitespace-separated
//!    name part (unique hit = found, several = ambiguous)
//! 3. Fuzzy scoring, per record:
//!    `0.4 * bigram cosine + 0.3 * sequence ratio + 0.3 * best part sequence ratio`,
//!    kept at >= 0.4, auto-accepted at >= 0.85
//!
//! # Example
//!
//! ```rust
//! use staffdex_core::directory::{Directory, PersonRecord};
//! use staffdex_core::fuzzy::{FuzzyEngine, MatchKind};
//!
//! let directory = Directory::from_records(vec![
//!     PersonRecord::new("Alice Smith", "alice@example.com", "Engineer", "Platform", 120_000),
//!     PersonRecord::new("Alice Jones", "ajones@example.com", "Account Executive", "Sales", 95_000),
//! ]);
//! let engine = FuzzyEngine::build(directory);
//!
//! let result = engine.lookup("alice", 3).unwrap();
//! assert_eq!(result.kind(), MatchKind::PartialAmbiguous);
//! assert_eq!(result.suggestions().len(), 2);
//! ```

mod engine;
mod error;
mod result;
pub mod similarity;

pub use engine::{EngineConfig, FuzzyEngine};
pub use error::{LookupError, Result};
pub use result::{MatchKind, MatchOutcome, MatchResult, MatchType, Suggestion};

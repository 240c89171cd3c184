//! staffdex core
//!
//! In-memory people directory and the fuzzy name lookup engine built on it.
//!
//! A caller loads a [`Directory`] once at startup, builds a [`FuzzyEngine`]
//! from it once, and then shares the engine (read-only) for any number of
//! `lookup` calls. Results only ever carry [`PublicPersonView`]s; compensation
//! data never leaves the directory.
//!
//! # Features
//!
//! - `parallel` - Score large directories in parallel via rayon
//!
//! # Example
//!
//! ```rust
//! use staffdex_core::{Directory, FuzzyEngine, MatchKind};
//!
//! let directory = Directory::from_json_str(
//!     r#"[{"name": "Alice Smith", "email": "alice@example.com",
//!          "role": "Engineer", "department": "Platform", "compensation": 120000}]"#,
//! )
//! .unwrap();
//! let engine = FuzzyEngine::build(directory);
//!
//! let result = engine.lookup("alice smith", 3).unwrap();
//! assert_eq!(result.kind(), MatchKind::Exact);
//! assert_eq!(result.found().unwrap().email, "alice@example.com");
//! ```

pub mod directory;
pub mod fuzzy;

// Re-export main types at crate root
pub use directory::{Directory, LoadError, PersonRecord, PublicPersonView};
pub use fuzzy::{
    EngineConfig, FuzzyEngine, LookupError, MatchKind, MatchOutcome, MatchResult, MatchType,
    Suggestion,
};

//! FuzzyEngine - staged name lookup over a fixed directory

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use ahash::{AHashMap, AHashSet, AHasher};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::error::{LookupError, Result};
use super::result::{MatchResult, Suggestion};
use super::similarity::{char_ngrams, normalize, sequence_ratio, set_cosine};
use crate::directory::{Directory, PersonRecord};

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum combined score for a record to be kept in Stage C
    pub fuzzy_threshold: f64,
    /// Top score at or above which Stage C accepts the best record as found
    pub high_confidence_threshold: f64,
    /// Weight of bigram cosine similarity against the full name
    pub cosine_weight: f64,
    /// Weight of the sequence ratio against the full name
    pub sequence_weight: f64,
    /// Weight of the best sequence ratio against a single name part
    pub part_weight: f64,
    /// `top_k` used by [`FuzzyEngine::lookup_default`]
    pub default_top_k: usize,
    /// Directory size at which Stage C scores records in parallel (`parallel` feature)
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.4,
            high_confidence_threshold: 0.85,
            cosine_weight: 0.4,
            sequence_weight: 0.3,
            part_weight: 0.3,
            default_top_k: 3,
            parallel_threshold: 1000,
        }
    }
}

/// Read-only lookup engine over an owned [`Directory`].
///
/// All state is computed in [`FuzzyEngine::build`] and never mutated
/// afterwards, so one engine can be shared (e.g. behind an `Arc`) by any
/// number of concurrent callers. Reloading a directory means building a new
/// engine.
pub struct FuzzyEngine {
    directory: Directory,
    // Normalized name per record, in directory order
    names_lower: Vec<String>,
    // One n-gram set per distinct normalized name
    ngrams: AHashMap<String, AHashSet<String>>,
    index_hash: String,
    config: EngineConfig,
}

impl FuzzyEngine {
    /// Build the engine and its n-gram index with default configuration
    pub fn build(directory: Directory) -> Self {
        Self::with_config(directory, EngineConfig::default())
    }

    /// Build with custom configuration
    pub fn with_config(directory: Directory, config: EngineConfig) -> Self {
        let names_lower: Vec<String> = directory
            .records()
            .iter()
            .map(|record| normalize(record.name()))
            .collect();

        let mut ngrams: AHashMap<String, AHashSet<String>> = AHashMap::new();
        for name in &names_lower {
            if !ngrams.contains_key(name) {
                ngrams.insert(name.clone(), char_ngrams(name));
            }
        }

        let index_hash = compute_hash(&names_lower);

        debug!(
            records = names_lower.len(),
            distinct_names = ngrams.len(),
            index_hash = %index_hash,
            "Built name index"
        );

        Self {
            directory,
            names_lower,
            ngrams,
            index_hash,
            config,
        }
    }

    /// Resolve `query` against the directory.
    ///
    /// Stages short-circuit in order:
    /// 1. Exact: first record whose normalized name equals the normalized query.
    ///    With duplicate names only the first occurrence is reachable here.
    /// 2. Partial: records with a name part containing the query. One hit is
    ///    found; several are returned as an ambiguous set, never fuzzy-scored.
    /// 3. Fuzzy: weighted cosine / sequence scoring, thresholded and ranked.
    ///
    /// Fuzzy ranking is a stable sort on descending score: records with equal
    /// scores keep their directory order. A `top_k` of 0 is treated as 1.
    pub fn lookup(&self, query: &str, top_k: usize) -> Result<MatchResult> {
        let query = query.trim();
        let query_lower = normalize(query);
        if query_lower.is_empty() {
            return Err(LookupError::InvalidQuery);
        }
        let top_k = top_k.max(1);

        if let Some(record) = self.exact_match(&query_lower) {
            return Ok(MatchResult::exact(record.public_view()));
        }

        match self.partial_matches(&query_lower).as_slice() {
            [] => {}
            [record] => return Ok(MatchResult::partial_unique(record.public_view())),
            records => {
                let suggestions = records
                    .iter()
                    .map(|record| Suggestion::partial(record.public_view()))
                    .collect();
                return Ok(MatchResult::partial_ambiguous(query, suggestions));
            }
        }

        Ok(self.fuzzy_match(query, &query_lower, top_k))
    }

    /// [`lookup`](Self::lookup) with the configured default `top_k`
    pub fn lookup_default(&self, query: &str) -> Result<MatchResult> {
        self.lookup(query, self.config.default_top_k)
    }

    fn exact_match(&self, query_lower: &str) -> Option<&PersonRecord> {
        self.names_lower
            .iter()
            .position(|name| name == query_lower)
            .map(|idx| &self.directory.records()[idx])
    }

    fn partial_matches(&self, query_lower: &str) -> Vec<&PersonRecord> {
        self.names_lower
            .iter()
            .zip(self.directory.records())
            // Containment also covers a part equal to the query
            .filter(|(name, _)| name.split_whitespace().any(|part| part.contains(query_lower)))
            .map(|(_, record)| record)
            .collect()
    }

    fn fuzzy_match(&self, query: &str, query_lower: &str, top_k: usize) -> MatchResult {
        let query_ngrams = char_ngrams(query_lower);
        let mut scored = self.score_records(query_lower, &query_ngrams);

        // Stable: equal scores keep directory order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let records = self.directory.records();
        let mut ranked = scored
            .into_iter()
            .map(|(idx, score)| (records[idx].public_view(), score));

        match ranked.next() {
            Some((employee, score)) if score >= self.config.high_confidence_threshold => {
                let suggestions = ranked
                    .take(top_k - 1)
                    .map(|(employee, score)| Suggestion::fuzzy(employee, score))
                    .collect();
                MatchResult::fuzzy_high_confidence(employee, score, suggestions)
            }
            Some(first) => {
                let suggestions = std::iter::once(first)
                    .chain(ranked)
                    .take(top_k)
                    .map(|(employee, score)| Suggestion::fuzzy(employee, score))
                    .collect();
                MatchResult::fuzzy_suggestions(suggestions)
            }
            None => MatchResult::not_found(query),
        }
    }

    /// Score every record, keeping `(record index, score)` pairs whose raw
    /// score is at or above the fuzzy threshold, in directory order. Kept
    /// scores are rounded to 3 decimals. Parallel for large directories.
    #[cfg(feature = "parallel")]
    fn score_records(
        &self,
        query_lower: &str,
        query_ngrams: &AHashSet<String>,
    ) -> Vec<(usize, f64)> {
        if self.names_lower.len() >= self.config.parallel_threshold {
            self.names_lower
                .par_iter()
                .enumerate()
                .map(|(idx, name)| (idx, self.combined_score(query_lower, query_ngrams, name)))
                .filter(|(_, score)| *score >= self.config.fuzzy_threshold)
                .map(|(idx, score)| (idx, round_score(score)))
                .collect()
        } else {
            self.score_sequential(query_lower, query_ngrams)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_records(
        &self,
        query_lower: &str,
        query_ngrams: &AHashSet<String>,
    ) -> Vec<(usize, f64)> {
        self.score_sequential(query_lower, query_ngrams)
    }

    fn score_sequential(
        &self,
        query_lower: &str,
        query_ngrams: &AHashSet<String>,
    ) -> Vec<(usize, f64)> {
        self.names_lower
            .iter()
            .enumerate()
            .map(|(idx, name)| (idx, self.combined_score(query_lower, query_ngrams, name)))
            .filter(|(_, score)| *score >= self.config.fuzzy_threshold)
            .map(|(idx, score)| (idx, round_score(score)))
            .collect()
    }

    /// Weighted combination of the three signals (unrounded)
    fn combined_score(
        &self,
        query_lower: &str,
        query_ngrams: &AHashSet<String>,
        name_lower: &str,
    ) -> f64 {
        let cosine = self
            .ngrams
            .get(name_lower)
            .map_or(0.0, |name_ngrams| set_cosine(query_ngrams, name_ngrams));
        let sequence = sequence_ratio(query_lower, name_lower);
        let best_part = name_lower
            .split_whitespace()
            .map(|part| sequence_ratio(query_lower, part))
            .fold(0.0, f64::max);

        self.config.cosine_weight * cosine
            + self.config.sequence_weight * sequence
            + self.config.part_weight * best_part
    }

    /// The directory this engine was built from
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn record_count(&self) -> usize {
        self.names_lower.len()
    }

    /// Number of n-gram sets in the index (one per distinct normalized name)
    pub fn distinct_name_count(&self) -> usize {
        self.ngrams.len()
    }

    /// Fingerprint of the indexed names
    pub fn index_hash(&self) -> &str {
        &self.index_hash
    }
}

fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

fn compute_hash(names_lower: &[String]) -> String {
    let mut hasher = AHasher::default();
    for name in names_lower {
        name.hash(&mut hasher);
    }
    format!("{:016x}", hasher.finish())
}

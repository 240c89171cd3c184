//! Lookup outcomes

use serde::{Deserialize, Serialize, Serializer};

use crate::directory::PublicPersonView;

/// How a suggestion was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Partial,
    Fuzzy,
}

/// A ranked candidate offered alongside (or instead of) a match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub employee: PublicPersonView,
    /// 1.0 for partial matches, rounded combined score for fuzzy ones
    pub score: f64,
    pub match_type: MatchType,
}

impl Suggestion {
    pub(crate) fn partial(employee: PublicPersonView) -> Self {
        Self {
            employee,
            score: 1.0,
            match_type: MatchType::Partial,
        }
    }

    pub(crate) fn fuzzy(employee: PublicPersonView, score: f64) -> Self {
        Self {
            employee,
            score,
            match_type: MatchType::Fuzzy,
        }
    }
}

/// Discriminant of a [`MatchOutcome`], with the wire names used in JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    #[serde(rename = "partial")]
    PartialUnique,
    #[serde(rename = "multiple")]
    PartialAmbiguous,
    FuzzyHighConfidence,
    FuzzySuggestions,
    NotFound,
}

/// What a lookup resolved to. Each variant carries only the data valid for it.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// Normalized query equals a normalized name (first in directory order)
    Exact { employee: PublicPersonView },
    /// Query is one name part, or inside one, of exactly one record
    PartialUnique { employee: PublicPersonView },
    /// Query is a name part of several records; caller must disambiguate
    PartialAmbiguous { suggestions: Vec<Suggestion> },
    /// Best fuzzy score cleared the high-confidence threshold
    FuzzyHighConfidence {
        employee: PublicPersonView,
        score: f64,
        suggestions: Vec<Suggestion>,
    },
    /// Fuzzy candidates above the threshold, none confident enough
    FuzzySuggestions { suggestions: Vec<Suggestion> },
    NotFound,
}

/// Result of [`FuzzyEngine::lookup`](super::FuzzyEngine::lookup): an outcome plus
/// a message a conversational agent can read aloud.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    outcome: MatchOutcome,
    message: String,
}

impl MatchResult {
    pub(crate) fn exact(employee: PublicPersonView) -> Self {
        let message = found_message(&employee);
        Self {
            outcome: MatchOutcome::Exact { employee },
            message,
        }
    }

    pub(crate) fn partial_unique(employee: PublicPersonView) -> Self {
        let message = found_message(&employee);
        Self {
            outcome: MatchOutcome::PartialUnique { employee },
            message,
        }
    }

    pub(crate) fn partial_ambiguous(query: &str, suggestions: Vec<Suggestion>) -> Self {
        Self {
            outcome: MatchOutcome::PartialAmbiguous { suggestions },
            message: format!("Multiple employees match '{query}'. Please specify full name."),
        }
    }

    pub(crate) fn fuzzy_high_confidence(
        employee: PublicPersonView,
        score: f64,
        suggestions: Vec<Suggestion>,
    ) -> Self {
        let message = found_message(&employee);
        Self {
            outcome: MatchOutcome::FuzzyHighConfidence {
                employee,
                score,
                suggestions,
            },
            message,
        }
    }

    pub(crate) fn fuzzy_suggestions(suggestions: Vec<Suggestion>) -> Self {
        let names: Vec<&str> = suggestions
            .iter()
            .map(|s| s.employee.name.as_str())
            .collect();
        let message = format!("Did you mean: {}?", names.join(", "));
        Self {
            outcome: MatchOutcome::FuzzySuggestions { suggestions },
            message,
        }
    }

    pub(crate) fn not_found(query: &str) -> Self {
        Self {
            outcome: MatchOutcome::NotFound,
            message: format!("Employee '{query}' not found. No similar names."),
        }
    }

    pub fn kind(&self) -> MatchKind {
        match self.outcome {
            MatchOutcome::Exact { .. } => MatchKind::Exact,
            MatchOutcome::PartialUnique { .. } => MatchKind::PartialUnique,
            MatchOutcome::PartialAmbiguous { .. } => MatchKind::PartialAmbiguous,
            MatchOutcome::FuzzyHighConfidence { .. } => MatchKind::FuzzyHighConfidence,
            MatchOutcome::FuzzySuggestions { .. } => MatchKind::FuzzySuggestions,
            MatchOutcome::NotFound => MatchKind::NotFound,
        }
    }

    /// The resolved employee, for the three "found" kinds
    pub fn found(&self) -> Option<&PublicPersonView> {
        match &self.outcome {
            MatchOutcome::Exact { employee }
            | MatchOutcome::PartialUnique { employee }
            | MatchOutcome::FuzzyHighConfidence { employee, .. } => Some(employee),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        self.found().is_some()
    }

    /// Ranked suggestions; empty for exact, partial-unique and not-found outcomes
    pub fn suggestions(&self) -> &[Suggestion] {
        match &self.outcome {
            MatchOutcome::PartialAmbiguous { suggestions }
            | MatchOutcome::FuzzyHighConfidence { suggestions, .. }
            | MatchOutcome::FuzzySuggestions { suggestions } => suggestions,
            _ => &[],
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn outcome(&self) -> &MatchOutcome {
        &self.outcome
    }

    pub fn into_outcome(self) -> MatchOutcome {
        self.outcome
    }
}

fn found_message(employee: &PublicPersonView) -> String {
    format!("Found employee: {}", employee.name)
}

/// Flat JSON shape: `{found, match_type, employee, suggestions, message}`
#[derive(Serialize)]
struct MatchResultWire<'a> {
    found: bool,
    match_type: MatchKind,
    employee: Option<&'a PublicPersonView>,
    suggestions: &'a [Suggestion],
    message: &'a str,
}

impl Serialize for MatchResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatchResultWire {
            found: self.is_found(),
            match_type: self.kind(),
            employee: self.found(),
            suggestions: self.suggestions(),
            message: &self.message,
        }
        .serialize(serializer)
    }
}

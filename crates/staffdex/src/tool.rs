//! Assistant tool payloads
//!
//! A conversational agent calls the directory lookup as a tool and hands the
//! result to its language model. The model only needs a found employee, or
//! the names and departments it can offer back to the user.

use serde::Serialize;
use staffdex_core::{fuzzy, Directory, MatchResult, PublicPersonView};

/// Tool response handed to the assistant for one lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolResponse {
    Found {
        employee: PublicPersonView,
        message: String,
    },
    NotFound {
        suggestions: Vec<SuggestedName>,
        message: String,
    },
    /// Query was empty; the assistant should ask again
    InvalidQuery { message: String },
}

/// A suggestion reduced to what the assistant reads back
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestedName {
    pub name: String,
    pub department: String,
}

impl From<&MatchResult> for ToolResponse {
    fn from(result: &MatchResult) -> Self {
        let message = result.message().to_string();
        match result.found() {
            Some(employee) => ToolResponse::Found {
                employee: employee.clone(),
                message,
            },
            None => ToolResponse::NotFound {
                suggestions: result
                    .suggestions()
                    .iter()
                    .map(|s| SuggestedName {
                        name: s.employee.name.clone(),
                        department: s.employee.department.clone(),
                    })
                    .collect(),
                message,
            },
        }
    }
}

impl ToolResponse {
    pub fn from_lookup(lookup: &fuzzy::Result<MatchResult>) -> Self {
        match lookup {
            Ok(result) => result.into(),
            Err(err) => ToolResponse::InvalidQuery {
                message: err.to_string(),
            },
        }
    }
}

/// Prompt line describing the directory for an assistant's instructions
pub fn directory_context(directory: &Directory, sample: usize) -> String {
    format!(
        "Directory has {} employees: {}",
        directory.len(),
        directory.summary(sample)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use staffdex_core::{FuzzyEngine, PersonRecord};

    fn engine() -> FuzzyEngine {
        FuzzyEngine::build(Directory::from_records(vec![
            PersonRecord::new(
                "Alice Smith",
                "alice.smith@example.com",
                "Staff Engineer",
                "Platform",
                182_000,
            ),
            PersonRecord::new(
                "Alice Jones",
                "alice.jones@example.com",
                "Account Executive",
                "Sales",
                124_000,
            ),
        ]))
    }

    #[test]
    fn test_found_payload() {
        let result = engine().lookup("alice smith", 3).unwrap();
        let response = ToolResponse::from(&result);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "found",
                "employee": {
                    "name": "Alice Smith",
                    "email": "alice.smith@example.com",
                    "role": "Staff Engineer",
                    "department": "Platform"
                },
                "message": "Found employee: Alice Smith"
            })
        );
    }

    #[test]
    fn test_ambiguous_payload_lists_names_and_departments() {
        let result = engine().lookup("alice", 3).unwrap();
        let response = ToolResponse::from(&result);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "not_found",
                "suggestions": [
                    {"name": "Alice Smith", "department": "Platform"},
                    {"name": "Alice Jones", "department": "Sales"}
                ],
                "message": "Multiple employees match 'alice'. Please specify full name."
            })
        );
    }

    #[test]
    fn test_not_found_payload_has_empty_suggestions() {
        let result = engine().lookup("zzz999", 3).unwrap();
        match ToolResponse::from(&result) {
            ToolResponse::NotFound {
                suggestions,
                message,
            } => {
                assert!(suggestions.is_empty());
                assert_eq!(message, "Employee 'zzz999' not found. No similar names.");
            }
            other => panic!("expected not_found, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_query_payload() {
        let response = ToolResponse::from_lookup(&engine().lookup("  ", 3));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "status": "invalid_query",
                "message": "invalid query: name must not be empty"
            })
        );
    }

    #[test]
    fn test_directory_context() {
        let engine = engine();
        assert_eq!(
            directory_context(engine.directory(), 1),
            "Directory has 2 employees: Alice Smith... (2 total)"
        );
    }
}

//! Person records and their public projection

use std::fmt;

use serde::{Deserialize, Serialize};

/// One directory entry, exactly as loaded from the source.
///
/// The compensation figure is held here and nowhere else: the record has no
/// accessor for it, is not `Serialize`, and redacts it from `Debug`. The only
/// way record data leaves the directory is through [`PersonRecord::public_view`].
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct PersonRecord {
    name: String,
    email: String,
    role: String,
    department: String,
    #[serde(alias = "salary")]
    #[allow(dead_code)]
    compensation: i64,
}

impl PersonRecord {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
        compensation: i64,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            department: department.into(),
            compensation,
        }
    }

    /// Display name, as written in the source (not normalized)
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    /// Project the record onto the fields callers may see
    pub fn public_view(&self) -> PublicPersonView {
        PublicPersonView {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.clone(),
            department: self.department.clone(),
        }
    }
}

impl fmt::Debug for PersonRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonRecord")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("department", &self.department)
            .field("compensation", &format_args!("<redacted>"))
            .finish()
    }
}

/// Public employee information (excludes compensation)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicPersonView {
    pub name: String,
    pub email: String,
    pub role: String,
    pub department: String,
}

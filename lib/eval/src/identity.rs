//! Candidate identity fields (name and email) found by pattern search.

use crate::{EvalError, Result};
use regex::Regex;
use serde::{Serialize, Serializer};

pub const NAME_NOT_FOUND: &str = "Name not found";
pub const EMAIL_NOT_FOUND: &str = "Email not found";

/// A "Name" label followed by two capitalized words; the words are captured.
pub const NAME_PATTERN: &str = r"Name[:\s]*([A-Z][a-z]+\s[A-Z][a-z]+)";
pub const EMAIL_PATTERN: &str = r"[\w.-]+@[\w.-]+";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Identity {
    #[serde(serialize_with = "name_or_sentinel")]
    pub name: Option<String>,
    #[serde(serialize_with = "email_or_sentinel")]
    pub email: Option<String>,
}

impl Identity {
    pub fn name_or_sentinel(&self) -> &str {
        self.name.as_deref().unwrap_or(NAME_NOT_FOUND)
    }

    pub fn email_or_sentinel(&self) -> &str {
        self.email.as_deref().unwrap_or(EMAIL_NOT_FOUND)
    }
}

fn name_or_sentinel<S: Serializer>(name: &Option<String>, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(name.as_deref().unwrap_or(NAME_NOT_FOUND))
}

fn email_or_sentinel<S: Serializer>(email: &Option<String>, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_str(email.as_deref().unwrap_or(EMAIL_NOT_FOUND))
}

pub struct IdentityExtractor {
    name: Regex,
    email: Regex,
}

impl IdentityExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            name: Regex::new(NAME_PATTERN)
                .map_err(|e| EvalError::Pattern(format!("Failed to compile name regex: {e}")))?,
            email: Regex::new(EMAIL_PATTERN)
                .map_err(|e| EvalError::Pattern(format!("Failed to compile email regex: {e}")))?,
        })
    }

    /// First name match and first email match in `text`.
    pub fn extract(&self, text: &str) -> Identity {
        let name = self
            .name
            .captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());

        let email = self
            .email
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches('.'))
            .find(|e| !e.ends_with('@'))
            .map(str::to_string);

        Identity { name, email }
    }
}

impl std::fmt::Debug for IdentityExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityExtractor").finish_non_exhaustive()
    }
}

use serde::{Deserialize, Serialize};

/// A job role and its raw, space-delimited skill list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JobRole {
    #[serde(rename = "role")]
    pub title: String,
    pub skills: String,
}

impl JobRole {
    pub fn new(title: impl Into<String>, skills: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            skills: skills.into(),
        }
    }

    /// Lowercase whitespace-delimited tokens of the skill list, duplicates included.
    pub fn skill_tokens(&self) -> impl Iterator<Item = String> + '_ {
        skill_tokens(&self.skills)
    }
}

/// Splits a raw skill list the way the vocabulary does: lowercase, whitespace-delimited.
pub fn skill_tokens(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split_whitespace().map(str::to_lowercase)
}

/// Ordered, read-only sequence of job roles. Catalog order is the order
/// scores are reported in and the order ties are broken by.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    roles: Vec<JobRole>,
}

impl Catalog {
    #[must_use]
    pub fn new(roles: Vec<JobRole>) -> Self {
        Self { roles }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn roles(&self) -> &[JobRole] {
        &self.roles
    }

    pub fn role(&self, index: usize) -> Option<&JobRole> {
        self.roles.get(index)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|r| r.title.as_str())
    }

    pub fn skill_lists(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|r| r.skills.as_str())
    }
}

impl FromIterator<JobRole> for Catalog {
    fn from_iter<T: IntoIterator<Item = JobRole>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Into<String>, S: Into<String>> FromIterator<(T, S)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (T, S)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(title, skills)| JobRole::new(title, skills))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_tokens_lowercase_and_split() {
        let role = JobRole::new("Data Analyst", "Python  SQL\tExcel python");
        let tokens: Vec<String> = role.skill_tokens().collect();
        assert_eq!(tokens, vec!["python", "sql", "excel", "python"]);
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog: Catalog = [("B", "x"), ("A", "y")].into_iter().collect();
        assert_eq!(catalog.titles().collect::<Vec<_>>(), vec!["B", "A"]);
        assert_eq!(catalog.role(1).map(|r| r.skills.as_str()), Some("y"));
        assert!(catalog.role(2).is_none());
    }

    #[test]
    fn test_job_role_serde_uses_role_column() {
        let role: JobRole =
            serde_json::from_str(r#"{"role": "ML Engineer", "skills": "python statistics"}"#)
                .unwrap();
        assert_eq!(role.title, "ML Engineer");
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(json["role"], "ML Engineer");
    }
}

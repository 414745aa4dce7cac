//! Skill Extractor
//!
//! Finds vocabulary tokens that occur as whole words in free text. A word
//! starts with a letter or digit and continues with letters, digits, `+`,
//! `.` or `-`, so `c++` and `node.js` survive intact.

use crate::{Error, Result, Vocabulary};
use ahash::AHashSet;
use regex::Regex;
use std::collections::BTreeSet;

pub const TOKEN_PATTERN: &str = r"[\p{L}\p{N}][\p{L}\p{N}+.\-]*";

pub struct SkillExtractor {
    regex: Regex,
}

impl SkillExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(TOKEN_PATTERN)
                .map_err(|e| Error::Pattern(format!("Failed to compile token regex: {e}")))?,
        })
    }

    /// Lowercased word set of `text`.
    ///
    /// A word ending in `.` or `-` is also recorded without that tail, so
    /// "Python." at the end of a sentence still yields `python`.
    pub fn tokenize(&self, text: &str) -> AHashSet<String> {
        let mut words = AHashSet::new();
        for m in self.regex.find_iter(text) {
            let word = m.as_str().to_lowercase();
            let trimmed = word.trim_end_matches(|c: char| c == '.' || c == '-');
            if !trimmed.is_empty() && trimmed.len() != word.len() {
                words.insert(trimmed.to_string());
            }
            words.insert(word);
        }
        words
    }

    /// Vocabulary tokens present in `text`. Never returns anything outside the
    /// vocabulary; repeated occurrences collapse.
    pub fn extract(&self, text: &str, vocabulary: &Vocabulary) -> BTreeSet<String> {
        if text.is_empty() || vocabulary.is_empty() {
            return BTreeSet::new();
        }
        self.tokenize(text)
            .into_iter()
            .filter(|w| vocabulary.contains(w))
            .collect()
    }
}

impl std::fmt::Debug for SkillExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillExtractor")
            .field("pattern", &self.regex.as_str())
            .finish()
    }
}

/// One-shot extraction. Prefer a long-lived [`SkillExtractor`] when
/// processing many documents.
pub fn extract_skills(text: &str, vocabulary: &Vocabulary) -> Result<BTreeSet<String>> {
    Ok(SkillExtractor::new()?.extract(text, vocabulary))
}

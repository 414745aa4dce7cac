//! Vocabulary Builder
//!
//! Derives the deduplicated set of lowercase skill tokens across every job
//! role's skill list and freezes it into a fixed ordering. Tokens are kept
//! sorted, so the index assignment is deterministic across runs.

use crate::catalog::skill_tokens;
use ahash::AHashMap;
use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

/// Frozen, ordered set of skill tokens. Every presence vector is built over one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<String>,
    index: AHashMap<String, usize>,
    fingerprint: u64,
}

impl Vocabulary {
    /// Build the vocabulary from raw skill lists. Order of the lists and
    /// duplicate tokens are irrelevant. No lists, or only blank lists,
    /// yield an empty vocabulary.
    pub fn build<I, S>(skill_lists: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = skill_lists
            .into_iter()
            .flat_map(|list| skill_tokens(list.as_ref()).collect::<Vec<_>>())
            .collect();
        Self::from_sorted(unique.into_iter().collect())
    }

    fn from_sorted(tokens: Vec<String>) -> Self {
        let index = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();

        let mut hasher = DefaultHasher::new();
        tokens.hash(&mut hasher);

        Self {
            tokens,
            index,
            fingerprint: hasher.finish(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    #[inline]
    pub fn index_of(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Identifies this exact token ordering. Vectors carry it so that vectors
    /// from different snapshots are never compared.
    #[inline]
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::from_sorted(Vec::new())
    }
}

/// Convenience wrapper over [`Vocabulary::build`].
pub fn build_vocabulary<I, S>(skill_lists: I) -> Vocabulary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Vocabulary::build(skill_lists)
}

use crate::{Error, Result, Vocabulary};
use serde::{Deserialize, Serialize};

/// Fixed-length binary vector over a vocabulary: `bits[i] == 1` means
/// vocabulary token `i` is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresenceVector {
    bits: Vec<u8>,
    fingerprint: u64,
}

impl PresenceVector {
    /// All-zero vector for `vocabulary`.
    #[must_use]
    pub fn zeros(vocabulary: &Vocabulary) -> Self {
        Self {
            bits: vec![0; vocabulary.len()],
            fingerprint: vocabulary.fingerprint(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.bits.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn bits(&self) -> &[u8] {
        &self.bits
    }

    #[inline]
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    #[inline]
    pub fn count_ones(&self) -> u32 {
        self.bits.iter().map(|&b| u32::from(b)).sum()
    }

    /// True when no vocabulary token is present (including the zero-length vector).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Euclidean norm. For a binary vector this is the square root of the popcount.
    #[inline]
    pub fn norm(&self) -> f64 {
        f64::from(self.count_ones()).sqrt()
    }

    /// Fails if the two vectors were not built over the same vocabulary snapshot.
    pub fn check_compatible(&self, other: &PresenceVector) -> Result<()> {
        if self.dim() != other.dim() {
            return Err(Error::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
            });
        }
        if self.fingerprint != other.fingerprint {
            return Err(Error::VocabularyMismatch {
                expected: self.fingerprint,
                actual: other.fingerprint,
            });
        }
        Ok(())
    }

    /// Number of tokens present in both vectors.
    pub fn dot(&self, other: &PresenceVector) -> Result<u32> {
        self.check_compatible(other)?;
        Ok(self
            .bits
            .iter()
            .zip(other.bits.iter())
            .map(|(a, b)| u32::from(a & b))
            .sum())
    }

    /// Cosine similarity in [0, 1]. A zero vector on either side scores 0.
    pub fn cosine_similarity(&self, other: &PresenceVector) -> Result<f64> {
        let dot = self.dot(other)?;
        let norms = f64::from(self.count_ones()) * f64::from(other.count_ones());
        if norms == 0.0 {
            return Ok(0.0);
        }
        // sqrt of the product keeps self-similarity at exactly 1.0
        Ok((f64::from(dot) / norms.sqrt()).min(1.0))
    }
}

/// Vectorizer: one bit per vocabulary token, in vocabulary order.
///
/// Skills that are not vocabulary tokens are ignored, so the result always has
/// length `vocabulary.len()` whatever the size of `skills`.
pub fn vectorize<I, S>(skills: I, vocabulary: &Vocabulary) -> PresenceVector
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut vector = PresenceVector::zeros(vocabulary);
    for skill in skills {
        if let Some(i) = vocabulary.index_of(skill.as_ref()) {
            vector.bits[i] = 1;
        }
    }
    vector
}

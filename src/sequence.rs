//! Fibonacci sequence generation.
//!
//! [`generate`] is a pure function: every call builds a fresh [`Sequence`]
//! and nothing is cached between calls.

use crate::errors::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Largest count whose values all fit in a `u64`.
///
/// F(93) = 12200160415121876738 is the last Fibonacci number below 2^64,
/// so indices 0..=93 give 94 values.
pub const MAX_COUNT: usize = 94;

/// Count used by the command-line driver when none is given
pub const DEFAULT_COUNT: i64 = 10;

/// The leading values of the Fibonacci sequence, starting `0, 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Sequence(Vec<u64>);

impl Sequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<u64> {
        self.0.last().copied()
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.0
    }

    /// Check the seed (`0`, then `1`) and that every later value is the sum
    /// of the two before it.
    pub fn follows_recurrence(&self) -> bool {
        let seed_ok = self.0.iter().zip([0u64, 1]).all(|(value, seed)| *value == seed);
        seed_ok
            && self
                .0
                .windows(3)
                .all(|w| w[0].checked_add(w[1]) == Some(w[2]))
    }

    /// Whether `self` is a leading slice of `other`
    pub fn is_prefix_of(&self, other: &Sequence) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl AsRef<[u64]> for Sequence {
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl PartialEq<[u64]> for Sequence {
    fn eq(&self, other: &[u64]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[u64; N]> for Sequence {
    fn eq(&self, other: &[u64; N]) -> bool {
        self.0 == other
    }
}

/// Generate the first `n` Fibonacci values.
///
/// Zero and negative counts give an empty sequence. Counts above
/// [`MAX_COUNT`] fail with [`Error::Overflow`] before anything is allocated.
pub fn generate(n: i64) -> Result<Sequence> {
    if n <= 0 {
        return Ok(Sequence::default());
    }
    if n == 1 {
        return Ok(Sequence(vec![0]));
    }

    let len = usize::try_from(n)
        .ok()
        .filter(|&len| len <= MAX_COUNT)
        .ok_or(Error::Overflow {
            requested: n,
            max: MAX_COUNT,
        })?;

    let mut values = Vec::with_capacity(len);
    values.extend([0u64, 1]);
    while values.len() < len {
        // Bounded by MAX_COUNT, so the sum stays below 2^64.
        let next = values[values.len() - 1] + values[values.len() - 2];
        values.push(next);
    }

    Ok(Sequence(values))
}

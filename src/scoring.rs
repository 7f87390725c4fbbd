//! Match/mismatch scoring for aligned sequence windows.

use anyhow::{bail, Result};

use crate::search::constants::{DEFAULT_MATCH_SCORE, DEFAULT_MISMATCH_SCORE};

/// Additive match/mismatch scoring scheme.
///
/// Every match contributes `match_score` and every mismatch
/// `mismatch_score`; there is no substitution matrix and no normalization.
/// Symbols are compared as raw bytes, so anything outside the expected
/// alphabet simply scores as a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringScheme {
    pub match_score: i32,
    pub mismatch_score: i32,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH_SCORE,
            mismatch_score: DEFAULT_MISMATCH_SCORE,
        }
    }
}

impl ScoringScheme {
    pub fn new(match_score: i32, mismatch_score: i32) -> Result<Self> {
        if match_score <= 0 {
            bail!("match score must be positive, got {}", match_score);
        }
        if mismatch_score >= 0 {
            bail!("mismatch score must be negative, got {}", mismatch_score);
        }
        Ok(Self {
            match_score,
            mismatch_score,
        })
    }

    /// Score a single aligned symbol pair.
    #[inline(always)]
    pub fn score_symbol(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// Score two equal-length windows position by position.
    ///
    /// Callers own the equal-length invariant; violating it aborts.
    pub fn score_window(&self, a: &[u8], b: &[u8]) -> i32 {
        assert_eq!(a.len(), b.len(), "scored windows must have equal length");
        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| self.score_symbol(x, y))
            .sum()
    }
}

//! Cross-comparison scoring
//!
//! Before any feedback exists there is nothing to filter on, so candidates
//! are rated by mutual overlap: each candidate is compared against every
//! candidate (itself included) as a hypothetical solution, and the exact and
//! partial match counts are summed. Words built from letters the pool shares
//! heavily score high and make informative guesses.

use super::ranker::ScoredWord;
use crate::core::{MatchCounts, Word};

/// Accumulated overlap of one guess against a whole pool
#[must_use]
pub fn score_against_pool(guess: &Word, pool: &[Word]) -> MatchCounts {
    let mut counts = MatchCounts::default();
    for hypothetical in pool {
        counts.accumulate(MatchCounts::calculate(guess, hypothetical));
    }
    counts
}

/// Score every candidate against every other candidate
///
/// Returns one entry per candidate, in candidate order, carrying the summed
/// exact and partial match counts across all ordered pairs. O(n²·L) over n
/// candidates of length L.
#[must_use]
pub fn score_by_comparison(candidates: &[Word]) -> Vec<ScoredWord> {
    candidates
        .iter()
        .map(|guess| ScoredWord {
            word: guess.clone(),
            counts: score_against_pool(guess, candidates),
        })
        .collect()
}

//! Ordering of scored candidates
//!
//! Exact-position matches weigh double partial matches. The sort is stable,
//! so tied candidates keep their dictionary order.

use crate::core::{MatchCounts, Word};

/// A word paired with its accumulated match counts for one ranking pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredWord {
    pub word: Word,
    pub counts: MatchCounts,
}

/// Order scored words best-first and drop the scores
///
/// # Examples
/// ```
/// use wordle_advisor::core::{MatchCounts, Word};
/// use wordle_advisor::engine::{ScoredWord, rank};
///
/// let scored = vec![
///     ScoredWord {
///         word: Word::new("slate").unwrap(),
///         counts: MatchCounts { exact: 1, partial: 1 },
///     },
///     ScoredWord {
///         word: Word::new("crane").unwrap(),
///         counts: MatchCounts { exact: 2, partial: 0 },
///     },
/// ];
///
/// let ranked = rank(scored);
/// assert_eq!(ranked[0].text(), "crane");
/// assert_eq!(ranked[1].text(), "slate");
/// ```
#[must_use]
pub fn rank(mut scored: Vec<ScoredWord>) -> Vec<Word> {
    scored.sort_by(|a, b| b.counts.weighted().cmp(&a.counts.weighted()));
    scored.into_iter().map(|entry| entry.word).collect()
}

//! Guess ranking strategies
//!
//! The two scorers answer different questions: cross-comparison picks the
//! most informative word among the candidates themselves (the opening
//! moment), letter frequency picks the dictionary word that best splits the
//! surviving pool (the disambiguation moment). They stay separate behind this
//! trait rather than merging into one scorer.

use super::comparison::score_by_comparison;
use super::frequency::{letter_frequencies, rank_by_frequency};
use super::ranker::rank;
use crate::core::{ConstraintSet, Word};

/// A strategy for ordering guess suggestions
pub trait RankingStrategy {
    /// Rank suggestions given the full dictionary, the surviving candidates,
    /// and the constraints the survivors were filtered with
    fn rank_guesses(
        &self,
        dictionary: &[Word],
        candidates: &[Word],
        constraints: &ConstraintSet,
    ) -> Vec<Word>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyKind {
    /// Mutual-overlap scoring of the candidates themselves (default)
    CrossComparison(CrossComparisonStrategy),
    /// Undecided-letter frequency scoring over the whole dictionary
    LetterFrequency(LetterFrequencyStrategy),
}

impl RankingStrategy for StrategyKind {
    fn rank_guesses(
        &self,
        dictionary: &[Word],
        candidates: &[Word],
        constraints: &ConstraintSet,
    ) -> Vec<Word> {
        match self {
            Self::CrossComparison(s) => s.rank_guesses(dictionary, candidates, constraints),
            Self::LetterFrequency(s) => s.rank_guesses(dictionary, candidates, constraints),
        }
    }
}

impl StrategyKind {
    /// Create strategy from name string
    ///
    /// Supported names: "comparison", "frequency". Defaults to comparison if
    /// the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "frequency" | "letters" => Self::LetterFrequency(LetterFrequencyStrategy),
            _ => Self::CrossComparison(CrossComparisonStrategy),
        }
    }
}

/// Cross-comparison strategy
///
/// Rates each candidate by summed overlap against every other candidate.
/// Ignores the dictionary and constraints: the candidates are the pool.
pub struct CrossComparisonStrategy;

impl RankingStrategy for CrossComparisonStrategy {
    fn rank_guesses(
        &self,
        _dictionary: &[Word],
        candidates: &[Word],
        _constraints: &ConstraintSet,
    ) -> Vec<Word> {
        rank(score_by_comparison(candidates))
    }
}

/// Letter-frequency strategy
///
/// Tallies undecided letters across the surviving candidates and ranks the
/// whole dictionary by them, so the suggestion need not be a possible
/// solution itself.
pub struct LetterFrequencyStrategy;

impl RankingStrategy for LetterFrequencyStrategy {
    fn rank_guesses(
        &self,
        dictionary: &[Word],
        candidates: &[Word],
        constraints: &ConstraintSet,
    ) -> Vec<Word> {
        let frequencies = letter_frequencies(candidates, constraints);
        rank_by_frequency(dictionary, &frequencies)
            .into_iter()
            .map(|(word, _)| word)
            .collect()
    }
}

//! Constraint-satisfaction and scoring engine
//!
//! This module contains the filtering and ranking machinery: candidate
//! filtering, the two scoring strategies, and the advisor facade.

mod advisor;
mod comparison;
mod filter;
mod frequency;
mod ranker;
pub mod strategy;

pub use advisor::{Advice, Advisor};
pub use comparison::{score_against_pool, score_by_comparison};
pub use filter::{contains_all, filter_candidates};
pub use frequency::{letter_frequencies, rank_by_frequency};
pub use ranker::{ScoredWord, rank};
pub use strategy::{
    CrossComparisonStrategy, LetterFrequencyStrategy, RankingStrategy, StrategyKind,
};

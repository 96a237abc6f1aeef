//! Wordle Advisor
//!
//! A word-elimination and ranking engine for a daily word-guessing puzzle:
//! feedback from played rows is folded into constraints, the dictionary is
//! filtered down to consistent words, and the survivors are ranked by
//! expected information value.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_advisor::core::{ConstraintSet, Word};
//! use wordle_advisor::engine::filter_candidates;
//!
//! let dictionary: Vec<Word> = ["crane", "slate", "trace", "least"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! // One guess played: SLATE against the solution CRANE
//! let solution = Word::new("crane").unwrap();
//! let board = vec![Word::new("slate").unwrap()];
//! let constraints = ConstraintSet::derive(&board, &solution);
//!
//! let surviving = filter_candidates(&dictionary, &constraints);
//! assert_eq!(surviving.len(), 1);
//! assert_eq!(surviving[0].text(), "crane");
//! ```

// Core domain types
pub mod core;

// Filtering and ranking engine
pub mod engine;

// Word lists
pub mod wordlists;

// Stored game-state glue
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

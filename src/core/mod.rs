//! Core domain types

mod constraints;
mod matches;
mod state;
mod word;

pub use constraints::{ConstraintSet, LetterSet};
pub use matches::MatchCounts;
pub use state::{GameState, GameStatus};
pub use word::{WORD_LEN, Word, WordError};

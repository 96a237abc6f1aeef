//! Command implementations

pub mod openers;
pub mod probe;
pub mod suggest;
pub mod undo;

pub use openers::{OpenersResult, rank_openers};
pub use probe::{ProbeResult, probe_guesses};
pub use suggest::suggest_guesses;
pub use undo::{UndoOutcome, undo_session};

//! Undo command
//!
//! Loads a stored game-state record, takes back the most recent guess, and
//! writes the updated record in place.

use crate::session;
use anyhow::{Result, bail};
use std::path::Path;

/// Outcome of an undo run
pub struct UndoOutcome {
    /// The guess that was taken back
    pub removed: String,
    /// The row cursor after the undo
    pub row_index: usize,
}

/// Undo the most recent guess in a stored game state
///
/// # Errors
///
/// Returns an error if the record cannot be loaded or written, or if no row
/// has been played.
pub fn undo_session<P: AsRef<Path>>(path: P) -> Result<UndoOutcome> {
    let path = path.as_ref();
    let state = session::load_state(path)?;

    let removed = state
        .board_state
        .get(state.row_index.wrapping_sub(1))
        .cloned()
        .unwrap_or_default();

    let Some(next) = session::undo(&state) else {
        bail!("Nothing to undo: no guess has been played");
    };

    session::save_state(path, &next)?;

    Ok(UndoOutcome {
        removed,
        row_index: next.row_index,
    })
}

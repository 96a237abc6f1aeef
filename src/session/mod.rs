//! Game-state session glue
//!
//! The engine is pure; this layer owns the stored record. It loads and saves
//! the JSON document the puzzle page keeps, and implements the undo
//! operation over it. Undo produces a new record rather than mutating the
//! input.

use crate::core::{GameState, GameStatus};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a game-state record from a JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or does not parse as a
/// game-state record.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<GameState> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read game state from {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Malformed game state in {}", path.display()))
}

/// Save a game-state record to a JSON file
///
/// # Errors
/// Returns an error if the record cannot be serialized or written.
pub fn save_state<P: AsRef<Path>>(path: P, state: &GameState) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(state).context("Failed to serialize game state")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write game state to {}", path.display()))
}

/// Take back the most recent guess
///
/// Returns a new record with the row cursor decremented, that row's board
/// entry cleared, its evaluation nulled, and the status reset to
/// in-progress. Returns `None` when no row has been played.
#[must_use]
pub fn undo(state: &GameState) -> Option<GameState> {
    let row = state.row_index.checked_sub(1)?;

    let mut next = state.clone();
    next.row_index = row;
    if let Some(entry) = next.board_state.get_mut(row) {
        entry.clear();
    }
    if let Some(entry) = next.evaluations.get_mut(row) {
        *entry = None;
    }
    next.game_status = GameStatus::InProgress;

    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> GameState {
        GameState {
            solution: "crane".to_string(),
            board_state: vec![
                "slate".to_string(),
                "crane".to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
            row_index: 2,
            evaluations: vec![
                Some(vec!["absent".to_string(); 5]),
                Some(vec!["correct".to_string(); 5]),
                None,
                None,
                None,
                None,
            ],
            game_status: GameStatus::Win,
        }
    }

    #[test]
    fn undo_clears_most_recent_row() {
        let state = sample_state();
        let undone = undo(&state).unwrap();

        assert_eq!(undone.row_index, 1);
        assert_eq!(undone.board_state[1], "");
        assert_eq!(undone.evaluations[1], None);
        assert_eq!(undone.game_status, GameStatus::InProgress);

        // Earlier rows are untouched
        assert_eq!(undone.board_state[0], "slate");
        assert!(undone.evaluations[0].is_some());
    }

    #[test]
    fn undo_does_not_mutate_input() {
        let state = sample_state();
        let _ = undo(&state);

        assert_eq!(state.row_index, 2);
        assert_eq!(state.board_state[1], "crane");
        assert_eq!(state.game_status, GameStatus::Win);
    }

    #[test]
    fn undo_twice_clears_both_rows() {
        let state = sample_state();
        let undone = undo(&undo(&state).unwrap()).unwrap();

        assert_eq!(undone.row_index, 0);
        assert!(undone.board_state.iter().all(String::is_empty));
        assert!(undone.evaluations.iter().all(Option::is_none));
    }

    #[test]
    fn undo_on_fresh_board_is_none() {
        let mut state = sample_state();
        state.row_index = 0;
        state.board_state = vec![String::new(); 6];
        state.evaluations = vec![None; 6];

        assert!(undo(&state).is_none());
    }

    #[test]
    fn state_round_trips_through_file() {
        let dir = std::env::temp_dir().join("wordle_advisor_session_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("state.json");

        let state = sample_state();
        save_state(&path, &state).unwrap();
        let loaded = load_state(&path).unwrap();

        assert_eq!(loaded, state);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn load_state_rejects_malformed_json() {
        let dir = std::env::temp_dir().join("wordle_advisor_session_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("broken.json");
        fs::write(&path, "{not json").unwrap();

        assert!(load_state(&path).is_err());

        fs::remove_file(&path).ok();
    }
}

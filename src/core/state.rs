//! Game-state record
//!
//! The record mirrors the JSON document the puzzle page keeps per session:
//! a solution, one board row per guess slot (empty string = unplayed), a row
//! cursor, per-row tile evaluations, and a lifecycle status. The engine reads
//! only the solution and the played rows; everything else rides along for
//! round-tripping.

use super::{Word, WordError};
use serde::{Deserialize, Serialize};

/// Lifecycle marker stored in the game-state record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "WIN")]
    Win,
    #[serde(rename = "FAIL")]
    Fail,
}

/// One puzzle session as the host page stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The answer for this session
    pub solution: String,
    /// One entry per board row; the empty string marks an unplayed row
    #[serde(rename = "boardState")]
    pub board_state: Vec<String>,
    /// Cursor of the current (next unplayed) row
    #[serde(rename = "rowIndex")]
    pub row_index: usize,
    /// Per-row tile evaluations, `None` for unplayed rows
    pub evaluations: Vec<Option<Vec<String>>>,
    /// Session lifecycle marker
    #[serde(rename = "gameStatus")]
    pub game_status: GameStatus,
}

impl GameState {
    /// Parse the played (non-empty) board rows into validated words
    ///
    /// # Errors
    /// Returns `WordError` if any played row is not a well-formed word.
    pub fn played_rows(&self) -> Result<Vec<Word>, WordError> {
        self.board_state
            .iter()
            .filter(|row| !row.is_empty())
            .map(|row| Word::new(row.as_str()))
            .collect()
    }

    /// Parse the solution into a validated word
    ///
    /// # Errors
    /// Returns `WordError` if the solution is not a well-formed word.
    pub fn solution_word(&self) -> Result<Word, WordError> {
        Word::new(self.solution.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> GameState {
        GameState {
            solution: "crane".to_string(),
            board_state: vec![
                "slate".to_string(),
                "trace".to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ],
            row_index: 2,
            evaluations: vec![
                Some(vec![
                    "absent".to_string(),
                    "absent".to_string(),
                    "correct".to_string(),
                    "absent".to_string(),
                    "correct".to_string(),
                ]),
                Some(vec![
                    "absent".to_string(),
                    "present".to_string(),
                    "correct".to_string(),
                    "present".to_string(),
                    "correct".to_string(),
                ]),
                None,
                None,
                None,
                None,
            ],
            game_status: GameStatus::InProgress,
        }
    }

    #[test]
    fn played_rows_skips_unplayed_slots() {
        let state = sample_state();
        let rows = state.played_rows().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text(), "slate");
        assert_eq!(rows[1].text(), "trace");
    }

    #[test]
    fn played_rows_rejects_malformed_row() {
        let mut state = sample_state();
        state.board_state[1] = "xyz".to_string();

        assert!(matches!(
            state.played_rows(),
            Err(WordError::InvalidLength(3))
        ));
    }

    #[test]
    fn solution_word_parses() {
        let state = sample_state();
        assert_eq!(state.solution_word().unwrap().text(), "crane");
    }

    #[test]
    fn deserializes_host_page_record() {
        let json = r#"{
            "solution": "crane",
            "boardState": ["slate", "", "", "", "", ""],
            "rowIndex": 1,
            "evaluations": [["absent","absent","correct","absent","correct"], null, null, null, null, null],
            "gameStatus": "IN_PROGRESS"
        }"#;

        let state: GameState = serde_json::from_str(json).unwrap();
        assert_eq!(state.solution, "crane");
        assert_eq!(state.row_index, 1);
        assert_eq!(state.board_state[0], "slate");
        assert_eq!(state.evaluations[1], None);
        assert_eq!(state.game_status, GameStatus::InProgress);
    }

    #[test]
    fn serde_round_trip() {
        let state = sample_state();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(back, state);
    }
}

//! Main advisor interface
//!
//! Coordinates one computation: derive constraints from the game state,
//! filter the dictionary, and rank what survives with the chosen strategy.
//! Every call is a pure function over the state and the borrowed dictionary.

use super::filter::filter_candidates;
use super::frequency::{letter_frequencies, rank_by_frequency};
use super::strategy::RankingStrategy;
use crate::core::{ConstraintSet, GameState, Word, WordError};

/// Everything one advisory pass produces
#[derive(Debug)]
pub struct Advice {
    /// Constraints derived from the played rows
    pub constraints: ConstraintSet,
    /// How many dictionary words survive the constraints
    pub remaining: usize,
    /// Suggested guesses, best first
    pub ranked: Vec<Word>,
}

/// Main advisor
///
/// Borrows the dictionary for its lifetime and applies a ranking strategy to
/// each game state it is shown.
pub struct Advisor<'a, S: RankingStrategy> {
    strategy: S,
    dictionary: &'a [Word],
}

impl<'a, S: RankingStrategy> Advisor<'a, S> {
    /// Create a new advisor over a dictionary
    pub const fn new(strategy: S, dictionary: &'a [Word]) -> Self {
        Self {
            strategy,
            dictionary,
        }
    }

    /// Derive the constraint set from a game state's played rows
    ///
    /// # Errors
    /// Returns `WordError` if the solution or any played row is malformed.
    pub fn constraints(&self, state: &GameState) -> Result<ConstraintSet, WordError> {
        let board = state.played_rows()?;
        let solution = state.solution_word()?;
        Ok(ConstraintSet::derive(&board, &solution))
    }

    /// The dictionary words still consistent with the board
    ///
    /// An all-unplayed board derives no constraints, so the whole dictionary
    /// comes back. An over-constrained board legitimately returns nothing.
    ///
    /// # Errors
    /// Returns `WordError` if the solution or any played row is malformed.
    pub fn survivors(&self, state: &GameState) -> Result<Vec<Word>, WordError> {
        let constraints = self.constraints(state)?;
        Ok(filter_candidates(self.dictionary, &constraints))
    }

    /// Run one full advisory pass: classify, filter, rank
    ///
    /// # Errors
    /// Returns `WordError` if the solution or any played row is malformed.
    pub fn advise(&self, state: &GameState) -> Result<Advice, WordError> {
        let constraints = self.constraints(state)?;
        let survivors = filter_candidates(self.dictionary, &constraints);
        let ranked = self
            .strategy
            .rank_guesses(self.dictionary, &survivors, &constraints);

        Ok(Advice {
            remaining: survivors.len(),
            constraints,
            ranked,
        })
    }

    /// Rank the whole dictionary as disambiguation probes, with counts
    ///
    /// Unlike `advise`, the result keeps each word's undecided-letter tally
    /// so a caller can show how much each probe is worth.
    ///
    /// # Errors
    /// Returns `WordError` if the solution or any played row is malformed.
    pub fn probe(&self, state: &GameState) -> Result<Vec<(Word, usize)>, WordError> {
        let constraints = self.constraints(state)?;
        let survivors = filter_candidates(self.dictionary, &constraints);
        let frequencies = letter_frequencies(&survivors, &constraints);
        Ok(rank_by_frequency(self.dictionary, &frequencies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;
    use crate::engine::strategy::CrossComparisonStrategy;

    fn dictionary() -> Vec<Word> {
        ["crane", "slate", "trace", "least"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    fn state(solution: &str, rows: &[&str]) -> GameState {
        let mut board_state: Vec<String> = rows.iter().map(ToString::to_string).collect();
        let mut evaluations: Vec<Option<Vec<String>>> = rows.iter().map(|_| None).collect();
        while board_state.len() < 6 {
            board_state.push(String::new());
            evaluations.push(None);
        }

        GameState {
            solution: solution.to_string(),
            board_state,
            row_index: rows.len(),
            evaluations,
            game_status: GameStatus::InProgress,
        }
    }

    #[test]
    fn unplayed_board_returns_full_dictionary() {
        let dict = dictionary();
        let advisor = Advisor::new(CrossComparisonStrategy, &dict);

        let advice = advisor.advise(&state("crane", &[])).unwrap();

        assert!(advice.constraints.is_unconstrained());
        assert_eq!(advice.remaining, dict.len());
        assert_eq!(advice.ranked.len(), dict.len());
    }

    #[test]
    fn played_board_narrows_to_solution() {
        let dict = dictionary();
        let advisor = Advisor::new(CrossComparisonStrategy, &dict);

        let advice = advisor.advise(&state("crane", &["slate"])).unwrap();

        assert_eq!(advice.remaining, 1);
        assert_eq!(advice.ranked.len(), 1);
        assert_eq!(advice.ranked[0].text(), "crane");
    }

    #[test]
    fn survivors_match_advice_remaining() {
        let dict = dictionary();
        let advisor = Advisor::new(CrossComparisonStrategy, &dict);
        let game = state("crane", &["slate"]);

        let survivors = advisor.survivors(&game).unwrap();
        let advice = advisor.advise(&game).unwrap();

        assert_eq!(survivors.len(), advice.remaining);
    }

    #[test]
    fn malformed_solution_fails_fast() {
        let dict = dictionary();
        let advisor = Advisor::new(CrossComparisonStrategy, &dict);

        let result = advisor.advise(&state("toolong", &[]));
        assert!(matches!(result, Err(WordError::InvalidLength(7))));
    }

    #[test]
    fn probe_drops_everything_when_nothing_survives() {
        // A board whose feedback no dictionary word satisfies: the solution
        // is outside the dictionary and shares no letters with it
        let dict = ["crane", "slate"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect::<Vec<_>>();
        let advisor = Advisor::new(CrossComparisonStrategy, &dict);

        let probes = advisor.probe(&state("jumpy", &["crane", "slate"])).unwrap();
        assert!(probes.is_empty());
    }

    #[test]
    fn probe_rates_undecided_letters() {
        let dict = dictionary();
        let advisor = Advisor::new(CrossComparisonStrategy, &dict);

        // No rows played: every letter of every survivor is undecided
        let probes = advisor.probe(&state("crane", &[])).unwrap();

        assert_eq!(probes.len(), dict.len());
        assert!(probes.windows(2).all(|pair| pair[0].1 >= pair[1].1));
    }
}

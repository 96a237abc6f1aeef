//! Suggest command
//!
//! Runs one advisory pass over a stored game state: derive constraints,
//! filter the dictionary, rank the survivors.

use crate::core::{GameState, Word, WordError};
use crate::engine::{Advice, Advisor, StrategyKind};

/// Produce ranked suggestions for a game state
///
/// The strategy name selects how survivors are ordered; see
/// [`StrategyKind::from_name`].
///
/// # Errors
///
/// Returns an error if the stored solution or any played row is not a
/// well-formed word.
pub fn suggest_guesses(
    state: &GameState,
    dictionary: &[Word],
    strategy_name: &str,
) -> Result<Advice, WordError> {
    let strategy = StrategyKind::from_name(strategy_name);
    let advisor = Advisor::new(strategy, dictionary);
    advisor.advise(state)
}

//! Probe command
//!
//! Suggests disambiguating guesses after feedback exists. Probes are ranked
//! over the whole dictionary, not just the survivors: the best next guess is
//! often an impossible word that tests many undecided letters at once.

use crate::core::{GameState, Word, WordError};
use crate::engine::{Advisor, CrossComparisonStrategy};

/// Result of a probe run
pub struct ProbeResult {
    /// How many dictionary words survive the board's constraints
    pub remaining: usize,
    /// Dictionary words with their undecided-letter tallies, best first
    pub ranked: Vec<(Word, usize)>,
}

/// Rank disambiguation probes for a game state
///
/// # Errors
///
/// Returns an error if the stored solution or any played row is not a
/// well-formed word.
pub fn probe_guesses(state: &GameState, dictionary: &[Word]) -> Result<ProbeResult, WordError> {
    let advisor = Advisor::new(CrossComparisonStrategy, dictionary);
    let remaining = advisor.survivors(state)?.len();
    let ranked = advisor.probe(state)?;

    Ok(ProbeResult { remaining, ranked })
}

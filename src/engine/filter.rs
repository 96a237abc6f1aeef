//! Candidate filtering against a constraint set
//!
//! A word survives when it carries every required letter with enough
//! multiplicity, contains no grey letter, matches every fixed position, and
//! avoids every per-position exclusion. Checks short-circuit per candidate;
//! their order does not affect the result set.

use crate::core::{ConstraintSet, WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// Keep the dictionary words consistent with the constraints
///
/// The output is an order-preserving subsequence of `dictionary`.
///
/// # Examples
/// ```
/// use wordle_advisor::core::{ConstraintSet, Word};
/// use wordle_advisor::engine::filter_candidates;
///
/// let dictionary: Vec<Word> = ["crane", "slate", "trace", "least"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let solution = Word::new("crane").unwrap();
/// let board = vec![Word::new("slate").unwrap()];
/// let constraints = ConstraintSet::derive(&board, &solution);
///
/// let surviving = filter_candidates(&dictionary, &constraints);
/// assert_eq!(surviving.len(), 1);
/// assert_eq!(surviving[0].text(), "crane");
/// ```
#[must_use]
pub fn filter_candidates(dictionary: &[Word], constraints: &ConstraintSet) -> Vec<Word> {
    dictionary
        .iter()
        .filter(|word| satisfies(word, constraints))
        .cloned()
        .collect()
}

/// Check one candidate against every constraint, first failure wins
fn satisfies(word: &Word, constraints: &ConstraintSet) -> bool {
    if !contains_all(word, constraints.required_letters()) {
        return false;
    }

    for position in 0..WORD_LEN {
        let letter = word.char_at(position);

        if constraints.greys().contains(letter) {
            return false;
        }

        if let Some(fixed) = constraints.green_at(position)
            && fixed != letter
        {
            return false;
        }

        if constraints.yellows_at(position).contains(letter) {
            return false;
        }
    }

    true
}

/// Multiset containment: does the word carry every required letter with at
/// least the required multiplicity?
///
/// Duplicate entries in `required` demand duplicate occurrences, so the check
/// counts rather than testing membership.
#[must_use]
pub fn contains_all(word: &Word, required: &[u8]) -> bool {
    if required.is_empty() {
        return true;
    }

    let mut needed: FxHashMap<u8, u8> = FxHashMap::default();
    for &letter in required {
        *needed.entry(letter).or_insert(0) += 1;
    }

    for &letter in word.chars() {
        if let Some(count) = needed.get_mut(&letter)
            && *count > 0
        {
            *count -= 1;
        }
    }

    needed.values().all(|&count| count == 0)
}

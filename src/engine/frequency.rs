//! Remaining-letter frequency scoring
//!
//! After feedback exists, the most useful next guess is often not a possible
//! solution but a word probing the letters still in doubt. Letters already
//! confirmed present or absent carry no information, so only the undecided
//! letters of the surviving pool are tallied; dictionary words are then rated
//! by the tallies of their distinct letters.

use crate::core::{ConstraintSet, LetterSet, Word};

/// Number of distinct letters a frequency table tracks
const ALPHABET: usize = 26;

/// Tally undecided letters across the surviving candidate pool
///
/// Every occurrence counts, except letters already confirmed present
/// (`required_letters`) or confirmed absent (greys).
#[must_use]
pub fn letter_frequencies(survivors: &[Word], constraints: &ConstraintSet) -> [usize; ALPHABET] {
    let mut frequencies = [0usize; ALPHABET];

    for word in survivors {
        for &letter in word.chars() {
            if constraints.required_letters().contains(&letter) {
                continue;
            }
            if constraints.greys().contains(letter) {
                continue;
            }
            frequencies[(letter - b'a') as usize] += 1;
        }
    }

    frequencies
}

/// Rate every dictionary word by the tallies of its distinct letters
///
/// A repeated letter counts once per word. Words whose sum is zero probe
/// nothing and are dropped. The sort is stable and descending, so tied words
/// keep dictionary order.
#[must_use]
pub fn rank_by_frequency(
    dictionary: &[Word],
    frequencies: &[usize; ALPHABET],
) -> Vec<(Word, usize)> {
    let mut rated: Vec<(Word, usize)> = dictionary
        .iter()
        .filter_map(|word| {
            let mut seen = LetterSet::EMPTY;
            let mut total = 0;

            for &letter in word.chars() {
                if !seen.contains(letter) {
                    seen.insert(letter);
                    total += frequencies[(letter - b'a') as usize];
                }
            }

            (total > 0).then(|| (word.clone(), total))
        })
        .collect();

    rated.sort_by(|a, b| b.1.cmp(&a.1));
    rated
}

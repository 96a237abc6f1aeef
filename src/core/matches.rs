//! Pairwise overlap between a guess and a hypothetical solution
//!
//! `MatchCounts` records how many letters of a guess land in the correct
//! position of a hypothetical solution (exact) and how many appear elsewhere
//! in it (partial). Duplicate letters are handled with Wordle's consumption
//! rule: each solution occurrence can satisfy at most one guess letter, and
//! exact matches claim their occurrence first.

use super::{WORD_LEN, Word};

/// Exact/partial overlap counts for one (guess, hypothetical solution) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchCounts {
    /// Positions where guess and hypothetical solution share the same letter
    pub exact: u32,
    /// Guess letters present in the hypothetical solution at a different position
    pub partial: u32,
}

impl MatchCounts {
    /// Calculate the overlap when `guess` is compared against `hypothetical`
    ///
    /// # Algorithm
    /// 1. First pass: count exact matches and remove each from the available pool
    /// 2. Second pass: count partial matches from the remaining pool
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{MatchCounts, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let hypothetical = Word::new("slate").unwrap();
    /// let counts = MatchCounts::calculate(&guess, &hypothetical);
    ///
    /// // A and E sit in matching positions; C, R, N are absent
    /// assert_eq!(counts.exact, 2);
    /// assert_eq!(counts.partial, 0);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, hypothetical: &Word) -> Self {
        let mut available = hypothetical.char_counts();
        let mut exact = 0;
        let mut partial = 0;

        // First pass: exact position matches
        // Allow: index needed to access guess[i] and hypothetical[i] in step
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == hypothetical.chars()[i] {
                exact += 1;

                // Remove from available pool
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: wrong position, but an unconsumed occurrence remains
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] != hypothetical.chars()[i] {
                let letter = guess.chars()[i];
                if let Some(count) = available.get_mut(&letter)
                    && *count > 0
                {
                    partial += 1;
                    *count -= 1;
                }
            }
        }

        Self { exact, partial }
    }

    /// Weighted score used for ranking: exact matches count double
    #[inline]
    #[must_use]
    pub const fn weighted(self) -> u32 {
        self.exact * 2 + self.partial
    }

    /// Add another pair's counts into this accumulator
    #[inline]
    pub const fn accumulate(&mut self, other: Self) {
        self.exact += other.exact;
        self.partial += other.partial;
    }
}

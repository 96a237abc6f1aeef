//! Board feedback classification
//!
//! `ConstraintSet::derive` replays the guesses on a board against the solution
//! and folds the feedback into position and letter constraints:
//! - green: the letter fixed at a position
//! - yellow: letters forbidden at a position but confirmed present
//! - grey: letters absent from the solution entirely
//!
//! Duplicate letters follow Wordle's rule: exact matches are classified first
//! across the whole row, then each remaining occurrence is yellow while an
//! unconsumed occurrence of that letter is left in the solution. A surplus
//! occurrence of a letter the solution does contain is recorded as a
//! position exclusion only, never as a grey letter.

use super::{WORD_LEN, Word};

/// Set of letters packed into a 26-bit mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Add a lowercase ASCII letter to the set
    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        debug_assert!(letter.is_ascii_lowercase());
        self.0 |= 1 << (letter - b'a');
    }

    /// Check whether the set contains a letter
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & (1 << (letter - b'a')) != 0
    }

    /// Check whether the set is empty
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of letters in the set
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..26u8)
            .filter(move |bit| self.0 & (1 << bit) != 0)
            .map(|bit| b'a' + bit)
    }
}

/// Constraints accumulated from every played row of a board
///
/// Derived fresh from the game state on every computation; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConstraintSet {
    /// Fixed letter per position, `None` where unconstrained
    greens: [Option<u8>; WORD_LEN],
    /// Letters forbidden at each position
    yellows: [LetterSet; WORD_LEN],
    /// Letters forbidden anywhere in the word
    greys: LetterSet,
    /// Letters confirmed present, deduplicated, most-recent-guess-first
    required: Vec<u8>,
}

impl ConstraintSet {
    /// Derive constraints from the played rows of a board and the solution
    ///
    /// Rows are absorbed in board order, so `required_letters` ends up with
    /// the most recent row's confirmed letters first.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{ConstraintSet, Word};
    ///
    /// let solution = Word::new("crane").unwrap();
    /// let board = vec![Word::new("slate").unwrap()];
    /// let constraints = ConstraintSet::derive(&board, &solution);
    ///
    /// assert_eq!(constraints.green_at(2), Some(b'a'));
    /// assert_eq!(constraints.green_at(4), Some(b'e'));
    /// assert!(constraints.greys().contains(b's'));
    /// assert!(constraints.greys().contains(b'l'));
    /// assert!(constraints.greys().contains(b't'));
    /// ```
    #[must_use]
    pub fn derive(board: &[Word], solution: &Word) -> Self {
        let mut constraints = Self::default();
        for guess in board {
            constraints.absorb_row(guess, solution);
        }
        constraints
    }

    /// Fold one played row's feedback into the constraint set
    fn absorb_row(&mut self, guess: &Word, solution: &Word) {
        let mut available = solution.char_counts();
        // Positions classified green or yellow, i.e. letters confirmed present
        let mut confirmed = [false; WORD_LEN];

        // First pass: exact matches across the whole row
        // Allow: index needed to access guess[i], solution[i], and set greens[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            let letter = guess.char_at(i);
            if letter == solution.char_at(i) {
                self.greens[i] = Some(letter);
                confirmed[i] = true;

                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: remaining occurrences are yellow while an unconsumed
        // occurrence is left, grey when the letter is absent from the solution
        for i in 0..WORD_LEN {
            if confirmed[i] {
                continue;
            }
            let letter = guess.char_at(i);
            match available.get_mut(&letter) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    self.yellows[i].insert(letter);
                    confirmed[i] = true;
                }
                Some(_) => {
                    // Surplus occurrence of a present letter: the solution
                    // cannot hold it here, but the letter is not grey
                    self.yellows[i].insert(letter);
                }
                None => {
                    self.greys.insert(letter);
                }
            }
        }

        // Merge required letters: this row's confirmed letters first, in guess
        // order, then previously accumulated letters not re-confirmed here
        let mut merged = Vec::with_capacity(self.required.len() + WORD_LEN);
        for i in 0..WORD_LEN {
            let letter = guess.char_at(i);
            if confirmed[i] && !merged.contains(&letter) {
                merged.push(letter);
            }
        }
        for &letter in &self.required {
            if !merged.contains(&letter) {
                merged.push(letter);
            }
        }
        self.required = merged;
    }

    /// The fixed letter at a position, if any
    #[inline]
    #[must_use]
    pub const fn green_at(&self, position: usize) -> Option<u8> {
        self.greens[position]
    }

    /// Letters forbidden at a position
    #[inline]
    #[must_use]
    pub const fn yellows_at(&self, position: usize) -> LetterSet {
        self.yellows[position]
    }

    /// Letters forbidden anywhere in the word
    #[inline]
    #[must_use]
    pub const fn greys(&self) -> LetterSet {
        self.greys
    }

    /// Letters confirmed present, deduplicated, most-recent-guess-first
    #[inline]
    #[must_use]
    pub fn required_letters(&self) -> &[u8] {
        &self.required
    }

    /// True when no row has contributed any constraint
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.greens.iter().all(Option::is_none)
            && self.yellows.iter().all(|set| set.is_empty())
            && self.greys.is_empty()
            && self.required.is_empty()
    }
}

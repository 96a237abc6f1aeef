//! Openers command
//!
//! Ranks the whole dictionary by mutual overlap, the pre-feedback moment:
//! with no constraints every word is a candidate, and the cross-comparison
//! sweep finds the ones built from the pool's most shared letters. The sweep
//! is O(n²), so it reports progress.

use crate::core::Word;
use crate::engine::{ScoredWord, rank, score_against_pool};
use indicatif::{ProgressBar, ProgressStyle};

/// Result of an openers run
pub struct OpenersResult {
    /// How many words were compared
    pub pool_size: usize,
    /// The dictionary ordered best-first
    pub ranked: Vec<Word>,
}

/// Rank the whole dictionary as opening guesses
///
/// # Panics
///
/// May panic if the progress bar template is malformed (it is a constant).
#[must_use]
pub fn rank_openers(dictionary: &[Word]) -> OpenersResult {
    let pb = ProgressBar::new(dictionary.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let scored: Vec<ScoredWord> = dictionary
        .iter()
        .map(|guess| {
            let counts = score_against_pool(guess, dictionary);
            pb.inc(1);
            ScoredWord {
                word: guess.clone(),
                counts,
            }
        })
        .collect();

    pb.finish_and_clear();

    OpenersResult {
        pool_size: dictionary.len(),
        ranked: rank(scored),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn ranks_every_word() {
        let dict = words(&["crane", "slate", "trace", "least"]);
        let result = rank_openers(&dict);

        assert_eq!(result.pool_size, 4);
        assert_eq!(result.ranked.len(), 4);
        for word in &dict {
            assert!(result.ranked.contains(word));
        }
    }

    #[test]
    fn shared_letters_beat_isolated_ones() {
        // TRACE shares letters with CRANE and CRATE; JUMBO shares nothing
        let dict = words(&["trace", "crane", "crate", "jumbo"]);
        let result = rank_openers(&dict);

        assert_eq!(result.ranked.last().unwrap().text(), "jumbo");
    }

    #[test]
    fn empty_dictionary_is_fine() {
        let result = rank_openers(&[]);
        assert_eq!(result.pool_size, 0);
        assert!(result.ranked.is_empty());
    }
}

//! Formatting utilities for terminal output

use crate::core::{ConstraintSet, LetterSet, WORD_LEN, Word};
use colored::Colorize;

/// Format a letter set as spaced uppercase letters
#[must_use]
pub fn format_letter_set(set: LetterSet) -> String {
    set.iter()
        .map(|letter| (letter as char).to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the fixed positions as "A at 3, E at 5" (1-based positions)
#[must_use]
pub fn format_greens(constraints: &ConstraintSet) -> String {
    (0..WORD_LEN)
        .filter_map(|position| {
            constraints.green_at(position).map(|letter| {
                format!(
                    "{} at {}",
                    (letter as char).to_ascii_uppercase(),
                    position + 1
                )
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Paint a word with its constraint colors
///
/// Letters fixed at their position render green, letters confirmed present
/// render yellow, the rest stay plain.
#[must_use]
pub fn paint_word(word: &Word, constraints: &ConstraintSet) -> String {
    let mut painted = String::new();

    for position in 0..WORD_LEN {
        let letter = word.char_at(position);
        let shown = (letter as char).to_ascii_uppercase().to_string();

        let piece = if constraints.green_at(position) == Some(letter) {
            shown.green().bold().to_string()
        } else if constraints.required_letters().contains(&letter) {
            shown.yellow().to_string()
        } else {
            shown
        };

        painted.push_str(&piece);
    }

    painted
}

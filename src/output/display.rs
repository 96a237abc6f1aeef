//! Display functions for command results

use super::formatters::{format_greens, format_letter_set, paint_word};
use crate::commands::{OpenersResult, ProbeResult, UndoOutcome};
use crate::engine::Advice;
use colored::Colorize;

/// Print the result of a suggest run
pub fn print_suggestions(advice: &Advice, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Candidates remaining: {}",
        advice.remaining.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let greens = format_greens(&advice.constraints);
    if !greens.is_empty() {
        println!("Fixed:    {}", greens.green());
    }
    if !advice.constraints.greys().is_empty() {
        println!(
            "Ruled out: {}",
            format_letter_set(advice.constraints.greys()).bright_black()
        );
    }

    if advice.ranked.is_empty() {
        println!(
            "\n{}",
            "No word fits this board. Check the recorded guesses.".red()
        );
        return;
    }

    println!();
    for (i, word) in advice.ranked.iter().take(limit).enumerate() {
        println!(
            "{:>4}. {}",
            (i + 1).to_string().bright_black(),
            paint_word(word, &advice.constraints)
        );
    }

    if advice.ranked.len() > limit {
        println!("      ...and {} more", advice.ranked.len() - limit);
    }
}

/// Print the result of an openers run
pub fn print_openers(result: &OpenersResult, limit: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} ({} words compared) ",
        "BEST OPENING GUESSES".bright_cyan().bold(),
        result.pool_size
    );
    println!("{}", "═".repeat(60).cyan());

    for (i, word) in result.ranked.iter().take(limit).enumerate() {
        println!(
            "{:>4}. {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold()
        );
    }
}

/// Print the result of a probe run
pub fn print_probes(result: &ProbeResult, limit: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Candidates remaining: {}",
        result.remaining.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.ranked.is_empty() {
        println!("\n{}", "Nothing left to probe.".red());
        return;
    }

    println!("\nBest disambiguating guesses:");
    for (i, (word, tally)) in result.ranked.iter().take(limit).enumerate() {
        println!(
            "{:>4}. {}  {}",
            (i + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            format!("({tally})").bright_black()
        );
    }

    if result.ranked.len() > limit {
        println!("      ...and {} more", result.ranked.len() - limit);
    }
}

/// Print the outcome of an undo run
pub fn print_undo(outcome: &UndoOutcome) {
    println!(
        "{} Took back {}; next row is {}",
        "✓".green().bold(),
        outcome.removed.to_uppercase().bright_white().bold(),
        outcome.row_index + 1
    );
}

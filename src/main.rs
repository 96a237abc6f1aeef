//! Wordle Advisor - CLI
//!
//! Reads a stored puzzle record and suggests guesses: candidates ranked by
//! mutual overlap, opening words, or disambiguating probes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_advisor::{
    commands::{probe_guesses, rank_openers, suggest_guesses, undo_session},
    core::Word,
    output::{print_openers, print_probes, print_suggestions, print_undo},
    session,
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_advisor",
    about = "Wordle assistant that filters and ranks remaining candidates from board feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the words still consistent with a stored game state
    Suggest {
        /// Path to the game-state JSON file
        state: PathBuf,

        /// Ranking strategy: comparison (default) or frequency
        #[arg(short, long, default_value = "comparison")]
        strategy: String,

        /// Show at most this many suggestions
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Rank the whole dictionary as opening guesses
    Openers {
        /// Show at most this many words
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Rank disambiguating probe guesses for a stored game state
    Probe {
        /// Path to the game-state JSON file
        state: PathBuf,

        /// Show at most this many probes
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Take back the most recent guess in a stored game state
    Undo {
        /// Path to the game-state JSON file
        state: PathBuf,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": load a custom word list from a file
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_advisor::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    match cli.command {
        Commands::Suggest {
            state,
            strategy,
            limit,
        } => {
            let game = session::load_state(&state)?;
            let advice = suggest_guesses(&game, &dictionary, &strategy)?;
            print_suggestions(&advice, limit);
        }
        Commands::Openers { limit } => {
            let result = rank_openers(&dictionary);
            print_openers(&result, limit);
        }
        Commands::Probe { state, limit } => {
            let game = session::load_state(&state)?;
            let result = probe_guesses(&game, &dictionary)?;
            print_probes(&result, limit);
        }
        Commands::Undo { state } => {
            let outcome = undo_session(&state)?;
            print_undo(&outcome);
        }
    }

    Ok(())
}

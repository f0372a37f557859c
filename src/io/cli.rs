//! Command-line interface for generating puzzles from a word-list file

use clap::Parser;
use std::path::PathBuf;

use crate::algorithm::generator::{WordSearchConfig, generate};
use crate::io::configuration::{
    DEFAULT_BACKWARDS_PROBABILITY, DEFAULT_COLS, DEFAULT_MAX_RETRIES, DEFAULT_MAX_WORDS,
    DEFAULT_ROWS,
};
use crate::io::error::Result;
use crate::io::wordlist::load_dictionary;
use crate::spatial::direction::Direction;

#[derive(Parser, Debug)]
#[command(name = "wordsearch")]
#[command(
    author,
    version,
    about = "Generate word search puzzles from a word list"
)]
/// Command-line arguments for the puzzle generation tool
pub struct Cli {
    /// Word-list file, one word per line (# starts a comment)
    #[arg(value_name = "WORDLIST")]
    pub wordlist: PathBuf,

    /// Column count
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Row count
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Seed for reproducible generation
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Maximum number of words to place
    #[arg(short = 'm', long, default_value_t = DEFAULT_MAX_WORDS)]
    pub max_words: usize,

    /// Probability of writing each word backwards
    #[arg(short, long, default_value_t = DEFAULT_BACKWARDS_PROBABILITY)]
    pub backwards_probability: f64,

    /// Disable a direction (repeatable, e.g. -d NW -d N)
    #[arg(short, long = "disable", value_name = "DIRECTION")]
    pub disabled_directions: Vec<Direction>,

    /// Fill the grid with lowercase letters
    #[arg(short, long)]
    pub lowercase: bool,

    /// Keep accents instead of folding them away
    #[arg(short, long)]
    pub keep_diacritics: bool,

    /// Word that must not appear in the grid (repeatable)
    #[arg(short, long = "forbid", value_name = "WORD")]
    pub forbidden_words: Vec<String>,

    /// Retries when a forbidden word appears in the grid
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    pub max_retries: usize,
}

impl Cli {
    /// Map the parsed arguments onto an engine configuration
    pub fn to_config(&self, dictionary: Vec<String>) -> WordSearchConfig {
        WordSearchConfig {
            cols: self.cols,
            rows: self.rows,
            disabled_directions: self.disabled_directions.clone(),
            dictionary,
            max_words: self.max_words,
            backwards_probability: self.backwards_probability,
            upper_case: !self.lowercase,
            keep_diacritics: self.keep_diacritics,
            forbidden_words: self.forbidden_words.clone(),
            max_retries: self.max_retries,
            seed: self.seed.clone(),
            ..WordSearchConfig::default()
        }
    }
}

/// Generate a puzzle per the CLI arguments and print it
///
/// # Errors
///
/// Returns an error if the word list cannot be read or the configuration
/// fails validation.
// Printing the puzzle is this binary's entire purpose
#[allow(clippy::print_stdout, clippy::print_stderr)]
pub fn run(cli: &Cli) -> Result<()> {
    let dictionary = load_dictionary(&cli.wordlist)?;
    let config = cli.to_config(dictionary);
    let puzzle = generate(&config)?;

    println!("{}", puzzle.grid());
    println!();
    for placed in puzzle.words() {
        println!("{}", placed.word);
    }

    if !puzzle.forbidden_words_found().is_empty() {
        eprintln!(
            "Warning: forbidden words survived {} retries: {}",
            config.max_retries,
            puzzle.forbidden_words_found().join(", ")
        );
    }

    Ok(())
}

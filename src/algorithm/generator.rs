//! Generation orchestration: configuration, the bounded retry loop, and the
//! puzzle result
//!
//! One attempt shuffles the dictionary, places as many words as it can, fills
//! the leftover cells, and scans for forbidden words. A leaked forbidden word
//! discards the whole attempt and restarts from an empty grid, up to
//! `max_retries` times; exhausting the retries degrades gracefully to a
//! usable grid plus a diagnostic list of the surviving words.

use log::{debug, info, warn};

use crate::algorithm::placement::find_path;
use crate::algorithm::scanner::words_in_grid;
use crate::io::configuration::{
    DEFAULT_BACKWARDS_PROBABILITY, DEFAULT_COLS, DEFAULT_MAX_RETRIES, DEFAULT_MAX_WORDS,
    DEFAULT_ROWS, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::random::Seeder;
use crate::spatial::direction::{ALL_DIRECTIONS, Direction};
use crate::spatial::grid::Grid;
use crate::spatial::path::{Position, path_between};
use crate::text::normalize_word;

/// Puzzle generation settings with documented defaults
///
/// A plain value struct: build one with struct update syntax from
/// [`WordSearchConfig::default`] and hand it to [`generate`].
#[derive(Debug, Clone)]
pub struct WordSearchConfig {
    /// Column count (default 10)
    pub cols: usize,
    /// Row count (default 10)
    pub rows: usize,
    /// Directions words may follow (default: all eight)
    pub allowed_directions: Vec<Direction>,
    /// Directions subtracted from the allowed set (default: none)
    pub disabled_directions: Vec<Direction>,
    /// Input words, in any order and case (default: empty)
    pub dictionary: Vec<String>,
    /// Cap on the number of placed words (default 20)
    pub max_words: usize,
    /// Probability of preferring backward directions per word (default 0.3)
    pub backwards_probability: f64,
    /// Fill and normalize with uppercase letters (default true)
    pub upper_case: bool,
    /// Keep accents instead of folding them away (default false)
    pub keep_diacritics: bool,
    /// Words that must not appear in the filled grid (default: empty)
    pub forbidden_words: Vec<String>,
    /// Full-restart attempts when forbidden words leak (default 10)
    pub max_retries: usize,
    /// Text seed for reproducible generation (default: ambient entropy)
    pub seed: Option<String>,
}

impl Default for WordSearchConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            allowed_directions: ALL_DIRECTIONS.to_vec(),
            disabled_directions: Vec::new(),
            dictionary: Vec::new(),
            max_words: DEFAULT_MAX_WORDS,
            backwards_probability: DEFAULT_BACKWARDS_PROBABILITY,
            upper_case: true,
            keep_diacritics: false,
            forbidden_words: Vec::new(),
            max_retries: DEFAULT_MAX_RETRIES,
            seed: None,
        }
    }
}

impl WordSearchConfig {
    /// Validate the configuration before any placement work begins
    ///
    /// # Errors
    ///
    /// Returns [`crate::WordSearchError::InvalidParameter`] for zero or
    /// oversized grid dimensions and for a `backwards_probability` outside
    /// `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.cols == 0 {
            return Err(invalid_parameter(
                "cols",
                &self.cols,
                &"must be a positive integer",
            ));
        }
        if self.rows == 0 {
            return Err(invalid_parameter(
                "rows",
                &self.rows,
                &"must be a positive integer",
            ));
        }
        if self.cols > MAX_GRID_DIMENSION || self.rows > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "cols/rows",
                &format!("{}x{}", self.cols, self.rows),
                &format!("grid dimensions are limited to {MAX_GRID_DIMENSION}"),
            ));
        }
        if !(0.0..=1.0).contains(&self.backwards_probability) {
            return Err(invalid_parameter(
                "backwards_probability",
                &self.backwards_probability,
                &"must be within [0, 1]",
            ));
        }
        Ok(())
    }

    /// The allowed direction set minus the disabled one
    pub fn effective_directions(&self) -> Vec<Direction> {
        self.allowed_directions
            .iter()
            .copied()
            .filter(|direction| !self.disabled_directions.contains(direction))
            .collect()
    }

    fn normalize(&self, word: &str) -> String {
        normalize_word(word, self.upper_case, self.keep_diacritics)
    }
}

/// A word successfully placed into the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    /// The word as it appeared in the dictionary
    pub word: String,
    /// The normalized form actually written into the grid
    pub clean: String,
    /// The cells the word occupies, start cell first
    pub path: Vec<Position>,
}

/// The outcome of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    words: Vec<PlacedWord>,
    forbidden_words_found: Vec<String>,
}

impl Puzzle {
    /// The filled letter grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The placed words, sorted by normalized form
    pub fn words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Forbidden words that survived into the grid despite exhausting retries
    ///
    /// Empty on a clean run. Non-empty means the grid is still usable but
    /// the caller should decide whether to accept it or regenerate with
    /// different settings.
    pub fn forbidden_words_found(&self) -> &[String] {
        &self.forbidden_words_found
    }

    /// Read the straight-line string between two cells
    ///
    /// `None` when the cells are not collinear along a compass direction or
    /// the line leaves the grid.
    pub fn read_between(&self, start: Position, end: Position) -> Option<String> {
        let path = path_between(start, end)?;
        self.grid.read_path(&path)
    }
}

/// One full generation pass: shuffle, place, sort, fill
fn build_attempt(
    config: &WordSearchConfig,
    directions: &[Direction],
    forbidden: &[String],
    seeder: &mut Seeder,
) -> (Grid, Vec<PlacedWord>) {
    let mut grid = Grid::new(config.cols, config.rows);
    let mut placed: Vec<PlacedWord> = Vec::new();

    for word in seeder.shuffled(&config.dictionary) {
        let clean = config.normalize(&word);
        if clean.is_empty() {
            debug!("skipping empty word {word:?}");
            continue;
        }
        if forbidden.iter().any(|fw| clean.contains(fw.as_str())) {
            debug!("skipping {clean:?}: contains a forbidden word");
            continue;
        }
        if placed.len() >= config.max_words {
            break;
        }

        let Some(path) = find_path(
            &clean,
            &grid,
            directions,
            config.backwards_probability,
            seeder,
        ) else {
            debug!("no path found for {clean:?}");
            continue;
        };
        grid = grid.stamp(&clean, &path);
        placed.push(PlacedWord { word, clean, path });
    }

    placed.sort_by(|a, b| a.clean.cmp(&b.clean));
    let grid = grid.fill(config.upper_case, seeder);
    (grid, placed)
}

/// Generate a word search puzzle
///
/// Places as many dictionary words as possible (up to `max_words`), fills
/// the remaining cells with random letters, and retries the whole build up
/// to `max_retries` times when a forbidden word appears in the filled grid.
/// All randomness flows through one seeder, so supplying a seed makes the
/// entire run reproducible.
///
/// # Errors
///
/// Returns [`crate::WordSearchError::InvalidParameter`] when the
/// configuration fails validation. Unplaceable words and surviving forbidden
/// words are not errors; see [`Puzzle::forbidden_words_found`].
pub fn generate(config: &WordSearchConfig) -> Result<Puzzle> {
    config.validate()?;

    let mut seeder = config
        .seed
        .as_ref()
        .map_or_else(Seeder::from_entropy, |text| Seeder::from_seed_text(text));

    let directions = config.effective_directions();
    let forbidden: Vec<String> = config
        .forbidden_words
        .iter()
        .map(|word| config.normalize(word))
        .filter(|word| !word.is_empty())
        .collect();

    let mut attempt = 0;
    loop {
        let (grid, words) = build_attempt(config, &directions, &forbidden, &mut seeder);

        if forbidden.is_empty() {
            return Ok(Puzzle {
                grid,
                words,
                forbidden_words_found: Vec::new(),
            });
        }

        let leaked = words_in_grid(&forbidden, &grid);
        if leaked.is_empty() {
            return Ok(Puzzle {
                grid,
                words,
                forbidden_words_found: Vec::new(),
            });
        }

        if attempt < config.max_retries {
            attempt += 1;
            info!(
                "forbidden words {leaked:?} appeared in the grid, retrying ({attempt}/{})",
                config.max_retries
            );
        } else {
            warn!("retries exhausted, returning a grid containing forbidden words {leaked:?}");
            return Ok(Puzzle {
                grid,
                words,
                forbidden_words_found: leaked,
            });
        }
    }
}

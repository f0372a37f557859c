//! Letter grid storage and copy-on-write updates
//!
//! The grid is a rows x cols character matrix backed by flat storage. Cells
//! hold [`EMPTY_CELL`] until a placed word stamps them or the fill pass
//! replaces them with random letters. Every mutating operation returns a new
//! grid so a failed generation attempt can be discarded wholesale.

use ndarray::Array2;
use std::fmt;

use crate::random::Seeder;
use crate::spatial::path::Position;

/// Sentinel for a cell no word has claimed yet
pub const EMPTY_CELL: char = '.';

/// Draw a uniformly random letter of the requested case
pub fn random_letter(upper_case: bool, seeder: &mut Seeder) -> char {
    let letter = char::from(b'a' + seeder.pick(25) as u8);
    if upper_case {
        letter.to_ascii_uppercase()
    } else {
        letter
    }
}

/// The puzzle board: a rows x cols matrix of single characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<char>,
}

impl Grid {
    /// Create a grid with every cell set to [`EMPTY_CELL`]
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), EMPTY_CELL),
        }
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Read a cell, or `None` when the position is out of bounds
    pub fn get(&self, position: Position) -> Option<char> {
        if position.x < 0 || position.y < 0 {
            return None;
        }
        self.cells
            .get((position.y as usize, position.x as usize))
            .copied()
    }

    /// Return a copy of the grid with a word stamped along a path
    ///
    /// Cell `path[i]` receives the word's `i`-th character; cells off the
    /// path are untouched, as is this grid. Out-of-bounds path cells are
    /// ignored (placement search only produces in-bounds paths).
    #[must_use]
    pub fn stamp(&self, word: &str, path: &[Position]) -> Self {
        let mut cells = self.cells.clone();
        for (letter, position) in word.chars().zip(path) {
            if position.x < 0 || position.y < 0 {
                continue;
            }
            if let Some(cell) = cells.get_mut((position.y as usize, position.x as usize)) {
                *cell = letter;
            }
        }
        Self { cells }
    }

    /// Return a copy with every empty cell replaced by a random letter
    ///
    /// Non-empty cells pass through unchanged and consume no random draws,
    /// so filling an already-full grid returns it as-is.
    #[must_use]
    pub fn fill(&self, upper_case: bool, seeder: &mut Seeder) -> Self {
        let cells = self.cells.map(|&cell| {
            if cell == EMPTY_CELL {
                random_letter(upper_case, seeder)
            } else {
                cell
            }
        });
        Self { cells }
    }

    /// Read the string along a path, or `None` if any cell is out of bounds
    pub fn read_path(&self, path: &[Position]) -> Option<String> {
        path.iter().map(|&position| self.get(position)).collect()
    }

    /// Whether no empty cell remains
    pub fn is_filled(&self) -> bool {
        !self.cells.iter().any(|&cell| cell == EMPTY_CELL)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .cells
            .outer_iter()
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n");
        f.write_str(&rendered)
    }
}

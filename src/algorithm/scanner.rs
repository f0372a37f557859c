//! Character-run extraction and forbidden-word detection
//!
//! After the fill pass the grid is scanned for words that appeared by
//! accident. Every maximal horizontal, vertical, and diagonal run is read in
//! the forward directions only; reversing the whole corpus once catches
//! backward occurrences without re-deriving the reverse diagonals.

use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;
use crate::spatial::path::create_path;

/// Read `length` characters from a start cell along a direction
fn read_run(grid: &Grid, x: i32, y: i32, direction: Direction, length: usize) -> String {
    create_path(x, y, direction, length)
        .iter()
        .filter_map(|&position| grid.get(position))
        .collect()
}

/// Aggregate every character run in the grid into one pipe-delimited string
///
/// For each row: the row itself, the SE diagonal from its first column, and
/// the NE diagonal from its first column. For each column: the column itself,
/// plus (after the first column) the SE diagonal from the top edge and the NE
/// diagonal from the bottom edge. Anchoring diagonals to the top and left
/// edges captures every maximal diagonal exactly once. Runs of length 1 are
/// dropped.
pub fn char_sequences(grid: &Grid) -> String {
    let cols = grid.cols();
    let rows = grid.rows();
    let mut sequences = Vec::new();

    for y in 0..rows {
        let y_i = y as i32;
        sequences.push(read_run(grid, 0, y_i, Direction::East, cols));
        sequences.push(read_run(
            grid,
            0,
            y_i,
            Direction::SouthEast,
            (rows - y).min(cols),
        ));
        sequences.push(read_run(
            grid,
            0,
            y_i,
            Direction::NorthEast,
            (y + 1).min(cols),
        ));
    }

    for x in 0..cols {
        let x_i = x as i32;
        sequences.push(read_run(grid, x_i, 0, Direction::South, rows));
        if x > 0 {
            sequences.push(read_run(
                grid,
                x_i,
                0,
                Direction::SouthEast,
                (cols - x).min(rows),
            ));
            sequences.push(read_run(
                grid,
                x_i,
                rows as i32 - 1,
                Direction::NorthEast,
                (cols - x).min(rows),
            ));
        }
    }

    sequences.retain(|run| run.chars().count() > 1);
    sequences.join("|")
}

/// Keep the words that occur somewhere in the grid, in any of the 8 directions
///
/// Case sensitivity follows whatever form the words and grid were normalized
/// to upstream.
pub fn words_in_grid(words: &[String], grid: &Grid) -> Vec<String> {
    let forward = char_sequences(grid);
    let reversed: String = forward.chars().rev().collect();
    let corpus = format!("{forward}|{reversed}");

    words
        .iter()
        .filter(|word| corpus.contains(word.as_str()))
        .cloned()
        .collect()
}

//! Word search puzzle generation with reproducible randomness
//!
//! The engine places dictionary words into a 2D letter grid along the eight
//! compass directions, fills the remaining cells with random letters, and
//! retries the whole build when forbidden words accidentally appear in the
//! filled grid.

#![forbid(unsafe_code)]

/// Core engine: placement search, forbidden-word scanning, and generation orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Seeded random source for reproducible generation
pub mod random;
/// Grid, direction, and path primitives
pub mod spatial;
/// Word normalization utilities
pub mod text;

pub use algorithm::generator::{PlacedWord, Puzzle, WordSearchConfig, generate};
pub use io::error::{Result, WordSearchError};
pub use random::Seeder;
pub use spatial::direction::Direction;
pub use spatial::grid::Grid;
pub use spatial::path::Position;

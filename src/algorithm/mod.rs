//! Core generation engine

/// Generation orchestration: configuration, retry loop, and the puzzle result
pub mod generator;
/// Per-word placement search over directions and start cells
pub mod placement;
/// Character-run extraction and forbidden-word detection
pub mod scanner;

//! Spatial primitives for puzzle geometry
//!
//! This module contains spatial-related functionality including:
//! - Compass directions and their unit deltas
//! - Path construction and start-cell boundary computation
//! - The letter grid and its value-semantic update operations

/// Compass directions governing per-step path offsets
pub mod direction;
/// Letter grid storage and copy-on-write updates
pub mod grid;
/// Path construction and boundary computation
pub mod path;

pub use direction::Direction;
pub use grid::Grid;
pub use path::Position;

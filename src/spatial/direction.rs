//! The eight compass directions a word can follow through the grid
//!
//! Each direction decomposes into independent horizontal and vertical unit
//! components: east +1, west -1, south +1, north -1, zero otherwise.

use crate::io::error::{WordSearchError, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// A compass direction governing a path's per-step offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up
    North,
    /// Down
    South,
    /// Right
    East,
    /// Left
    West,
    /// Up-right diagonal
    NorthEast,
    /// Up-left diagonal
    NorthWest,
    /// Down-right diagonal
    SouthEast,
    /// Down-left diagonal
    SouthWest,
}

/// All eight compass directions
pub const ALL_DIRECTIONS: [Direction; 8] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
    Direction::NorthEast,
    Direction::NorthWest,
    Direction::SouthEast,
    Direction::SouthWest,
];

/// Directions that read a word backwards (right-to-left or bottom-to-top)
pub const BACKWARD_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::NorthWest,
    Direction::SouthWest,
];

/// Directions that read a word forwards (left-to-right or top-to-bottom)
pub const FORWARD_DIRECTIONS: [Direction; 4] = [
    Direction::South,
    Direction::East,
    Direction::NorthEast,
    Direction::SouthEast,
];

impl Direction {
    /// Horizontal unit component (east +1, west -1, 0 otherwise)
    pub const fn dx(self) -> i32 {
        match self {
            Self::East | Self::NorthEast | Self::SouthEast => 1,
            Self::West | Self::NorthWest | Self::SouthWest => -1,
            Self::North | Self::South => 0,
        }
    }

    /// Vertical unit component (south +1, north -1, 0 otherwise)
    pub const fn dy(self) -> i32 {
        match self {
            Self::South | Self::SouthEast | Self::SouthWest => 1,
            Self::North | Self::NorthEast | Self::NorthWest => -1,
            Self::East | Self::West => 0,
        }
    }

    /// Compass token for this direction (`"N"`, `"SW"`, ...)
    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::East => "E",
            Self::West => "W",
            Self::NorthEast => "NE",
            Self::NorthWest => "NW",
            Self::SouthEast => "SE",
            Self::SouthWest => "SW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Direction {
    type Err = WordSearchError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.to_ascii_uppercase().as_str() {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            "E" => Ok(Self::East),
            "W" => Ok(Self::West),
            "NE" => Ok(Self::NorthEast),
            "NW" => Ok(Self::NorthWest),
            "SE" => Ok(Self::SouthEast),
            "SW" => Ok(Self::SouthWest),
            _ => Err(invalid_parameter(
                "direction",
                &token,
                &"expected one of N, S, E, W, NE, NW, SE, SW",
            )),
        }
    }
}

//! Per-word placement search
//!
//! For one word, candidate directions and candidate start cells are tried in
//! shuffled order until a path is found whose cells are all either empty or
//! already hold the word's matching letter. The first fully valid path wins;
//! there is no scoring among equally valid placements, randomness alone
//! decides.

use crate::random::Seeder;
use crate::spatial::direction::{BACKWARD_DIRECTIONS, Direction, FORWARD_DIRECTIONS};
use crate::spatial::grid::{EMPTY_CELL, Grid};
use crate::spatial::path::{Position, create_path, start_bounds};

/// Build the direction trial order for one placement
///
/// The backward and forward groups are shuffled independently, concatenated
/// per the orientation bias, then filtered to the allowed set.
fn shuffled_directions(
    allowed: &[Direction],
    backwards_first: bool,
    seeder: &mut Seeder,
) -> Vec<Direction> {
    let backward = seeder.shuffled(&BACKWARD_DIRECTIONS);
    let forward = seeder.shuffled(&FORWARD_DIRECTIONS);

    let ordered = if backwards_first {
        backward.into_iter().chain(forward)
    } else {
        forward.into_iter().chain(backward)
    };

    ordered
        .filter(|direction| allowed.contains(direction))
        .collect()
}

/// Find a random path for a word in a grid, or `None` if none exists
///
/// With probability `backwards_probability` the backward directions
/// {N, W, NW, SW} are preferred over the forward ones. The bias draw routes
/// through the same seeder as every other decision so a seeded generation
/// is fully reproducible.
pub fn find_path(
    word: &str,
    grid: &Grid,
    allowed_directions: &[Direction],
    backwards_probability: f64,
    seeder: &mut Seeder,
) -> Option<Vec<Position>> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() {
        return None;
    }

    let backwards_first = seeder.raw() < backwards_probability;
    let directions = shuffled_directions(allowed_directions, backwards_first, seeder);

    for direction in directions {
        let Some(bounds) = start_bounds(letters.len(), direction, grid.cols(), grid.rows()) else {
            // Word cannot fit in this orientation; other directions may still work
            continue;
        };

        let mut starts = Vec::new();
        for x in bounds.min_x..=bounds.max_x {
            for y in bounds.min_y..=bounds.max_y {
                starts.push(Position {
                    x: x as i32,
                    y: y as i32,
                });
            }
        }

        for start in seeder.shuffled(&starts) {
            let path = create_path(start.x, start.y, direction, letters.len());
            let valid = path.iter().zip(&letters).all(|(&position, &letter)| {
                grid.get(position)
                    .is_some_and(|cell| cell == EMPTY_CELL || cell == letter)
            });
            if valid {
                return Some(path);
            }
        }
    }

    None
}

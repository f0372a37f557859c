//! Path construction and start-cell boundary computation
//!
//! A path is the ordered cell sequence a word occupies: consecutive cells
//! differ by exactly the direction's unit delta, and the first element is the
//! start cell. Coordinates are signed so the geometric math is total; grid
//! access bounds-checks separately.

use crate::spatial::direction::Direction;

/// A grid cell coordinate (`x`: column, `y`: row, 0-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

/// Inclusive bounding box of legal start cells for a word placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartBounds {
    /// Leftmost legal start column
    pub min_x: usize,
    /// Rightmost legal start column
    pub max_x: usize,
    /// Topmost legal start row
    pub min_y: usize,
    /// Bottommost legal start row
    pub max_y: usize,
}

/// Build a path of `length` cells from a start cell along a direction
///
/// Each cell is offset from the previous by the direction's unit delta.
/// A length of 1 yields a single-cell path; 0 yields an empty path.
pub fn create_path(x: i32, y: i32, direction: Direction, length: usize) -> Vec<Position> {
    let mut path = Vec::with_capacity(length);
    for step in 0..length as i32 {
        path.push(Position {
            x: x + step * direction.dx(),
            y: y + step * direction.dy(),
        });
    }
    path
}

/// Derive the path between two cells, or `None` if they are not collinear
///
/// Valid only when the displacement is purely horizontal, purely vertical,
/// or an exact diagonal; the path length is `max(|dx|, |dy|) + 1`.
/// Coincident endpoints yield a single-cell path.
pub fn path_between(start: Position, end: Position) -> Option<Vec<Position>> {
    let h_dist = end.x - start.x;
    let v_dist = end.y - start.y;
    let build = |direction, length: i32| create_path(start.x, start.y, direction, length as usize);

    if h_dist == v_dist {
        if v_dist > 0 {
            Some(build(Direction::SouthEast, v_dist + 1))
        } else {
            Some(build(Direction::NorthWest, -v_dist + 1))
        }
    } else if v_dist == -h_dist {
        if v_dist > 0 {
            Some(build(Direction::SouthWest, v_dist + 1))
        } else {
            Some(build(Direction::NorthEast, -v_dist + 1))
        }
    } else if h_dist == 0 {
        if v_dist > 0 {
            Some(build(Direction::South, v_dist + 1))
        } else {
            Some(build(Direction::North, -v_dist + 1))
        }
    } else if v_dist == 0 {
        if h_dist > 0 {
            Some(build(Direction::East, h_dist + 1))
        } else {
            Some(build(Direction::West, -h_dist + 1))
        }
    } else {
        None
    }
}

/// Compute the legal start-cell bounding box for a word placement
///
/// Each directional component tightens the corresponding axis so the word
/// fits inside the grid without crossing an edge; axes without a component
/// keep the full-grid bound. Returns `None` when the word cannot fit in this
/// orientation (a bound falls outside the grid, or the box is empty).
pub fn start_bounds(
    length: usize,
    direction: Direction,
    cols: usize,
    rows: usize,
) -> Option<StartBounds> {
    let cols = cols as i32;
    let rows = rows as i32;
    let length = length as i32;

    let (mut min_x, mut max_x) = (0, cols - 1);
    let (mut min_y, mut max_y) = (0, rows - 1);

    match direction.dx() {
        1 => (min_x, max_x) = (0, cols - length),
        -1 => (min_x, max_x) = (length - 1, cols - 1),
        _ => {}
    }
    match direction.dy() {
        1 => (min_y, max_y) = (0, rows - length),
        -1 => (min_y, max_y) = (length - 1, rows - 1),
        _ => {}
    }

    let x_in_grid = (0..=cols).contains(&min_x) && (0..=cols).contains(&max_x);
    let y_in_grid = (0..=rows).contains(&min_y) && (0..=rows).contains(&max_y);
    if !x_in_grid || !y_in_grid || min_x > max_x || min_y > max_y {
        return None;
    }

    Some(StartBounds {
        min_x: min_x as usize,
        max_x: max_x as usize,
        min_y: min_y as usize,
        max_y: max_y as usize,
    })
}

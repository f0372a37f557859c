//! Property tests for the geometry and random-source invariants

use proptest::prelude::*;
use proptest::sample::select;
use wordsearch::spatial::direction::ALL_DIRECTIONS;
use wordsearch::spatial::path::{create_path, path_between, start_bounds};
use wordsearch::{Direction, Position, Seeder};

fn direction_strategy() -> impl Strategy<Value = Direction> {
    select(ALL_DIRECTIONS.to_vec())
}

proptest! {
    #[test]
    fn prop_path_between_round_trips_create_path(
        x in -20..20_i32,
        y in -20..20_i32,
        direction in direction_strategy(),
        length in 1..12_usize,
    ) {
        let path = create_path(x, y, direction, length);
        let last = path.last().copied();
        prop_assert!(last.is_some());
        if let Some(last) = last {
            prop_assert_eq!(path_between(Position { x, y }, last), Some(path));
        }
    }

    #[test]
    fn prop_start_bounds_box_yields_in_bounds_paths(
        cols in 1..15_usize,
        rows in 1..15_usize,
        direction in direction_strategy(),
        length in 1..15_usize,
    ) {
        if let Some(bounds) = start_bounds(length, direction, cols, rows) {
            for x in bounds.min_x..=bounds.max_x {
                for y in bounds.min_y..=bounds.max_y {
                    let path = create_path(x as i32, y as i32, direction, length);
                    for cell in path {
                        prop_assert!(cell.x >= 0 && (cell.x as usize) < cols);
                        prop_assert!(cell.y >= 0 && (cell.y as usize) < rows);
                    }
                }
            }
        } else {
            // None means the word cannot fit: it is longer than the grid's
            // extent along this direction.
            let span_x = if direction.dx() == 0 { usize::MAX } else { cols };
            let span_y = if direction.dy() == 0 { usize::MAX } else { rows };
            prop_assert!(length > span_x.min(span_y));
        }
    }

    #[test]
    fn prop_shuffled_is_a_permutation(items in proptest::collection::vec(0..100_u32, 0..40), seed: u64) {
        let mut seeder = Seeder::from_seed(seed);
        let mut shuffled = seeder.shuffled(&items);

        prop_assert_eq!(shuffled.len(), items.len());
        let mut expected = items;
        expected.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn prop_pick_stays_in_inclusive_range(seed: u64, max in 0..1000_usize) {
        let mut seeder = Seeder::from_seed(seed);
        for _ in 0..50 {
            prop_assert!(seeder.pick(max) <= max);
        }
    }
}

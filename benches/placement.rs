//! Performance measurement for single-word placement search

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wordsearch::algorithm::placement::find_path;
use wordsearch::spatial::direction::ALL_DIRECTIONS;
use wordsearch::{Grid, Seeder};

/// Measures placement into an empty 20x20 grid
fn bench_place_in_empty_grid(c: &mut Criterion) {
    let grid = Grid::new(20, 20);
    c.bench_function("place_in_empty_20x20", |b| {
        let mut seeder = Seeder::from_seed(12345);
        b.iter(|| {
            black_box(find_path(
                "GENERATION",
                &grid,
                &ALL_DIRECTIONS,
                0.3,
                &mut seeder,
            ));
        });
    });
}

/// Measures the exhaustive no-path case, which scans every direction and cell
fn bench_exhaust_unplaceable_word(c: &mut Criterion) {
    // A grid with no empty cells rejects every candidate start position
    let mut fill_seeder = Seeder::from_seed(1);
    let grid = Grid::new(8, 8).fill(true, &mut fill_seeder);
    c.bench_function("exhaust_unplaceable_word", |b| {
        let mut seeder = Seeder::from_seed(12345);
        b.iter(|| {
            black_box(find_path(
                "QQQQQ",
                &grid,
                &ALL_DIRECTIONS,
                0.3,
                &mut seeder,
            ));
        });
    });
}

criterion_group!(benches, bench_place_in_empty_grid, bench_exhaust_unplaceable_word);
criterion_main!(benches);

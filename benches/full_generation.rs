//! Performance measurement for complete puzzle generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use wordsearch::{WordSearchConfig, generate};

fn fixture_config() -> WordSearchConfig {
    WordSearchConfig {
        cols: 15,
        rows: 15,
        dictionary: [
            "puzzle", "letter", "search", "random", "engine", "compass", "retry", "placement",
            "grid", "scanner", "diagonal", "forward", "backward", "shuffle", "seed", "path",
            "boundary", "generate", "sentence", "word",
        ]
        .iter()
        .map(|w| (*w).to_string())
        .collect(),
        seed: Some("bench".to_string()),
        ..WordSearchConfig::default()
    }
}

/// Measures a full 15x15 generation with 20 dictionary words
fn bench_generate_15x15(c: &mut Criterion) {
    let config = fixture_config();
    c.bench_function("generate_15x15", |b| {
        b.iter(|| {
            let Ok(puzzle) = generate(&config) else {
                return;
            };
            black_box(puzzle.words().len());
        });
    });
}

/// Measures generation under forbidden-word rescans
fn bench_generate_with_forbidden_words(c: &mut Criterion) {
    let config = WordSearchConfig {
        forbidden_words: vec!["XQ".to_string(), "ZJ".to_string()],
        ..fixture_config()
    };
    c.bench_function("generate_15x15_forbidden", |b| {
        b.iter(|| {
            let Ok(puzzle) = generate(&config) else {
                return;
            };
            black_box(puzzle.forbidden_words_found().len());
        });
    });
}

criterion_group!(
    benches,
    bench_generate_15x15,
    bench_generate_with_forbidden_words
);
criterion_main!(benches);

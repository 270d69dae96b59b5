use std::time::Instant;

use rayon::prelude::*;

use reversi_core::{perft, Board, Color};

const FULL_PERFT_ENV: &str = "FULL_PERFT";

// Published path counts from the standard 8x8 starting position.
const CASES: &[(u8, u64)] = &[
    (1, 4),
    (2, 12),
    (3, 56),
    (4, 244),
    (5, 1396),
    (6, 8200),
];
const DEEP_CASES: &[(u8, u64)] = &[(7, 55_092), (8, 390_216)];

#[test]
fn perft_matches_published_8x8_counts() {
    let full = std::env::var(FULL_PERFT_ENV).is_ok();
    let mut cases: Vec<(u8, u64)> = CASES.to_vec();
    if full {
        cases.extend_from_slice(DEEP_CASES);
    } else {
        eprintln!(
            "Skipping depths beyond {}; set {}=1 to run all.",
            CASES.last().map(|(d, _)| *d).unwrap_or(0),
            FULL_PERFT_ENV
        );
    }

    cases.par_iter().for_each(|&(depth, expected)| {
        let board = Board::new(8).unwrap();
        let start = Instant::now();
        let got = perft(&board, Color::Black, depth);
        assert_eq!(
            got, expected,
            "perft mismatch at depth {}: expected {}, got {}",
            depth, expected, got
        );
        println!(
            "depth {} done: {} paths, elapsed {:.3?}",
            depth,
            got,
            start.elapsed()
        );
    });
}

#[test]
fn perft_depth_zero_is_one_path() {
    let board = Board::new(8).unwrap();
    assert_eq!(perft(&board, Color::Black, 0), 1);
    assert_eq!(perft(&board, Color::White, 0), 1);
}

#[test]
fn perft_counts_opening_moves_on_small_boards() {
    // both colors open with four candidate cells regardless of size
    for size in [4, 6] {
        let board = Board::new(size).unwrap();
        assert_eq!(perft(&board, Color::Black, 1), 4);
        assert_eq!(perft(&board, Color::White, 1), 4);
    }
}

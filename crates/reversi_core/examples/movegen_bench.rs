//! Move generation benchmark for profiling with cargo-flamegraph.
//!
//! This benchmark focuses specifically on move generation performance,
//! running many iterations of legal_moves_into on various positions.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p reversi_core

use reversi_core::{apply_move, has_any_legal_move, legal_moves, legal_moves_into, Board, Color};
use std::time::Instant;

/// Game phases sampled by playing the first legal move from the start.
/// (label, board size, plies to advance)
const TEST_POSITIONS: &[(&str, u8, u32)] = &[
    ("Start 8x8", 8, 0),
    ("Opening 8x8", 8, 4),
    ("Early middlegame 8x8", 8, 12),
    ("Middlegame 8x8", 8, 24),
    ("Late middlegame 8x8", 8, 40),
    ("Start 6x6", 6, 0),
    ("Middlegame 6x6", 6, 14),
    ("Start 12x12", 12, 0),
    ("Middlegame 12x12", 12, 30),
];

const ITERATIONS: usize = 100_000;

fn main() {
    println!("=== Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut move_buf = Vec::with_capacity(64);
    let mut total_moves = 0usize;
    let mut total_time = std::time::Duration::ZERO;

    for &(name, size, plies) in TEST_POSITIONS {
        let (board, to_move) = match advance(size, plies) {
            Ok(position) => position,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        print!("{name:.<25}");

        let start = Instant::now();
        let mut moves_generated = 0usize;

        for _ in 0..ITERATIONS {
            legal_moves_into(&board, to_move, &mut move_buf);
            moves_generated += move_buf.len();
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let pps = if elapsed.as_secs_f64() > 0.0 {
            ITERATIONS as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {moves_per_pos:>5.1} moves/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    let avg_pps = if total_time.as_secs_f64() > 0.0 {
        (ITERATIONS * TEST_POSITIONS.len()) as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_moves} moves in {total_time:.3?} ({avg_pps:.0} positions/sec)");
}

/// Plays the first legal move for `plies` plies from the starting position,
/// passing when the side to move is blocked and stopping early if neither
/// side can play.
fn advance(size: u8, plies: u32) -> Result<(Board, Color), reversi_core::GameError> {
    let mut board = Board::new(size)?;
    let mut to_move = Color::Black;

    for _ in 0..plies {
        match legal_moves(&board, to_move).first() {
            Some(&mv) => {
                apply_move(&mut board, mv, to_move)?;
            }
            None if has_any_legal_move(&board, to_move.other()) => {}
            None => break,
        }
        to_move = to_move.other();
    }

    Ok((board, to_move))
}

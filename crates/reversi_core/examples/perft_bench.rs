//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p reversi_core -- [depth] [size]
//!
//! Examples:
//!   # Default: depth 9 across several board sizes
//!   cargo flamegraph --example perft_bench -p reversi_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p reversi_core -- 10
//!
//!   # Custom depth on a single board size
//!   cargo flamegraph --example perft_bench -p reversi_core -- 9 8

use reversi_core::{perft, Board, Color};
use std::env;
use std::time::Instant;

/// Board sizes for comprehensive profiling
const SUITE_SIZES: &[u8] = &[6, 8, 10];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(9);

    // If a board size is provided, use single position mode
    if let Some(size) = args.get(2).and_then(|s| s.parse().ok()) {
        run_single_size(size, depth);
    } else {
        run_all_sizes(depth);
    }
}

fn run_single_size(size: u8, depth: u8) {
    let board = match Board::new(size) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    println!("Board: {size}x{size}");
    println!("Depth: {depth}");
    println!();

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&board, Color::Black, depth.saturating_sub(2));
    }

    let start = Instant::now();
    let paths = perft(&board, Color::Black, depth);
    let elapsed = start.elapsed();

    let pps = if elapsed.as_secs_f64() > 0.0 {
        paths as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!("Paths: {paths}");
    println!("Time: {elapsed:.3?}");
    println!("PPS: {pps:.0}");
}

fn run_all_sizes(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_paths = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for &size in SUITE_SIZES {
        let board = match Board::new(size) {
            Ok(board) => board,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        print!("{:.<30}", format!("{size}x{size} start"));

        let start = Instant::now();
        let paths = perft(&board, Color::Black, depth);
        let elapsed = start.elapsed();

        total_paths += paths;
        total_time += elapsed;

        let pps = if elapsed.as_secs_f64() > 0.0 {
            paths as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {paths:>12} paths in {elapsed:>8.3?} ({pps:>10.0} pps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_pps = if total_time.as_secs_f64() > 0.0 {
        total_paths as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_paths} paths in {total_time:.3?} ({total_pps:.0} pps)");
}

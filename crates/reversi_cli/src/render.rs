//! Text rendering for the interactive loop.

use std::collections::HashSet;
use std::fmt::Write as _;

use reversi_core::{Board, Color, Coord};

/// Color name as shown to the player.
pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::Black => "Black",
        Color::White => "White",
    }
}

/// Disk counts in the fixed reporting order.
pub fn counts_line(black: u32, white: u32) -> String {
    format!("White: {white} - Black: {black}")
}

/// Draws the grid with column letters, 1-based row numbers and a `*`
/// on every cell in `marks`. The result ends with a newline.
pub fn render_board(board: &Board, marks: &HashSet<Coord>) -> String {
    let size = board.size();

    let mut rail = String::from("   +");
    for _ in 0..size {
        rail.push_str("---+");
    }
    rail.push('\n');

    let mut out = String::from("     ");
    for col in 0..size {
        if col > 0 {
            out.push_str("   ");
        }
        out.push((b'a' + col) as char);
    }
    out.push('\n');

    for (coord, cell) in board.cells() {
        if coord.col == 0 {
            out.push_str(&rail);
            let _ = write!(out, "{:>2} |", coord.row as u16 + 1);
        }
        let shown = if marks.contains(&coord) {
            '*'
        } else {
            match cell {
                Some(Color::Black) => 'B',
                Some(Color::White) => 'W',
                None => ' ',
            }
        };
        let _ = write!(out, " {shown} |");
        if coord.col + 1 == size {
            out.push('\n');
        }
    }
    out.push_str(&rail);
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;

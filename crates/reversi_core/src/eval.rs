use crate::board::Board;
use crate::types::Color;

/// Material evaluation: `player`'s disk count minus the opponent's.
/// Symmetric by construction, so evaluate(b, a) == -evaluate(b, a.other()).
pub fn evaluate(board: &Board, player: Color) -> i32 {
    let (black, white) = board.count_disks();
    let diff = black as i32 - white as i32;
    match player {
        Color::Black => diff,
        Color::White => -diff,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;

//! Minimax search with alpha-beta pruning
//!
//! Two mutually recursive roles walk the game tree: `maximize` plays the
//! searching color, `minimize` answers for the opponent. Every node owns
//! a private board copy, so the caller's board is never touched. A side
//! with no move passes without spending a ply; when neither side can
//! move the node is scored as final.

use reversi_core::{
    apply_move, evaluate, has_any_legal_move, legal_moves_into, Board, Color, Coord,
};

/// Searches the position and returns the best move with its backed-up
/// score from `to_move`'s perspective, or None when `to_move` cannot play.
///
/// Candidate moves are explored in ascending (row, column) order and a
/// later candidate replaces the best only on a strictly better value, so
/// the first best move in that order wins ties. Together with the open
/// root window this returns exactly what an unpruned minimax would.
pub fn pick_best_move(
    board: &Board,
    to_move: Color,
    depth: u8,
    nodes: &mut u64,
) -> Option<(Coord, i32)> {
    debug_assert!(depth > 0, "search depth is validated at session start");

    let mut moves = Vec::with_capacity(board.size() as usize * 2);
    legal_moves_into(board, to_move, &mut moves);
    if moves.is_empty() {
        return None;
    }

    let mut best: Option<(Coord, i32)> = None;
    let mut alpha = i32::MIN / 2;
    let beta = i32::MAX / 2;

    for &mv in &moves {
        let mut child = board.clone();
        apply_move(&mut child, mv, to_move).expect("generated moves must apply");
        *nodes += 1;

        let value = minimize(&child, to_move, alpha, beta, 1, depth, nodes);

        if best.map_or(true, |(_, b)| value > b) {
            best = Some((mv, value));
        }
        if value > alpha {
            alpha = value;
        }
    }

    best
}

/// Node where the searching color is to move: picks the highest child.
fn maximize(
    board: &Board,
    me: Color,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    limit: u8,
    nodes: &mut u64,
) -> i32 {
    if ply == limit {
        return evaluate(board, me);
    }

    let mut moves = Vec::with_capacity(board.size() as usize * 2);
    legal_moves_into(board, me, &mut moves);
    if moves.is_empty() {
        if !has_any_legal_move(board, me.other()) {
            return evaluate(board, me);
        }
        // pass: the opponent moves on, no ply spent
        return minimize(board, me, alpha, beta, ply, limit, nodes);
    }

    let mut best = i32::MIN / 2;
    for &mv in &moves {
        let mut child = board.clone();
        apply_move(&mut child, mv, me).expect("generated moves must apply");
        *nodes += 1;

        let value = minimize(&child, me, alpha, beta, ply + 1, limit, nodes);

        if value > best {
            best = value;
        }
        if best > alpha {
            alpha = best;
        }
        if alpha >= beta {
            break; // beta cutoff
        }
    }
    best
}

/// Node where the opponent is to move: picks the lowest child.
fn minimize(
    board: &Board,
    me: Color,
    alpha: i32,
    mut beta: i32,
    ply: u8,
    limit: u8,
    nodes: &mut u64,
) -> i32 {
    if ply == limit {
        return evaluate(board, me);
    }

    let opponent = me.other();
    let mut moves = Vec::with_capacity(board.size() as usize * 2);
    legal_moves_into(board, opponent, &mut moves);
    if moves.is_empty() {
        if !has_any_legal_move(board, me) {
            return evaluate(board, me);
        }
        return maximize(board, me, alpha, beta, ply, limit, nodes);
    }

    let mut best = i32::MAX / 2;
    for &mv in &moves {
        let mut child = board.clone();
        apply_move(&mut child, mv, opponent).expect("generated moves must apply");
        *nodes += 1;

        let value = maximize(&child, me, alpha, beta, ply + 1, limit, nodes);

        if value < best {
            best = value;
        }
        if best < beta {
            beta = best;
        }
        if beta <= alpha {
            break; // alpha cutoff
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

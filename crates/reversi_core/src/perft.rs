use crate::board::Board;
use crate::movegen::{apply_move, has_any_legal_move, legal_moves_into};
use crate::types::{Color, Coord};

/// Pure perft path count.
/// Counts all distinct move sequences of `depth` placed disks from the
/// given position. A pass consumes no ply; when both sides are blocked
/// the line ends and counts as one.
pub fn perft(board: &Board, to_move: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(board: &Board, to_move: Color, depth: u8, layers: &mut [Vec<Coord>]) -> u64 {
        if depth == 0 {
            return 1;
        }
        if !has_any_legal_move(board, to_move) {
            if !has_any_legal_move(board, to_move.other()) {
                return 1;
            }
            return inner(board, to_move.other(), depth, layers);
        }

        let (buf, rest) = layers
            .split_first_mut()
            .expect("perft requires one buffer per remaining ply");

        buf.clear();
        legal_moves_into(board, to_move, buf);

        let mut nodes = 0u64;
        for &mv in buf.iter() {
            let mut child = board.clone();
            apply_move(&mut child, mv, to_move).expect("generated moves must apply");
            nodes += inner(&child, to_move.other(), depth - 1, rest);
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(board.size() as usize * 2); depth as usize];
    inner(board, to_move, depth, &mut layers[..])
}

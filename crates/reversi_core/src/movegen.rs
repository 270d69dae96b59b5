use crate::board::Board;
use crate::error::GameError;
use crate::types::{Color, Coord};

/// The eight scan directions as (row, column) steps.
const DIRECTIONS: [(i16, i16); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate all legal moves, returning a freshly allocated vector in
/// canonical order (ascending row, then ascending column).
pub fn legal_moves(board: &Board, player: Color) -> Vec<Coord> {
    let mut out = Vec::with_capacity(board.size() as usize * 2);
    legal_moves_into(board, player, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &Board, player: Color, out: &mut Vec<Coord>) {
    out.clear();
    for coord in board.coords() {
        if is_legal_move(board, coord, player) {
            out.push(coord);
        }
    }
}

/// A move is legal iff the cell is empty and at least one direction
/// brackets a run of opponent disks.
pub fn is_legal_move(board: &Board, coord: Coord, player: Color) -> bool {
    if !board.contains(coord) || board.at(coord).is_some() {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&dir| bracket_end(board, coord, player, dir).is_some())
}

pub fn has_any_legal_move(board: &Board, player: Color) -> bool {
    board.coords().any(|coord| is_legal_move(board, coord, player))
}

/// Walks from `origin` along `dir`. Returns the terminating own-color disk
/// if the line holds one or more opponent disks with no gap before it.
fn bracket_end(board: &Board, origin: Coord, player: Color, dir: (i16, i16)) -> Option<Coord> {
    let (dr, dc) = dir;
    let size = board.size();
    let mut cur = origin.offset(dr, dc, size)?;
    let mut seen_opponent = false;
    loop {
        match board.at(cur) {
            Some(c) if c == player => return if seen_opponent { Some(cur) } else { None },
            Some(_) => seen_opponent = true,
            None => return None,
        }
        cur = cur.offset(dr, dc, size)?;
    }
}

/// Places a disk for `player` at `coord` and flips every bracketed line.
/// Returns how many disks were flipped. Rejects out-of-bounds or illegal
/// moves before touching the board, so a failed call changes nothing.
pub fn apply_move(board: &mut Board, coord: Coord, player: Color) -> Result<u32, GameError> {
    if !board.contains(coord) {
        return Err(GameError::OutOfBounds {
            coord,
            size: board.size(),
        });
    }
    if !is_legal_move(board, coord, player) {
        return Err(GameError::IllegalMove { coord });
    }

    let size = board.size();
    let mut flipped = 0u32;
    board.put(coord, Some(player));
    for &(dr, dc) in &DIRECTIONS {
        if let Some(end) = bracket_end(board, coord, player, (dr, dc)) {
            let mut cur = coord.offset(dr, dc, size);
            while let Some(c) = cur {
                if c == end {
                    break;
                }
                board.put(c, Some(player));
                flipped += 1;
                cur = c.offset(dr, dc, size);
            }
        }
    }
    Ok(flipped)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

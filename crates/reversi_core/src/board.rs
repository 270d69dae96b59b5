use crate::error::GameError;
use crate::types::{Color, Coord};

/// An N x N Reversi board. Cells hold `Some(color)` for a disk or `None`
/// for empty. Plain value semantics: `clone()` yields a fully independent
/// copy, which is how the search owns one board per frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Option<Color>>, // row-major, size * size entries
}

impl Board {
    /// Creates a board with the standard center cross: White on the
    /// center diagonal pair, Black on the other two center cells.
    pub fn new(size: u8) -> Result<Self, GameError> {
        if size == 0 || size % 2 != 0 {
            return Err(GameError::InvalidSize { size });
        }
        let mut board = Board {
            size,
            cells: vec![None; size as usize * size as usize],
        };
        let c = size / 2;
        board.put(Coord::new(c - 1, c - 1), Some(Color::White));
        board.put(Coord::new(c, c), Some(Color::White));
        board.put(Coord::new(c - 1, c), Some(Color::Black));
        board.put(Coord::new(c, c - 1), Some(Color::Black));
        Ok(board)
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Bounds-checked cell read.
    pub fn get(&self, coord: Coord) -> Result<Option<Color>, GameError> {
        if !self.contains(coord) {
            return Err(GameError::OutOfBounds {
                coord,
                size: self.size,
            });
        }
        Ok(self.at(coord))
    }

    /// Bounds-checked cell write.
    pub fn set(&mut self, coord: Coord, cell: Option<Color>) -> Result<(), GameError> {
        if !self.contains(coord) {
            return Err(GameError::OutOfBounds {
                coord,
                size: self.size,
            });
        }
        self.put(coord, cell);
        Ok(())
    }

    /// Unchecked read. Callers pass coordinates produced by `Coord::offset`
    /// or `coords()`, which are in bounds by construction.
    pub(crate) fn at(&self, coord: Coord) -> Option<Color> {
        self.cells[self.index(coord)]
    }

    pub(crate) fn put(&mut self, coord: Coord, cell: Option<Color>) {
        let i = self.index(coord);
        self.cells[i] = cell;
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row as usize * self.size as usize + coord.col as usize
    }

    /// All coordinates in canonical order: ascending row, then column.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// The full grid in canonical order, for renderers.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<Color>)> + '_ {
        self.coords().map(move |coord| (coord, self.at(coord)))
    }

    /// (black, white) disk counts by full scan.
    pub fn count_disks(&self) -> (u32, u32) {
        let mut black = 0;
        let mut white = 0;
        for cell in &self.cells {
            match cell {
                Some(Color::Black) => black += 1,
                Some(Color::White) => white += 1,
                None => {}
            }
        }
        (black, white)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

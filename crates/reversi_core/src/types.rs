#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::Black => 0,
            Color::White => 1,
        }
    }
}

/// Zero-based (row, column) cell address. Ordering is row-major, which is
/// also the canonical move iteration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Steps by (dr, dc), returning None when the result leaves an
    /// N x N board. All directional scans stay in bounds through this.
    pub fn offset(self, dr: i16, dc: i16, size: u8) -> Option<Coord> {
        let row = self.row as i16 + dr;
        let col = self.col as i16 + dc;
        if (0..size as i16).contains(&row) && (0..size as i16).contains(&col) {
            Some(Coord::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

// Helpers for the human-facing cell notation: column letter plus 1-based
// row number, e.g. "d3" is column 3, row 2.

pub fn coord_to_name(coord: Coord) -> String {
    let c = (b'a' + coord.col) as char;
    format!("{c}{}", coord.row as u16 + 1)
}

pub fn name_to_coord(name: &str, size: u8) -> Option<Coord> {
    let b = name.as_bytes();
    if b.len() < 2 {
        return None;
    }
    let col = match b[0] {
        c @ b'a'..=b'z' => c - b'a',
        c @ b'A'..=b'Z' => c - b'A',
        _ => return None,
    };
    // bare digits only: parse alone would also take a leading sign
    if !b[1..].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let row: u16 = name[1..].parse().ok()?;
    if col >= size || row == 0 || row > size as u16 {
        return None;
    }
    Some(Coord::new(row as u8 - 1, col))
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

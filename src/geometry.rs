//! Board coordinates and the pure geometry helpers built on them.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// A cell on the board. Rows display as letters (`A` = 0), columns as
/// 1-based numbers, so `Coord::new(0, 0)` is `A1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Cell shifted by (`dr`, `dc`), or `None` when it leaves a `size`×`size` board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8, size: u8) -> Option<Coord> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if (0..size as i16).contains(&row) && (0..size as i16).contains(&col) {
            Some(Coord::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Chebyshev distance between two cells.
    #[inline]
    pub fn chebyshev(self, other: Coord) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Row-major index on a `size`×`size` board.
    #[inline]
    pub fn index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = if self.row < 26 {
            (b'A' + self.row) as char
        } else {
            '?'
        };
        write!(f, "{}{}", row, self.col as u16 + 1)
    }
}

/// Errors produced while parsing a cell token such as `B7`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    Empty,
    InvalidRow(char),
    InvalidColumn,
}

impl fmt::Display for CoordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordParseError::Empty => write!(f, "Empty coordinate"),
            CoordParseError::InvalidRow(ch) => write!(f, "Invalid row letter '{}'", ch),
            CoordParseError::InvalidColumn => write!(f, "Column must be a number starting at 1"),
        }
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let row_ch = chars.next().ok_or(CoordParseError::Empty)?.to_ascii_uppercase();
        if !row_ch.is_ascii_uppercase() {
            return Err(CoordParseError::InvalidRow(row_ch));
        }
        let col: u8 = chars
            .as_str()
            .parse()
            .map_err(|_| CoordParseError::InvalidColumn)?;
        if col == 0 {
            return Err(CoordParseError::InvalidColumn);
        }
        Ok(Coord::new(row_ch as u8 - b'A', col - 1))
    }
}

const NEIGHBOR_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const ORTHOGONAL_OFFSETS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// True iff both components lie in `[0, size)`.
#[inline]
pub fn in_bounds(coord: Coord, size: u8) -> bool {
    coord.row < size && coord.col < size
}

/// Cells at Chebyshev distance 1, clipped to the board.
pub fn neighbors8(coord: Coord, size: u8) -> impl Iterator<Item = Coord> {
    NEIGHBOR_OFFSETS
        .into_iter()
        .filter_map(move |(dr, dc)| coord.offset(dr, dc, size))
}

/// The up-to-four cells sharing an edge with `coord`.
pub fn orthogonal_neighbors(coord: Coord, size: u8) -> impl Iterator<Item = Coord> {
    ORTHOGONAL_OFFSETS
        .into_iter()
        .filter_map(move |(dr, dc)| coord.offset(dr, dc, size))
}

/// A run of cells forming one horizontal or vertical line without gaps.
/// Zero or one cells always qualify.
pub fn is_straight_and_contiguous(cells: &[Coord]) -> bool {
    let Some(first) = cells.first() else {
        return true;
    };
    if cells.len() == 1 {
        return true;
    }
    let along: Vec<u8> = if cells.iter().all(|c| c.row == first.row) {
        cells.iter().map(|c| c.col).collect()
    } else if cells.iter().all(|c| c.col == first.col) {
        cells.iter().map(|c| c.row).collect()
    } else {
        return false;
    };
    is_unbroken_run(along)
}

fn is_unbroken_run(mut values: Vec<u8>) -> bool {
    values.sort_unstable();
    values.windows(2).all(|w| w[0].checked_add(1) == Some(w[1]))
}

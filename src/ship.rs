//! Ships: straight runs of cells owned by one side.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellSet;
use crate::geometry::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship as the set of cells it covers.
///
/// Construction never checks shape or bounds; a whole fleet is checked at
/// once by [`crate::validate_fleet`]. Whether a ship is destroyed is derived
/// from the owner's hit-set, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    cells: Vec<Coord>,
}

impl Ship {
    pub fn new(cells: Vec<Coord>) -> Self {
        Self { cells }
    }

    /// A ship of up to `len` cells extending right or down from `origin`.
    ///
    /// The run stops short where a coordinate would leave the `u8` range.
    pub fn straight(origin: Coord, len: u8, orientation: Orientation) -> Self {
        let cells = (0..len)
            .map_while(|i| match orientation {
                Orientation::Horizontal => {
                    origin.col.checked_add(i).map(|col| Coord::new(origin.row, col))
                }
                Orientation::Vertical => {
                    origin.row.checked_add(i).map(|row| Coord::new(row, origin.col))
                }
            })
            .collect();
        Self { cells }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Occupancy mask of the ship.
    pub fn mask(&self) -> CellSet {
        self.cells.iter().copied().collect()
    }

    /// True once every cell of the ship is in `hit_set`.
    pub fn is_destroyed(&self, hit_set: &CellSet) -> bool {
        self.cells.iter().all(|&c| hit_set.contains(c))
    }
}

/// Comma-joined cell tokens, e.g. `A1,A2,A3`.
impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, coord) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", coord)?;
        }
        Ok(())
    }
}

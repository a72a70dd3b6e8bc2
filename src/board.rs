//! Shot-grids and move resolution.

use alloc::string::String;
use core::fmt;
use log::{debug, info};

use crate::bitboard::CellSet;
use crate::common::ShotOutcome;
use crate::config::GameConfig;
use crate::fleet::Fleet;
use crate::geometry::{in_bounds, neighbors8, Coord};

/// What a shooter knows about one cell of the opponent's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Unknown,
    Hit,
    Miss,
}

impl Cell {
    /// Single-letter code used by the turn log.
    pub fn symbol(self) -> char {
        match self {
            Cell::Unknown => 'U',
            Cell::Hit => 'H',
            Cell::Miss => 'M',
        }
    }

    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'U' => Some(Cell::Unknown),
            'H' => Some(Cell::Hit),
            'M' => Some(Cell::Miss),
            _ => None,
        }
    }
}

/// Errors returned when reading a serialized shot-grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    WrongLength { expected: usize, actual: usize },
    UnknownSymbol(char),
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridParseError::WrongLength { expected, actual } => {
                write!(f, "Expected {} cells, got {}", expected, actual)
            }
            GridParseError::UnknownSymbol(ch) => write!(f, "Unknown cell symbol '{}'", ch),
        }
    }
}

/// One player's record of Unknown/Hit/Miss over the opponent's board.
///
/// Cells only ever move from Unknown to Hit or Miss. Cells off the board
/// are never Unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShotGrid {
    size: u8,
    hits: CellSet,
    misses: CellSet,
}

impl ShotGrid {
    /// All-unknown grid for the board described by `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            size: config.board_size(),
            hits: CellSet::new(),
            misses: CellSet::new(),
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn get(&self, coord: Coord) -> Cell {
        if !in_bounds(coord, self.size) {
            Cell::Miss
        } else if self.hits.contains(coord) {
            Cell::Hit
        } else if self.misses.contains(coord) {
            Cell::Miss
        } else {
            Cell::Unknown
        }
    }

    pub fn hits(&self) -> CellSet {
        self.hits
    }

    pub fn misses(&self) -> CellSet {
        self.misses
    }

    /// Every cell that is no longer Unknown.
    pub fn resolved(&self) -> CellSet {
        self.hits | self.misses
    }

    /// Every Unknown cell on the board.
    pub fn unknown(&self) -> CellSet {
        CellSet::square(self.size) & !self.resolved()
    }

    // Only reached for on-board cells, and the board fits a CellSet.
    fn mark_hit(&mut self, coord: Coord) {
        let inserted = self.hits.insert(coord);
        debug_assert!(inserted.is_ok(), "{} is off the grid", coord);
    }

    fn mark_miss(&mut self, coord: Coord) {
        let inserted = self.misses.insert(coord);
        debug_assert!(inserted.is_ok(), "{} is off the grid", coord);
    }

    /// Row-major `U`/`H`/`M` string, one character per cell.
    pub fn serialize(&self) -> String {
        let mut out = String::with_capacity(self.size as usize * self.size as usize);
        for row in 0..self.size {
            for col in 0..self.size {
                out.push(self.get(Coord::new(row, col)).symbol());
            }
        }
        out
    }

    /// Rebuild a grid from [`ShotGrid::serialize`] output.
    pub fn deserialize(config: &GameConfig, text: &str) -> Result<Self, GridParseError> {
        let size = config.board_size();
        let expected = size as usize * size as usize;
        let actual = text.chars().count();
        if actual != expected {
            return Err(GridParseError::WrongLength { expected, actual });
        }
        let mut grid = Self::new(config);
        for (idx, ch) in text.chars().enumerate() {
            let coord = Coord::new((idx / size as usize) as u8, (idx % size as usize) as u8);
            match Cell::from_symbol(ch).ok_or(GridParseError::UnknownSymbol(ch))? {
                Cell::Unknown => {}
                Cell::Hit => grid.mark_hit(coord),
                Cell::Miss => grid.mark_miss(coord),
            }
        }
        Ok(grid)
    }
}

/// Resolve one shot at `coord` against `target`.
///
/// A cell already resolved on `grid`, or off the board, yields
/// [`ShotOutcome::AlreadyTried`] and changes nothing. Sinking a ship marks every Unknown cell around it as
/// Miss; existing marks are never overwritten.
pub fn apply_shot(
    coord: Coord,
    target: &Fleet,
    grid: &mut ShotGrid,
    hit_set: &mut CellSet,
) -> ShotOutcome {
    if grid.get(coord) != Cell::Unknown {
        return ShotOutcome::AlreadyTried;
    }

    let Some(ship) = target.ship_at(coord) else {
        grid.mark_miss(coord);
        debug!("shot at {} missed", coord);
        return ShotOutcome::Miss;
    };

    grid.mark_hit(coord);
    let struck = hit_set.insert(coord);
    debug_assert!(struck.is_ok(), "{} is off the hit-set", coord);

    if !ship.is_destroyed(hit_set) {
        debug!("shot at {} hit", coord);
        return ShotOutcome::Hit;
    }

    let size = grid.size();
    for &cell in ship.cells() {
        for n in neighbors8(cell, size) {
            if grid.get(n) == Cell::Unknown {
                grid.mark_miss(n);
            }
        }
    }
    info!("shot at {} sank a ship of length {}", coord, ship.len());
    ShotOutcome::Sink
}

//! Targeting state machine for the automated opponent.
//!
//! Random search until a hit, then the four orthogonal neighbours of that
//! hit, then the axis fixed by two hits until the ship sinks.

use alloc::vec;
use alloc::vec::Vec;
use core::{mem, slice};
use log::debug;
use rand::Rng;

use crate::bitboard::CellSet;
use crate::common::ShotOutcome;
use crate::config::GameConfig;
use crate::geometry::{in_bounds, orthogonal_neighbors, Coord};

/// Targeting mode together with the data that mode needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// No damaged ship known; search the whole board.
    Random,
    /// One hit on a ship still afloat; try its orthogonal neighbours.
    Hunt { origin: Coord, candidates: CellSet },
    /// Two or more collinear hits; extend the line at either end.
    Locked { chain: Vec<Coord>, candidates: CellSet },
}

/// The adversary's targeting engine.
///
/// It learns only through [`Adversary::observe`], so it can be driven by any
/// move resolver. The tried set covers every cell ever fired at and is kept
/// for the whole match.
#[derive(Debug, Clone)]
pub struct Adversary {
    size: u8,
    mode: Mode,
    tried: CellSet,
}

impl Adversary {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            size: config.board_size(),
            mode: Mode::Random,
            tried: CellSet::new(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Every cell this adversary has fired at.
    pub fn tried(&self) -> CellSet {
        self.tried
    }

    /// Hits on the ship currently being chased, oldest first.
    pub fn hit_chain(&self) -> &[Coord] {
        match &self.mode {
            Mode::Random => &[],
            Mode::Hunt { origin, .. } => slice::from_ref(origin),
            Mode::Locked { chain, .. } => chain,
        }
    }

    /// Cells queued for the next shot.
    pub fn candidates(&self) -> CellSet {
        match &self.mode {
            Mode::Random => CellSet::new(),
            Mode::Hunt { candidates, .. } | Mode::Locked { candidates, .. } => *candidates,
        }
    }

    /// Pick the next cell to fire at, uniformly among the eligible ones.
    ///
    /// Cells already tried and cells in `excluded` (known water or wreckage
    /// on the adversary's shot-grid) are never chosen. When the queued
    /// candidates run dry the engine drops back to random search. Returns
    /// `None` only once every cell of the board is ruled out.
    pub fn choose_target<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        excluded: &CellSet,
    ) -> Option<Coord> {
        let open = CellSet::square(self.size) & !self.tried & !*excluded;

        if let Mode::Hunt { candidates, .. } | Mode::Locked { candidates, .. } = &self.mode {
            if let Some(coord) = pick(*candidates & open, rng) {
                return Some(coord);
            }
            debug!("adversary candidates exhausted, back to random search");
            self.mode = Mode::Random;
        }
        pick(open, rng)
    }

    /// Feed back the outcome of the adversary's own shot at `coord`.
    ///
    /// Off-board coordinates are ignored.
    pub fn observe(&mut self, coord: Coord, outcome: ShotOutcome) {
        if !in_bounds(coord, self.size) {
            debug!("adversary ignored feedback for off-board {}", coord);
            return;
        }
        let tried = self.tried.insert(coord);
        debug_assert!(tried.is_ok(), "{} is off the tried set", coord);
        match outcome {
            ShotOutcome::Sink => {
                debug!("adversary sank a ship at {}, back to random search", coord);
                self.mode = Mode::Random;
            }
            ShotOutcome::Hit => self.on_hit(coord),
            ShotOutcome::Miss | ShotOutcome::AlreadyTried => {
                if let Mode::Hunt { candidates, .. } | Mode::Locked { candidates, .. } =
                    &mut self.mode
                {
                    candidates.remove(coord);
                }
            }
        }
    }

    fn on_hit(&mut self, coord: Coord) {
        self.mode = match mem::replace(&mut self.mode, Mode::Random) {
            Mode::Random => {
                let candidates: CellSet = orthogonal_neighbors(coord, self.size)
                    .filter(|&c| !self.tried.contains(c))
                    .collect();
                debug!("adversary hit {}, hunting around it", coord);
                Mode::Hunt { origin: coord, candidates }
            }
            Mode::Hunt { origin, .. } => self.lock(vec![origin, coord]),
            Mode::Locked { mut chain, .. } => {
                chain.push(coord);
                self.lock(chain)
            }
        };
    }

    /// Locked mode along the axis of the two most recent hits, queueing the
    /// cells just past both ends of the chain.
    fn lock(&self, chain: Vec<Coord>) -> Mode {
        let (a, b) = (chain[chain.len() - 2], chain[chain.len() - 1]);
        let ends = if a.row == b.row {
            let min = chain.iter().map(|c| c.col).min().unwrap_or(a.col);
            let max = chain.iter().map(|c| c.col).max().unwrap_or(a.col);
            [
                Coord::new(a.row, min).offset(0, -1, self.size),
                Coord::new(a.row, max).offset(0, 1, self.size),
            ]
        } else {
            let min = chain.iter().map(|c| c.row).min().unwrap_or(a.row);
            let max = chain.iter().map(|c| c.row).max().unwrap_or(a.row);
            [
                Coord::new(min, a.col).offset(-1, 0, self.size),
                Coord::new(max, a.col).offset(1, 0, self.size),
            ]
        };
        let candidates: CellSet = ends
            .into_iter()
            .flatten()
            .filter(|&c| !self.tried.contains(c))
            .collect();
        debug!("adversary locked on {:?}, next {:?}", chain, candidates);
        Mode::Locked { chain, candidates }
    }
}

/// Uniform pick over a cell set; row-major order keeps it seed-stable.
fn pick<R: Rng + ?Sized>(cells: CellSet, rng: &mut R) -> Option<Coord> {
    let count = cells.count_ones();
    if count == 0 {
        return None;
    }
    cells.nth(rng.random_range(0..count))
}

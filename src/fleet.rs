//! Fleet validation and random fleet generation.

use alloc::vec;
use alloc::vec::Vec;
use log::{debug, warn};
use rand::Rng;

use crate::bitboard::CellSet;
use crate::common::ValidationError;
use crate::config::GameConfig;
use crate::geometry::{in_bounds, is_straight_and_contiguous, neighbors8, Coord};
use crate::ship::{Orientation, Ship};

const MAX_FLEET_ATTEMPTS: usize = 1000;
const MAX_SHIP_ATTEMPTS: usize = 100;

/// Check a whole fleet against the placement rules.
///
/// Checks run in a fixed order and stop at the first failure: empty ships,
/// bounds, shape, composition, then overlap/adjacency.
pub fn validate_fleet(ships: &[Ship], config: &GameConfig) -> Result<(), ValidationError> {
    let size = config.board_size();

    if ships.iter().any(Ship::is_empty) {
        return Err(ValidationError::EmptyShip);
    }

    for ship in ships {
        if let Some(&coord) = ship.cells().iter().find(|&&c| !in_bounds(c, size)) {
            return Err(ValidationError::OutOfBounds(coord));
        }
    }

    if let Some(ship) = ships.iter().find(|s| !is_straight_and_contiguous(s.cells())) {
        return Err(ValidationError::NotStraightOrContiguous(ship.clone()));
    }

    let mut actual: Vec<usize> = ships.iter().map(Ship::len).collect();
    actual.sort_unstable();
    let expected = config.sorted_fleet();
    if actual != expected {
        return Err(ValidationError::WrongComposition { expected, actual });
    }

    if ships_touch_or_overlap(ships, size) {
        return Err(ValidationError::OverlapOrAdjacency);
    }
    Ok(())
}

/// Maps every occupied cell to its owning ship, flagging a cell claimed twice,
/// then looks for any 8-neighbour owned by a different ship.
/// Expects every cell to be in bounds.
fn ships_touch_or_overlap(ships: &[Ship], size: u8) -> bool {
    let mut owner: Vec<Option<usize>> = vec![None; size as usize * size as usize];

    for (idx, ship) in ships.iter().enumerate() {
        for &coord in ship.cells() {
            let slot = &mut owner[coord.index(size)];
            if slot.is_some() {
                return true;
            }
            *slot = Some(idx);
        }
    }

    ships.iter().enumerate().any(|(idx, ship)| {
        ship.cells().iter().any(|&coord| {
            neighbors8(coord, size)
                .any(|n| matches!(owner[n.index(size)], Some(other) if other != idx))
        })
    })
}

/// A validated fleet. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Validate `ships` as a unit and wrap them.
    pub fn new(ships: Vec<Ship>, config: &GameConfig) -> Result<Self, ValidationError> {
        validate_fleet(&ships, config)?;
        Ok(Self { ships })
    }

    /// Generate a random valid fleet, longest ships first.
    ///
    /// Each ship goes to a random spot clear of every cell occupied by or
    /// touching the ships already placed. A ship that cannot be placed
    /// restarts the whole fleet. Returns `None` once the attempts run out.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Option<Self> {
        let mut lengths = config.fleet().to_vec();
        lengths.sort_unstable_by(|a, b| b.cmp(a));

        for attempt in 1..=MAX_FLEET_ATTEMPTS {
            let Some(ships) = place_all(rng, &lengths, config.board_size()) else {
                debug!("fleet placement attempt {} stuck, restarting", attempt);
                continue;
            };
            match validate_fleet(&ships, config) {
                Ok(()) => return Some(Self { ships }),
                Err(e) => debug!("generated fleet rejected: {}", e),
            }
        }
        warn!(
            "gave up generating a fleet after {} attempts",
            MAX_FLEET_ATTEMPTS
        );
        None
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship covering `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(coord))
    }

    /// Occupancy mask of every ship.
    pub fn occupied(&self) -> CellSet {
        self.ships
            .iter()
            .fold(CellSet::new(), |acc, ship| acc | ship.mask())
    }

    /// True iff every ship has all of its cells in `hit_set`.
    pub fn all_destroyed(&self, hit_set: &CellSet) -> bool {
        self.ships.iter().all(|s| s.is_destroyed(hit_set))
    }
}

fn place_all<R: Rng + ?Sized>(rng: &mut R, lengths: &[usize], size: u8) -> Option<Vec<Ship>> {
    let mut blocked = CellSet::new();
    let mut ships = Vec::with_capacity(lengths.len());
    for &len in lengths {
        let ship = (0..MAX_SHIP_ATTEMPTS).find_map(|_| {
            let ship = random_ship(rng, len, size)?;
            let clear = ship.cells().iter().all(|&c| !blocked.contains(c));
            clear.then_some(ship)
        })?;
        blocked |= ship.mask();
        blocked |= ship
            .cells()
            .iter()
            .flat_map(|&cell| neighbors8(cell, size))
            .collect::<CellSet>();
        ships.push(ship);
    }
    Some(ships)
}

/// A straight ship of `len` cells that fits on the board, or `None` when it
/// is longer than the board side.
fn random_ship<R: Rng + ?Sized>(rng: &mut R, len: usize, size: u8) -> Option<Ship> {
    let len = u8::try_from(len).ok().filter(|&len| len <= size)?;
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let span = size - len;
    let (row, col) = match orientation {
        Orientation::Horizontal => (rng.random_range(0..size), rng.random_range(0..=span)),
        Orientation::Vertical => (rng.random_range(0..=span), rng.random_range(0..size)),
    };
    Some(Ship::straight(Coord::new(row, col), len, orientation))
}

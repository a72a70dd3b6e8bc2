//! Game constants and the configuration injected into the engine.

use alloc::vec::Vec;
use core::fmt;

/// Side length of the standard board.
pub const BOARD_SIZE: u8 = 10;

/// Largest board side a [`crate::CellSet`] can hold (11×11 fits in `u128`).
pub const MAX_BOARD_SIZE: usize = 11;

/// Ship lengths of the standard fleet, one entry per ship.
pub const FLEET_COMPOSITION: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Errors returned when building a [`GameConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board side is zero or does not fit in a cell set.
    InvalidBoardSize(u8),
    /// Fleet has no ships.
    EmptyFleet,
    /// A ship length is zero or longer than the board side.
    InvalidShipLength(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidBoardSize(n) => write!(
                f,
                "Board size {} is not supported (must be 1..={})",
                n, MAX_BOARD_SIZE
            ),
            ConfigError::EmptyFleet => write!(f, "Fleet composition is empty"),
            ConfigError::InvalidShipLength(len) => {
                write!(f, "Ship length {} does not fit on the board", len)
            }
        }
    }
}

/// Immutable match configuration: board side and fleet composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    board_size: u8,
    fleet: Vec<usize>,
}

impl GameConfig {
    /// Build a configuration, rejecting boards and fleets the engine cannot play.
    pub fn new(board_size: u8, fleet: Vec<usize>) -> Result<Self, ConfigError> {
        if board_size == 0 || board_size as usize > MAX_BOARD_SIZE {
            return Err(ConfigError::InvalidBoardSize(board_size));
        }
        if fleet.is_empty() {
            return Err(ConfigError::EmptyFleet);
        }
        if let Some(&len) = fleet
            .iter()
            .find(|&&len| len == 0 || len > board_size as usize)
        {
            return Err(ConfigError::InvalidShipLength(len));
        }
        Ok(Self { board_size, fleet })
    }

    pub fn board_size(&self) -> u8 {
        self.board_size
    }

    /// Ship lengths, one entry per ship, in the order they were given.
    pub fn fleet(&self) -> &[usize] {
        &self.fleet
    }

    /// Ship lengths sorted ascending, the form compared during validation.
    pub fn sorted_fleet(&self) -> Vec<usize> {
        let mut lens = self.fleet.clone();
        lens.sort_unstable();
        lens
    }

    /// Number of cells occupied by a complete fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet.iter().sum()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET_COMPOSITION.to_vec(),
        }
    }
}

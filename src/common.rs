//! Common types: shot outcomes and fleet errors.

use alloc::vec::Vec;
use core::fmt;

use crate::geometry::Coord;
use crate::ship::Ship;

/// Result of resolving one shot against a fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "snake_case"))]
pub enum ShotOutcome {
    /// The cell was already resolved on the shooter's grid; nothing changed.
    AlreadyTried,
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact cell of a ship.
    Sink,
}

impl ShotOutcome {
    /// Hits and sinks let the shooter fire again.
    #[inline]
    pub fn shoots_again(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sink)
    }

    /// Lowercase name used in the turn log.
    pub fn as_str(self) -> &'static str {
        match self {
            ShotOutcome::AlreadyTried => "already_tried",
            ShotOutcome::Miss => "miss",
            ShotOutcome::Hit => "hit",
            ShotOutcome::Sink => "sink",
        }
    }

    /// Inverse of [`ShotOutcome::as_str`].
    pub fn from_log_str(s: &str) -> Option<Self> {
        match s {
            "already_tried" => Some(ShotOutcome::AlreadyTried),
            "miss" => Some(ShotOutcome::Miss),
            "hit" => Some(ShotOutcome::Hit),
            "sink" => Some(ShotOutcome::Sink),
            _ => None,
        }
    }
}

impl fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a candidate fleet was rejected. Checks run in the order the
/// variants are listed and stop at the first failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A ship has no cells.
    EmptyShip,
    /// A cell lies off the board.
    OutOfBounds(Coord),
    /// A ship is bent, diagonal, or has gaps.
    NotStraightOrContiguous(Ship),
    /// Sorted ship lengths differ from the configured fleet.
    WrongComposition {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    /// Two ships share a cell or touch, diagonals included.
    OverlapOrAdjacency,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyShip => write!(f, "Empty ship detected"),
            ValidationError::OutOfBounds(coord) => {
                write!(f, "Coordinate out of bounds: {}", coord)
            }
            ValidationError::NotStraightOrContiguous(ship) => {
                write!(f, "Ship is not straight or consecutive: {}", ship)
            }
            ValidationError::WrongComposition { expected, actual } => write!(
                f,
                "Invalid fleet composition. Expected {:?}, got {:?}",
                expected, actual
            ),
            ValidationError::OverlapOrAdjacency => write!(f, "Ships overlap or touch each other"),
        }
    }
}

/// Errors raised while a player sets up its fleet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// The assembled fleet failed validation.
    Invalid(ValidationError),
    /// Random placement gave up.
    UnableToPlace,
    /// The player stopped supplying input.
    Aborted,
}

impl From<ValidationError> for FleetError {
    fn from(err: ValidationError) -> Self {
        FleetError::Invalid(err)
    }
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::Invalid(e) => write!(f, "Invalid fleet: {}", e),
            FleetError::UnableToPlace => write!(f, "Unable to place fleet"),
            FleetError::Aborted => write!(f, "Fleet setup aborted"),
        }
    }
}

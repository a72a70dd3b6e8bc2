//! Commonly used types and utilities for ease of import.

pub use crate::{
    apply_shot, validate_fleet, Adversary, AiPlayer, Cell, Coord, Fleet, GameConfig, GameStatus,
    Match, Player, Ship, ShotGrid, ShotOutcome, Side,
};

#[cfg(feature = "std")]
pub use crate::{CliPlayer, CsvTurnLog, MemoryLog, Session, TurnSink};

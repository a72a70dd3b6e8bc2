#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod fleet;
mod game;
mod geometry;
mod player;
mod ship;
pub mod prelude;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod persist;
#[cfg(feature = "std")]
mod session;
#[cfg(feature = "std")]
pub mod turn_log;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError, CellSet, Cells};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use geometry::*;
pub use player::{AiPlayer, Player};
#[cfg(feature = "std")]
pub use player::CliPlayer;
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use persist::{load_fleet, save_fleet};
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use turn_log::{read_turn_log, CsvTurnLog, MemoryLog, TurnRecord, TurnSink};

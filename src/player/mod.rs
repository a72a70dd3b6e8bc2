//! Player trait and implementations
//!
//! The human side of a match is driven through [`Player`]:
//! - AiPlayer: automated stand-in using the adversary's targeting engine
//! - CliPlayer: interactive command-line player

use rand::rngs::SmallRng;

use crate::{
    board::ShotGrid,
    common::{FleetError, ShotOutcome},
    config::GameConfig,
    fleet::Fleet,
    game::Match,
    geometry::Coord,
};

/// Interface implemented by whoever plays the human side.
///
/// A Player is responsible for:
/// - Setting up its fleet
/// - Selecting targets on its shot-grid
/// - Handling feedback from shots
pub trait Player {
    /// Produce a validated fleet for `config`.
    fn place_fleet(&mut self, rng: &mut SmallRng, config: &GameConfig)
        -> Result<Fleet, FleetError>;

    /// Choose the next cell to fire at, or `None` if the player gives up.
    fn select_target(&mut self, rng: &mut SmallRng, grid: &ShotGrid) -> Option<Coord>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coord, _outcome: ShotOutcome) {}

    /// Inform the player of an adversary shot against its fleet.
    fn handle_opponent_shot(&mut self, _coord: Coord, _outcome: ShotOutcome) {}

    /// Called before each of the player's shots with the whole match.
    fn show_boards(&mut self, _game: &Match) {}
}

pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;

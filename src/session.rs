#![cfg(feature = "std")]

use std::boxed::Box;

use anyhow::anyhow;
use log::{debug, info};
use rand::rngs::SmallRng;

use crate::{
    common::ShotOutcome,
    game::{GameStatus, Match},
    geometry::Coord,
    player::Player,
    turn_log::TurnSink,
};

/// Runs one match: a [`Player`] on the human side, the built-in adversary
/// on the other. Every turn is handed to a [`TurnSink`].
///
/// Whoever hits or sinks fires again; a miss passes control to the other
/// side. The win/loss check follows every resolved shot.
pub struct Session {
    player: Box<dyn Player>,
    game: Match,
}

impl Session {
    pub fn new(player: Box<dyn Player>, game: Match) -> Self {
        Self { player, game }
    }

    pub fn run(
        &mut self,
        rng: &mut SmallRng,
        log: &mut dyn TurnSink,
    ) -> anyhow::Result<GameStatus> {
        loop {
            self.player.show_boards(&self.game);
            let coord = self
                .player
                .select_target(rng, self.game.player_grid())
                .ok_or_else(|| anyhow!("player stopped before the match ended"))?;
            let outcome = self.game.apply_player_move(coord);
            self.player.handle_shot_result(coord, outcome);
            debug!("player fired at {} -> {}", coord, outcome);

            if outcome == ShotOutcome::AlreadyTried {
                continue;
            }
            let player_move = Some((coord, outcome));

            if self.game.all_bot_ships_sunk() || outcome.shoots_again() {
                self.game.log_turn(log, player_move, None)?;
                if self.game.all_bot_ships_sunk() {
                    info!("player sank the whole fleet");
                    return Ok(GameStatus::Won);
                }
                continue;
            }

            if self.adversary_turn(rng, log, player_move)? {
                info!("adversary sank the whole fleet");
                return Ok(GameStatus::Lost);
            }
        }
    }

    /// Adversary fires until it misses. The first row also carries the
    /// player's missed shot. Returns `true` once the player's fleet is gone.
    fn adversary_turn(
        &mut self,
        rng: &mut SmallRng,
        log: &mut dyn TurnSink,
        mut player_move: Option<(Coord, ShotOutcome)>,
    ) -> anyhow::Result<bool> {
        loop {
            let (coord, outcome) = self
                .game
                .adversary_take_turn(rng)
                .ok_or_else(|| anyhow!("adversary has no cell left to fire at"))?;
            self.player.handle_opponent_shot(coord, outcome);
            self.game
                .log_turn(log, player_move.take(), Some((coord, outcome)))?;

            if self.game.all_player_ships_sunk() {
                return Ok(true);
            }
            if !outcome.shoots_again() {
                return Ok(false);
            }
        }
    }

    pub fn game(&self) -> &Match {
        &self.game
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }
}

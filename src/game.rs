use rand::Rng;

use crate::{
    ai::Adversary,
    bitboard::CellSet,
    board::{apply_shot, ShotGrid},
    common::ShotOutcome,
    config::GameConfig,
    fleet::Fleet,
    geometry::Coord,
};

/// Which side of the match a fleet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Bot,
}

/// Current status of a match, from the human player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Match controller: both fleets, both shot-grids, both hit-sets, the
/// adversary and the turn counter.
///
/// It resolves shots and answers win/loss queries; turn order belongs to
/// the caller (see [`crate::Session`]).
#[derive(Debug, Clone)]
pub struct Match {
    config: GameConfig,
    player_fleet: Fleet,
    bot_fleet: Fleet,
    /// Player's shots on the bot's board.
    player_grid: ShotGrid,
    /// Bot's shots on the player's board.
    bot_grid: ShotGrid,
    /// Struck cells of the player's fleet.
    player_hits: CellSet,
    /// Struck cells of the bot's fleet.
    bot_hits: CellSet,
    adversary: Adversary,
    turn: u32,
}

impl Match {
    /// Start a match between two fleets already validated against `config`.
    pub fn new(config: GameConfig, player_fleet: Fleet, bot_fleet: Fleet) -> Self {
        Self {
            player_grid: ShotGrid::new(&config),
            bot_grid: ShotGrid::new(&config),
            adversary: Adversary::new(&config),
            config,
            player_fleet,
            bot_fleet,
            player_hits: CellSet::new(),
            bot_hits: CellSet::new(),
            turn: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn fleet(&self, side: Side) -> &Fleet {
        match side {
            Side::Player => &self.player_fleet,
            Side::Bot => &self.bot_fleet,
        }
    }

    /// Struck cells of `side`'s fleet.
    pub fn hits_on(&self, side: Side) -> CellSet {
        match side {
            Side::Player => self.player_hits,
            Side::Bot => self.bot_hits,
        }
    }

    /// What the human player knows about the bot's board.
    pub fn player_grid(&self) -> &ShotGrid {
        &self.player_grid
    }

    /// What the bot knows about the human player's board.
    pub fn bot_grid(&self) -> &ShotGrid {
        &self.bot_grid
    }

    pub fn adversary(&self) -> &Adversary {
        &self.adversary
    }

    /// Number of logged turns so far.
    pub fn turn_number(&self) -> u32 {
        self.turn
    }

    /// Resolve the human player's shot against the bot's fleet.
    pub fn apply_player_move(&mut self, coord: Coord) -> ShotOutcome {
        apply_shot(
            coord,
            &self.bot_fleet,
            &mut self.player_grid,
            &mut self.bot_hits,
        )
    }

    /// Let the adversary pick a cell, resolve it against the player's fleet
    /// and feed the outcome back into its state machine.
    ///
    /// Returns `None` only when no cell is left to fire at.
    pub fn adversary_take_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Option<(Coord, ShotOutcome)> {
        let resolved = self.bot_grid.resolved();
        let coord = self.adversary.choose_target(rng, &resolved)?;
        let outcome = apply_shot(
            coord,
            &self.player_fleet,
            &mut self.bot_grid,
            &mut self.player_hits,
        );
        self.adversary.observe(coord, outcome);
        Some((coord, outcome))
    }

    /// True iff every ship of `side` has all of its cells struck.
    pub fn all_sunk(&self, side: Side) -> bool {
        self.fleet(side).all_destroyed(&self.hits_on(side))
    }

    pub fn all_player_ships_sunk(&self) -> bool {
        self.all_sunk(Side::Player)
    }

    pub fn all_bot_ships_sunk(&self) -> bool {
        self.all_sunk(Side::Bot)
    }

    pub fn status(&self) -> GameStatus {
        if self.all_bot_ships_sunk() {
            GameStatus::Won
        } else if self.all_player_ships_sunk() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Hand the current turn to the logging collaborator. The turn counter
    /// advances whether or not the sink accepted the row.
    #[cfg(feature = "std")]
    pub fn log_turn(
        &mut self,
        sink: &mut dyn crate::turn_log::TurnSink,
        player_move: Option<(Coord, ShotOutcome)>,
        bot_move: Option<(Coord, ShotOutcome)>,
    ) -> anyhow::Result<()> {
        let record = crate::turn_log::TurnRecord {
            turn: self.turn,
            player_move,
            bot_move,
            player_board: self.player_grid.serialize(),
            bot_board: self.bot_grid.serialize(),
        };
        let result = sink.record(&record);
        self.turn += 1;
        if self.status() != GameStatus::InProgress {
            log::info!("match over after {} turns: {:?}", self.turn, self.status());
        }
        result
    }
}

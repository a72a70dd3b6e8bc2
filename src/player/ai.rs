use crate::{
    ai::Adversary,
    board::ShotGrid,
    common::{FleetError, ShotOutcome},
    config::GameConfig,
    fleet::Fleet,
    geometry::Coord,
};
use rand::rngs::SmallRng;

use super::Player;

/// Automated player that aims with the same state machine as the adversary.
pub struct AiPlayer {
    targeting: Adversary,
}

impl AiPlayer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            targeting: Adversary::new(config),
        }
    }
}

impl Player for AiPlayer {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        config: &GameConfig,
    ) -> Result<Fleet, FleetError> {
        Fleet::random(rng, config).ok_or(FleetError::UnableToPlace)
    }

    fn select_target(&mut self, rng: &mut SmallRng, grid: &ShotGrid) -> Option<Coord> {
        self.targeting.choose_target(rng, &grid.resolved())
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: ShotOutcome) {
        self.targeting.observe(coord, outcome);
    }
}

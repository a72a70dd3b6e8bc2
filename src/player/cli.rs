#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use std::string::String;
use std::vec::Vec;

use crate::{
    board::{Cell, ShotGrid},
    common::{FleetError, ShotOutcome},
    config::GameConfig,
    fleet::Fleet,
    game::{Match, Side},
    geometry::{in_bounds, Coord, CoordParseError},
    ship::Ship,
    ui::{render_fleet, render_grid},
};
use rand::rngs::SmallRng;

use super::Player;

/// Interactive player reading commands from `input` and writing prompts to
/// `output`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        let _ = self.output.write_fmt(args);
        let _ = self.output.flush();
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Prompt until the line holds exactly `size` cell tokens.
    /// Returns `Ok(None)` for an empty line when `allow_random` is set.
    fn prompt_ship(
        &mut self,
        size: usize,
        index: usize,
        total: usize,
        allow_random: bool,
    ) -> Result<Option<Ship>, FleetError> {
        loop {
            if total > 1 {
                self.say(format_args!(
                    "Enter coordinates for ship of size {} ({} of {}): ",
                    size,
                    index + 1,
                    total
                ));
            } else {
                self.say(format_args!("Enter coordinates for ship of size {}: ", size));
            }
            let line = self.read_line().ok_or(FleetError::Aborted)?;
            if line.is_empty() && allow_random {
                return Ok(None);
            }
            let cells = match parse_cells(&line) {
                Ok(cells) => cells,
                Err(e) => {
                    self.say(format_args!(
                        "Invalid format ({}). Use space-separated coordinates like: A1 A2 A3\n",
                        e
                    ));
                    continue;
                }
            };
            if cells.len() != size {
                self.say(format_args!(
                    "Expected exactly {} coordinates, got {}.\n",
                    size,
                    cells.len()
                ));
                continue;
            }
            return Ok(Some(Ship::new(cells)));
        }
    }
}

/// Cell tokens separated by whitespace or commas.
fn parse_cells(line: &str) -> Result<Vec<Coord>, CoordParseError> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|tok| !tok.is_empty())
        .map(str::parse)
        .collect()
}

/// Ship lengths grouped longest first: (length, how many).
fn grouped_lengths(config: &GameConfig) -> Vec<(usize, usize)> {
    let mut groups: Vec<(usize, usize)> = Vec::new();
    for len in config.sorted_fleet().into_iter().rev() {
        match groups.last_mut() {
            Some((l, n)) if *l == len => *n += 1,
            _ => groups.push((len, 1)),
        }
    }
    groups
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        config: &GameConfig,
    ) -> Result<Fleet, FleetError> {
        let size = config.board_size();
        loop {
            self.say(format_args!(
                "\nPlace your ships on a {}x{} board.\n\
                 Coordinates format: A1 A2 A3 (space-separated)\n\
                 Press ENTER at the first prompt for a random fleet.\n\n",
                size, size
            ));

            let mut ships = Vec::with_capacity(config.fleet().len());
            for (len, count) in grouped_lengths(config) {
                for i in 0..count {
                    let allow_random = ships.is_empty();
                    match self.prompt_ship(len, i, count, allow_random)? {
                        Some(ship) => ships.push(ship),
                        None => {
                            let fleet =
                                Fleet::random(rng, config).ok_or(FleetError::UnableToPlace)?;
                            self.say(format_args!("Random fleet placed.\n"));
                            return Ok(fleet);
                        }
                    }
                }
            }

            match Fleet::new(ships, config) {
                Ok(fleet) => return Ok(fleet),
                Err(e) => self.say(format_args!(
                    "\nFleet validation failed: {}\nPlease re-enter all ships.\n",
                    e
                )),
            }
        }
    }

    fn select_target(&mut self, _rng: &mut SmallRng, grid: &ShotGrid) -> Option<Coord> {
        loop {
            self.say(format_args!("Enter your move (e.g. A1): "));
            let line = self.read_line()?;
            let coord = match line.parse::<Coord>() {
                Ok(coord) if in_bounds(coord, grid.size()) => coord,
                Ok(coord) => {
                    self.say(format_args!("{} is off the board.\n", coord));
                    continue;
                }
                Err(_) => {
                    self.say(format_args!("Invalid coordinate. Please use format like A1.\n"));
                    continue;
                }
            };
            if grid.get(coord) != Cell::Unknown {
                self.say(format_args!(
                    "{} is already resolved. Choose another target.\n",
                    coord
                ));
                continue;
            }
            return Some(coord);
        }
    }

    fn handle_shot_result(&mut self, coord: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.say(format_args!("\nHIT at {}! Fire again.\n", coord)),
            ShotOutcome::Sink => {
                self.say(format_args!("\nSUNK! Your shot at {} destroyed a ship.\n", coord))
            }
            ShotOutcome::Miss => self.say(format_args!("\nMiss at {}.\n", coord)),
            ShotOutcome::AlreadyTried => self.say(format_args!(
                "\nYou already fired at {}. Choose another target.\n",
                coord
            )),
        }
    }

    fn handle_opponent_shot(&mut self, coord: Coord, outcome: ShotOutcome) {
        self.say(format_args!("Bot shoots at {} -> {}\n", coord, outcome));
    }

    fn show_boards(&mut self, game: &Match) {
        let shots = render_grid(game.player_grid());
        let own = render_fleet(
            game.fleet(Side::Player),
            &game.hits_on(Side::Player),
            game.bot_grid(),
        );
        self.say(format_args!(
            "\nYour shots on the bot's board:\n{}\nBot's shots on your board:\n{}",
            shots, own
        ));
    }
}

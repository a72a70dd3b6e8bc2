#![cfg(feature = "std")]

//! Append-only turn log.
//!
//! One row per logged turn:
//! `turn_number,player_move_coord,player_move_result,bot_move_coord,bot_move_result,player_board_serialized,bot_board_serialized`.
//! A side that did not shoot in a turn has an empty coordinate and `n/a`.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::string::String;
use std::vec::Vec;

use anyhow::{anyhow, bail, Context};

use crate::{
    common::ShotOutcome,
    geometry::Coord,
    persist::{csv_field, split_record},
};

pub const TURN_LOG_HEADER: &str = "turn_number,player_move_coord,player_move_result,bot_move_coord,bot_move_result,player_board_serialized,bot_board_serialized";

const NOT_APPLICABLE: &str = "n/a";

/// One logged turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub turn: u32,
    pub player_move: Option<(Coord, ShotOutcome)>,
    pub bot_move: Option<(Coord, ShotOutcome)>,
    pub player_board: String,
    pub bot_board: String,
}

fn move_fields(mv: Option<(Coord, ShotOutcome)>) -> (String, &'static str) {
    match mv {
        Some((coord, outcome)) => (coord.to_string(), outcome.as_str()),
        None => (String::new(), NOT_APPLICABLE),
    }
}

fn parse_move(coord: &str, result: &str) -> anyhow::Result<Option<(Coord, ShotOutcome)>> {
    if result == NOT_APPLICABLE {
        return Ok(None);
    }
    let coord = coord
        .parse::<Coord>()
        .map_err(|e| anyhow!("bad move coordinate '{}': {}", coord, e))?;
    let outcome =
        ShotOutcome::from_log_str(result).ok_or_else(|| anyhow!("bad move result '{}'", result))?;
    Ok(Some((coord, outcome)))
}

impl TurnRecord {
    pub fn to_csv_row(&self) -> String {
        let (pc, pr) = move_fields(self.player_move);
        let (bc, br) = move_fields(self.bot_move);
        [
            self.turn.to_string(),
            pc,
            pr.to_string(),
            bc,
            br.to_string(),
            self.player_board.clone(),
            self.bot_board.clone(),
        ]
        .iter()
        .map(|f| csv_field(f))
        .collect::<Vec<_>>()
        .join(",")
    }

    pub fn from_csv_row(line: &str) -> anyhow::Result<Self> {
        let fields = split_record(line);
        let [turn, pc, pr, bc, br, player_board, bot_board] = fields.as_slice() else {
            bail!("expected 7 fields, found {}", fields.len());
        };
        Ok(Self {
            turn: turn.parse::<u32>().context("bad turn number")?,
            player_move: parse_move(pc, pr)?,
            bot_move: parse_move(bc, br)?,
            player_board: player_board.clone(),
            bot_board: bot_board.clone(),
        })
    }
}

/// Receiver of logged turns.
pub trait TurnSink {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()>;
}

/// Turn log kept in memory.
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Vec<TurnRecord>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[TurnRecord] {
        &self.records
    }
}

impl TurnSink for MemoryLog {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

/// CSV turn log. Every row opens the file in append mode, writes, and
/// closes it again; the header goes in when the file is new or empty.
#[derive(Debug, Clone)]
pub struct CsvTurnLog {
    path: PathBuf,
}

impl CsvTurnLog {
    /// Append to `path`, keeping any rows already there.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Start a fresh log at `path`, truncating an existing file.
    pub fn create(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        fs::write(&path, "").with_context(|| format!("truncating {}", path.display()))?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TurnSink for CsvTurnLog {
    fn record(&mut self, record: &TurnRecord) -> anyhow::Result<()> {
        let needs_header = fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("opening turn log {}", self.path.display()))?;
        if needs_header {
            writeln!(file, "{}", TURN_LOG_HEADER)?;
        }
        writeln!(file, "{}", record.to_csv_row())
            .with_context(|| format!("writing turn log {}", self.path.display()))?;
        Ok(())
    }
}

/// Read every row of a turn log written by [`CsvTurnLog`].
pub fn read_turn_log(path: &Path) -> anyhow::Result<Vec<TurnRecord>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading turn log {}", path.display()))?;
    let mut lines = text.lines();
    match lines.next() {
        Some(TURN_LOG_HEADER) => {}
        None => return Ok(Vec::new()),
        Some(other) => bail!("{}: unexpected header '{}'", path.display(), other),
    }
    lines
        .filter(|l| !l.trim().is_empty())
        .enumerate()
        .map(|(i, line)| {
            TurnRecord::from_csv_row(line)
                .with_context(|| format!("{}:{}", path.display(), i + 2))
        })
        .collect()
}

#![cfg(feature = "std")]

//! Text rendering of shot-grids and fleets for the terminal.

use std::fmt::Write;
use std::string::String;

use crate::{
    bitboard::CellSet,
    board::{Cell, ShotGrid},
    fleet::Fleet,
    geometry::Coord,
};

fn header(out: &mut String, size: u8) {
    out.push_str("  ");
    for col in 0..size {
        let _ = write!(out, " {:>2}", col + 1);
    }
    out.push('\n');
}

fn row_label(row: u8) -> char {
    (b'A' + row) as char
}

/// A shot-grid with row letters down and column numbers across.
/// `X` = hit, `o` = miss, `.` = unknown.
pub fn render_grid(grid: &ShotGrid) -> String {
    let size = grid.size();
    let mut out = String::new();
    header(&mut out, size);
    for row in 0..size {
        let _ = write!(out, "{} ", row_label(row));
        for col in 0..size {
            let ch = match grid.get(Coord::new(row, col)) {
                Cell::Hit => 'X',
                Cell::Miss => 'o',
                Cell::Unknown => '.',
            };
            let _ = write!(out, "  {}", ch);
        }
        out.push('\n');
    }
    out
}

/// A player's own board: ships as `S`, struck cells as `X`, and the
/// opponent's misses from `enemy_grid` as `o`.
pub fn render_fleet(fleet: &Fleet, hits: &CellSet, enemy_grid: &ShotGrid) -> String {
    let size = enemy_grid.size();
    let occupied = fleet.occupied();
    let mut out = String::new();
    header(&mut out, size);
    for row in 0..size {
        let _ = write!(out, "{} ", row_label(row));
        for col in 0..size {
            let coord = Coord::new(row, col);
            let ch = if hits.contains(coord) {
                'X'
            } else if occupied.contains(coord) {
                'S'
            } else if enemy_grid.get(coord) == Cell::Miss {
                'o'
            } else {
                '.'
            };
            let _ = write!(out, "  {}", ch);
        }
        out.push('\n');
    }
    out
}

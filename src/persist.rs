#![cfg(feature = "std")]

//! Fleet CSV files and the small CSV helpers shared with the turn log.
//!
//! Fleet files hold one row per ship:
//!
//! ```text
//! ship_id,size,coordinates
//! 0,4,"A1,A2,A3,A4"
//! ```

use std::fs;
use std::path::Path;
use std::string::String;
use std::vec::Vec;

use anyhow::{anyhow, bail, Context};

use crate::{fleet::Fleet, geometry::Coord, ship::Ship};

pub const FLEET_HEADER: &str = "ship_id,size,coordinates";

/// Quote a field when it holds a separator or a quote.
pub(crate) fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Split one CSV line into fields, honouring double-quoted fields.
pub(crate) fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(ch),
        }
    }
    fields.push(field);
    fields
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    Ok(())
}

/// Write `fleet` to `path`, replacing any previous file.
pub fn save_fleet(path: &Path, fleet: &Fleet) -> anyhow::Result<()> {
    ensure_parent(path)?;
    let mut out = String::from(FLEET_HEADER);
    out.push('\n');
    for (id, ship) in fleet.ships().iter().enumerate() {
        out.push_str(&format!(
            "{},{},{}\n",
            id,
            ship.len(),
            csv_field(&ship.to_string())
        ));
    }
    fs::write(path, out).with_context(|| format!("writing fleet to {}", path.display()))?;
    log::debug!("saved {} ships to {}", fleet.ships().len(), path.display());
    Ok(())
}

/// Read the ships stored at `path`. The result is not validated; build a
/// [`Fleet`] from it to check the placement rules.
pub fn load_fleet(path: &Path) -> anyhow::Result<Vec<Ship>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading fleet {}", path.display()))?;
    let mut lines = text.lines();
    match lines.next() {
        Some(header) if header.trim() == FLEET_HEADER => {}
        other => bail!(
            "{}: expected header '{}', found {:?}",
            path.display(),
            FLEET_HEADER,
            other
        ),
    }

    let mut ships = Vec::new();
    for (lineno, line) in lines.enumerate().map(|(i, l)| (i + 2, l)) {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_record(line);
        let [_, size, coords] = fields.as_slice() else {
            bail!("{}:{}: expected 3 fields", path.display(), lineno);
        };
        let size: usize = size
            .trim()
            .parse()
            .with_context(|| format!("{}:{}: bad ship size", path.display(), lineno))?;
        let cells = coords
            .split(',')
            .filter(|tok| !tok.trim().is_empty())
            .map(|tok| {
                tok.parse::<Coord>()
                    .map_err(|e| anyhow!("{}:{}: {}", path.display(), lineno, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        if cells.len() != size {
            bail!(
                "{}:{}: size {} does not match {} coordinates",
                path.display(),
                lineno,
                size,
                cells.len()
            );
        }
        ships.push(Ship::new(cells));
    }
    Ok(ships)
}

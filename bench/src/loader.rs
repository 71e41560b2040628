//! Moving-AI benchmark file parsing.
//!
//! `.map` files carry a four-line header (`type`, `height N`, `width N`,
//! `map`) followed by one symbol row per line. `.scen` files carry a
//! `version` line followed by whitespace-separated case lines: bucket,
//! map name, map width, map height, start x/y, goal x/y, optimal cost.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, bail};
use terrapath_core::{NodeId, TerrainGrid, node_id};

/// One scenario query: endpoints plus the reference optimal cost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    pub start: NodeId,
    pub goal: NodeId,
    pub optimal: f64,
}

/// Parse a Moving-AI `.map` file into a terrain grid.
pub fn load_map(path: &Path) -> Result<TerrainGrid> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_map(BufReader::new(file)).with_context(|| format!("parsing {}", path.display()))
}

/// Parse a Moving-AI `.scen` file into query cases.
///
/// `limit` caps the number of cases read; `None` reads them all.
pub fn load_scen(path: &Path, limit: Option<usize>) -> Result<Vec<Case>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_scen(BufReader::new(file), limit).with_context(|| format!("parsing {}", path.display()))
}

fn parse_map(reader: impl BufRead) -> Result<TerrainGrid> {
    let mut lines = reader.lines();

    let mut header = [const { String::new() }; 4];
    for slot in header.iter_mut() {
        *slot = lines.next().context("truncated map header")??;
    }
    let height: usize = header_field(&header[1], "height")?;
    let width: usize = header_field(&header[2], "width")?;

    let mut rows = Vec::with_capacity(height);
    for _ in 0..height {
        let line = lines.next().context("map body shorter than header height")??;
        let row: Vec<char> = line.trim_end().chars().collect();
        if row.len() != width {
            bail!("map row has {} symbols, expected {width}", row.len());
        }
        rows.push(row);
    }

    TerrainGrid::from_rows(rows).context("building terrain grid")
}

fn header_field(line: &str, key: &str) -> Result<usize> {
    let mut parts = line.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(k), Some(value)) if k == key => {
            value.parse().with_context(|| format!("parsing {key}"))
        }
        _ => bail!("expected `{key} N` header line, got `{line}`"),
    }
}

fn parse_scen(reader: impl BufRead, limit: Option<usize>) -> Result<Vec<Case>> {
    let mut lines = reader.lines();
    lines.next().context("empty scenario file")??; // version line

    let mut cases = Vec::new();
    for line in lines {
        if limit.is_some_and(|n| cases.len() >= n) {
            break;
        }
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        cases.push(parse_case(&line)?);
    }
    Ok(cases)
}

fn parse_case(line: &str) -> Result<Case> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [_bucket, _map, width, _height, sx, sy, gx, gy, optimal] = fields.as_slice() else {
        bail!("expected 9 scenario fields, got {}: `{line}`", fields.len());
    };

    let width: usize = width.parse().context("parsing scenario width")?;
    let (sx, sy): (usize, usize) = (sx.parse()?, sy.parse()?);
    let (gx, gy): (usize, usize) = (gx.parse()?, gy.parse()?);

    Ok(Case {
        start: node_id(sy, sx, width),
        goal: node_id(gy, gx, width),
        optimal: optimal.parse().context("parsing optimal cost")?,
    })
}

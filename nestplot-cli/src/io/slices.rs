use std::collections::BTreeMap;

use itertools::Itertools;
use log::{debug, warn};
use nestplot::entities::{PieceDefinition, PieceId};
use nestplot::geometry::primitives::Point;

use crate::io::shapes::parse_finite;

/// Run tag used when the slices file is empty
pub const DEFAULT_TAG: &str = "output";

/// Contents of a named slices file
#[derive(Clone, Debug)]
pub struct SlicesFile {
    /// First token of the first line
    pub tag: String,
    pub pieces: Vec<PieceDefinition>,
}

/// Labels of an index-based slices file: the first token of every non-empty line, in order
pub fn parse_slice_labels(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_owned)
        .collect()
}

/// Parses a named slices file: `name x1 y1 x2 y2 ...` per line.
///
/// The integer before the first `-` of a name is its block, lines without one are skipped.
/// Coordinate pairs are read greedily, unparsable tokens are skipped one at a time.
/// Within a block every x is mirrored to `x_max - x`, where `x_max` is the largest x of the block.
pub fn parse_named_slices(content: &str) -> SlicesFile {
    let tag = content
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().next())
        .unwrap_or(DEFAULT_TAG)
        .to_owned();

    let mut blocks: BTreeMap<i64, Vec<(&str, Vec<Point>)>> = BTreeMap::new();
    for line in content.lines() {
        let tokens = line.split_whitespace().collect_vec();
        let Some((name, coords)) = tokens.split_first() else {
            continue;
        };
        let Some(block) = name.split('-').next().and_then(|b| b.parse::<i64>().ok()) else {
            debug!("[SLICES] no block number in {name:?}, line skipped");
            continue;
        };
        blocks
            .entry(block)
            .or_default()
            .push((*name, read_coordinate_pairs(coords)));
    }

    let mut pieces = vec![];
    for (block, slices) in blocks {
        let x_max = slices
            .iter()
            .flat_map(|(_, poly)| poly.iter().map(|p| p.0))
            .fold(f64::NEG_INFINITY, f64::max);

        for (name, poly) in slices {
            if poly.is_empty() {
                warn!("[SLICES] slice {name} (block {block}) has no coordinates, skipped");
                continue;
            }
            let mirrored = poly.into_iter().map(|Point(x, y)| Point(x_max - x, y)).collect_vec();
            match PieceDefinition::new(PieceId::Name(name.to_owned()), mirrored) {
                Ok(piece) => pieces.push(piece),
                Err(e) => warn!("[SLICES] slice {name} skipped: {e}"),
            }
        }
    }

    SlicesFile { tag, pieces }
}

fn read_coordinate_pairs(tokens: &[&str]) -> Vec<Point> {
    let mut points = vec![];
    let mut j = 0;
    while j + 1 < tokens.len() {
        match (parse_finite(tokens[j]), parse_finite(tokens[j + 1])) {
            (Some(x), Some(y)) => {
                points.push(Point(x, y));
                j += 2;
            }
            _ => j += 1,
        }
    }
    points
}

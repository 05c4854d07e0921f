use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use log::debug;
use nestplot::entities::{PieceDefinition, PieceId};
use nestplot::geometry::primitives::Point;

/// Contents of a shapes file
#[derive(Clone, Debug)]
pub struct ShapesFile {
    pub bin_width: f64,
    pub bin_height: f64,
    /// Pieces in file order, identified by their 1-based index
    pub pieces: Vec<PieceDefinition>,
}

/// Parses a shapes file.
///
/// The first line holds the bin size `W H`, the second line (piece count) is ignored.
/// Every following non-empty line is a piece outline of space separated `x,y` tokens.
/// Malformed tokens are skipped, lines without any vertex do not produce a piece.
pub fn parse_shapes(content: &str) -> Result<ShapesFile> {
    let mut lines = content.lines();

    let header = lines.next().context("shapes file is empty")?;
    let dims = header.split_whitespace().collect_vec();
    ensure!(
        dims.len() == 2,
        "expected bin size 'W H' on the first line of the shapes file, found: {header:?}"
    );
    let bin_width = parse_finite(dims[0]).with_context(|| format!("invalid bin width: {header:?}"))?;
    let bin_height =
        parse_finite(dims[1]).with_context(|| format!("invalid bin height: {header:?}"))?;

    let mut pieces = vec![];
    for line in lines.skip(1).map(str::trim).filter(|l| !l.is_empty()) {
        let vertices = line.split_whitespace().filter_map(parse_vertex).collect_vec();
        if vertices.is_empty() {
            debug!("[SHAPES] line without vertices skipped: {line:?}");
            continue;
        }
        let id = PieceId::Index(pieces.len() + 1);
        pieces.push(PieceDefinition::new(id, vertices)?);
    }

    Ok(ShapesFile {
        bin_width,
        bin_height,
        pieces,
    })
}

fn parse_vertex(token: &str) -> Option<Point> {
    match token.split(',').collect_vec().as_slice() {
        [x, y] => Some(Point(parse_finite(x)?, parse_finite(y)?)),
        _ => None,
    }
}

/// Parses a float, rejecting infinities and NaN
pub(crate) fn parse_finite(token: &str) -> Option<f64> {
    token.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

use std::fmt::{Display, Formatter};

use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use crate::geometry::primitives::{Point, Rect};

/// Identifies a piece, either by its 1-based position in a shapes file or by name
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceId {
    Index(usize),
    Name(String),
}

impl Display for PieceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceId::Index(i) => write!(f, "{i}"),
            PieceId::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<usize> for PieceId {
    fn from(i: usize) -> Self {
        PieceId::Index(i)
    }
}

impl From<&str> for PieceId {
    fn from(name: &str) -> Self {
        PieceId::Name(name.to_owned())
    }
}

/// Reference geometry of a piece, immutable once created.
#[derive(Clone, Debug)]
pub struct PieceDefinition {
    pub id: PieceId,
    /// Outline in reference coordinates, closing vertex implicit
    pub outline: Vec<Point>,
    /// Rotation center, the minimum corner of the outline's bounding box
    pub pivot: Point,
}

impl PieceDefinition {
    pub fn new(id: PieceId, outline: Vec<Point>) -> Result<Self> {
        ensure!(!outline.is_empty(), "piece {id} has an empty outline");
        ensure!(
            outline.iter().all(Point::is_finite),
            "piece {id} contains non-finite vertices: {outline:?}"
        );
        let pivot = Rect::bounding(&outline).min_corner();
        Ok(Self { id, outline, pivot })
    }
}

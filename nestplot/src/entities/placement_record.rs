use anyhow::{Result, ensure};

use crate::entities::PieceId;

/// Where and how a single piece is placed inside a bin
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementRecord {
    pub piece_id: PieceId,
    /// Counterclockwise rotation in degrees, applied around the piece's pivot
    pub rotation: f64,
    /// Target position of the rotated outline's bounding box minimum corner
    pub x: f64,
    pub y: f64,
}

impl PlacementRecord {
    pub fn new(piece_id: PieceId, rotation: f64, x: f64, y: f64) -> Result<Self> {
        ensure!(
            rotation.is_finite() && x.is_finite() && y.is_finite(),
            "placement of piece {piece_id} is not finite: r: {rotation}, x: {x}, y: {y}"
        );
        Ok(Self {
            piece_id,
            rotation,
            x,
            y,
        })
    }
}

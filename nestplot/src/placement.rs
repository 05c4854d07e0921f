use itertools::Itertools;
use log::{debug, warn};

use crate::entities::{Bin, PieceCatalog, PieceDefinition, PieceId, PlacementRecord};
use crate::geometry::Transformation;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::{Point, Rect};

/// A piece in its final position inside a bin
#[derive(Clone, Debug)]
pub struct PlacedPiece {
    pub id: PieceId,
    /// Index of the placement record within its bin
    pub index: usize,
    /// Final vertices, closing vertex implicit
    pub vertices: Vec<Point>,
}

/// Computes the final vertices of `piece` according to `record`.
///
/// The reference outline is first rotated around the piece's pivot, after which it is translated
/// so that the minimum corner of the *rotated* bounding box lands on `(record.x, record.y)`.
/// The order matters: as soon as the rotation is non-zero, translating first yields a different position.
pub fn place_piece(piece: &PieceDefinition, record: &PlacementRecord) -> Vec<Point> {
    let rotation = Transformation::from_rotation_about(record.rotation.to_radians(), piece.pivot);
    let rotated = piece
        .outline
        .iter()
        .map(|p| p.transform_clone(&rotation))
        .collect_vec();

    let Point(min_x, min_y) = Rect::bounding(&rotated).min_corner();
    let translation = (record.x - min_x, record.y - min_y);

    rotated.into_iter().map(|p| p.translate(translation)).collect()
}

/// Places every piece of `bin`, in record order.
/// Records referring to a piece missing from the catalog are skipped.
pub fn place_bin(catalog: &PieceCatalog, bin: &Bin) -> Vec<PlacedPiece> {
    bin.placements
        .iter()
        .enumerate()
        .filter_map(|(index, record)| match catalog.get(&record.piece_id) {
            Some(piece) => {
                debug!(
                    "[PLACE] bin {}: piece {} at ({:.3}, {:.3}), r: {:.3}°",
                    bin.number, record.piece_id, record.x, record.y, record.rotation
                );
                Some(PlacedPiece {
                    id: record.piece_id.clone(),
                    index,
                    vertices: place_piece(piece, record),
                })
            }
            None => {
                warn!(
                    "[PLACE] bin {}: no piece definition for {}, skipping",
                    bin.number, record.piece_id
                );
                None
            }
        })
        .collect()
}

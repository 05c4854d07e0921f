mod bin;
mod catalog;
mod labels;
mod piece;
mod placement_record;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use catalog::PieceCatalog;
#[doc(inline)]
pub use labels::LabelSource;
#[doc(inline)]
pub use piece::PieceDefinition;
#[doc(inline)]
pub use piece::PieceId;
#[doc(inline)]
pub use placement_record::PlacementRecord;

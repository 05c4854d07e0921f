//! Rendering engine for 2D nesting solutions.
//!
//! Reproduces a placement solution by applying rigid transformations to the reference outline
//! of every piece, finds a label anchor deep inside each placed polygon and lays out
//! structured labels as stroke-font segments. Drawing itself is delegated to a [`render::DrawingSink`].

/// Geometric primitives, transformations and polygon repair
pub mod geometry;

/// Pieces, placement records, bins and label sources
pub mod entities;

/// Applies placement records to piece definitions
pub mod placement;

/// Interior-point strategies used to anchor labels
pub mod interior;

/// Classification and layout of label strings
pub mod label;

/// Interfaces to the glyph provider and drawing sink, and the renderer driving them
pub mod render;

/// Helper functions which do not belong to any specific module
pub mod util;

use std::collections::HashMap;

use anyhow::{Result, ensure};

use crate::entities::{PieceDefinition, PieceId};

/// Lookup of all piece definitions by identifier
#[derive(Clone, Debug, Default)]
pub struct PieceCatalog {
    pieces: HashMap<PieceId, PieceDefinition>,
}

impl PieceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a piece, identifiers must be unique
    pub fn insert(&mut self, piece: PieceDefinition) -> Result<()> {
        ensure!(
            !self.pieces.contains_key(&piece.id),
            "duplicate piece identifier: {}",
            piece.id
        );
        self.pieces.insert(piece.id.clone(), piece);
        Ok(())
    }

    pub fn get(&self, id: &PieceId) -> Option<&PieceDefinition> {
        self.pieces.get(id)
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PieceDefinition> {
        self.pieces.values()
    }
}

impl FromIterator<PieceDefinition> for PieceCatalog {
    /// Later definitions replace earlier ones with the same identifier
    fn from_iter<T: IntoIterator<Item = PieceDefinition>>(iter: T) -> Self {
        let pieces = iter.into_iter().map(|p| (p.id.clone(), p)).collect();
        Self { pieces }
    }
}

use crate::entities::PlacementRecord;

/// A single bin of the solution: its placements in drawing order
#[derive(Clone, Debug, Default)]
pub struct Bin {
    /// 1-based number of the bin in the input
    pub number: usize,
    pub placements: Vec<PlacementRecord>,
}

impl Bin {
    pub fn new(number: usize, placements: Vec<PlacementRecord>) -> Self {
        Self { number, placements }
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

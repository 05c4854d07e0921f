use std::borrow::Cow;
use std::collections::HashMap;

use crate::entities::PieceId;

/// Provides the raw label string of every piece
#[derive(Clone, Debug, Default)]
pub enum LabelSource {
    /// The identifier itself is the label
    #[default]
    Identifier,
    /// Index-based labels: piece `i` is labeled by entry `i - 1`.
    /// Pieces outside the range (or identified by name) fall back to their identifier.
    Indexed(Vec<String>),
    /// Explicit labels, pieces without an entry fall back to their identifier
    Mapped(HashMap<PieceId, String>),
}

impl LabelSource {
    pub fn label_for<'a>(&'a self, id: &PieceId) -> Cow<'a, str> {
        let label = match (self, id) {
            (LabelSource::Identifier, _) => None,
            (LabelSource::Indexed(labels), PieceId::Index(i)) => {
                i.checked_sub(1).and_then(|i| labels.get(i))
            }
            (LabelSource::Indexed(_), PieceId::Name(_)) => None,
            (LabelSource::Mapped(labels), id) => labels.get(id),
        };
        match label {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Owned(id.to_string()),
        }
    }
}

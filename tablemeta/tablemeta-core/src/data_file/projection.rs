use crate::{error::DataFileError, types::StructType};

/// Maps incoming positions of a projected schema to canonical ordinals.
///
/// Fields are matched by field id, so a reader schema may be any subset of
/// the canonical fields, in any order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    from_projection_pos: Vec<usize>,
}

impl Projection {
    /// Resolve every field of `projected` against `full`.
    ///
    /// Fails if a projected field id does not exist in `full`.
    pub fn build(projected: &StructType, full: &StructType) -> Result<Self, DataFileError> {
        let from_projection_pos = projected
            .fields()
            .iter()
            .map(|field| {
                full.position(field.field_id())
                    .ok_or_else(|| DataFileError::SchemaMismatch {
                        field: field.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            from_projection_pos,
        })
    }

    /// Canonical ordinal for an incoming position, if the position is projected.
    pub fn logical_pos(&self, incoming: usize) -> Option<usize> {
        self.from_projection_pos.get(incoming).copied()
    }

    pub fn positions(&self) -> &[usize] {
        &self.from_projection_pos
    }

    pub fn len(&self) -> usize {
        self.from_projection_pos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_projection_pos.is_empty()
    }
}

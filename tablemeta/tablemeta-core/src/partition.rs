//! Struct-typed partition values of a data file.

use std::{
    fmt,
    sync::{Arc, OnceLock},
};

use crate::{error::PartitionError, types::StructType, value::Value};

/// One value slot per field of the partition struct type.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionData {
    partition_type: StructType,
    values: Vec<Value>,
}

static EMPTY_PARTITION: OnceLock<Arc<PartitionData>> = OnceLock::new();

impl PartitionData {
    /// Partition container with every slot set to [`Value::Null`].
    pub fn new(partition_type: StructType) -> Self {
        let values = vec![Value::Null; partition_type.len()];
        Self {
            partition_type,
            values,
        }
    }

    /// Build a container from positional values, checking arity and types.
    pub fn from_values(
        partition_type: StructType,
        values: Vec<Value>,
    ) -> Result<Self, PartitionError> {
        if values.len() != partition_type.len() {
            return Err(PartitionError::Arity {
                expected: partition_type.len(),
                actual: values.len(),
            });
        }
        let mut partition = Self::new(partition_type);
        for (pos, value) in values.into_iter().enumerate() {
            partition.set(pos, value)?;
        }
        Ok(partition)
    }

    /// The shared container for unpartitioned files.
    pub fn empty() -> Arc<Self> {
        Arc::clone(EMPTY_PARTITION.get_or_init(|| Arc::new(Self::new(StructType::empty()))))
    }

    /// Whether `partition` is the shared unpartitioned instance.
    pub fn is_shared_empty(partition: &Arc<Self>) -> bool {
        EMPTY_PARTITION
            .get()
            .is_some_and(|empty| Arc::ptr_eq(empty, partition))
    }

    /// Copy with independent value slots.
    ///
    /// The shared unpartitioned instance never changes and is returned as is.
    pub fn copy(partition: &Arc<Self>) -> Arc<Self> {
        if Self::is_shared_empty(partition) {
            return Arc::clone(partition);
        }
        Arc::new(Self::clone(partition))
    }

    pub fn partition_type(&self) -> &StructType {
        &self.partition_type
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, pos: usize) -> Option<&Value> {
        self.values.get(pos)
    }

    /// Store `value` at `pos` if it conforms to that partition field.
    pub fn set(&mut self, pos: usize, value: Value) -> Result<(), PartitionError> {
        let len = self.values.len();
        let field = self
            .partition_type
            .fields()
            .get(pos)
            .ok_or(PartitionError::OutOfRange { pos, len })?;

        let accepted = if value.is_null() {
            field.is_optional()
        } else {
            value.conforms_to(field.field_type())
        };
        if !accepted {
            return Err(PartitionError::TypeMismatch {
                field: field.name().to_string(),
                expected: field.to_string(),
            });
        }

        self.values[pos] = value;
        Ok(())
    }

    pub(crate) fn to_value(&self) -> Value {
        Value::Struct(self.values.clone())
    }
}

impl fmt::Display for PartitionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PartitionData{")?;
        for (i, (field, value)) in self
            .partition_type
            .fields()
            .iter()
            .zip(&self.values)
            .enumerate()
        {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={value}", field.name())?;
        }
        f.write_str("}")
    }
}

//! Error types for the type system and data file records.

/// A type string did not match any primitive type form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse type string to primitive: {input}")]
pub struct TypeParseError {
    pub input: String,
}

impl TypeParseError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// Error returned by the checked [`StructType`](crate::StructType) constructor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate field id {id} in struct (fields '{first}' and '{second}')")]
    DuplicateFieldId {
        id: i32,
        first: String,
        second: String,
    },

    #[error("duplicate field name '{name}' in struct")]
    DuplicateFieldName { name: String },

    #[error("field name cannot be empty (field id {id})")]
    EmptyFieldName { id: i32 },
}

/// A [`Value`](crate::Value) variant did not match the expected shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {actual}")]
pub struct ValueTypeError {
    pub expected: String,
    pub actual: &'static str,
}

impl ValueTypeError {
    pub fn new(expected: impl Into<String>, actual: &'static str) -> Self {
        Self {
            expected: expected.into(),
            actual,
        }
    }
}

/// Errors raised by positional access to [`PartitionData`](crate::PartitionData).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PartitionError {
    #[error("partition position {pos} out of range for {len} partition fields")]
    OutOfRange { pos: usize, len: usize },

    #[error("partition value for '{field}' does not conform to {expected}")]
    TypeMismatch { field: String, expected: String },

    #[error("expected {expected} partition values, found {actual}")]
    Arity { expected: usize, actual: usize },
}

/// Errors produced while building or decoding a [`DataFile`](crate::DataFile).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataFileError {
    /// A projected field's id has no counterpart in the canonical data file schema.
    #[error("cannot find projected field: {field}")]
    SchemaMismatch { field: String },

    /// The projection schema's `partition` field is not a struct.
    #[error("projected partition field is not a struct: {field}")]
    MissingPartitionType { field: String },

    /// A required input value was absent.
    #[error("missing required value: {field}")]
    MissingValue { field: &'static str },

    /// A count or size supplied to a constructor was negative.
    #[error("negative value for '{field}': {value}")]
    NegativeValue { field: &'static str, value: i64 },

    #[error("unknown file format: {name}")]
    UnknownFileFormat { name: String },

    /// A value of the wrong shape was written to a known slot.
    #[error("invalid value for '{field}' (ordinal {pos}): {source}")]
    InvalidSlot {
        pos: usize,
        field: &'static str,
        #[source]
        source: ValueTypeError,
    },

    #[error(transparent)]
    Partition(#[from] PartitionError),
}

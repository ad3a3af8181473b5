//! Schema types and per-file metadata records for a columnar table format.
//!
//! This crate provides the column type model ([`Type`], [`StructType`] and
//! friends), the positional [`Value`] representation exchanged with record
//! codecs, and the [`DataFile`] metadata record with its [`PartitionData`].
//!
//! Schema evolution is keyed on field ids: [`DataFile::projected`] resolves a
//! reader's schema against the canonical [`data_file_schema`] by id, so
//! reordered, narrowed, or newer records decode without error.

mod data_file;
mod error;
mod file_format;
mod metrics;
mod partition;
mod types;
mod value;

pub use data_file::{
    DataFile, DataFileField, Projection, data_file_schema, pairs_to_stats, stats_to_pairs,
};
pub use error::{DataFileError, PartitionError, SchemaError, TypeParseError, ValueTypeError};
pub use file_format::FileFormat;
pub use metrics::Metrics;
pub use partition::PartitionData;
pub use types::{
    ListType, MapType, NestedField, NestedType, PrimitiveType, StructType, Type, TypeId,
    format_struct_type, primitive_type_from_string,
};
pub use value::Value;

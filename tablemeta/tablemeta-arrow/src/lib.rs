//! Arrow integration layer for `tablemeta`.
//!
//! Converts `tablemeta-core` struct types, including the canonical data file
//! schema, into Arrow `Schema` values. Column identity is kept by field id:
//! every generated Arrow field carries the id in its metadata under
//! [`FIELD_ID_META_KEY`], the key Parquet readers resolve columns by.
//!
//! Type mapping:
//! - `date` is `Date32`; `time` is `Time64(Microsecond)`.
//! - `timestamp` is microsecond `Timestamp`; `timestamptz` carries the `+00:00` zone.
//! - `uuid` and `fixed[N]` are `FixedSizeBinary`.
//! - `decimal(P, S)` is `Decimal128` up to precision 38, `Decimal256` up to 76.
//! - `list` elements are named `element`; `map` entries are an `entries` struct of `key`/`value`.
//!
//! # Typical Flow
//! ```rust
//! use tablemeta_arrow::{FIELD_ID_META_KEY, struct_type_to_arrow_schema};
//! use tablemeta_core::{NestedField, PrimitiveType, StructType};
//!
//! let schema = StructType::new(vec![NestedField::required(1, "id", PrimitiveType::Long)]);
//! let arrow_schema = struct_type_to_arrow_schema(&schema).unwrap();
//! let id = arrow_schema.field(0).metadata().get(FIELD_ID_META_KEY);
//! assert_eq!(id.map(String::as_str), Some("1"));
//! ```
pub mod error;
pub mod schema_convert;

/// Re-export of [`error::ArrowConvertError`].
pub use error::ArrowConvertError;
/// Re-exports from [`schema_convert`].
pub use schema_convert::{
    data_file_arrow_schema, nested_field_to_arrow_field, struct_type_to_arrow_schema,
    type_to_arrow_datatype,
};

/// Arrow field metadata key holding the column's field id.
pub const FIELD_ID_META_KEY: &str = "PARQUET:field_id";

pub(crate) const TIMESTAMP_TZ: &str = "+00:00";

//! Table-format schema types and data file metadata.
//!
//! `core` holds the type system and the [`DataFile`](core::DataFile) record;
//! `arrow` (default feature) converts schemas to Arrow.

#[cfg(feature = "arrow")]
pub use tablemeta_arrow as arrow;
pub use tablemeta_core as core;

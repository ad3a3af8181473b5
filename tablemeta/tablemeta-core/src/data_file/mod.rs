//! Metadata record describing one physical data file.
//!
//! A [`DataFile`] is built either through the value constructors
//! ([`DataFile::new`], [`DataFile::partitioned`], [`DataFile::with_metrics`])
//! or by a record codec through [`DataFile::projected`] / [`DataFile::decode`],
//! which route positional slot values through a field-id based
//! [`Projection`]. Positions beyond the known slots are ignored so that
//! records written by newer versions still decode.

mod projection;
mod schema;
mod stats;

use std::{collections::HashMap, fmt, sync::Arc};

pub use projection::Projection;
pub use schema::{DataFileField, data_file_schema};
pub use stats::{pairs_to_stats, stats_to_pairs};

use crate::{
    error::{DataFileError, ValueTypeError},
    file_format::FileFormat,
    metrics::Metrics,
    partition::PartitionData,
    types::StructType,
    value::Value,
};

/// Metadata for a single data file.
///
/// Counts and sizes are non-negative. The partition value always has
/// `partition_type` as its type.
#[derive(Debug)]
pub struct DataFile {
    path: String,
    format: Option<FileFormat>,
    partition_type: StructType,
    partition: Arc<PartitionData>,
    record_count: i64,
    file_size_in_bytes: i64,
    block_size_in_bytes: i64,

    // optional fields
    file_ordinal: Option<i32>,
    sort_columns: Option<Vec<i32>>,
    column_sizes: Option<Vec<(i32, i64)>>,
    value_counts: Option<Vec<(i32, i64)>>,
    null_value_counts: Option<Vec<(i32, i64)>>,
    distinct_counts: Option<Vec<(i32, i64)>>,

    projection: Option<Projection>,
}

impl DataFile {
    /// Unpartitioned file without statistics.
    ///
    /// Counts and sizes must be non-negative; debug builds panic otherwise.
    /// Use [`DataFile::with_metrics`] for counts from an untrusted source.
    pub fn new(
        path: impl Into<String>,
        format: FileFormat,
        record_count: i64,
        file_size_in_bytes: i64,
        block_size_in_bytes: i64,
    ) -> Self {
        Self::with_partition(
            path.into(),
            Some(format),
            PartitionData::empty(),
            record_count,
            file_size_in_bytes,
            block_size_in_bytes,
        )
    }

    /// Partitioned file without statistics.
    ///
    /// Same count and size precondition as [`DataFile::new`].
    pub fn partitioned(
        path: impl Into<String>,
        format: FileFormat,
        partition: PartitionData,
        record_count: i64,
        file_size_in_bytes: i64,
        block_size_in_bytes: i64,
    ) -> Self {
        Self::with_partition(
            path.into(),
            Some(format),
            Arc::new(partition),
            record_count,
            file_size_in_bytes,
            block_size_in_bytes,
        )
    }

    /// File whose record count and statistics come from `metrics`.
    ///
    /// `None` for `partition` means the file is unpartitioned. Fails if the
    /// record count is missing or any count or size is negative.
    pub fn with_metrics(
        path: impl Into<String>,
        format: FileFormat,
        partition: Option<PartitionData>,
        file_size_in_bytes: i64,
        block_size_in_bytes: i64,
        metrics: &Metrics,
    ) -> Result<Self, DataFileError> {
        let record_count = metrics.record_count.ok_or(DataFileError::MissingValue {
            field: DataFileField::RecordCount.name(),
        })?;
        for (field, value) in [
            (DataFileField::RecordCount, record_count),
            (DataFileField::FileSizeInBytes, file_size_in_bytes),
            (DataFileField::BlockSizeInBytes, block_size_in_bytes),
        ] {
            if value < 0 {
                return Err(DataFileError::NegativeValue {
                    field: field.name(),
                    value,
                });
            }
        }
        let partition = partition.map_or_else(PartitionData::empty, Arc::new);

        let mut file = Self::with_partition(
            path.into(),
            Some(format),
            partition,
            record_count,
            file_size_in_bytes,
            block_size_in_bytes,
        );
        file.column_sizes = metrics.column_sizes.as_ref().map(stats_to_pairs);
        file.value_counts = metrics.value_counts.as_ref().map(stats_to_pairs);
        file.null_value_counts = metrics.null_value_counts.as_ref().map(stats_to_pairs);
        file.distinct_counts = metrics.distinct_counts.as_ref().map(stats_to_pairs);
        Ok(file)
    }

    /// Empty record ready to receive slot values laid out as `read_schema`.
    ///
    /// `read_schema` may hold any subset of the canonical fields in any order;
    /// fields are matched by id, so renamed fields still resolve. Slots the reader did not project keep their
    /// defaults: empty path, no format, zero counts, no optional values.
    pub fn projected(read_schema: &StructType) -> Result<Self, DataFileError> {
        let partition_type = match read_schema.field(DataFileField::Partition.field_id()) {
            None => StructType::empty(),
            Some(field) => field
                .field_type()
                .as_struct()
                .cloned()
                .ok_or_else(|| DataFileError::MissingPartitionType {
                    field: field.to_string(),
                })?,
        };

        let full = data_file_schema(&partition_type);
        let projection = Projection::build(read_schema, &full)?;
        tracing::debug!(
            projected_fields = projection.len(),
            partition_fields = partition_type.len(),
            "built data file projection"
        );

        let partition = if partition_type.is_empty() {
            PartitionData::empty()
        } else {
            Arc::new(PartitionData::new(partition_type))
        };
        let mut file = Self::with_partition(String::new(), None, partition, 0, 0, 0);
        file.projection = Some(projection);
        Ok(file)
    }

    /// Decode positional `values` laid out as `read_schema`.
    ///
    /// The record is returned only if every value was accepted.
    pub fn decode(
        read_schema: &StructType,
        values: impl IntoIterator<Item = Value>,
    ) -> Result<Self, DataFileError> {
        let mut file = Self::projected(read_schema)?;
        for (pos, value) in values.into_iter().enumerate() {
            file.set_field(pos, value)?;
        }
        Ok(file)
    }

    fn with_partition(
        path: String,
        format: Option<FileFormat>,
        partition: Arc<PartitionData>,
        record_count: i64,
        file_size_in_bytes: i64,
        block_size_in_bytes: i64,
    ) -> Self {
        debug_assert!(
            record_count >= 0 && file_size_in_bytes >= 0 && block_size_in_bytes >= 0,
            "data file counts and sizes must be non-negative"
        );
        Self {
            path,
            format,
            partition_type: partition.partition_type().clone(),
            partition,
            record_count,
            file_size_in_bytes,
            block_size_in_bytes,
            file_ordinal: None,
            sort_columns: None,
            column_sizes: None,
            value_counts: None,
            null_value_counts: None,
            distinct_counts: None,
            projection: None,
        }
    }

    pub fn with_ordinal(mut self, file_ordinal: i32) -> Self {
        self.file_ordinal = Some(file_ordinal);
        self
    }

    pub fn with_sort_columns(mut self, sort_columns: Vec<i32>) -> Self {
        self.sort_columns = Some(sort_columns);
        self
    }

    /// Copy with an independent partition value and statistics.
    pub fn copy(&self) -> Self {
        Self {
            path: self.path.clone(),
            format: self.format,
            partition_type: self.partition_type.clone(),
            partition: PartitionData::copy(&self.partition),
            record_count: self.record_count,
            file_size_in_bytes: self.file_size_in_bytes,
            block_size_in_bytes: self.block_size_in_bytes,
            file_ordinal: self.file_ordinal,
            sort_columns: self.sort_columns.clone(),
            column_sizes: copy_stats(&self.column_sizes),
            value_counts: copy_stats(&self.value_counts),
            null_value_counts: copy_stats(&self.null_value_counts),
            distinct_counts: copy_stats(&self.distinct_counts),
            projection: self.projection.clone(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// `None` only for a decoded record whose reader did not project the format.
    pub fn format(&self) -> Option<FileFormat> {
        self.format
    }

    pub fn partition(&self) -> &PartitionData {
        &self.partition
    }

    /// Mutable partition value; a shared partition is copied first.
    pub fn partition_mut(&mut self) -> &mut PartitionData {
        Arc::make_mut(&mut self.partition)
    }

    pub fn partition_type(&self) -> &StructType {
        &self.partition_type
    }

    pub fn record_count(&self) -> i64 {
        self.record_count
    }

    pub fn file_size_in_bytes(&self) -> i64 {
        self.file_size_in_bytes
    }

    pub fn block_size_in_bytes(&self) -> i64 {
        self.block_size_in_bytes
    }

    pub fn file_ordinal(&self) -> Option<i32> {
        self.file_ordinal
    }

    pub fn sort_columns(&self) -> Option<&[i32]> {
        self.sort_columns.as_deref()
    }

    pub fn column_sizes(&self) -> Option<HashMap<i32, i64>> {
        self.column_sizes.as_deref().map(pairs_to_stats)
    }

    pub fn value_counts(&self) -> Option<HashMap<i32, i64>> {
        self.value_counts.as_deref().map(pairs_to_stats)
    }

    pub fn null_value_counts(&self) -> Option<HashMap<i32, i64>> {
        self.null_value_counts.as_deref().map(pairs_to_stats)
    }

    pub fn distinct_counts(&self) -> Option<HashMap<i32, i64>> {
        self.distinct_counts.as_deref().map(pairs_to_stats)
    }

    /// The active projection, for records created by [`DataFile::projected`].
    pub fn projection(&self) -> Option<&Projection> {
        self.projection.as_ref()
    }

    /// Canonical schema of this record.
    pub fn schema(&self) -> StructType {
        data_file_schema(&self.partition_type)
    }

    /// Value of the slot at canonical ordinal `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not one of the twelve canonical ordinals.
    pub fn get_field(&self, pos: usize) -> Value {
        match DataFileField::from_pos(pos) {
            Some(field) => self.get_field_as(field),
            None => panic!("unknown data file field ordinal: {pos}"),
        }
    }

    pub fn get_field_as(&self, field: DataFileField) -> Value {
        match field {
            DataFileField::FilePath => Value::string(&self.path),
            DataFileField::FileFormat => self.format.map(|f| f.as_str()).into(),
            DataFileField::Partition => self.partition.to_value(),
            DataFileField::RecordCount => Value::I64(self.record_count),
            DataFileField::FileSizeInBytes => Value::I64(self.file_size_in_bytes),
            DataFileField::BlockSizeInBytes => Value::I64(self.block_size_in_bytes),
            DataFileField::FileOrdinal => self.file_ordinal.into(),
            DataFileField::SortColumns => self.sort_columns.as_ref().map_or(Value::Null, |cols| {
                Value::List(cols.iter().copied().map(Value::I32).collect())
            }),
            DataFileField::ColumnSizes => stats_value(&self.column_sizes),
            DataFileField::ValueCounts => stats_value(&self.value_counts),
            DataFileField::NullValueCounts => stats_value(&self.null_value_counts),
            DataFileField::DistinctCounts => stats_value(&self.distinct_counts),
        }
    }

    /// Store a value arriving at incoming position `pos`.
    ///
    /// With an active projection `pos` is first mapped to its canonical
    /// ordinal. Positions that map to no known slot are ignored.
    pub fn set_field(&mut self, pos: usize, value: Value) -> Result<(), DataFileError> {
        let logical = match &self.projection {
            Some(projection) => projection.logical_pos(pos),
            None => Some(pos),
        };
        match logical.and_then(DataFileField::from_pos) {
            Some(field) => self.set_field_as(field, value),
            None => {
                tracing::trace!(pos, "ignoring value for unknown data file field");
                Ok(())
            }
        }
    }

    /// Store `value` in a logical slot, validating its shape.
    pub fn set_field_as(
        &mut self,
        field: DataFileField,
        value: Value,
    ) -> Result<(), DataFileError> {
        let invalid = |source: ValueTypeError| DataFileError::InvalidSlot {
            pos: field.pos(),
            field: field.name(),
            source,
        };

        match field {
            DataFileField::FilePath => {
                let path = required(value.try_str(), &value, "String").map_err(invalid)?;
                self.path = path.to_string();
            }
            DataFileField::FileFormat => {
                let name = required(value.try_str(), &value, "String").map_err(invalid)?;
                self.format = Some(name.parse()?);
            }
            DataFileField::Partition => {
                let values = required(value.try_struct(), &value, "Struct").map_err(invalid)?;
                self.partition = if self.partition_type.is_empty() && values.is_empty() {
                    PartitionData::empty()
                } else {
                    Arc::new(PartitionData::from_values(
                        self.partition_type.clone(),
                        values.to_vec(),
                    )?)
                };
            }
            DataFileField::RecordCount => {
                self.record_count = non_negative(&value).map_err(invalid)?;
            }
            DataFileField::FileSizeInBytes => {
                self.file_size_in_bytes = non_negative(&value).map_err(invalid)?;
            }
            DataFileField::BlockSizeInBytes => {
                self.block_size_in_bytes = non_negative(&value).map_err(invalid)?;
            }
            DataFileField::FileOrdinal => {
                self.file_ordinal = value.try_i32().map_err(invalid)?;
            }
            DataFileField::SortColumns => {
                self.sort_columns = match value.try_list().map_err(invalid)? {
                    None => None,
                    Some(items) => Some(
                        items
                            .iter()
                            .map(|item| required(item.try_i32(), item, "I32"))
                            .collect::<Result<Vec<_>, _>>()
                            .map_err(invalid)?,
                    ),
                };
            }
            DataFileField::ColumnSizes => {
                self.column_sizes = stats::pairs_from_value(&value).map_err(invalid)?;
            }
            DataFileField::ValueCounts => {
                self.value_counts = stats::pairs_from_value(&value).map_err(invalid)?;
            }
            DataFileField::NullValueCounts => {
                self.null_value_counts = stats::pairs_from_value(&value).map_err(invalid)?;
            }
            DataFileField::DistinctCounts => {
                self.distinct_counts = stats::pairs_from_value(&value).map_err(invalid)?;
            }
        }
        Ok(())
    }
}

fn required<T>(
    read: Result<Option<T>, ValueTypeError>,
    value: &Value,
    expected: &str,
) -> Result<T, ValueTypeError> {
    read?.ok_or_else(|| value.type_mismatch(expected))
}

fn non_negative(value: &Value) -> Result<i64, ValueTypeError> {
    match required(value.try_i64(), value, "I64")? {
        n if n >= 0 => Ok(n),
        _ => Err(value.type_mismatch("non-negative I64")),
    }
}

/// Map round trip, so the copy never shares statistics storage.
fn copy_stats(pairs: &Option<Vec<(i32, i64)>>) -> Option<Vec<(i32, i64)>> {
    pairs
        .as_deref()
        .map(|pairs| stats_to_pairs(&pairs_to_stats(pairs)))
}

fn stats_value(pairs: &Option<Vec<(i32, i64)>>) -> Value {
    pairs
        .as_deref()
        .map_or(Value::Null, stats::pairs_to_value)
}

/// Logical content only; the projection is decode state.
impl PartialEq for DataFile {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.format == other.format
            && self.partition_type == other.partition_type
            && self.partition == other.partition
            && self.record_count == other.record_count
            && self.file_size_in_bytes == other.file_size_in_bytes
            && self.block_size_in_bytes == other.block_size_in_bytes
            && self.file_ordinal == other.file_ordinal
            && self.sort_columns == other.sort_columns
            && self.column_sizes() == other.column_sizes()
            && self.value_counts() == other.value_counts()
            && self.null_value_counts() == other.null_value_counts()
            && self.distinct_counts() == other.distinct_counts()
    }
}

impl fmt::Display for DataFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = self.format.map_or("null", |format| format.as_str());
        write!(
            f,
            "DataFile{{file_path={}, file_format={format}, partition={}, record_count={}, \
             file_size_in_bytes={}, block_size_in_bytes={}",
            self.path,
            self.partition,
            self.record_count,
            self.file_size_in_bytes,
            self.block_size_in_bytes,
        )?;

        let stats = [
            (DataFileField::ColumnSizes, &self.column_sizes),
            (DataFileField::ValueCounts, &self.value_counts),
            (DataFileField::NullValueCounts, &self.null_value_counts),
            (DataFileField::DistinctCounts, &self.distinct_counts),
        ];
        for (field, pairs) in stats {
            write!(f, ", {}=", field.name())?;
            let Some(pairs) = pairs else {
                f.write_str("null")?;
                continue;
            };
            f.write_str("{")?;
            for (i, (key, value)) in pairs.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

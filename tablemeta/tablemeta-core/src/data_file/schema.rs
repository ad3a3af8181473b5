use crate::types::{ListType, NestedField, PrimitiveType, StructType};

/// Logical slots of a [`DataFile`](super::DataFile) record, in canonical order.
///
/// The discriminant is the slot's canonical ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFileField {
    FilePath,
    FileFormat,
    Partition,
    RecordCount,
    FileSizeInBytes,
    BlockSizeInBytes,
    FileOrdinal,
    SortColumns,
    ColumnSizes,
    ValueCounts,
    NullValueCounts,
    DistinctCounts,
}

impl DataFileField {
    pub const ALL: [DataFileField; 12] = [
        Self::FilePath,
        Self::FileFormat,
        Self::Partition,
        Self::RecordCount,
        Self::FileSizeInBytes,
        Self::BlockSizeInBytes,
        Self::FileOrdinal,
        Self::SortColumns,
        Self::ColumnSizes,
        Self::ValueCounts,
        Self::NullValueCounts,
        Self::DistinctCounts,
    ];

    pub fn from_pos(pos: usize) -> Option<Self> {
        Self::ALL.get(pos).copied()
    }

    pub fn pos(self) -> usize {
        self as usize
    }

    /// Field id of this slot in [`data_file_schema`].
    pub fn field_id(self) -> i32 {
        100 + self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::FilePath => "file_path",
            Self::FileFormat => "file_format",
            Self::Partition => "partition",
            Self::RecordCount => "record_count",
            Self::FileSizeInBytes => "file_size_in_bytes",
            Self::BlockSizeInBytes => "block_size_in_bytes",
            Self::FileOrdinal => "file_ordinal",
            Self::SortColumns => "sort_columns",
            Self::ColumnSizes => "column_sizes",
            Self::ValueCounts => "value_counts",
            Self::NullValueCounts => "null_value_counts",
            Self::DistinctCounts => "distinct_counts",
        }
    }
}

const SORT_COLUMNS_ELEMENT_ID: i32 = 112;

/// `(element, key, value)` ids of the four statistics lists, in slot order.
const STATS_IDS: [(i32, i32, i32); 4] = [
    (113, 117, 118),
    (114, 119, 120),
    (115, 121, 122),
    (116, 123, 124),
];

/// The canonical data file schema for a given partition type.
///
/// Statistics are lists of `key`/`value` records rather than maps: map keys
/// are always strings, while statistic keys are column field ids.
pub fn data_file_schema(partition_type: &StructType) -> StructType {
    use DataFileField as F;

    let [column_sizes, value_counts, null_value_counts, distinct_counts] =
        STATS_IDS.map(|(element_id, key_id, value_id)| stats_type(element_id, key_id, value_id));

    StructType::new(vec![
        NestedField::required(F::FilePath.field_id(), F::FilePath.name(), PrimitiveType::String),
        NestedField::required(
            F::FileFormat.field_id(),
            F::FileFormat.name(),
            PrimitiveType::String,
        ),
        NestedField::required(
            F::Partition.field_id(),
            F::Partition.name(),
            partition_type.clone(),
        ),
        NestedField::required(
            F::RecordCount.field_id(),
            F::RecordCount.name(),
            PrimitiveType::Long,
        ),
        NestedField::required(
            F::FileSizeInBytes.field_id(),
            F::FileSizeInBytes.name(),
            PrimitiveType::Long,
        ),
        NestedField::required(
            F::BlockSizeInBytes.field_id(),
            F::BlockSizeInBytes.name(),
            PrimitiveType::Long,
        ),
        NestedField::optional(
            F::FileOrdinal.field_id(),
            F::FileOrdinal.name(),
            PrimitiveType::Int,
        ),
        NestedField::optional(
            F::SortColumns.field_id(),
            F::SortColumns.name(),
            ListType::of_required(SORT_COLUMNS_ELEMENT_ID, PrimitiveType::Int),
        ),
        NestedField::optional(F::ColumnSizes.field_id(), F::ColumnSizes.name(), column_sizes),
        NestedField::optional(F::ValueCounts.field_id(), F::ValueCounts.name(), value_counts),
        NestedField::optional(
            F::NullValueCounts.field_id(),
            F::NullValueCounts.name(),
            null_value_counts,
        ),
        NestedField::optional(
            F::DistinctCounts.field_id(),
            F::DistinctCounts.name(),
            distinct_counts,
        ),
    ])
}

fn stats_type(element_id: i32, key_id: i32, value_id: i32) -> ListType {
    ListType::of_required(
        element_id,
        StructType::new(vec![
            NestedField::required(key_id, "key", PrimitiveType::Int),
            NestedField::required(value_id, "value", PrimitiveType::Long),
        ]),
    )
}

use std::collections::HashMap;

/// Per-file statistics collected by a file writer.
///
/// All statistic maps are keyed by column field id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    pub record_count: Option<i64>,
    pub column_sizes: Option<HashMap<i32, i64>>,
    pub value_counts: Option<HashMap<i32, i64>>,
    pub null_value_counts: Option<HashMap<i32, i64>>,
    pub distinct_counts: Option<HashMap<i32, i64>>,
}

impl Metrics {
    pub fn new(record_count: i64) -> Self {
        Self {
            record_count: Some(record_count),
            ..Self::default()
        }
    }

    pub fn with_column_sizes(mut self, column_sizes: HashMap<i32, i64>) -> Self {
        self.column_sizes = Some(column_sizes);
        self
    }

    pub fn with_value_counts(mut self, value_counts: HashMap<i32, i64>) -> Self {
        self.value_counts = Some(value_counts);
        self
    }

    pub fn with_null_value_counts(mut self, null_value_counts: HashMap<i32, i64>) -> Self {
        self.null_value_counts = Some(null_value_counts);
        self
    }

    pub fn with_distinct_counts(mut self, distinct_counts: HashMap<i32, i64>) -> Self {
        self.distinct_counts = Some(distinct_counts);
        self
    }
}

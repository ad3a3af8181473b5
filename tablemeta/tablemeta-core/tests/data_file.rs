use std::collections::HashMap;

use tablemeta_core::{
    DataFile, DataFileError, DataFileField, FileFormat, Metrics, NestedField, PartitionData,
    PrimitiveType, StructType, Value, data_file_schema, pairs_to_stats, stats_to_pairs,
};

fn partition_type() -> StructType {
    StructType::new(vec![
        NestedField::optional(1000, "event_day", PrimitiveType::Date),
        NestedField::optional(1001, "bucket", PrimitiveType::Int),
    ])
}

fn stats_value(pairs: &[(i32, i64)]) -> Value {
    Value::List(
        pairs
            .iter()
            .map(|&(k, v)| Value::Struct(vec![Value::I32(k), Value::I64(v)]))
            .collect(),
    )
}

/// Canonical schema restricted to `ids`, in the given order.
fn read_schema(partition_type: &StructType, ids: &[i32]) -> StructType {
    let full = data_file_schema(partition_type);
    StructType::new(
        ids.iter()
            .filter_map(|&id| full.field(id).cloned())
            .collect::<Vec<_>>(),
    )
}

#[test]
fn minimal_unpartitioned_record() {
    let file = DataFile::new("data/00001.parquet", FileFormat::Parquet, 100, 2048, 1024);

    assert_eq!(file.path(), "data/00001.parquet");
    assert_eq!(file.format(), Some(FileFormat::Parquet));
    assert_eq!(file.record_count(), 100);
    assert_eq!(file.file_size_in_bytes(), 2048);
    assert_eq!(file.block_size_in_bytes(), 1024);
    assert!(file.partition().is_empty());
    assert!(file.partition_type().is_empty());
    assert_eq!(file.file_ordinal(), None);
    assert_eq!(file.sort_columns(), None);
    assert_eq!(file.column_sizes(), None);
    assert_eq!(file.distinct_counts(), None);

    let copy = file.copy();
    assert_eq!(copy, file);
    assert_eq!(copy.record_count(), 100);
}

#[test]
fn get_field_exposes_canonical_slots() {
    let file = DataFile::new("data/00001.parquet", FileFormat::Parquet, 100, 2048, 1024)
        .with_ordinal(3)
        .with_sort_columns(vec![1, 2]);

    assert_eq!(file.get_field(0), Value::string("data/00001.parquet"));
    assert_eq!(file.get_field(1), Value::string("PARQUET"));
    assert_eq!(file.get_field(2), Value::Struct(vec![]));
    assert_eq!(file.get_field(3), Value::I64(100));
    assert_eq!(file.get_field(4), Value::I64(2048));
    assert_eq!(file.get_field(5), Value::I64(1024));
    assert_eq!(file.get_field(6), Value::I32(3));
    assert_eq!(file.get_field(7), Value::List(vec![Value::I32(1), Value::I32(2)]));
    for pos in 8..12 {
        assert_eq!(file.get_field(pos), Value::Null);
    }
}

#[test]
#[should_panic(expected = "unknown data file field ordinal: 12")]
fn get_field_beyond_known_slots_panics() {
    let file = DataFile::new("a.avro", FileFormat::Avro, 1, 1, 1);
    let _ = file.get_field(12);
}

#[test]
fn set_field_ignores_unknown_trailing_ordinals() -> Result<(), DataFileError> {
    let mut file = DataFile::new("a.avro", FileFormat::Avro, 1, 1, 1);
    file.set_field(12, Value::string("from a newer writer"))?;
    file.set_field(40, Value::Null)?;
    assert_eq!(file, DataFile::new("a.avro", FileFormat::Avro, 1, 1, 1));
    Ok(())
}

#[test]
fn set_field_rejects_wrong_value_shapes() {
    let mut file = DataFile::new("a.orc", FileFormat::Orc, 1, 1, 1);
    assert!(matches!(
        file.set_field(3, Value::I32(5)),
        Err(DataFileError::InvalidSlot { pos: 3, field: "record_count", .. })
    ));
    assert!(matches!(
        file.set_field(4, Value::I64(-1)),
        Err(DataFileError::InvalidSlot { pos: 4, .. })
    ));
    assert!(matches!(
        file.set_field(0, Value::Null),
        Err(DataFileError::InvalidSlot { pos: 0, .. })
    ));
    assert_eq!(
        file.set_field(1, Value::string("csv")),
        Err(DataFileError::UnknownFileFormat {
            name: "csv".to_string()
        })
    );
    assert_eq!(file.record_count(), 1);
}

#[test]
fn metrics_record_count_and_statistics_are_used() -> Result<(), DataFileError> {
    let metrics = Metrics::new(42)
        .with_column_sizes(HashMap::from([(1, 100), (2, 200)]))
        .with_null_value_counts(HashMap::from([(2, 0)]));

    let file = DataFile::with_metrics("f.parquet", FileFormat::Parquet, None, 4096, 512, &metrics)?;
    assert_eq!(file.record_count(), 42);
    assert_eq!(file.column_sizes(), Some(HashMap::from([(1, 100), (2, 200)])));
    assert_eq!(file.null_value_counts(), Some(HashMap::from([(2, 0)])));
    assert_eq!(file.value_counts(), None);
    assert!(file.partition().is_empty());
    assert_eq!(file.get_field(8), stats_value(&[(1, 100), (2, 200)]));
    Ok(())
}

#[test]
fn metrics_without_record_count_fail() {
    let metrics = Metrics {
        record_count: None,
        ..Metrics::default()
    };
    let result = DataFile::with_metrics("f.parquet", FileFormat::Parquet, None, 1, 1, &metrics);
    assert_eq!(
        result.unwrap_err(),
        DataFileError::MissingValue {
            field: "record_count"
        }
    );
}

#[test]
fn statistics_round_trip_between_map_and_pairs() {
    let stats = HashMap::from([(2, 200), (1, 100)]);
    let pairs = stats_to_pairs(&stats);
    assert_eq!(pairs, vec![(1, 100), (2, 200)]);
    assert_eq!(pairs_to_stats(&pairs), stats);
    assert_eq!(pairs_to_stats(&[(1, 1), (1, 2)]), HashMap::from([(1, 2)]));
}

#[test]
fn copy_has_independent_partition_and_statistics() -> Result<(), DataFileError> {
    let partition =
        PartitionData::from_values(partition_type(), vec![Value::I32(19_000), Value::I32(3)])?;
    let metrics = Metrics::new(10).with_value_counts(HashMap::from([(1, 10), (2, 8)]));
    let original = DataFile::with_metrics(
        "p/f.parquet",
        FileFormat::Parquet,
        Some(partition),
        100,
        100,
        &metrics,
    )?;

    let mut copy = original.copy();
    assert_eq!(copy, original);

    copy.set_field(9, stats_value(&[(1, 99)]))?;
    copy.partition_mut().set(1, Value::I32(4))?;

    assert_eq!(original.value_counts(), Some(HashMap::from([(1, 10), (2, 8)])));
    assert_eq!(original.partition().get(1), Some(&Value::I32(3)));
    assert_eq!(copy.value_counts(), Some(HashMap::from([(1, 99)])));
    assert_ne!(copy, original);
    Ok(())
}

#[test]
fn canonical_schema_has_twelve_fields_with_stable_ids() {
    let schema = data_file_schema(&partition_type());
    assert_eq!(schema.len(), 12);
    for field in DataFileField::ALL {
        let canonical = &schema.fields()[field.pos()];
        assert_eq!(canonical.field_id(), field.field_id());
        assert_eq!(canonical.name(), field.name());
        assert_eq!(DataFileField::from_pos(field.pos()), Some(field));
    }
    assert_eq!(DataFileField::from_pos(12), None);
    assert_eq!(
        schema.field_type("partition").and_then(|t| t.as_struct()),
        Some(&partition_type())
    );
    assert!(schema.field_by_name("file_ordinal").is_some_and(NestedField::is_optional));
    assert!(schema.field_by_name("record_count").is_some_and(NestedField::is_required));
}

#[test]
fn decode_full_schema_in_canonical_order() -> Result<(), DataFileError> {
    let full = data_file_schema(&partition_type());
    let values = vec![
        Value::string("p/f.parquet"),
        Value::string("PARQUET"),
        Value::Struct(vec![Value::I32(19_000), Value::Null]),
        Value::I64(7),
        Value::I64(70),
        Value::I64(64),
        Value::I32(1),
        Value::List(vec![Value::I32(3)]),
        stats_value(&[(1, 10)]),
        stats_value(&[(1, 7)]),
        Value::Null,
        Value::Map(vec![(Value::I32(1), Value::I64(5))]),
    ];

    let file = DataFile::decode(&full, values)?;
    assert_eq!(file.path(), "p/f.parquet");
    assert_eq!(file.format(), Some(FileFormat::Parquet));
    assert_eq!(file.partition().values(), &[Value::I32(19_000), Value::Null]);
    assert_eq!(file.record_count(), 7);
    assert_eq!(file.file_size_in_bytes(), 70);
    assert_eq!(file.block_size_in_bytes(), 64);
    assert_eq!(file.file_ordinal(), Some(1));
    assert_eq!(file.sort_columns(), Some(&[3][..]));
    assert_eq!(file.column_sizes(), Some(HashMap::from([(1, 10)])));
    assert_eq!(file.value_counts(), Some(HashMap::from([(1, 7)])));
    assert_eq!(file.null_value_counts(), None);
    assert_eq!(file.distinct_counts(), Some(HashMap::from([(1, 5)])));
    assert_eq!(
        file.projection().map(|p| p.positions().to_vec()),
        Some((0..12).collect::<Vec<usize>>())
    );
    Ok(())
}

#[test]
fn decode_projected_subset_in_arbitrary_order() -> Result<(), DataFileError> {
    // record_count, file_path, partition, value_counts
    let schema = read_schema(&partition_type(), &[103, 100, 102, 109]);
    let values = vec![
        Value::I64(12),
        Value::string("p/g.orc"),
        Value::Struct(vec![Value::Null, Value::I32(9)]),
        stats_value(&[(4, 12)]),
    ];

    let file = DataFile::decode(&schema, values)?;
    assert_eq!(
        file.projection().map(|p| p.positions().to_vec()),
        Some(vec![3, 0, 2, 9])
    );
    assert_eq!(file.record_count(), 12);
    assert_eq!(file.path(), "p/g.orc");
    assert_eq!(file.partition().get(1), Some(&Value::I32(9)));
    assert_eq!(file.value_counts(), Some(HashMap::from([(4, 12)])));
    assert_eq!(file.format(), None);
    assert_eq!(file.file_size_in_bytes(), 0);
    assert_eq!(file.column_sizes(), None);
    Ok(())
}

#[test]
fn decode_ignores_values_past_the_projected_fields() -> Result<(), DataFileError> {
    let schema = read_schema(&StructType::empty(), &[100, 101, 103]);
    let values = vec![
        Value::string("x.avro"),
        Value::string("avro"),
        Value::I64(1),
        Value::string("unknown trailing value"),
    ];
    let file = DataFile::decode(&schema, values)?;
    assert_eq!(file.format(), Some(FileFormat::Avro));
    assert!(file.partition().is_empty());
    assert_eq!(file.record_count(), 1);
    Ok(())
}

#[test]
fn projection_with_unknown_field_id_fails() {
    let schema = StructType::new(vec![
        NestedField::required(100, "file_path", PrimitiveType::String),
        NestedField::optional(150, "key_metadata", PrimitiveType::Binary),
    ]);
    let err = DataFile::projected(&schema).unwrap_err();
    assert_eq!(
        err,
        DataFileError::SchemaMismatch {
            field: "150: key_metadata: optional binary".to_string()
        }
    );
}

#[test]
fn projection_rejects_non_struct_partition() {
    let schema = StructType::new(vec![NestedField::required(
        102,
        "partition",
        PrimitiveType::String,
    )]);
    assert!(matches!(
        DataFile::projected(&schema),
        Err(DataFileError::MissingPartitionType { .. })
    ));
}

#[test]
fn decode_rejects_partition_values_of_wrong_type() {
    let schema = read_schema(&partition_type(), &[102]);
    let result = DataFile::decode(&schema, vec![Value::Struct(vec![
        Value::string("not a date"),
        Value::Null,
    ])]);
    assert!(matches!(result, Err(DataFileError::Partition(_))));
}

#[test]
fn get_field_round_trips_through_decode() -> Result<(), DataFileError> {
    let metrics = Metrics::new(5)
        .with_column_sizes(HashMap::from([(1, 50)]))
        .with_distinct_counts(HashMap::from([(1, 2)]));
    let partition =
        PartitionData::from_values(partition_type(), vec![Value::Null, Value::I32(1)])?;
    let original = DataFile::with_metrics(
        "p/h.parquet",
        FileFormat::Parquet,
        Some(partition),
        500,
        128,
        &metrics,
    )?
    .with_sort_columns(vec![1]);

    let schema = original.schema();
    let values = (0..schema.len()).map(|pos| original.get_field(pos));
    let decoded = DataFile::decode(&schema, values)?;
    assert_eq!(decoded, original);
    Ok(())
}

#[test]
fn display_shows_path_format_and_statistics() {
    let metrics = Metrics::new(1).with_column_sizes(HashMap::from([(2, 20), (1, 10)]));
    let file = DataFile::with_metrics("d.parquet", FileFormat::Parquet, None, 3, 4, &metrics)
        .unwrap_or_else(|err| panic!("{err}"));
    assert_eq!(
        file.to_string(),
        "DataFile{file_path=d.parquet, file_format=PARQUET, partition=PartitionData{}, \
         record_count=1, file_size_in_bytes=3, block_size_in_bytes=4, \
         column_sizes={1=10, 2=20}, value_counts=null, null_value_counts=null, \
         distinct_counts=null}"
    );
}

#[test]
fn typed_slot_access_matches_ordinal_access() -> Result<(), DataFileError> {
    let mut file = DataFile::new("a.orc", FileFormat::Orc, 1, 1, 1);
    file.set_field_as(DataFileField::FileOrdinal, Value::I32(8))?;
    for field in DataFileField::ALL {
        assert_eq!(file.get_field_as(field), file.get_field(field.pos()));
    }
    assert_eq!(file.file_ordinal(), Some(8));
    Ok(())
}

#[test]
fn partition_resolves_by_id_when_renamed() -> Result<(), DataFileError> {
    let partition_type =
        StructType::new(vec![NestedField::optional(1000, "event_day", PrimitiveType::Date)]);
    let schema = StructType::new(vec![
        NestedField::required(100, "file_path", PrimitiveType::String),
        NestedField::required(102, "part", partition_type.clone()),
    ]);

    let file = DataFile::decode(
        &schema,
        vec![Value::string("a"), Value::Struct(vec![Value::I32(5)])],
    )?;
    assert_eq!(file.path(), "a");
    assert_eq!(file.partition_type(), &partition_type);
    assert_eq!(file.partition().get(0), Some(&Value::I32(5)));
    assert_eq!(file.projection().map(|p| p.positions().to_vec()), Some(vec![0, 2]));
    Ok(())
}

#[test]
fn field_named_partition_with_other_id_is_not_the_partition() {
    let schema = StructType::new(vec![NestedField::required(
        150,
        "partition",
        StructType::new(vec![NestedField::optional(1000, "event_day", PrimitiveType::Date)]),
    )]);
    assert!(matches!(
        DataFile::projected(&schema),
        Err(DataFileError::SchemaMismatch { .. })
    ));
}

#[test]
fn metrics_with_negative_counts_fail() {
    let result =
        DataFile::with_metrics("f.parquet", FileFormat::Parquet, None, 1, 1, &Metrics::new(-1));
    assert_eq!(
        result.unwrap_err(),
        DataFileError::NegativeValue {
            field: "record_count",
            value: -1
        }
    );

    let result =
        DataFile::with_metrics("f.parquet", FileFormat::Parquet, None, -4, 1, &Metrics::new(3));
    assert_eq!(
        result.unwrap_err(),
        DataFileError::NegativeValue {
            field: "file_size_in_bytes",
            value: -4
        }
    );

    let result =
        DataFile::with_metrics("f.parquet", FileFormat::Parquet, None, 1, -2, &Metrics::new(3));
    assert!(matches!(
        result,
        Err(DataFileError::NegativeValue {
            field: "block_size_in_bytes",
            ..
        })
    ));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "data file counts and sizes must be non-negative")]
fn new_with_negative_size_panics_in_debug_builds() {
    let _ = DataFile::new("a.avro", FileFormat::Avro, 1, -1, 1);
}

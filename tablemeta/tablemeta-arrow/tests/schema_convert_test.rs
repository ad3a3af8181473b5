use std::sync::Arc;

use arrow::datatypes::{DataType, Field, TimeUnit};
use tablemeta_arrow::{
    ArrowConvertError, FIELD_ID_META_KEY, data_file_arrow_schema, struct_type_to_arrow_schema,
    type_to_arrow_datatype,
};
use tablemeta_core::{ListType, MapType, NestedField, PrimitiveType, StructType, Type};

fn field_id(field: &Field) -> Option<&str> {
    field.metadata().get(FIELD_ID_META_KEY).map(String::as_str)
}

#[test]
fn struct_type_to_arrow_schema_converts_primitives() -> Result<(), ArrowConvertError> {
    let fields = vec![
        NestedField::required(1, "b", PrimitiveType::Boolean),
        NestedField::required(2, "i", PrimitiveType::Int),
        NestedField::required(3, "l", PrimitiveType::Long),
        NestedField::optional(4, "f", PrimitiveType::Float),
        NestedField::optional(5, "d", PrimitiveType::Double),
        NestedField::optional(6, "day", PrimitiveType::Date),
        NestedField::optional(7, "t", PrimitiveType::time_without_zone()),
        NestedField::optional(8, "ts", PrimitiveType::timestamp_without_zone()),
        NestedField::optional(9, "tstz", PrimitiveType::timestamp_with_zone()),
        NestedField::optional(10, "s", PrimitiveType::String),
        NestedField::optional(11, "u", PrimitiveType::Uuid),
        NestedField::optional(12, "fx", PrimitiveType::fixed(8)),
        NestedField::optional(13, "bin", PrimitiveType::Binary),
        NestedField::optional(14, "dec", PrimitiveType::decimal(9, 2)),
        NestedField::optional(15, "wide", PrimitiveType::decimal(60, 10)),
    ];
    let schema = struct_type_to_arrow_schema(&StructType::new(fields.clone()))?;

    assert_eq!(schema.fields().len(), fields.len());
    let expected = [
        DataType::Boolean,
        DataType::Int32,
        DataType::Int64,
        DataType::Float32,
        DataType::Float64,
        DataType::Date32,
        DataType::Time64(TimeUnit::Microsecond),
        DataType::Timestamp(TimeUnit::Microsecond, None),
        DataType::Timestamp(TimeUnit::Microsecond, Some(Arc::from("+00:00"))),
        DataType::Utf8,
        DataType::FixedSizeBinary(16),
        DataType::FixedSizeBinary(8),
        DataType::Binary,
        DataType::Decimal128(9, 2),
        DataType::Decimal256(60, 10),
    ];
    for ((arrow_field, field), data_type) in schema.fields().iter().zip(&fields).zip(expected) {
        assert_eq!(arrow_field.name(), field.name());
        assert_eq!(arrow_field.data_type(), &data_type);
        assert_eq!(arrow_field.is_nullable(), field.is_optional());
        let id = field.field_id().to_string();
        assert_eq!(field_id(arrow_field), Some(id.as_str()));
    }
    Ok(())
}

#[test]
fn nested_types_keep_child_names_and_field_ids() -> Result<(), ArrowConvertError> {
    let schema = struct_type_to_arrow_schema(&StructType::new(vec![
        NestedField::optional(1, "tags", ListType::of_required(2, PrimitiveType::String)),
        NestedField::required(3, "props", MapType::of_optional(4, 5, PrimitiveType::Long)),
        NestedField::optional(
            6,
            "point",
            StructType::new(vec![
                NestedField::required(7, "x", PrimitiveType::Double),
                NestedField::optional(8, "y", PrimitiveType::Double),
            ]),
        ),
    ]))?;

    match schema.field(0).data_type() {
        DataType::List(element) => {
            assert_eq!(element.name(), "element");
            assert_eq!(element.data_type(), &DataType::Utf8);
            assert!(!element.is_nullable());
            assert_eq!(field_id(element), Some("2"));
        }
        other => panic!("expected list, got {other:?}"),
    }

    assert!(!schema.field(1).is_nullable());
    match schema.field(1).data_type() {
        DataType::Map(entries, false) => {
            assert_eq!(entries.name(), "entries");
            assert!(!entries.is_nullable());
            match entries.data_type() {
                DataType::Struct(children) => {
                    assert_eq!(children[0].name(), "key");
                    assert_eq!(children[0].data_type(), &DataType::Utf8);
                    assert!(!children[0].is_nullable());
                    assert_eq!(field_id(&children[0]), Some("4"));
                    assert_eq!(children[1].name(), "value");
                    assert_eq!(children[1].data_type(), &DataType::Int64);
                    assert!(children[1].is_nullable());
                    assert_eq!(field_id(&children[1]), Some("5"));
                }
                other => panic!("expected struct entries, got {other:?}"),
            }
        }
        other => panic!("expected map, got {other:?}"),
    }

    match schema.field(2).data_type() {
        DataType::Struct(children) => {
            assert_eq!(children.len(), 2);
            assert_eq!(children[0].name(), "x");
            assert!(!children[0].is_nullable());
            assert_eq!(field_id(&children[1]), Some("8"));
            assert!(children[1].is_nullable());
        }
        other => panic!("expected struct, got {other:?}"),
    }
    Ok(())
}

#[test]
fn data_file_arrow_schema_has_canonical_ids() -> Result<(), ArrowConvertError> {
    let partition_type =
        StructType::new(vec![NestedField::optional(1000, "event_day", PrimitiveType::Date)]);
    let schema = data_file_arrow_schema(&partition_type)?;

    assert_eq!(schema.fields().len(), 12);
    for (pos, field) in schema.fields().iter().enumerate() {
        let id = (100 + pos).to_string();
        assert_eq!(field_id(field), Some(id.as_str()));
    }
    assert_eq!(schema.field(0).name(), "file_path");
    assert!(!schema.field(3).is_nullable());
    assert!(schema.field(6).is_nullable());

    match schema.field(2).data_type() {
        DataType::Struct(children) => {
            assert_eq!(children[0].name(), "event_day");
            assert_eq!(field_id(&children[0]), Some("1000"));
        }
        other => panic!("expected partition struct, got {other:?}"),
    }

    match schema.field(8).data_type() {
        DataType::List(element) => {
            assert_eq!(field_id(element), Some("113"));
            match element.data_type() {
                DataType::Struct(kv) => {
                    assert_eq!(kv[0].data_type(), &DataType::Int32);
                    assert_eq!(kv[1].data_type(), &DataType::Int64);
                    assert_eq!(field_id(&kv[0]), Some("117"));
                    assert_eq!(field_id(&kv[1]), Some("118"));
                }
                other => panic!("expected key/value struct, got {other:?}"),
            }
        }
        other => panic!("expected statistics list, got {other:?}"),
    }
    Ok(())
}

#[test]
fn unsupported_widths_are_rejected() {
    let too_wide: Type = PrimitiveType::fixed(u32::MAX).into();
    assert_eq!(
        type_to_arrow_datatype(&too_wide),
        Err(ArrowConvertError::FixedTooWide { length: u32::MAX })
    );

    let too_precise: Type = PrimitiveType::decimal(77, 0).into();
    assert_eq!(
        type_to_arrow_datatype(&too_precise),
        Err(ArrowConvertError::UnsupportedDecimal {
            precision: 77,
            scale: 0
        })
    );

    let at_limit: Type = PrimitiveType::decimal(76, 0).into();
    assert_eq!(
        type_to_arrow_datatype(&at_limit),
        Ok(DataType::Decimal256(76, 0))
    );
}

use std::{collections::HashMap, sync::Arc};

use arrow::datatypes::{DataType, Field, Fields, Schema, TimeUnit};
use tablemeta_core::{
    ListType, MapType, NestedField, NestedType, PrimitiveType, StructType, Type, data_file_schema,
};

use crate::{ArrowConvertError, FIELD_ID_META_KEY, TIMESTAMP_TZ};

const DECIMAL128_MAX_PRECISION: u8 = 38;
const DECIMAL256_MAX_PRECISION: u8 = 76;

/// Converts a [`StructType`] into an Arrow `Schema`.
///
/// Every Arrow field, nested ones included, carries its field id under
/// [`FIELD_ID_META_KEY`].
pub fn struct_type_to_arrow_schema(struct_type: &StructType) -> Result<Schema, ArrowConvertError> {
    Ok(Schema::new(struct_fields(struct_type)?))
}

/// Arrow form of the canonical data file schema for `partition_type`.
pub fn data_file_arrow_schema(partition_type: &StructType) -> Result<Schema, ArrowConvertError> {
    struct_type_to_arrow_schema(&data_file_schema(partition_type))
}

/// Converts a single [`NestedField`] into an Arrow `Field`.
pub fn nested_field_to_arrow_field(field: &NestedField) -> Result<Field, ArrowConvertError> {
    let metadata = HashMap::from([(
        FIELD_ID_META_KEY.to_string(),
        field.field_id().to_string(),
    )]);
    let data_type = type_to_arrow_datatype(field.field_type())?;
    Ok(Field::new(field.name(), data_type, field.is_optional()).with_metadata(metadata))
}

/// Converts a column type into an Arrow `DataType`.
pub fn type_to_arrow_datatype(ty: &Type) -> Result<DataType, ArrowConvertError> {
    match ty {
        Type::Primitive(primitive) => primitive_to_datatype(primitive),
        Type::Nested(nested) => match nested.as_ref() {
            NestedType::Struct(s) => Ok(DataType::Struct(struct_fields(s)?)),
            NestedType::List(list) => list_to_datatype(list),
            NestedType::Map(map) => map_to_datatype(map),
        },
    }
}

fn struct_fields(struct_type: &StructType) -> Result<Fields, ArrowConvertError> {
    let fields = struct_type
        .fields()
        .iter()
        .map(nested_field_to_arrow_field)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(fields.into())
}

fn list_to_datatype(list: &ListType) -> Result<DataType, ArrowConvertError> {
    let element = nested_field_to_arrow_field(list.element_field())?;
    Ok(DataType::List(Arc::new(element)))
}

fn map_to_datatype(map: &MapType) -> Result<DataType, ArrowConvertError> {
    let key = nested_field_to_arrow_field(map.key_field())?;
    let value = nested_field_to_arrow_field(map.value_field())?;
    let entries = Field::new("entries", DataType::Struct(vec![key, value].into()), false);
    Ok(DataType::Map(Arc::new(entries), false))
}

fn primitive_to_datatype(primitive: &PrimitiveType) -> Result<DataType, ArrowConvertError> {
    let dt = match *primitive {
        PrimitiveType::Boolean => DataType::Boolean,
        PrimitiveType::Int => DataType::Int32,
        PrimitiveType::Long => DataType::Int64,
        PrimitiveType::Float => DataType::Float32,
        PrimitiveType::Double => DataType::Float64,
        PrimitiveType::Date => DataType::Date32,
        PrimitiveType::Time { .. } => DataType::Time64(TimeUnit::Microsecond),
        PrimitiveType::Timestamp { adjust_to_utc } => DataType::Timestamp(
            TimeUnit::Microsecond,
            adjust_to_utc.then(|| Arc::from(TIMESTAMP_TZ)),
        ),
        PrimitiveType::String => DataType::Utf8,
        PrimitiveType::Uuid => DataType::FixedSizeBinary(16),
        PrimitiveType::Fixed(length) => {
            let width = i32::try_from(length)
                .map_err(|_| ArrowConvertError::FixedTooWide { length })?;
            DataType::FixedSizeBinary(width)
        }
        PrimitiveType::Binary => DataType::Binary,
        PrimitiveType::Decimal { precision, scale } => decimal_to_datatype(precision, scale)?,
    };
    Ok(dt)
}

fn decimal_to_datatype(precision: u32, scale: u32) -> Result<DataType, ArrowConvertError> {
    let unsupported = ArrowConvertError::UnsupportedDecimal { precision, scale };
    let (Ok(p), Ok(s)) = (u8::try_from(precision), i8::try_from(scale)) else {
        return Err(unsupported);
    };
    if p == 0 || p > DECIMAL256_MAX_PRECISION {
        return Err(unsupported);
    }
    if p <= DECIMAL128_MAX_PRECISION {
        Ok(DataType::Decimal128(p, s))
    } else {
        Ok(DataType::Decimal256(p, s))
    }
}

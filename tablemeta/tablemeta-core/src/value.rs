//! Positional slot values exchanged with an external record codec.

use std::{fmt, sync::Arc};

use crate::{
    error::ValueTypeError,
    types::{NestedField, NestedType, PrimitiveType, Type},
};

/// Value stored in a record slot or partition field.
///
/// Maps are association lists, matching codecs that write maps as repeated
/// key/value records.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    String(Arc<str>),
    Bytes(Arc<[u8]>),
    Struct(Vec<Value>),
    List(Vec<Value>),
    Map(Vec<(Value, Value)>),
}

impl Value {
    pub fn string(s: impl AsRef<str>) -> Self {
        Self::String(Arc::from(s.as_ref()))
    }

    pub fn bytes(b: impl AsRef<[u8]>) -> Self {
        Self::Bytes(Arc::from(b.as_ref()))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn try_bool(&self) -> Result<Option<bool>, ValueTypeError> {
        match self {
            Value::Bool(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bool")),
        }
    }

    pub fn try_i32(&self) -> Result<Option<i32>, ValueTypeError> {
        match self {
            Value::I32(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I32")),
        }
    }

    pub fn try_i64(&self) -> Result<Option<i64>, ValueTypeError> {
        match self {
            Value::I64(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("I64")),
        }
    }

    pub fn try_f32(&self) -> Result<Option<f32>, ValueTypeError> {
        match self {
            Value::F32(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("F32")),
        }
    }

    pub fn try_f64(&self) -> Result<Option<f64>, ValueTypeError> {
        match self {
            Value::F64(v) => Ok(Some(*v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("F64")),
        }
    }

    pub fn try_str(&self) -> Result<Option<&str>, ValueTypeError> {
        match self {
            Value::String(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("String")),
        }
    }

    pub fn try_bytes(&self) -> Result<Option<&[u8]>, ValueTypeError> {
        match self {
            Value::Bytes(v) => Ok(Some(v.as_ref())),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Bytes")),
        }
    }

    pub fn try_struct(&self) -> Result<Option<&[Value]>, ValueTypeError> {
        match self {
            Value::Struct(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Struct")),
        }
    }

    pub fn try_list(&self) -> Result<Option<&[Value]>, ValueTypeError> {
        match self {
            Value::List(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("List")),
        }
    }

    pub fn try_map(&self) -> Result<Option<&[(Value, Value)]>, ValueTypeError> {
        match self {
            Value::Map(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            _ => Err(self.type_mismatch("Map")),
        }
    }

    /// Whether a non-null value has the shape `ty` requires.
    ///
    /// `Null` conforms to every type; whether null is allowed is a property
    /// of the enclosing field, so callers check nullability themselves.
    /// Nested children are checked against their own field nullability.
    pub fn conforms_to(&self, ty: &Type) -> bool {
        match (ty, self) {
            (_, Value::Null) => true,
            (Type::Primitive(p), v) => v.conforms_to_primitive(p),
            (Type::Nested(nested), v) => match (nested.as_ref(), v) {
                (NestedType::Struct(s), Value::Struct(values)) => {
                    s.len() == values.len()
                        && s.fields()
                            .iter()
                            .zip(values)
                            .all(|(field, value)| value.conforms_to_field(field))
                }
                (NestedType::List(l), Value::List(items)) => items
                    .iter()
                    .all(|item| item.conforms_to_field(l.element_field())),
                (NestedType::Map(m), Value::Map(entries)) => entries.iter().all(|(k, v)| {
                    k.conforms_to_field(m.key_field()) && v.conforms_to_field(m.value_field())
                }),
                _ => false,
            },
        }
    }

    fn conforms_to_field(&self, field: &NestedField) -> bool {
        if self.is_null() {
            return field.is_optional();
        }
        self.conforms_to(field.field_type())
    }

    fn conforms_to_primitive(&self, primitive: &PrimitiveType) -> bool {
        match (primitive, self) {
            (PrimitiveType::Boolean, Value::Bool(_)) => true,
            (PrimitiveType::Int | PrimitiveType::Date, Value::I32(_)) => true,
            (
                PrimitiveType::Long | PrimitiveType::Time { .. } | PrimitiveType::Timestamp { .. },
                Value::I64(_),
            ) => true,
            (PrimitiveType::Float, Value::F32(_)) => true,
            (PrimitiveType::Double, Value::F64(_)) => true,
            (PrimitiveType::String, Value::String(_)) => true,
            (PrimitiveType::Uuid, Value::Bytes(b)) => b.len() == 16,
            (PrimitiveType::Fixed(length), Value::Bytes(b)) => b.len() == *length as usize,
            // unscaled big-endian two's-complement
            (PrimitiveType::Binary | PrimitiveType::Decimal { .. }, Value::Bytes(_)) => true,
            _ => false,
        }
    }

    pub fn type_mismatch(&self, expected: impl Into<String>) -> ValueTypeError {
        ValueTypeError::new(expected, self.variant_name())
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Bool(_) => "Bool",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::F32(_) => "F32",
            Value::F64(_) => "F64",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::Struct(_) => "Struct",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::String(v) => f.write_str(v),
            Value::Bytes(v) => {
                f.write_str("0x")?;
                for byte in v.iter() {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Value::Struct(values) | Value::List(values) => {
                let (open, close) = if matches!(self, Value::Struct(_)) {
                    ("{", "}")
                } else {
                    ("[", "]")
                };
                f.write_str(open)?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str(close)
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::I32(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::I64(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

use std::{fmt, str::FromStr};

use crate::error::TypeParseError;

use super::TypeId;

/// Primitive column type.
///
/// `Fixed` and `Decimal` compare by their parameters, `Time` and `Timestamp`
/// by their UTC-adjustment flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Date,
    Time { adjust_to_utc: bool },
    Timestamp { adjust_to_utc: bool },
    String,
    Uuid,
    Fixed(u32),
    Binary,
    Decimal { precision: u32, scale: u32 },
}

impl PrimitiveType {
    pub const fn time_with_zone() -> Self {
        Self::Time {
            adjust_to_utc: true,
        }
    }

    pub const fn time_without_zone() -> Self {
        Self::Time {
            adjust_to_utc: false,
        }
    }

    pub const fn timestamp_with_zone() -> Self {
        Self::Timestamp {
            adjust_to_utc: true,
        }
    }

    pub const fn timestamp_without_zone() -> Self {
        Self::Timestamp {
            adjust_to_utc: false,
        }
    }

    pub const fn fixed(length: u32) -> Self {
        Self::Fixed(length)
    }

    pub const fn decimal(precision: u32, scale: u32) -> Self {
        Self::Decimal { precision, scale }
    }

    pub fn type_id(&self) -> TypeId {
        match self {
            Self::Boolean => TypeId::Boolean,
            Self::Int => TypeId::Integer,
            Self::Long => TypeId::Long,
            Self::Float => TypeId::Float,
            Self::Double => TypeId::Double,
            Self::Date => TypeId::Date,
            Self::Time { .. } => TypeId::Time,
            Self::Timestamp { .. } => TypeId::Timestamp,
            Self::String => TypeId::String,
            Self::Uuid => TypeId::Uuid,
            Self::Fixed(_) => TypeId::Fixed,
            Self::Binary => TypeId::Binary,
            Self::Decimal { .. } => TypeId::Decimal,
        }
    }

    /// Whether a `time`/`timestamp` value is adjusted to UTC.
    ///
    /// Returns `None` for every other primitive.
    pub fn adjust_to_utc(&self) -> Option<bool> {
        match self {
            Self::Time { adjust_to_utc } | Self::Timestamp { adjust_to_utc } => {
                Some(*adjust_to_utc)
            }
            _ => None,
        }
    }

    pub fn fixed_length(&self) -> Option<u32> {
        match self {
            Self::Fixed(length) => Some(*length),
            _ => None,
        }
    }

    /// `(precision, scale)` of a decimal type.
    pub fn precision_scale(&self) -> Option<(u32, u32)> {
        match self {
            Self::Decimal { precision, scale } => Some((*precision, *scale)),
            _ => None,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean => f.write_str("boolean"),
            Self::Int => f.write_str("int"),
            Self::Long => f.write_str("long"),
            Self::Float => f.write_str("float"),
            Self::Double => f.write_str("double"),
            Self::Date => f.write_str("date"),
            Self::Time {
                adjust_to_utc: true,
            } => f.write_str("timetz"),
            Self::Time {
                adjust_to_utc: false,
            } => f.write_str("time"),
            Self::Timestamp {
                adjust_to_utc: true,
            } => f.write_str("timestamptz"),
            Self::Timestamp {
                adjust_to_utc: false,
            } => f.write_str("timestamp"),
            Self::String => f.write_str("string"),
            Self::Uuid => f.write_str("uuid"),
            Self::Fixed(length) => write!(f, "fixed[{length}]"),
            Self::Binary => f.write_str("binary"),
            Self::Decimal { precision, scale } => write!(f, "decimal({precision}, {scale})"),
        }
    }
}

impl FromStr for PrimitiveType {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::parse::primitive_type_from_string(s)
    }
}

//! Primitive and nested column types.

mod format;
mod nested;
mod parse;
mod primitive;

use std::{fmt, sync::Arc};

pub use format::format_struct_type;
pub use nested::{ListType, MapType, NestedField, NestedType, StructType};
pub use parse::primitive_type_from_string;
pub use primitive::PrimitiveType;

/// Tag identifying a type variant without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeId {
    Boolean,
    Integer,
    Long,
    Float,
    Double,
    Date,
    Time,
    Timestamp,
    String,
    Uuid,
    Fixed,
    Binary,
    Decimal,
    Struct,
    List,
    Map,
}

impl TypeId {
    pub fn is_primitive(&self) -> bool {
        !matches!(self, TypeId::Struct | TypeId::List | TypeId::Map)
    }
}

/// A column type: either a primitive or a nested composite.
///
/// Nested types sit behind an [`Arc`] so one definition can be shared by
/// many schemas. Equality and hashing are structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Primitive(PrimitiveType),
    Nested(Arc<NestedType>),
}

impl Type {
    pub fn type_id(&self) -> TypeId {
        match self {
            Type::Primitive(p) => p.type_id(),
            Type::Nested(n) => n.type_id(),
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Primitive(_))
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, Type::Nested(_))
    }

    pub fn is_struct(&self) -> bool {
        self.as_struct().is_some()
    }

    pub fn is_list(&self) -> bool {
        self.as_list().is_some()
    }

    pub fn is_map(&self) -> bool {
        self.as_map().is_some()
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveType> {
        match self {
            Type::Primitive(p) => Some(p),
            Type::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&NestedType> {
        match self {
            Type::Primitive(_) => None,
            Type::Nested(n) => Some(n),
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        self.as_nested().and_then(NestedType::as_struct)
    }

    pub fn as_list(&self) -> Option<&ListType> {
        self.as_nested().and_then(NestedType::as_list)
    }

    pub fn as_map(&self) -> Option<&MapType> {
        self.as_nested().and_then(NestedType::as_map)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(p) => p.fmt(f),
            Type::Nested(n) => n.fmt(f),
        }
    }
}

impl From<PrimitiveType> for Type {
    fn from(value: PrimitiveType) -> Self {
        Type::Primitive(value)
    }
}

impl From<NestedType> for Type {
    fn from(value: NestedType) -> Self {
        Type::Nested(Arc::new(value))
    }
}

impl From<StructType> for Type {
    fn from(value: StructType) -> Self {
        NestedType::Struct(value).into()
    }
}

impl From<ListType> for Type {
    fn from(value: ListType) -> Self {
        NestedType::List(value).into()
    }
}

impl From<MapType> for Type {
    fn from(value: MapType) -> Self {
        NestedType::Map(value).into()
    }
}

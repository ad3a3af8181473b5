use std::{
    collections::{HashMap, HashSet, hash_map::Entry},
    fmt,
    hash::{Hash, Hasher},
    sync::{Arc, OnceLock},
};

use crate::error::SchemaError;

use super::{PrimitiveType, Type, TypeId};

const ELEMENT_NAME: &str = "element";
const KEY_NAME: &str = "key";
const VALUE_NAME: &str = "value";

/// A named, id-carrying member of a nested type.
///
/// The field id, not the name or position, identifies the field across
/// schema versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NestedField {
    id: i32,
    name: String,
    field_type: Type,
    optional: bool,
}

impl NestedField {
    pub fn optional(id: i32, name: impl Into<String>, field_type: impl Into<Type>) -> Self {
        Self::new(id, name, field_type, true)
    }

    pub fn required(id: i32, name: impl Into<String>, field_type: impl Into<Type>) -> Self {
        Self::new(id, name, field_type, false)
    }

    /// Field names must be non-empty. This constructor does not check that;
    /// [`StructType::try_new`] is the checked path and rejects empty names.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        field_type: impl Into<Type>,
        optional: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            field_type: field_type.into(),
            optional,
        }
    }

    pub fn field_id(&self) -> i32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> &Type {
        &self.field_type
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_required(&self) -> bool {
        !self.optional
    }
}

impl fmt::Display for NestedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let requirement = if self.optional { "optional" } else { "required" };
        write!(
            f,
            "{}: {}: {requirement} {}",
            self.id, self.name, self.field_type
        )
    }
}

/// Name and id lookup tables over a struct's field sequence.
///
/// Both map to the field's position. On duplicates the first occurrence wins.
#[derive(Debug, Clone, Default)]
struct FieldIndex {
    by_name: HashMap<String, usize>,
    by_id: HashMap<i32, usize>,
}

impl FieldIndex {
    fn build(fields: &[NestedField]) -> Self {
        let mut index = Self {
            by_name: HashMap::with_capacity(fields.len()),
            by_id: HashMap::with_capacity(fields.len()),
        };
        for (pos, field) in fields.iter().enumerate() {
            index.by_name.entry(field.name.clone()).or_insert(pos);
            index.by_id.entry(field.id).or_insert(pos);
        }
        index
    }
}

/// Ordered sequence of [`NestedField`]s.
///
/// Name and id indices are built once, on first lookup.
#[derive(Clone)]
pub struct StructType {
    fields: Arc<[NestedField]>,
    index: OnceLock<FieldIndex>,
}

impl StructType {
    /// Build a struct from `fields` without checking uniqueness.
    pub fn new(fields: impl Into<Vec<NestedField>>) -> Self {
        Self {
            fields: Arc::from(fields.into()),
            index: OnceLock::new(),
        }
    }

    /// Build a struct, rejecting empty names and duplicate ids or names.
    pub fn try_new(fields: impl Into<Vec<NestedField>>) -> Result<Self, SchemaError> {
        let fields = fields.into();
        check_unique(&fields)?;
        Ok(Self::new(fields))
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn fields(&self) -> &[NestedField] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, id: i32) -> Option<&NestedField> {
        self.position(id).map(|pos| &self.fields[pos])
    }

    pub fn field_by_name(&self, name: &str) -> Option<&NestedField> {
        self.index()
            .by_name
            .get(name)
            .map(|&pos| &self.fields[pos])
    }

    pub fn field_type(&self, name: &str) -> Option<&Type> {
        self.field_by_name(name).map(NestedField::field_type)
    }

    /// Position of the field with `id` in this struct's field sequence.
    pub fn position(&self, id: i32) -> Option<usize> {
        self.index().by_id.get(&id).copied()
    }

    fn index(&self) -> &FieldIndex {
        self.index.get_or_init(|| FieldIndex::build(&self.fields))
    }
}

fn check_unique(fields: &[NestedField]) -> Result<(), SchemaError> {
    let mut ids: HashMap<i32, &str> = HashMap::with_capacity(fields.len());
    let mut names: HashSet<&str> = HashSet::with_capacity(fields.len());
    for field in fields {
        if field.name.is_empty() {
            return Err(SchemaError::EmptyFieldName { id: field.id });
        }
        match ids.entry(field.id) {
            Entry::Occupied(existing) => {
                return Err(SchemaError::DuplicateFieldId {
                    id: field.id,
                    first: existing.get().to_string(),
                    second: field.name.clone(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(&field.name);
            }
        }
        if !names.insert(&field.name) {
            return Err(SchemaError::DuplicateFieldName {
                name: field.name.clone(),
            });
        }
    }
    Ok(())
}

impl From<Vec<NestedField>> for StructType {
    fn from(fields: Vec<NestedField>) -> Self {
        Self::new(fields)
    }
}

impl Default for StructType {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructType")
            .field("fields", &self.fields)
            .finish()
    }
}

impl PartialEq for StructType {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Eq for StructType {}

impl Hash for StructType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fields.hash(state);
    }
}

impl fmt::Display for StructType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("struct<")?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
        }
        f.write_str(">")
    }
}

/// List type with a single synthetic `element` field.
///
/// Element nullability is independent of the nullability of the field that
/// holds the list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListType {
    element: NestedField,
}

impl ListType {
    pub fn of_optional(element_id: i32, element_type: impl Into<Type>) -> Self {
        Self {
            element: NestedField::optional(element_id, ELEMENT_NAME, element_type),
        }
    }

    pub fn of_required(element_id: i32, element_type: impl Into<Type>) -> Self {
        Self {
            element: NestedField::required(element_id, ELEMENT_NAME, element_type),
        }
    }

    pub fn element_field(&self) -> &NestedField {
        &self.element
    }

    pub fn element_id(&self) -> i32 {
        self.element.id
    }

    pub fn element_type(&self) -> &Type {
        &self.element.field_type
    }

    pub fn is_element_optional(&self) -> bool {
        self.element.optional
    }

    pub fn fields(&self) -> &[NestedField] {
        std::slice::from_ref(&self.element)
    }

    pub fn field_type(&self, name: &str) -> Option<&Type> {
        (name == ELEMENT_NAME).then(|| self.element_type())
    }

    pub fn field(&self, id: i32) -> Option<&NestedField> {
        (self.element.id == id).then_some(&self.element)
    }
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "list<{}>", self.element.field_type)
    }
}

/// Map type with synthetic `key` and `value` fields.
///
/// The key is always a required `string`; both constructors ignore any other
/// key type a caller might have in mind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapType {
    fields: [NestedField; 2],
}

impl MapType {
    pub fn of_optional(key_id: i32, value_id: i32, value_type: impl Into<Type>) -> Self {
        Self {
            fields: [
                NestedField::required(key_id, KEY_NAME, PrimitiveType::String),
                NestedField::optional(value_id, VALUE_NAME, value_type),
            ],
        }
    }

    pub fn of_required(key_id: i32, value_id: i32, value_type: impl Into<Type>) -> Self {
        Self {
            fields: [
                NestedField::required(key_id, KEY_NAME, PrimitiveType::String),
                NestedField::required(value_id, VALUE_NAME, value_type),
            ],
        }
    }

    pub fn key_field(&self) -> &NestedField {
        &self.fields[0]
    }

    pub fn value_field(&self) -> &NestedField {
        &self.fields[1]
    }

    pub fn key_id(&self) -> i32 {
        self.key_field().id
    }

    pub fn value_id(&self) -> i32 {
        self.value_field().id
    }

    pub fn key_type(&self) -> &Type {
        &self.key_field().field_type
    }

    pub fn value_type(&self) -> &Type {
        &self.value_field().field_type
    }

    pub fn is_value_optional(&self) -> bool {
        self.value_field().optional
    }

    pub fn fields(&self) -> &[NestedField] {
        &self.fields
    }

    pub fn field_type(&self, name: &str) -> Option<&Type> {
        match name {
            KEY_NAME => Some(self.key_type()),
            VALUE_NAME => Some(self.value_type()),
            _ => None,
        }
    }

    pub fn field(&self, id: i32) -> Option<&NestedField> {
        self.fields.iter().find(|field| field.id == id)
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map<{}, {}>", self.key_type(), self.value_type())
    }
}

/// Composite type built from [`NestedField`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NestedType {
    Struct(StructType),
    List(ListType),
    Map(MapType),
}

impl NestedType {
    pub fn type_id(&self) -> TypeId {
        match self {
            Self::Struct(_) => TypeId::Struct,
            Self::List(_) => TypeId::List,
            Self::Map(_) => TypeId::Map,
        }
    }

    pub fn fields(&self) -> &[NestedField] {
        match self {
            Self::Struct(s) => s.fields(),
            Self::List(l) => l.fields(),
            Self::Map(m) => m.fields(),
        }
    }

    pub fn field_type(&self, name: &str) -> Option<&Type> {
        match self {
            Self::Struct(s) => s.field_type(name),
            Self::List(l) => l.field_type(name),
            Self::Map(m) => m.field_type(name),
        }
    }

    pub fn field(&self, id: i32) -> Option<&NestedField> {
        match self {
            Self::Struct(s) => s.field(id),
            Self::List(l) => l.field(id),
            Self::Map(m) => m.field(id),
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListType> {
        match self {
            Self::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&MapType> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl fmt::Display for NestedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct(s) => s.fmt(f),
            Self::List(l) => l.fmt(f),
            Self::Map(m) => m.fmt(f),
        }
    }
}

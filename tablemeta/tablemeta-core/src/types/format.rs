use std::fmt::{Error, Result, Write as _};

use super::{NestedField, NestedType, StructType, Type};

/// Format a struct's fields in a readable, indented style:
/// primitive fields are rendered in one line, nested fields are pretty-printed.
/// List elements and map keys/values follow the same rule.
///
/// This is a display aid; the canonical one-line form is `StructType`'s `Display`.
pub fn format_struct_type(struct_type: &StructType) -> std::result::Result<String, Error> {
    let mut out = String::new();

    for field in struct_type.fields() {
        format_field(field, 0, &mut out)?;
    }

    Ok(out)
}

fn format_field(field: &NestedField, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    let label = field.name();
    let id = field.field_id();
    let required = field.is_required();

    match field.field_type() {
        Type::Primitive(primitive) => {
            writeln!(
                out,
                "{pad}{label}: {{ id: {id}, type: {primitive}, required: {required} }}"
            )?;
        }
        Type::Nested(nested) => {
            writeln!(out, "{pad}{label}:")?;
            format_nested_type(nested, id, required, indent + 4, out)?;
        }
    }
    Ok(())
}

fn format_nested_type(
    nested: &NestedType,
    id: i32,
    required: bool,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    let type_name = match nested {
        NestedType::Struct(_) => "struct",
        NestedType::List(_) => "list",
        NestedType::Map(_) => "map",
    };
    writeln!(out, "{pad}id: {id}")?;
    writeln!(out, "{pad}type: {type_name}")?;
    writeln!(out, "{pad}required: {required}")?;

    match nested {
        NestedType::Struct(fields) => {
            writeln!(out, "{pad}fields:")?;
            for child in fields.fields() {
                format_field(child, indent + 4, out)?;
            }
        }
        NestedType::List(_) | NestedType::Map(_) => {
            for child in nested.fields() {
                format_field(child, indent, out)?;
            }
        }
    }

    Ok(())
}

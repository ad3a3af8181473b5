use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tablemeta::core::{
    NestedField, StructType, data_file_schema, format_struct_type, primitive_type_from_string,
};

#[derive(Args)]
pub struct SchemaArgs {
    /// Partition field as ID:NAME:TYPE, e.g. `1000:event_day:date` (repeatable)
    #[arg(short, long = "partition", value_parser = parse_partition_field)]
    partition: Vec<NestedField>,

    /// Print the Arrow schema instead of the field tree
    #[arg(long)]
    arrow: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let partition_type =
            StructType::try_new(self.partition).context("invalid partition fields")?;
        let text = if self.arrow {
            arrow_text(&partition_type)?
        } else {
            format_struct_type(&data_file_schema(&partition_type))?
        };

        match self.output {
            Some(path) => fs::write(&path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?,
            None => print!("{text}"),
        }
        Ok(())
    }
}

#[cfg(feature = "arrow")]
fn arrow_text(partition_type: &StructType) -> Result<String> {
    use std::fmt::Write as _;

    use tablemeta::arrow::{FIELD_ID_META_KEY, data_file_arrow_schema};

    let schema = data_file_arrow_schema(partition_type)?;
    let mut text = String::new();
    for field in schema.fields() {
        let id = field
            .metadata()
            .get(FIELD_ID_META_KEY)
            .map_or("-", String::as_str);
        writeln!(
            text,
            "{}: {} (id: {id}, nullable: {})",
            field.name(),
            field.data_type(),
            field.is_nullable()
        )?;
    }
    Ok(text)
}

#[cfg(not(feature = "arrow"))]
fn arrow_text(_partition_type: &StructType) -> Result<String> {
    anyhow::bail!("tmeta was built without the `arrow` feature")
}

/// Partition fields are always optional.
fn parse_partition_field(raw: &str) -> Result<NestedField, String> {
    let mut parts = raw.splitn(3, ':');
    let (Some(id), Some(name), Some(ty)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected ID:NAME:TYPE, got `{raw}`"));
    };
    let id = id
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("invalid field id `{id}`: {err}"))?;
    let primitive = primitive_type_from_string(ty.trim()).map_err(|err| err.to_string())?;
    Ok(NestedField::optional(id, name.trim(), primitive))
}

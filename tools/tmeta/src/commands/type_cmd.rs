use anyhow::Result;
use clap::Args;
use tablemeta::core::primitive_type_from_string;

#[derive(Args)]
pub struct TypeArgs {
    /// Type strings such as `long`, `fixed[16]` or `decimal(9, 2)`
    #[arg(required = true)]
    types: Vec<String>,
}

impl TypeArgs {
    pub fn run(self) -> Result<()> {
        for text in &self.types {
            let primitive = primitive_type_from_string(text)?;
            tracing::debug!(input = %text, type_id = ?primitive.type_id(), "parsed type string");
            println!("{primitive}");
        }
        Ok(())
    }
}

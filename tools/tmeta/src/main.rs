mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{schema::SchemaArgs, type_cmd::TypeArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tmeta", about = "Inspect table type strings and data file schemas")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse primitive type strings and print their canonical form
    Type(TypeArgs),
    /// Print the data file schema for a partition type
    Schema(SchemaArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Type(args) => args.run(),
        Commands::Schema(args) => args.run(),
    }
}

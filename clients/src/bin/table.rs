//! `d3-table` — Prints the Cayley table of the dihedral group of order 6.
//!
//! Every cell is derived geometrically: the engine applies the row operation
//! then the column operation to the labeled triangle and identifies the
//! result against its catalog.
//!
//! **Usage:**
//! ```text
//! d3-table [--order <OPS>] [--format <text|json|markdown>] [--catalog]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::Parser;
use d3::Engine;
use d3_clients::{init_tracing, parse_order, OutputFormat};

/// Print the D3 composition table.
#[derive(Parser)]
#[command(name = "d3-table", about = "Print the Cayley table of D3")]
struct Args {
    /// Comma-separated row/column order (default: I,R1,R2,S1,S2,S3).
    #[arg(long)]
    order: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the catalog of canonical configurations.
    #[arg(long)]
    catalog: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let order = parse_order(args.order.as_deref())?;
    let mut engine = Engine::new();
    let table = engine
        .composition_table(&order)
        .context("Failed to build composition table")?;

    tracing::info!(
        size = table.len(),
        latin_square = table.is_latin_square(),
        "composition table built"
    );

    match args.format {
        OutputFormat::Text => {
            print!("{table}");
            if args.catalog {
                println!();
                for (op, config) in engine.catalog().iter() {
                    println!("{:<3} {config}  ({})", op.name(), op.description());
                }
            }
        }
        OutputFormat::Markdown => {
            print!("{}", table.to_markdown());
            if args.catalog {
                println!();
                println!("| op | configuration |");
                println!("|---|---|");
                for (op, config) in engine.catalog().iter() {
                    println!("| {op} | {config} |");
                }
            }
        }
        OutputFormat::Json => {
            let value = if args.catalog {
                let catalog: serde_json::Map<String, serde_json::Value> = engine
                    .catalog()
                    .iter()
                    .map(|(op, config)| Ok((op.name().to_string(), serde_json::to_value(config)?)))
                    .collect::<Result<_, serde_json::Error>>()?;
                serde_json::json!({ "table": table, "catalog": catalog })
            } else {
                serde_json::to_value(&table)?
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

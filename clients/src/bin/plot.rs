//! `d3-plot` — Applies a sequence of operations to the labeled triangle,
//! draws the resulting configuration, and names the equivalent operation.
//!
//! **Usage:**
//! ```text
//! d3-plot [--apply <OPS>] [--width <N>] [--height <N>] [--color] [--format <text|json>]
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
use d3::{AsciiPlot, CanonicalConfiguration, Engine, Renderer};
use d3_clients::{init_tracing, OutputFormat};

/// Plot the triangle after a sequence of operations.
#[derive(Parser)]
#[command(name = "d3-plot", about = "Apply D3 operations and plot the labeled triangle")]
struct Args {
    /// Operations to apply left to right, e.g. "R1,S1" (default: none).
    #[arg(long, default_value = "")]
    apply: String,

    /// Plot width in characters.
    #[arg(long, default_value_t = 41)]
    width: usize,

    /// Plot height in characters.
    #[arg(long, default_value_t = 21)]
    height: usize,

    /// Color labels with ANSI escapes.
    #[arg(long)]
    color: bool,

    /// Output format (markdown prints the same as text).
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut engine = Engine::new();
    engine
        .apply_str(&args.apply)
        .with_context(|| format!("Failed to apply {:?}", args.apply))?;
    let identified = engine
        .identify()
        .context("Resulting configuration is not a group element")?;
    let config = CanonicalConfiguration::of(engine.current());

    tracing::info!(sequence = %args.apply, result = %identified, "sequence identified");

    match args.format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "sequence": args.apply,
                "points": engine.current(),
                "configuration": config,
                "identified": identified,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text | OutputFormat::Markdown => {
            let mut plot = AsciiPlot::new(args.width, args.height).with_ansi(args.color);
            print!("{}", plot.render(engine.current()));
            println!();
            println!("points:     {}", engine.current());
            println!("canonical:  {config}");
            println!("identified: {identified} ({})", identified.description());
        }
    }

    Ok(())
}

//! Shared plumbing for the D3 client binaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use anyhow::{Context, Result};
use clap::ValueEnum;
use d3::Operation;
use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "d3=info";

/// How a binary prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned plain-text grid.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// GitHub-flavoured Markdown.
    Markdown,
}

/// Install the stderr `tracing` subscriber, honouring `RUST_LOG`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse a comma-separated operation list, defaulting to all six when empty.
///
/// # Errors
///
/// Returns an error naming the first unknown operation.
pub fn parse_order(text: Option<&str>) -> Result<Vec<Operation>> {
    match text {
        None => Ok(Operation::ALL.to_vec()),
        Some(t) => {
            let ops = d3::parse_sequence(t)
                .with_context(|| format!("Failed to parse operation list: {t:?}"))?;
            if ops.is_empty() {
                Ok(Operation::ALL.to_vec())
            } else {
                Ok(ops)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_order_is_full_group() {
        assert_eq!(parse_order(None).unwrap(), Operation::ALL.to_vec());
        assert_eq!(parse_order(Some(" ")).unwrap(), Operation::ALL.to_vec());
    }

    #[test]
    fn custom_order_kept() {
        assert_eq!(
            parse_order(Some("S1,R1")).unwrap(),
            vec![Operation::S1, Operation::R1]
        );
    }

    #[test]
    fn bad_order_has_context() {
        let err = parse_order(Some("R1,Z")).unwrap_err();
        assert!(err.to_string().contains("Failed to parse operation list"));
        assert!(format!("{err:#}").contains("invalid operation \"Z\""));
    }
}

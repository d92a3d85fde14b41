use std::fs::File;

use anyhow::{Context, Result};
use teller::bin_utils::{RunError, Service};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let filename = std::env::args()
        .nth(1)
        .context("Expected a file name as the first argument")?;
    let file = File::open(&filename).with_context(|| format!("Failed to open `{filename}`"))?;

    let service = Service {
        input: file,
        output: &mut std::io::stdout(),
        error_printer: Box::new(|line, err| match err {
            RunError::Operation(err) => eprintln!("Error at line {line}: {err}"),
            RunError::Ledger(err) => eprintln!("Rejected at line {line}: {err}"),
        }),
    };
    service.run()
}

//! Command handlers

pub mod check;
pub mod config;
pub mod matrix;
pub mod preview;

use anyhow::{Context, Result};
use serde::Serialize;

/// Print a value as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render JSON output")?;
    println!("{}", rendered);
    Ok(())
}

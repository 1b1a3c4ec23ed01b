//! Printing matched entries

use crate::error::InventoryError;
use crate::operations::filter::Entry;
use anyhow::Result;
use std::io::Write;
use std::str::FromStr;

/// Output format for matched entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `key=<key>` followed by the value's lines and a blank line
    #[default]
    Text,
    /// A JSON array of `{ "key", "value" }` objects
    Json,
}

impl FromStr for OutputFormat {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(InventoryError::usage(format!(
                "Invalid output format: {s}. Valid options are: text, json"
            ))),
        }
    }
}

/// Write matched entries to `out` in the given format
///
/// # Errors
///
/// Returns an error if:
/// - Writing to `out` fails
/// - JSON serialization fails
#[inline]
pub fn write_entries(out: &mut dyn Write, entries: &[Entry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for entry in entries {
                writeln!(out, "key={}", entry.key)?;
                for line in entry.value.split('\n') {
                    writeln!(out, "{line}")?;
                }
                writeln!(out)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

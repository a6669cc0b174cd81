//! Reading exported records and writing results.
//!
//! Record files are JSON arrays as exported from the Gateway. A file that
//! holds something other than an array is treated as an empty collection;
//! array elements that do not deserialise are skipped. Both cases are
//! logged as warnings rather than failing the command.

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Output format of listing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON array of matching records.
    #[default]
    Json,
    /// One human-readable line per record.
    Text,
}

/// Load a record collection from a JSON file.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let value: Value = read_json(path)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            tracing::warn!(
                path = %path.display(),
                found = json_kind(&other),
                "record file is not a JSON array; treating as empty"
            );
            return Ok(Vec::new());
        }
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(path = %path.display(), index, error = %e, "skipping malformed record");
                None
            }
        })
        .collect();
    tracing::info!(path = %path.display(), loaded = records.len(), total, "records loaded");
    Ok(records)
}

/// Read and deserialise one JSON document.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse JSON in {}", path.display()))
}

/// Serialise `value` as JSON, pretty-printed when `pretty` is set.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    out.context("failed to serialise output")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

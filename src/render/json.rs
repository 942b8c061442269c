//! JSON rendering for extraction output.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with two-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a value to JSON. Non-ASCII text is written as-is, not escaped.
pub fn to_json<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Serialize a value and write it as a UTF-8 file with a trailing newline.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T, format: JsonFormat) -> Result<()> {
    let mut json = to_json(value, format)?;
    json.push('\n');
    fs::write(path, json)?;
    log::debug!("Wrote {}", path.display());
    Ok(())
}

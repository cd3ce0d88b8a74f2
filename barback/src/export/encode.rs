//! Polymorphic record encoding.
//!
//! The format is chosen once per run; nothing downstream branches on it
//! again. Key order is whatever the record dictates, the encoder never
//! reorders.

use crate::error::{Error, Result};
use crate::export::types::ExportFormat;
use serde::Serialize;

/// Encode a canonical record into bytes.
///
/// YAML output is block-style with multi-line free text emitted as literal
/// blocks; JSON output is pretty-printed with non-ASCII characters kept
/// literal. Both are deterministic given a deterministic record.
pub fn encode<T: Serialize>(record: &T, format: ExportFormat) -> Result<Vec<u8>> {
    match format {
        ExportFormat::Yaml => serde_yaml::to_string(record)
            .map(String::into_bytes)
            .map_err(|e| Error::Encode(format!("YAML serialization failed: {}", e))),
        ExportFormat::Json => serde_json::to_vec_pretty(record)
            .map_err(|e| Error::Encode(format!("JSON serialization failed: {}", e))),
    }
}

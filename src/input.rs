// src/input.rs
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, TallyError};

/// Reads `path` to completion and parses it as a UTF-8 JSON document.
///
/// # Errors
/// Returns an error if the file cannot be read, is not UTF-8, or is not JSON.
pub fn load_json(path: &Path) -> Result<Value> {
    let bytes = fs::read(path).map_err(|source| TallyError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let text = String::from_utf8(bytes).map_err(|source| TallyError::Encoding {
        source,
        path: path.to_path_buf(),
    })?;
    parse_json(&text, path)
}

fn parse_json(text: &str, path: &Path) -> Result<Value> {
    serde_json::from_str(text).map_err(|source| TallyError::Json {
        source,
        path: path.to_path_buf(),
    })
}

//! Syntax schema parser.
//!
//! This module decodes a JSON syntax document (an array of node definitions)
//! into the [`Schema`] model. Decode failures report the path of the value
//! that could not be read.

use crate::error::ParseError;
use crate::model::Schema;
use std::path::Path;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parses a syntax schema from a JSON string.
///
/// # Arguments
/// * `json` - Schema document content
///
/// # Returns
/// Parsed schema or parse error.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed or a value has the wrong shape.
pub fn parse_schema(json: &str) -> Result<Schema, ParseError> {
    let json = json.strip_prefix(BYTE_ORDER_MARK).unwrap_or(json);
    let mut de = serde_json::Deserializer::from_str(json);
    let schema: Schema = serde_path_to_error::deserialize(&mut de).map_err(|err| {
        let path = err.path().to_string();
        ParseError::json(path, err.into_inner())
    })?;
    de.end().map_err(|err| ParseError::json("", err))?;

    tracing::debug!("Parsed {} node definitions", schema.len());
    Ok(schema)
}

/// Parses a syntax schema from raw bytes.
///
/// # Errors
/// Returns `ParseError` if the bytes are not UTF-8 or the JSON is invalid.
pub fn parse_schema_bytes(bytes: &[u8]) -> Result<Schema, ParseError> {
    parse_schema(std::str::from_utf8(bytes)?)
}

/// Reads and parses a syntax schema file.
///
/// # Errors
/// Returns `ParseError` if the file cannot be read or decoded.
pub fn parse_schema_file(path: &Path) -> Result<Schema, ParseError> {
    let bytes = std::fs::read(path)?;
    parse_schema_bytes(&bytes)
}

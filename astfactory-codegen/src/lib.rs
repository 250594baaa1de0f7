//! # astfactory Codegen
//!
//! Code generation from syntax schemas.
//!
//! This crate provides:
//! - An indentation-aware text writer
//! - Create/update factory function generation
//! - Visitor dispatch generation
//! - Helpers for reading a schema file and writing the generated file

pub mod error;
pub mod generator;
pub mod options;
pub mod typescript;
pub mod writer;

pub use error::CodegenError;
pub use generator::Generator;
pub use options::{GeneratorOptions, Newline};
pub use writer::TextWriter;

use astfactory_schema::SchemaIr;
use std::path::{Path, PathBuf};

/// Generates factory source from a syntax schema JSON string.
///
/// # Arguments
/// * `json` - Syntax schema content
///
/// # Returns
/// Generated source as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing fails.
pub fn generate_from_json(json: &str) -> Result<String, CodegenError> {
    generate_from_json_with_options(json, GeneratorOptions::default())
}

/// Generates factory source from a syntax schema JSON string with the given
/// options.
///
/// # Errors
/// Returns `CodegenError` if parsing fails.
pub fn generate_from_json_with_options(
    json: &str,
    options: GeneratorOptions,
) -> Result<String, CodegenError> {
    let schema = astfactory_schema::parse_schema(json)?;
    let ir = SchemaIr::from_schema(schema);
    Ok(Generator::with_options(&ir, options).generate())
}

/// Generates factory source from a syntax schema file.
///
/// # Arguments
/// * `path` - Path to the syntax schema file
///
/// # Returns
/// Generated source as a string.
///
/// # Errors
/// Returns `CodegenError` if reading or parsing fails.
pub fn generate_from_file(path: &Path) -> Result<String, CodegenError> {
    let schema = astfactory_schema::parse_schema_file(path)?;
    let ir = SchemaIr::from_schema(schema);
    Ok(Generator::new(&ir).generate())
}

/// Returns the path of the file generated for a schema: a file named by
/// `options` in the schema's directory.
#[must_use]
pub fn output_path_for(input: &Path, options: &GeneratorOptions) -> PathBuf {
    let normalized = PathBuf::from(input.to_string_lossy().replace('\\', "/"));
    let directory = normalized.parent().unwrap_or_else(|| Path::new(""));
    directory.join(options.get_output_file_name())
}

/// Writes generated source to `output`, creating parent directories.
///
/// # Errors
/// Returns `CodegenError::Write` if the directory or file cannot be written.
pub fn write_generated(output: &Path, source: &str) -> Result<(), CodegenError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CodegenError::write(parent, e))?;
    }
    std::fs::write(output, source).map_err(|e| CodegenError::write(output, e))?;
    tracing::info!("Wrote {} ({} bytes)", output.display(), source.len());
    Ok(())
}

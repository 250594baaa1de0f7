//! # astfactory Schema
//!
//! Syntax schema model, parser and normalizer.
//!
//! This crate provides:
//! - JSON syntax schema parsing
//! - Node and member definitions as authored
//! - Type and name canonicalization
//! - Opt-in schema validation
//! - Intermediate representation for code generation

pub mod error;
pub mod ir;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use ir::{ResolvedMember, ResolvedNode, SchemaIr};
pub use model::{MemberDef, NodeDef, Schema};
pub use parser::{parse_schema, parse_schema_file};
pub use validation::validate_schema;

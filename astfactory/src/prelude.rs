//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! ```
//! use astfactory::prelude::*;
//! ```

// Schema types
pub use astfactory_schema::{
    MemberDef, NodeDef, ParseError, ResolvedMember, ResolvedNode, Schema, SchemaError, SchemaIr,
    parse_schema, parse_schema_file, validate_schema,
};

// Codegen types
pub use astfactory_codegen::typescript::{DispatchArm, FactoryGenerator, VisitorGenerator};
pub use astfactory_codegen::{CodegenError, Generator, GeneratorOptions, Newline, TextWriter};

//! # astfactory
//!
//! Schema-driven generator of AST factory and visitor functions.
//!
//! Given a JSON description of a syntax tree's node kinds, astfactory emits a
//! `create` function for every instantiable node, an identity-preserving
//! `update` function for every node with updatable members, and a visitor
//! that rebuilds a node from its visited children.
//!
//! ## Quick Start
//!
//! ```
//! use astfactory::prelude::*;
//!
//! let schema = parse_schema(r#"[
//!     { "kind": "Foo", "type": "FooNode", "children": [ { "name": "x", "type": "number" } ] }
//! ]"#)?;
//! let ir = SchemaIr::from_schema(schema);
//! let source = Generator::new(&ir).generate();
//!
//! assert!(source.contains("export function updateFoo(node: FooNode, x: number): FooNode {"));
//! # Ok::<(), astfactory::schema::ParseError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Schema model, JSON parsing, normalization and validation
//! - [`codegen`] - Text writer and factory/visitor generation

pub mod prelude;

/// Schema model, parsing, normalization and validation.
pub mod schema {
    pub use astfactory_schema::*;
}

/// Factory and visitor code generation.
pub mod codegen {
    pub use astfactory_codegen::*;
}

// Re-export commonly used items at the crate root
pub use astfactory_codegen::{
    CodegenError, Generator, GeneratorOptions, generate_from_file, generate_from_json,
};
pub use astfactory_schema::{Schema, SchemaIr, parse_schema};

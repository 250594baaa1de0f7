//! Error types for schema parsing and validation.

use thiserror::Error;

/// Error type for schema parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error, located by the path of the offending value.
    #[error("JSON error at '{path}': {source}")]
    Json {
        /// Path of the value that failed to decode (e.g. `[3].children[0].readonly`).
        path: String,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Error type for schema validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Member declared without a type.
    #[error("member '{member}' of '{node}' has no type")]
    MissingMemberType {
        /// Owning definition name.
        node: String,
        /// Member name.
        member: String,
    },

    /// Member declared without a name.
    #[error("member #{index} of '{node}' has no name")]
    MissingMemberName {
        /// Owning definition name.
        node: String,
        /// Position of the member in the children list.
        index: usize,
    },

    /// Member flagged as both a node array and a modifiers array.
    #[error("member '{member}' of '{node}' is flagged as both a node array and a modifiers array")]
    ConflictingArrayFlags {
        /// Owning definition name.
        node: String,
        /// Member name.
        member: String,
    },

    /// Two definitions share the same kind.
    #[error("duplicate kind '{kind}'")]
    DuplicateKind {
        /// The repeated kind.
        kind: String,
    },

    /// Definition that cannot be named.
    #[error("definition #{index} has no name, kind, type, types or baseType")]
    Unnamed {
        /// Position of the definition in the schema.
        index: usize,
    },
}

impl ParseError {
    /// Creates a JSON error located at the given path.
    pub fn json(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}

impl SchemaError {
    /// Creates a missing member type error.
    pub fn missing_member_type(node: impl Into<String>, member: impl Into<String>) -> Self {
        Self::MissingMemberType {
            node: node.into(),
            member: member.into(),
        }
    }

    /// Creates a conflicting array flags error.
    pub fn conflicting_array_flags(node: impl Into<String>, member: impl Into<String>) -> Self {
        Self::ConflictingArrayFlags {
            node: node.into(),
            member: member.into(),
        }
    }
}

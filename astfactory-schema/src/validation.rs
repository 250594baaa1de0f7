//! Schema validation utilities.
//!
//! Generation never requires a valid schema: defects surface when the
//! generated source is compiled. This module offers an opt-in check that
//! reports the most common authoring mistakes before generating.

use crate::error::SchemaError;
use crate::model::{NodeDef, Schema};
use std::collections::HashSet;

/// Validates a parsed schema.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first defect.
///
/// # Errors
/// Returns `SchemaError` if validation fails.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    let mut seen_kinds = HashSet::new();

    for (index, node) in schema.nodes.iter().enumerate() {
        let label = node_label(node).ok_or(SchemaError::Unnamed { index })?;

        if let Some(kind) = node.kind.as_deref() {
            let kind = crate::normalize::strip_whitespace(kind);
            if !kind.is_empty() && !seen_kinds.insert(kind.clone()) {
                return Err(SchemaError::DuplicateKind { kind });
            }
        }

        validate_members(label, node)?;
    }

    Ok(())
}

/// Validates the members of a node definition.
fn validate_members(label: &str, node: &NodeDef) -> Result<(), SchemaError> {
    for (index, member) in node.members().iter().enumerate() {
        let Some(name) = present(member.name.as_deref()) else {
            return Err(SchemaError::MissingMemberName {
                node: label.to_string(),
                index,
            });
        };

        if present(member.ty.as_deref()).is_none() {
            return Err(SchemaError::missing_member_type(label, name));
        }

        if member.is_node_array && member.is_modifiers_array {
            return Err(SchemaError::conflicting_array_flags(label, name));
        }
    }

    Ok(())
}

/// Returns the most specific label available for a definition.
fn node_label(node: &NodeDef) -> Option<&str> {
    present(node.name.as_deref())
        .or_else(|| present(node.kind.as_deref()))
        .or_else(|| present(node.ty.as_deref()))
        .or_else(|| present(node.types.as_deref()))
        .or_else(|| present(node.base_type.as_deref()))
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

//! Intermediate representation for code generation.
//!
//! This module provides the normalized, indexed form of the schema that the
//! generators consume. Every type is canonicalized (see [`crate::normalize`]),
//! every name is identifier-safe, and three lookup indices are built once.

use crate::model::{MemberDef, NodeDef, Schema};
use crate::normalize::{format_name, normalize_type, strip_whitespace, type_key};
use std::collections::HashMap;

/// Intermediate representation of a schema for code generation.
#[derive(Debug, Clone, Default)]
pub struct SchemaIr {
    /// Normalized definitions in schema order.
    pub nodes: Vec<ResolvedNode>,
    /// Kind -> position in `nodes`.
    kinds: HashMap<String, usize>,
    /// Type key -> position in `nodes`.
    types: HashMap<String, usize>,
    /// Base type key -> positions in `nodes`, in schema order.
    subtypes: HashMap<String, Vec<usize>>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a parsed schema.
    #[must_use]
    pub fn from_schema(schema: Schema) -> Self {
        let mut ir = Self::default();

        for (index, node_def) in schema.nodes.into_iter().enumerate() {
            let node = ResolvedNode::from_node_def(node_def);

            if let Some(kind) = &node.kind {
                ir.kinds.insert(kind.clone(), index);
            }
            if node.declares_type {
                if let Some(key) = node.ty.as_deref().and_then(type_key) {
                    ir.types.insert(key, index);
                }
            }
            if let Some(key) = node.base_type.as_deref().and_then(type_key) {
                ir.subtypes.entry(key).or_default().push(index);
            }

            ir.nodes.push(node);
        }

        tracing::debug!(
            "Indexed {} definitions: {} kinds, {} types, {} base types",
            ir.nodes.len(),
            ir.kinds.len(),
            ir.types.len(),
            ir.subtypes.len()
        );

        ir
    }

    /// Gets a definition by kind.
    #[must_use]
    pub fn node_by_kind(&self, kind: &str) -> Option<&ResolvedNode> {
        self.kinds.get(kind).map(|&idx| &self.nodes[idx])
    }

    /// Gets a definition by type, in raw or normalized form.
    #[must_use]
    pub fn node_by_type(&self, ty: &str) -> Option<&ResolvedNode> {
        let key = type_key(ty)?;
        self.types.get(&key).map(|&idx| &self.nodes[idx])
    }

    /// Returns true if the type names a known node definition.
    #[must_use]
    pub fn is_node_type(&self, ty: &str) -> bool {
        self.node_by_type(ty).is_some()
    }

    /// Returns the definitions specializing a base type, in schema order.
    pub fn subtypes_of(&self, base_type: &str) -> impl Iterator<Item = &ResolvedNode> + '_ {
        type_key(base_type)
            .and_then(|key| self.subtypes.get(&key))
            .into_iter()
            .flatten()
            .map(|&idx| &self.nodes[idx])
    }

    /// Returns the base types that have at least one specialization, sorted.
    pub fn base_types(&self) -> impl Iterator<Item = &str> + '_ {
        let mut keys: Vec<&str> = self.subtypes.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys.into_iter()
    }

    /// Returns the instantiable definitions, in schema order.
    pub fn creatable_nodes(&self) -> impl Iterator<Item = &ResolvedNode> + '_ {
        self.nodes.iter().filter(|node| node.can_create())
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if there are no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Normalized node definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNode {
    /// Whitespace-free kind; present for instantiable nodes.
    pub kind: Option<String>,
    /// Canonical type for emission, authored or derived from `types`/`base_type`.
    pub ty: Option<String>,
    /// Canonical union of types.
    pub types: Option<String>,
    /// Canonical base type.
    pub base_type: Option<String>,
    /// Identifier-safe name used in function names.
    pub name: Option<String>,
    /// Normalized members in declaration order.
    pub members: Vec<ResolvedMember>,
    /// Whether `ty` was authored rather than derived.
    declares_type: bool,
}

impl ResolvedNode {
    /// Normalizes a node definition.
    #[must_use]
    pub fn from_node_def(node: NodeDef) -> Self {
        let kind = non_blank(node.kind.as_deref()).map(strip_whitespace);
        let authored_ty = node.ty.as_deref().and_then(normalize_type);
        let types = node.types.as_deref().and_then(normalize_type);
        let base_type = node.base_type.as_deref().and_then(normalize_type);

        let declares_type = authored_ty.is_some();
        let ty = authored_ty.or_else(|| types.clone()).or_else(|| base_type.clone());

        let name = match non_blank(node.name.as_deref()) {
            Some(name) => format_name(name),
            None => kind.as_deref().or(ty.as_deref()).and_then(format_name),
        };

        let members = node
            .children
            .unwrap_or_default()
            .into_iter()
            .map(ResolvedMember::from_member_def)
            .collect();

        Self {
            kind,
            ty,
            types,
            base_type,
            name,
            members,
            declares_type,
        }
    }

    /// Returns true if the node is instantiable (has a kind).
    #[must_use]
    pub fn can_create(&self) -> bool {
        self.kind.is_some()
    }

    /// Returns true if the node gets an update function: it is instantiable
    /// and has at least one non-readonly member.
    #[must_use]
    pub fn can_update(&self) -> bool {
        self.can_create() && self.members.iter().any(|member| !member.readonly)
    }

    /// Returns the members that take part in updates.
    pub fn updatable_members(&self) -> impl Iterator<Item = &ResolvedMember> + '_ {
        self.members.iter().filter(|member| !member.readonly)
    }

    /// Returns the member flagged as a modifiers array, if any.
    #[must_use]
    pub fn modifiers_member(&self) -> Option<&ResolvedMember> {
        self.members.iter().rev().find(|member| member.is_modifiers_array)
    }

    /// Returns the create function name.
    #[must_use]
    pub fn create_function_name(&self) -> String {
        format!("create{}", self.name.as_deref().unwrap_or_default())
    }

    /// Returns the update function name.
    #[must_use]
    pub fn update_function_name(&self) -> String {
        format!("update{}", self.name.as_deref().unwrap_or_default())
    }
}

/// Normalized member definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember {
    /// Identifier-safe field name.
    pub name: Option<String>,
    /// Identifier-safe parameter name; defaults to `name`.
    pub param_name: Option<String>,
    /// Canonical type for emission.
    pub ty: Option<String>,
    /// Field holds a node array.
    pub is_node_array: bool,
    /// Field holds a modifiers array.
    pub is_modifiers_array: bool,
    /// Parameter is optional in the create function.
    pub optional: bool,
    /// Conversion function applied to the raw argument.
    pub converter: Option<String>,
    /// Field is excluded from updates.
    pub readonly: bool,
}

impl ResolvedMember {
    /// Normalizes a member definition.
    #[must_use]
    pub fn from_member_def(member: MemberDef) -> Self {
        let name = non_blank(member.name.as_deref()).and_then(format_name);
        let param_name = match non_blank(member.param_name.as_deref()) {
            Some(param_name) => format_name(param_name),
            None => name.clone(),
        };

        Self {
            name,
            param_name,
            ty: member.ty.as_deref().and_then(normalize_type),
            is_node_array: member.is_node_array,
            is_modifiers_array: member.is_modifiers_array,
            optional: member.optional,
            converter: member.converter.filter(|c| !c.is_empty()),
            readonly: member.readonly,
        }
    }

    /// Returns true if the member is emitted with an array type.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.is_node_array || self.is_modifiers_array
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

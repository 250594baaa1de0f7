//! Schema model definitions.
//!
//! This module contains the data structures representing a syntax schema as
//! authored: an ordered list of node definitions, each with an optional list
//! of member definitions. Nothing here is normalized; see [`crate::ir`].

use serde::{Deserialize, Deserializer};

/// Complete syntax schema: node definitions in authored order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    /// Node definitions.
    pub nodes: Vec<NodeDef>,
}

impl Schema {
    /// Creates a new empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node definition to the schema.
    pub fn add_node(&mut self, node: NodeDef) {
        self.nodes.push(node);
    }

    /// Returns the number of node definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the schema has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<NodeDef> for Schema {
    fn from_iter<I: IntoIterator<Item = NodeDef>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

/// One node kind, or a node-type union, as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDef {
    /// Concrete discriminant tag; present only for instantiable nodes.
    #[serde(default)]
    pub kind: Option<String>,
    /// Nominal type name.
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    /// Supertype this definition specializes.
    #[serde(default)]
    pub base_type: Option<String>,
    /// Raw union of type names.
    #[serde(default)]
    pub types: Option<String>,
    /// Identifier used to build function names.
    #[serde(default)]
    pub name: Option<String>,
    /// Members, or `None` for nodes without fields.
    #[serde(default)]
    pub children: Option<Vec<MemberDef>>,
}

impl NodeDef {
    /// Creates a new empty node definition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the kind.
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets the type.
    #[must_use]
    pub fn with_type(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    /// Sets the base type.
    #[must_use]
    pub fn with_base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = Some(base_type.into());
        self
    }

    /// Sets the union of types.
    #[must_use]
    pub fn with_types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Sets the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends a member.
    #[must_use]
    pub fn with_member(mut self, member: MemberDef) -> Self {
        self.children.get_or_insert_with(Vec::new).push(member);
        self
    }

    /// Returns the members, empty if none were declared.
    #[must_use]
    pub fn members(&self) -> &[MemberDef] {
        self.children.as_deref().unwrap_or_default()
    }
}

/// One field of a node definition, as authored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberDef {
    /// Field name on the node object.
    #[serde(default)]
    pub name: Option<String>,
    /// Constructor parameter name; defaults to `name`.
    #[serde(default)]
    pub param_name: Option<String>,
    /// Declared type.
    #[serde(default, rename = "type")]
    pub ty: Option<String>,
    /// Field holds a node array.
    #[serde(default, deserialize_with = "flag")]
    pub is_node_array: bool,
    /// Field holds a modifiers array.
    #[serde(default, deserialize_with = "flag")]
    pub is_modifiers_array: bool,
    /// Parameter is optional in the create function.
    #[serde(default, deserialize_with = "flag")]
    pub optional: bool,
    /// Conversion function applied to the raw argument.
    #[serde(default)]
    pub converter: Option<String>,
    /// Field is excluded from update parameters and change detection.
    #[serde(default, deserialize_with = "flag")]
    pub readonly: bool,
}

impl MemberDef {
    /// Creates a new member definition.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ty: Some(ty.into()),
            ..Self::default()
        }
    }

    /// Sets the parameter name.
    #[must_use]
    pub fn with_param_name(mut self, param_name: impl Into<String>) -> Self {
        self.param_name = Some(param_name.into());
        self
    }

    /// Sets the converter function.
    #[must_use]
    pub fn with_converter(mut self, converter: impl Into<String>) -> Self {
        self.converter = Some(converter.into());
        self
    }

    /// Marks the member as a node array.
    #[must_use]
    pub fn node_array(mut self) -> Self {
        self.is_node_array = true;
        self
    }

    /// Marks the member as a modifiers array.
    #[must_use]
    pub fn modifiers_array(mut self) -> Self {
        self.is_modifiers_array = true;
        self
    }

    /// Marks the member as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Marks the member as readonly.
    #[must_use]
    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }
}

/// Flag value as it may appear in a schema document.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Number(f64),
    Text(String),
}

/// Reads a flag from a boolean, a number (set when non-zero), a string (set
/// when non-empty) or null.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawFlag>::deserialize(deserializer)? {
        Some(RawFlag::Bool(value)) => value,
        Some(RawFlag::Number(value)) => value != 0.0 && !value.is_nan(),
        Some(RawFlag::Text(text)) => !text.is_empty(),
        None => false,
    })
}

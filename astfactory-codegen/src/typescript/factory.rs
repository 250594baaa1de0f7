//! Create and update function generation.

use super::text;
use crate::writer::TextWriter;
use astfactory_schema::ir::{ResolvedMember, ResolvedNode, SchemaIr};

/// Generator for the `Factory` module.
pub struct FactoryGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> FactoryGenerator<'a> {
    /// Creates a new factory generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the `Factory` module: a create function for every
    /// instantiable node, each followed by its update function when it has
    /// one.
    pub fn generate(&self, w: &mut TextWriter) {
        w.write_line("export module Factory {");
        w.indent();

        let mut wrote_any = false;
        for node in &self.ir.nodes {
            if !node.can_create() {
                continue;
            }
            if wrote_any {
                w.blank_line();
            }
            self.write_create_function(node, w);
            wrote_any = true;

            if node.can_update() {
                w.blank_line();
                self.write_update_function(node, w);
            }
        }

        w.dedent();
        w.write_line("}");
        w.blank_line();
    }

    /// Writes the create function of an instantiable node.
    fn write_create_function(&self, node: &ResolvedNode, w: &mut TextWriter) {
        let node_type = text(&node.ty);
        tracing::debug!("Generating {}", node.create_function_name());
        if node.ty.is_none() {
            tracing::warn!("{} has no type", node.create_function_name());
        }

        w.write(&format!("export function {}(", node.create_function_name()));
        for member in &node.members {
            w.write(text(&member.param_name));
            if member.optional {
                w.write("?");
            }
            w.write(&format!(": {}", text(&member.ty)));
            if member.is_array() {
                w.write("[]");
            }
            w.write(", ");
        }
        w.write("location?: TextRange, flags?: NodeFlags");
        w.write_line(&format!("): {} {{", node_type));
        w.indent();

        w.write_line(&format!(
            "var node = beginNode<{}>(SyntaxKind.{});",
            node_type,
            text(&node.kind)
        ));

        for member in &node.members {
            w.write_line(&format!(
                "node.{} = {};",
                text(&member.name),
                member_initializer(member)
            ));
        }

        match node.modifiers_member() {
            Some(modifiers) => w.write_line(&format!(
                "return finishNode(node, location, flags, {});",
                text(&modifiers.param_name)
            )),
            None => w.write_line("return finishNode(node, location, flags);"),
        }

        w.dedent();
        w.write_line("}");
    }

    /// Writes the update function of a node with updatable members.
    ///
    /// Members are compared by reference: the node is rebuilt only when an
    /// argument is not the value already stored, otherwise it is returned
    /// as is.
    fn write_update_function(&self, node: &ResolvedNode, w: &mut TextWriter) {
        let node_type = text(&node.ty);
        tracing::debug!("Generating {}", node.update_function_name());

        w.write(&format!(
            "export function {}(node: {}",
            node.update_function_name(),
            node_type
        ));
        for member in node.updatable_members() {
            w.write(&format!(
                ", {}: {}{}",
                text(&member.param_name),
                text(&member.ty),
                if member.is_array() { "[]" } else { "" }
            ));
        }
        w.write_line(&format!("): {} {{", node_type));
        w.indent();

        let changed = node
            .updatable_members()
            .map(|member| {
                format!(
                    "node.{} !== {}",
                    text(&member.name),
                    text(&member.param_name)
                )
            })
            .collect::<Vec<_>>()
            .join(" || ");
        w.write_line(&format!("if ({}) {{", changed));
        w.indent();

        let mut arguments = String::new();
        for member in &node.members {
            if member.readonly {
                arguments.push_str(&format!("node.{}, ", text(&member.name)));
            } else {
                arguments.push_str(&format!("{}, ", text(&member.param_name)));
            }
        }
        w.write_line(&format!(
            "return {}({}node, node.flags);",
            node.create_function_name(),
            arguments
        ));

        w.dedent();
        w.write_line("}");
        w.write_line("return node;");
        w.dedent();
        w.write_line("}");
    }
}

/// Returns the expression assigned to a member in a create function.
fn member_initializer(member: &ResolvedMember) -> String {
    let param = text(&member.param_name);
    if let Some(converter) = &member.converter {
        format!("{}({})", converter, param)
    } else if member.is_node_array {
        format!("createNodeArray({})", param)
    } else if member.is_modifiers_array {
        format!("<ModifiersArray>{}", param)
    } else {
        param.to_string()
    }
}

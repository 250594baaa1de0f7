//! Visitor dispatch generation.
//!
//! The `accept` function switches over every instantiable kind. Kinds with an
//! update function rebuild the node from its visited members; kinds without
//! one have nothing to visit, so consecutive kinds of that sort share a single
//! `return node;` body.

use super::text;
use crate::writer::TextWriter;
use astfactory_schema::ir::{ResolvedMember, ResolvedNode, SchemaIr};

/// One body of the `accept` switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchArm<'a> {
    /// Consecutive kinds returned unchanged by one shared body.
    Passthrough(Vec<&'a ResolvedNode>),
    /// A kind rebuilt through its update function.
    Update(&'a ResolvedNode),
}

/// Generator for the `Visitor` module.
pub struct VisitorGenerator<'a> {
    ir: &'a SchemaIr,
}

impl<'a> VisitorGenerator<'a> {
    /// Creates a new visitor generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self { ir }
    }

    /// Generates the `Visitor` module with its `fallback` and `accept`
    /// functions.
    pub fn generate(&self, w: &mut TextWriter) {
        w.write_line("export module Visitor {");
        w.indent();
        self.write_fallback_function(w);
        self.write_accept_function(w);
        w.dedent();
        w.write_line("}");
    }

    /// Partitions the instantiable kinds, in schema order, into maximal runs
    /// of kinds without an update function and single updatable kinds.
    #[must_use]
    pub fn dispatch_plan(&self) -> Vec<DispatchArm<'a>> {
        let nodes: Vec<&'a ResolvedNode> = self.ir.creatable_nodes().collect();
        nodes
            .chunk_by(|a, b| !a.can_update() && !b.can_update())
            .map(|chunk| match chunk {
                [node] if node.can_update() => DispatchArm::Update(*node),
                run => DispatchArm::Passthrough(run.to_vec()),
            })
            .collect()
    }

    fn write_fallback_function(&self, w: &mut TextWriter) {
        w.write_line(
            "export function fallback<TNode extends Node>(node: TNode, cbNode: Visitor, state?: any): TNode {",
        );
        w.indent();
        w.write_line("if (!cbNode || !node) {");
        w.indent();
        w.write_line("return node;");
        w.dedent();
        w.write_line("}");
        w.write_line("return <TNode>accept(node, cbNode, state);");
        w.dedent();
        w.write_line("}");
        w.blank_line();
    }

    fn write_accept_function(&self, w: &mut TextWriter) {
        w.write_line("function accept(node: Node, cbNode: Visitor, state?: any): Node {");
        w.indent();
        w.write_line("switch (node.kind) {");
        w.indent();

        for arm in self.dispatch_plan() {
            match arm {
                DispatchArm::Passthrough(run) => {
                    for node in &run {
                        write_case(node, w);
                    }
                    w.indent();
                    w.write_line("return node;");
                    w.dedent();
                }
                DispatchArm::Update(node) => {
                    write_case(node, w);
                    w.indent();
                    self.write_update_call(node, w);
                    w.dedent();
                }
            }
        }

        w.dedent();
        w.write_line("}");
        w.dedent();
        w.write_line("}");
    }

    /// Writes the call to a node's update function, one visited member per
    /// line.
    fn write_update_call(&self, node: &ResolvedNode, w: &mut TextWriter) {
        w.write_line(&format!("return Factory.{}(", node.update_function_name()));
        w.indent();
        w.write(&format!("<{}>node", text(&node.ty)));
        for member in node.updatable_members() {
            w.write_line(",");
            w.write(&self.visit_expression(node, member));
        }
        w.write_line(");");
        w.dedent();
    }

    /// Returns the expression passing a member to the update function: the
    /// member visited through the callback when its type is a known node
    /// type, otherwise its current value.
    fn visit_expression(&self, node: &ResolvedNode, member: &ResolvedMember) -> String {
        let access = format!("(<{}>node).{}", text(&node.ty), text(&member.name));
        match member.ty.as_deref() {
            Some(ty) if self.ir.is_node_type(ty) => {
                let helper = if member.is_node_array {
                    "visitNodes"
                } else {
                    "visit"
                };
                format!("{}<{}>({}, cbNode, state)", helper, ty, access)
            }
            _ => access,
        }
    }
}

fn write_case(node: &ResolvedNode, w: &mut TextWriter) {
    w.write_line(&format!("case SyntaxKind.{}:", text(&node.kind)));
}

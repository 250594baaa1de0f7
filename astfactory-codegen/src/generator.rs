//! Top-level generator: preamble, factory section and visitor section.

use crate::options::GeneratorOptions;
use crate::typescript::{FactoryGenerator, VisitorGenerator};
use crate::writer::TextWriter;
use astfactory_schema::SchemaIr;

/// Generates the complete factory source for a schema.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    options: GeneratorOptions,
}

impl<'a> Generator<'a> {
    /// Creates a generator with default options.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self::with_options(ir, GeneratorOptions::default())
    }

    /// Creates a generator with the given options.
    #[must_use]
    pub fn with_options(ir: &'a SchemaIr, options: GeneratorOptions) -> Self {
        Self { ir, options }
    }

    /// Returns the generator options.
    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates the source text.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut w = TextWriter::with_options(&self.options);

        self.write_preamble(&mut w);
        w.write_line("module ts {");
        w.indent();
        FactoryGenerator::new(self.ir).generate(&mut w);
        VisitorGenerator::new(self.ir).generate(&mut w);
        w.dedent();
        w.write_line("}");

        tracing::debug!(
            "Generated {} bytes for {} definitions",
            w.as_str().len(),
            self.ir.len()
        );
        w.into_string()
    }

    fn write_preamble(&self, w: &mut TextWriter) {
        w.write_line("// <auto-generated />");
        for reference in self.options.get_references() {
            w.write_line(&format!("/// <reference path=\"{}\"/>", reference));
        }
        w.blank_line();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Newline;
    use astfactory_schema::parser::parse_schema;

    fn create_test_ir() -> SchemaIr {
        let json = r#"[
            { "kind": "Foo", "type": "FooNode", "name": "Foo", "children": [
                { "name": "x", "type": "number" }
            ] }
        ]"#;
        SchemaIr::from_schema(parse_schema(json).expect("Failed to parse"))
    }

    #[test]
    fn test_generate_end_to_end() {
        let ir = create_test_ir();
        let output = Generator::new(&ir).generate();

        let expected = r#"// <auto-generated />
/// <reference path="parser.ts"/>
/// <reference path="factory.ts"/>

module ts {
    export module Factory {
        export function createFoo(x: number, location?: TextRange, flags?: NodeFlags): FooNode {
            var node = beginNode<FooNode>(SyntaxKind.Foo);
            node.x = x;
            return finishNode(node, location, flags);
        }

        export function updateFoo(node: FooNode, x: number): FooNode {
            if (node.x !== x) {
                return createFoo(x, node, node.flags);
            }
            return node;
        }
    }

    export module Visitor {
        export function fallback<TNode extends Node>(node: TNode, cbNode: Visitor, state?: any): TNode {
            if (!cbNode || !node) {
                return node;
            }
            return <TNode>accept(node, cbNode, state);
        }

        function accept(node: Node, cbNode: Visitor, state?: any): Node {
            switch (node.kind) {
                case SyntaxKind.Foo:
                    return Factory.updateFoo(
                        <FooNode>node,
                        (<FooNode>node).x);
            }
        }
    }
}"#;
        assert_eq!(output, expected);
    }

    #[test]
    fn test_generate_deterministic() {
        let json = r#"[
            { "type": "Statement | Expression" },
            { "kind": "Block", "type": "Block", "baseType": "Statement", "children": [
                { "name": "statements", "type": "Expression|Statement", "isNodeArray": true }
            ] },
            { "kind": "Identifier", "type": "Identifier", "baseType": "Expression" },
            { "kind": "Paren", "type": "ParenthesizedExpression", "baseType": "Expression", "children": [
                { "name": "expression", "type": "Expression | Statement" }
            ] }
        ]"#;

        let first = Generator::new(&SchemaIr::from_schema(
            parse_schema(json).expect("Failed to parse"),
        ))
        .generate();
        let second = Generator::new(&SchemaIr::from_schema(
            parse_schema(json).expect("Failed to parse"),
        ))
        .generate();

        assert_eq!(first, second);
        assert!(first.contains("visitNodes<Expression | Statement>((<Block>node).statements, cbNode, state)"));
    }

    #[test]
    fn test_custom_options() {
        let ir = create_test_ir();
        let options = GeneratorOptions::new()
            .newline(Newline::CrLf)
            .indent_unit("\t")
            .references(["nodes.ts"]);
        let output = Generator::with_options(&ir, options).generate();

        assert!(output.starts_with(
            "// <auto-generated />\r\n/// <reference path=\"nodes.ts\"/>\r\n\r\nmodule ts {\r\n\texport module Factory {"
        ));
        assert!(!output.contains("parser.ts"));
        assert!(!output.contains('\n') || output.matches('\n').count() == output.matches("\r\n").count());
    }

    #[test]
    fn test_generate_without_references() {
        let ir = SchemaIr::default();
        let output = Generator::with_options(&ir, GeneratorOptions::new().references(Vec::<String>::new()))
            .generate();
        assert!(output.starts_with("// <auto-generated />\n\nmodule ts {\n"));
    }
}

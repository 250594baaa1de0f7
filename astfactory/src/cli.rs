//! Command line interface: syntax schema → generated factory source.

use anyhow::{Context, Result};
use astfactory::codegen::{output_path_for, write_generated};
use astfactory::prelude::*;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Printed when no input file is given.
pub const USAGE: &str = "Usage:\n\tastfactory <syntax-json-input-file>\n";

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate AST factory and visitor functions from a syntax schema
#[derive(Parser, Debug)]
#[command(name = "astfactory", version)]
pub struct CommandLineInterface {
    /// syntax schema JSON file
    input: Option<PathBuf>,

    /// output file (defaults to factory.generated.ts next to the input)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// print the generated source to stdout instead of writing a file
    #[arg(long, conflicts_with = "out")]
    stdout: bool,

    /// validate the schema before generating
    #[arg(long)]
    strict: bool,

    /// line terminator of the generated source
    #[arg(long, value_enum, default_value_t = NewlineArg::Lf)]
    newline: NewlineArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum NewlineArg {
    Lf,
    Crlf,
}

impl From<NewlineArg> for Newline {
    fn from(value: NewlineArg) -> Self {
        match value {
            NewlineArg::Lf => Newline::Lf,
            NewlineArg::Crlf => Newline::CrLf,
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        self.run_to(&mut std::io::stdout().lock())
    }

    /// Runs the command, sending usage text and `--stdout` output to `out`.
    pub fn run_to(&self, out: &mut impl Write) -> Result<()> {
        let Some(input) = self.input.as_deref() else {
            out.write_all(USAGE.as_bytes())?;
            return Ok(());
        };

        let options = GeneratorOptions::new().newline(self.newline.into());
        let source = self.generate(input, &options)?;

        if self.stdout {
            out.write_all(source.as_bytes())?;
            out.flush()?;
            return Ok(());
        }

        let output = self
            .out
            .clone()
            .unwrap_or_else(|| output_path_for(input, &options));
        write_generated(&output, &source)?;
        Ok(())
    }

    fn generate(&self, input: &Path, options: &GeneratorOptions) -> Result<String> {
        tracing::debug!("Loading schema {}", input.display());
        let schema = parse_schema_file(input)
            .with_context(|| format!("failed to load schema {}", input.display()))?;

        if self.strict {
            validate_schema(&schema)
                .with_context(|| format!("invalid schema {}", input.display()))?;
        }

        let ir = SchemaIr::from_schema(schema);
        Ok(Generator::with_options(&ir, options.clone()).generate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"[
        { "kind": "Foo", "type": "FooNode", "name": "Foo", "children": [
            { "name": "x", "type": "number" }
        ] }
    ]"#;

    fn parse(args: &[&str]) -> CommandLineInterface {
        CommandLineInterface::try_parse_from(std::iter::once("astfactory").chain(args.iter().copied()))
            .expect("Failed to parse arguments")
    }

    #[test]
    fn test_usage_has_two_lines() {
        assert_eq!(USAGE.lines().count(), 2);
        assert!(USAGE.starts_with("Usage:"));
    }

    #[test]
    fn test_no_input_prints_usage() {
        let cli = parse(&[]);
        assert!(cli.input.is_none());

        let mut out = Vec::new();
        cli.run_to(&mut out).expect("Failed to run");
        assert_eq!(String::from_utf8(out).expect("utf-8 output"), USAGE);
    }

    #[test]
    fn test_stdout_writes_no_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("syntax.json");
        std::fs::write(&input, SCHEMA).expect("Failed to write schema");

        let mut out = Vec::new();
        parse(&[input.to_str().expect("utf-8 path"), "--stdout"])
            .run_to(&mut out)
            .expect("Failed to run");

        let printed = String::from_utf8(out).expect("utf-8 output");
        let expected = astfactory::codegen::generate_from_json(SCHEMA).expect("Failed to generate");
        assert_eq!(printed, expected);
        assert!(!dir.path().join("factory.generated.ts").exists());
    }

    #[test]
    fn test_writes_next_to_input() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("syntax.json");
        std::fs::write(&input, SCHEMA).expect("Failed to write schema");

        let cli = parse(&[input.to_str().expect("utf-8 path")]);
        cli.run().expect("Failed to run");

        let generated = std::fs::read_to_string(dir.path().join("factory.generated.ts"))
            .expect("Failed to read output");
        assert!(generated.contains("return createFoo(x, node, node.flags);"));
    }

    #[test]
    fn test_out_and_newline_flags() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("syntax.json");
        let output = dir.path().join("gen").join("nodes.ts");
        std::fs::write(&input, SCHEMA).expect("Failed to write schema");

        let cli = parse(&[
            input.to_str().expect("utf-8 path"),
            "--out",
            output.to_str().expect("utf-8 path"),
            "--newline",
            "crlf",
        ]);
        cli.run().expect("Failed to run");

        let generated = std::fs::read_to_string(&output).expect("Failed to read output");
        assert!(generated.starts_with("// <auto-generated />\r\n"));
        assert!(!dir.path().join("factory.generated.ts").exists());
    }

    #[test]
    fn test_strict_rejects_invalid_schema() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("syntax.json");
        std::fs::write(&input, r#"[{ "kind": "Foo" }, { "kind": "Foo" }]"#)
            .expect("Failed to write schema");
        let path = input.to_str().expect("utf-8 path");

        let err = parse(&[path, "--strict"]).run().expect_err("should fail");
        assert!(format!("{err:#}").contains("duplicate kind 'Foo'"));

        // Without --strict generation stays permissive.
        assert!(parse(&[path]).run().is_ok());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let input = dir.path().join("missing.json");

        let err = parse(&[input.to_str().expect("utf-8 path")])
            .run()
            .expect_err("should fail");
        assert!(err.to_string().starts_with("failed to load schema"));
    }

    #[test]
    fn test_stdout_conflicts_with_out() {
        let result =
            CommandLineInterface::try_parse_from(["astfactory", "a.json", "--stdout", "-o", "b.ts"]);
        assert!(result.is_err());
    }
}

//! Generator configuration.

/// Default name of the generated file, written next to the schema.
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "factory.generated.ts";

/// Line terminator used in generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Newline {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl Newline {
    /// Returns the terminator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// Options controlling the generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    newline: Newline,
    indent_unit: String,
    references: Vec<String>,
    output_file_name: String,
}

impl GeneratorOptions {
    /// Creates options with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            newline: Newline::Lf,
            indent_unit: "    ".to_string(),
            references: vec!["parser.ts".to_string(), "factory.ts".to_string()],
            output_file_name: DEFAULT_OUTPUT_FILE_NAME.to_string(),
        }
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn newline(mut self, newline: Newline) -> Self {
        self.newline = newline;
        self
    }

    /// Sets the text of one indentation level.
    #[must_use]
    pub fn indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// Sets the files referenced by the preamble.
    #[must_use]
    pub fn references<I, S>(mut self, references: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.references = references.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the name of the generated file.
    #[must_use]
    pub fn output_file_name(mut self, name: impl Into<String>) -> Self {
        self.output_file_name = name.into();
        self
    }

    /// Returns the line terminator.
    #[must_use]
    pub fn get_newline(&self) -> Newline {
        self.newline
    }

    /// Returns the indentation unit.
    #[must_use]
    pub fn get_indent_unit(&self) -> &str {
        &self.indent_unit
    }

    /// Returns the referenced files.
    #[must_use]
    pub fn get_references(&self) -> &[String] {
        &self.references
    }

    /// Returns the name of the generated file.
    #[must_use]
    pub fn get_output_file_name(&self) -> &str {
        &self.output_file_name
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self::new()
    }
}

//! Indentation-aware text writer.
//!
//! Newlines are deferred: finishing a line only requests a newline, which is
//! flushed (followed by the current indentation) right before the next text
//! is written. A request still pending when output ends is never flushed, so
//! the output carries no trailing line break.

use crate::options::GeneratorOptions;

/// Line buffer used by every generator.
#[derive(Debug, Clone)]
pub struct TextWriter {
    output: String,
    newline: String,
    /// Indent text per depth; entry `n` is entry `n - 1` plus one unit.
    indent_levels: Vec<String>,
    depth: usize,
    suspended: usize,
    newline_requested: bool,
    /// Text was written since the last newline.
    line_dirty: bool,
}

impl TextWriter {
    /// Creates a writer using `\n` and four-space indentation.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&GeneratorOptions::default())
    }

    /// Creates a writer using the newline and indentation of `options`.
    #[must_use]
    pub fn with_options(options: &GeneratorOptions) -> Self {
        Self {
            output: String::new(),
            newline: options.get_newline().as_str().to_string(),
            indent_levels: vec![String::new(), options.get_indent_unit().to_string()],
            depth: 0,
            suspended: 0,
            newline_requested: false,
            line_dirty: false,
        }
    }

    /// Writes text. Line breaks inside `text` (`\r\n`, `\r` or `\n`) start
    /// new, indented lines.
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        for (i, line) in split_lines(text).enumerate() {
            if i > 0 {
                self.newline_requested = true;
            }
            self.flush_newline();
            if !line.is_empty() {
                self.output.push_str(line);
                self.line_dirty = true;
            }
        }
    }

    /// Writes text and requests a newline.
    pub fn write_line(&mut self, text: &str) {
        if text.is_empty() {
            self.blank_line();
        } else {
            self.write(text);
            self.newline_requested = true;
        }
    }

    /// Requests a newline, ending the current line.
    ///
    /// When a newline is already pending it is written immediately, which
    /// leaves one blank line before the next text. Repeated calls with
    /// nothing written in between never stack blank lines.
    pub fn blank_line(&mut self) {
        if self.newline_requested && self.line_dirty {
            self.push_newline();
        }
        self.newline_requested = true;
    }

    /// Increases the indentation depth.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decreases the indentation depth, stopping at zero.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Stops indenting new lines until the matching
    /// [`resume_indenting`](Self::resume_indenting).
    pub fn suspend_indenting(&mut self) {
        self.suspended += 1;
    }

    /// Undoes one [`suspend_indenting`](Self::suspend_indenting), stopping at zero.
    pub fn resume_indenting(&mut self) {
        self.suspended = self.suspended.saturating_sub(1);
    }

    /// Returns the current indentation depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    /// Consumes the writer, returning the text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.output
    }

    fn flush_newline(&mut self) {
        if !self.newline_requested {
            return;
        }
        self.newline_requested = false;
        self.push_newline();
        if self.suspended == 0 && self.depth > 0 {
            self.ensure_indent(self.depth);
            self.output.push_str(&self.indent_levels[self.depth]);
        }
    }

    fn push_newline(&mut self) {
        self.output.push_str(&self.newline);
        self.line_dirty = false;
    }

    fn ensure_indent(&mut self, depth: usize) {
        while self.indent_levels.len() <= depth {
            let next = format!(
                "{}{}",
                self.indent_levels[self.indent_levels.len() - 1],
                self.indent_levels[1]
            );
            self.indent_levels.push(next);
        }
    }
}

impl Default for TextWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Write for TextWriter {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        self.write(s);
        Ok(())
    }
}

/// Splits on `\r\n`, `\r` and `\n`.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text);
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(['\r', '\n']) {
            Some(pos) => {
                let terminator = if current[pos..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&current[pos + terminator..]);
                Some(&current[..pos])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Newline;

    #[test]
    fn test_split_lines() {
        let lines: Vec<_> = split_lines("a\r\nb\rc\nd").collect();
        assert_eq!(lines, vec!["a", "b", "c", "d"]);

        let lines: Vec<_> = split_lines("a\n").collect();
        assert_eq!(lines, vec!["a", ""]);
    }

    #[test]
    fn test_write_lines_are_indented() {
        let mut w = TextWriter::new();
        w.write_line("a {");
        w.indent();
        w.write_line("b;");
        w.dedent();
        w.write_line("}");
        assert_eq!(w.as_str(), "a {\n    b;\n}");
    }

    #[test]
    fn test_pending_newline_not_flushed_at_end() {
        let mut w = TextWriter::new();
        w.write_line("a");
        w.blank_line();
        assert_eq!(w.as_str(), "a\n");
        assert_eq!(w.into_string(), "a\n");
    }

    #[test]
    fn test_blank_line_suppression() {
        let mut w = TextWriter::new();
        w.write_line("a");
        w.blank_line();
        w.blank_line();
        w.blank_line();
        w.write_line("b");
        assert_eq!(w.as_str(), "a\n\nb");
    }

    #[test]
    fn test_blank_line_at_start_only_arms_newline() {
        let mut w = TextWriter::new();
        w.blank_line();
        assert_eq!(w.as_str(), "");
        w.write("a");
        assert_eq!(w.as_str(), "\na");
    }

    #[test]
    fn test_blank_line_after_partial_line() {
        let mut w = TextWriter::new();
        w.write("a");
        w.blank_line();
        w.write("b");
        assert_eq!(w.as_str(), "a\nb");
    }

    #[test]
    fn test_blank_lines_carry_no_indentation() {
        let mut w = TextWriter::new();
        w.indent();
        w.write_line("a");
        w.blank_line();
        w.write_line("b");
        assert_eq!(w.as_str(), "a\n\n    b");
    }

    #[test]
    fn test_write_multiline_text() {
        let mut w = TextWriter::new();
        w.indent();
        w.write("x\ny\r\nz");
        assert_eq!(w.as_str(), "x\n    y\n    z");
    }

    #[test]
    fn test_write_empty_is_noop() {
        let mut w = TextWriter::new();
        w.write("a");
        w.write("");
        w.write("b");
        assert_eq!(w.as_str(), "ab");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut w = TextWriter::new();
        w.dedent();
        w.dedent();
        assert_eq!(w.depth(), 0);
        w.indent();
        assert_eq!(w.depth(), 1);
    }

    #[test]
    fn test_deep_indentation_is_memoized() {
        let mut w = TextWriter::new();
        w.write_line("0");
        for _ in 0..3 {
            w.indent();
        }
        w.write_line("3");
        w.dedent();
        w.write_line("2");
        assert_eq!(w.as_str(), "0\n            3\n        2");
        assert_eq!(w.indent_levels.len(), 4);
    }

    #[test]
    fn test_suspend_indenting() {
        let mut w = TextWriter::new();
        w.indent();
        w.write_line("a");
        w.suspend_indenting();
        w.write_line("b");
        w.resume_indenting();
        w.resume_indenting();
        w.write_line("c");
        assert_eq!(w.as_str(), "a\nb\n    c");
    }

    #[test]
    fn test_crlf_and_custom_unit() {
        let options = GeneratorOptions::new()
            .newline(Newline::CrLf)
            .indent_unit("\t");
        let mut w = TextWriter::with_options(&options);
        w.write_line("a");
        w.indent();
        w.write_line("b");
        assert_eq!(w.as_str(), "a\r\n\tb");
    }

    #[test]
    fn test_fmt_write() {
        use std::fmt::Write as _;

        let mut w = TextWriter::new();
        write!(w, "{}: {}", "x", 1).expect("writing to a TextWriter cannot fail");
        assert_eq!(w.as_str(), "x: 1");
    }

    #[test]
    fn test_deterministic() {
        let render = || {
            let mut w = TextWriter::new();
            w.write_line("a");
            w.indent();
            w.write_line("b");
            w.blank_line();
            w.write_line("c");
            w.into_string()
        };
        assert_eq!(render(), render());
    }
}

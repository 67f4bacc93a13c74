//! Indentation-aware SQL text buffer.

use std::fmt;

/// One indentation unit.
pub const INDENT: &str = "    ";

/// Append-only buffer that statements and fragments render into.
///
/// Indentation is written lazily, right before the first character of a
/// line. Blank lines therefore never carry trailing whitespace. Generated
/// text goes through [`SqlWriter::push_str`], which indents every line it
/// starts; caller-supplied SQL goes through [`SqlWriter::push_raw`], which
/// leaves it untouched.
#[derive(Debug, Clone)]
pub struct SqlWriter {
    buf: String,
    level: usize,
    line_start: bool,
}

impl SqlWriter {
    /// Creates an empty writer at indentation level zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: String::new(),
            level: 0,
            line_start: true,
        }
    }

    /// Appends text, indenting every line it starts.
    pub fn push_str(&mut self, text: &str) {
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.write_part(first);
        }
        for line in lines {
            self.newline();
            self.write_part(line);
        }
    }

    /// Appends caller-supplied text unchanged.
    ///
    /// Only the first line is indented. Embedded newlines are copied as they
    /// are, so string literals spanning lines keep their exact contents.
    pub fn push_raw(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.write_indent();
        self.buf.push_str(text);
        self.line_start = text.ends_with('\n');
    }

    /// Appends a single character.
    pub fn push(&mut self, ch: char) {
        let mut tmp = [0_u8; 4];
        self.push_str(ch.encode_utf8(&mut tmp));
    }

    /// Ends the current line.
    pub fn newline(&mut self) {
        self.buf.push('\n');
        self.line_start = true;
    }

    /// Increases the indentation level for subsequent lines.
    pub fn indent(&mut self) {
        self.level += 1;
    }

    /// Decreases the indentation level, stopping at zero.
    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Runs `f` one indentation level deeper.
    pub fn indented<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.indent();
        f(self);
        self.dedent();
    }

    /// Returns the current indentation level.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.level
    }

    /// Returns `true` if nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns the text written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consumes the writer and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Returns `true` if nothing has been written on the current line.
    #[must_use]
    pub const fn at_line_start(&self) -> bool {
        self.line_start
    }

    fn write_part(&mut self, part: &str) {
        if part.is_empty() {
            return;
        }
        self.write_indent();
        self.buf.push_str(part);
    }

    fn write_indent(&mut self) {
        if self.line_start {
            for _ in 0..self.level {
                self.buf.push_str(INDENT);
            }
            self.line_start = false;
        }
    }
}

impl Default for SqlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for SqlWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }
}

//! Indentation-aware text writer.

/// Accumulates generated source text.
///
/// Text is written at a cursor: [`CodeBuilder::write`] appends to the
/// current line and [`CodeBuilder::newline`] ends it. Indentation is
/// emitted lazily, when the first text lands on a fresh line, so blank
/// lines never carry trailing whitespace and a construct can open on the
/// line of whatever precedes it.
///
/// ```
/// use crdgen_codegen::builder::CodeBuilder;
///
/// let mut out = CodeBuilder::go();
/// out.write("return &T{").indent();
/// out.newline().write("A: 1,");
/// out.dedent().newline().write("}");
/// assert_eq!(out.build(), "return &T{\n\tA: 1,\n}");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    unit: &'static str,
    depth: usize,
    line_start: bool,
    buffer: String,
}

impl CodeBuilder {
    /// A builder indenting one `unit` per level.
    pub fn new(unit: &'static str) -> Self {
        Self {
            unit,
            depth: 0,
            line_start: true,
            buffer: String::new(),
        }
    }

    /// gofmt indents with tabs.
    pub fn go() -> Self {
        Self::new("\t")
    }

    /// Append `s` to the current line.
    pub fn write(&mut self, s: &str) -> &mut Self {
        if s.is_empty() {
            return self;
        }
        if self.line_start {
            for _ in 0..self.depth {
                self.buffer.push_str(self.unit);
            }
            self.line_start = false;
        }
        self.buffer.push_str(s);
        self
    }

    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self.line_start = true;
        self
    }

    /// Deepen the indentation of lines started from now on.
    pub fn indent(&mut self) -> &mut Self {
        self.depth += 1;
        self
    }

    pub fn dedent(&mut self) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self
    }

    /// Write `s` as a complete line.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write(s).newline()
    }

    /// Write every line of `s`. Lines keep their own leading whitespace on
    /// top of the current indentation.
    pub fn push_lines(&mut self, s: &str) -> &mut Self {
        for line in s.lines() {
            self.push_line(line);
        }
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.newline()
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn build(self) -> String {
        self.buffer
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::go()
    }
}

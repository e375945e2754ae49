//! Indentation-aware writer for generated source text.
//!
//! Output is normalized for stable, minimal diffs: four-space indentation,
//! braces on their own lines, no trailing whitespace. Identical inputs
//! produce byte-identical text.

const INDENT: &str = "    ";

#[derive(Debug, Default)]
pub struct SourceWriter {
    buf: String,
    depth: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// One indented line of text.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// An empty separator line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// A line followed by an opening brace; indents until [`close`].
    ///
    /// [`close`]: SourceWriter::close
    pub fn open(&mut self, text: &str) {
        self.line(text);
        self.line("{");
        self.depth += 1;
    }

    pub fn close(&mut self) {
        self.close_with("");
    }

    /// Closing brace with a trailing suffix (`};` for initializers).
    pub fn close_with(&mut self, suffix: &str) {
        debug_assert!(self.depth > 0, "unbalanced close");
        self.depth -= 1;
        let mut line = String::with_capacity(1 + suffix.len());
        line.push('}');
        line.push_str(suffix);
        self.line(&line);
    }

    pub fn finish(self) -> String {
        debug_assert_eq!(self.depth, 0, "unbalanced blocks at finish");
        self.buf
    }
}

use std::fmt;

use crate::options::PrintOptions;

pub(crate) struct Writer {
    buffer: String,
    pub(crate) options: PrintOptions,
    indent_unit: String,
    indent_cache: Vec<String>,
}

impl Writer {
    pub fn new(options: PrintOptions) -> Self {
        let indent_unit = " ".repeat(options.indent.get_spaces());
        Self {
            buffer: String::new(),
            options,
            indent_unit,
            indent_cache: vec![String::new()],
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    pub fn write_str(&mut self, s: &str) {
        self.buffer.push_str(s);
    }

    pub fn write_char(&mut self, ch: char) {
        self.buffer.push(ch);
    }

    pub fn write_newline(&mut self) {
        self.buffer.push('\n');
    }

    pub fn write_indent(&mut self, depth: usize) {
        if depth == 0 || self.indent_unit.is_empty() {
            return;
        }
        if depth >= self.indent_cache.len() {
            self.extend_indent_cache(depth);
        }
        self.buffer.push_str(&self.indent_cache[depth]);
    }

    fn extend_indent_cache(&mut self, depth: usize) {
        while self.indent_cache.len() <= depth {
            let next = format!(
                "{}{}",
                self.indent_cache[self.indent_cache.len() - 1],
                self.indent_unit
            );
            self.indent_cache.push(next);
        }
    }

    pub fn write_u64(&mut self, value: u64) {
        let mut buf = itoa::Buffer::new();
        self.buffer.push_str(buf.format(value));
    }

    pub fn write_i64(&mut self, value: i64) {
        let mut buf = itoa::Buffer::new();
        self.buffer.push_str(buf.format(value));
    }

    pub fn write_usize(&mut self, value: usize) {
        let mut buf = itoa::Buffer::new();
        self.buffer.push_str(buf.format(value));
    }

    /// Printable ASCII goes out quoted; anything else as dotted hex.
    pub fn write_bytes(&mut self, data: &[u8]) {
        if data.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
            self.buffer.push('"');
            self.buffer.push_str(&data.escape_ascii().to_string());
            self.buffer.push('"');
        } else {
            // Writing into a String cannot fail.
            let _ = write_hex_bytes(&mut self.buffer, data);
        }
    }
}

/// Dotted lowercase hex in angle brackets, e.g. `<00.ff>`.
pub(crate) fn write_hex_bytes<W: fmt::Write>(out: &mut W, data: &[u8]) -> fmt::Result {
    out.write_char('<')?;
    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            out.write_char('.')?;
        }
        write!(out, "{byte:02x}")?;
    }
    out.write_char('>')
}

/// Indentation-aware string builder for emitting TypeScript source.
use serde_json::Number;

pub struct CodeWriter {
    buf: String,
    depth: usize,
}

impl Default for CodeWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeWriter {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            depth: 0,
        }
    }

    /// Write a line at the current indentation level.
    pub fn line(&mut self, text: &str) {
        self.write_indent();
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Write pre-rendered text that may span several lines, unindented.
    pub fn raw(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Open a block: write `text {` and increase indent.
    pub fn open(&mut self, text: &str) {
        self.write_indent();
        self.buf.push_str(text);
        self.buf.push_str(" {\n");
        self.depth += 1;
    }

    /// Close a block: decrease indent and write `}`.
    pub fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.write_indent();
        self.buf.push_str("}\n");
    }

    /// Consume and return the built string.
    pub fn finish(self) -> String {
        self.buf
    }

    /// Like `finish`, without the final newline. Used for fragments that
    /// get embedded as a single entry in a larger file.
    pub fn finish_fragment(self) -> String {
        let mut buf = self.buf;
        if buf.ends_with('\n') {
            buf.pop();
        }
        buf
    }

    fn write_indent(&mut self) {
        for _ in 0..self.depth {
            self.buf.push_str("  ");
        }
    }
}

/// Wrap a string in single quotes, backslash-escaping embedded quotes.
pub fn single_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Render a number for an enum member or literal type, following JS
/// `Number.prototype.toString` for floats: integral floats lose their
/// `.0`, and magnitudes outside `[1e-6, 1e21)` use exponent form.
///
/// Integers are printed exactly. Plain constants do not go through here;
/// they keep serde_json's number output.
pub fn js_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) => js_float(f),
        None => n.to_string(),
    }
}

fn js_float(f: f64) -> String {
    let abs = f.abs();
    if abs == 0.0 {
        return "0".into();
    }
    if (1e-6..1e21).contains(&abs) {
        return f.to_string();
    }
    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

use std::fmt::Write;

/// Replace every character that can't appear in a bare dot id with an underscore.
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Escape a string for use inside double quotes.
pub fn escape_quoted(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape a single field of a `shape=record` label.
pub fn escape_record_field(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\\' | '"' | '|' | '{' | '}' | '<' | '>' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

/// Writes a flat digraph one statement per line.
pub struct DotWriter {
    output: String,
}

impl DotWriter {
    /// Start a digraph named `name`; `name` must already be a valid id.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {name} {{");
        Self { output }
    }

    /// Add a bare `key=value` graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        let _ = writeln!(self.output, "{key}={value}");
        self
    }

    /// Add a node. Attribute values are written as given, so
    /// quoted values must carry their own (escaped) quotes.
    pub fn node(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        let _ = write!(self.output, "\"{}\" [", escape_quoted(id));
        for (i, (key, value)) in attrs.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{key}={value}");
        }
        self.output.push_str("]\n");
        self
    }

    pub fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        let _ = writeln!(
            self.output,
            "\"{}\" -> \"{}\"",
            escape_quoted(from),
            escape_quoted(to)
        );
        self
    }

    /// Close the graph and return the dot text.
    pub fn finish(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

/// Wrap `value` in double quotes, escaping as needed.
pub fn quoted(value: &str) -> String {
    format!("\"{}\"", escape_quoted(value))
}

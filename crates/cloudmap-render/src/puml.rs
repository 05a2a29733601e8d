//! PlantUML format utilities for diagram rendering.

use std::fmt::Write;

/// Sanitize a string to be a valid PlantUML identifier.
/// Replaces any non-alphanumeric character with underscore.
///
/// Resource ids are unique within kind+region, so collisions are unlikely
/// in practice, but the transform is not injective: distinct separators map
/// to the same underscore.
pub fn sanitize_id(input: &str) -> String {
    input
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Escape special characters for PlantUML labels.
///
/// Newlines and tabs become PlantUML escape sequences so multi-line labels
/// can be built with ordinary Rust strings.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}

/// Write indentation to output.
fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A PlantUML document builder for constructing valid diagram output.
///
/// Tracks indentation and group nesting so callers pair
/// [`start_group`](Self::start_group) / [`end_group`](Self::end_group)
/// without hand-managing braces.
pub struct PumlBuilder {
    output: String,
    indent: usize,
}

impl PumlBuilder {
    /// Open a new document with the `@startuml` marker.
    pub fn new() -> Self {
        let mut output = String::with_capacity(4096);
        output.push_str("@startuml\n");
        Self { output, indent: 0 }
    }

    /// Add a `!define` directive.
    pub fn define(&mut self, name: &str, value: &str) -> &mut Self {
        let _ = writeln!(self.output, "!define {name} {value}");
        self
    }

    /// Add an `!include` directive.
    pub fn include(&mut self, path: &str) -> &mut Self {
        let _ = writeln!(self.output, "!include {path}");
        self
    }

    /// Add a raw directive line (e.g. `hide stereotype`).
    pub fn directive(&mut self, line: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str(line);
        self.output.push('\n');
        self
    }

    /// Add the document title.
    pub fn title(&mut self, text: &str) -> &mut Self {
        let _ = writeln!(self.output, "title {text}");
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a `'`-prefixed comment line.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "' {text}");
        self
    }

    /// Start a group macro without a label, e.g. `AWSCloudGroup(id) {`.
    pub fn start_group(&mut self, group: &str, id: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}({}) {{", group, sanitize_id(id));
        self.indent += 1;
        self
    }

    /// Start a labeled group macro, e.g. `VPCGroup(id, "label") {`.
    pub fn start_group_labeled(&mut self, group: &str, id: &str, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(
            self.output,
            "{}({}, \"{}\") {{",
            group,
            sanitize_id(id),
            escape_label(label)
        );
        self.indent += 1;
        self
    }

    /// End the current group.
    pub fn end_group(&mut self) -> &mut Self {
        self.indent -= 1;
        write_indent(&mut self.output, self.indent);
        self.output.push_str("}\n");
        self
    }

    /// Add a node macro, e.g. `EC2Instance(id, "label", "")`.
    pub fn node(&mut self, macro_name: &str, id: &str, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(
            self.output,
            "{}({}, \"{}\", \"\")",
            macro_name,
            sanitize_id(id),
            escape_label(label)
        );
        self
    }

    /// Add a node macro with a transparent background.
    pub fn node_transparent(&mut self, macro_name: &str, id: &str, label: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(
            self.output,
            "{}({}, \"{}\", \"\") #Transparent",
            macro_name,
            sanitize_id(id),
            escape_label(label)
        );
        self
    }

    /// Add a directed flow edge (`from .u.> to`).
    ///
    /// Identifiers must already be sanitized (they come from node emission).
    pub fn flow_edge(&mut self, from: &str, to: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{from} .u.> {to}");
        self
    }

    /// Add a hidden flow edge (`from .[hidden]u.> to`): a layout constraint
    /// with no semantic meaning, distinguishable by downstream consumers.
    pub fn hidden_flow_edge(&mut self, from: &str, to: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{from} .[hidden]u.> {to}");
        self
    }

    /// Add a hidden same-row alignment edge (`left -[hidden]r- right`).
    pub fn hidden_row_edge(&mut self, left: &str, right: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{left} -[hidden]r- {right}");
        self
    }

    /// Open the trailing `note bottom` block.
    pub fn start_note_bottom(&mut self) -> &mut Self {
        self.output.push_str("note bottom\n");
        self
    }

    /// Close the `note bottom` block.
    pub fn end_note(&mut self) -> &mut Self {
        self.output.push_str("end note\n");
        self
    }

    /// Add a raw line inside a note block (table markup).
    pub fn note_line(&mut self, line: &str) -> &mut Self {
        self.output.push_str(line);
        self.output.push('\n');
        self
    }

    /// Finish building and return the document.
    pub fn build(mut self) -> String {
        self.output.push_str("@enduml\n");
        self.output
    }
}

impl Default for PumlBuilder {
    fn default() -> Self {
        Self::new()
    }
}

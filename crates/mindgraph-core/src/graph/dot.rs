//! Graphviz DOT serialization of a [`GraphDescription`].

use std::fmt::Write;

use super::model::{AttrMap, GraphDescription};

const DOT_KEYWORDS: &[&str] = &["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Escape special characters for quoted DOT strings.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Quotes `id` unless it is a plain DOT identifier.
///
/// Sanitized ids may start with a digit, contain non-ASCII word characters, or collide with a
/// DOT keyword (`graph`, `node`, ...); all of those need quoting.
pub fn quote_id(id: &str) -> String {
    let plain = !id.is_empty()
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !id.starts_with(|c: char| c.is_ascii_digit())
        && !DOT_KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(id));
    if plain {
        id.to_string()
    } else {
        format!("\"{}\"", escape_label(id))
    }
}

fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// Small DOT writer; every attribute value is written quoted and escaped.
struct DotWriter {
    output: String,
    indent: usize,
}

impl DotWriter {
    fn new(name: &str, comment: Option<&str>) -> Self {
        let mut output = String::with_capacity(4096);
        for line in comment.into_iter().flat_map(str::lines) {
            let _ = writeln!(output, "// {line}");
        }
        let _ = writeln!(output, "digraph {} {{", quote_id(name));
        Self { output, indent: 1 }
    }

    fn write_attr_list<'a>(&mut self, attrs: impl IntoIterator<Item = (&'a str, &'a str)>) {
        self.output.push('[');
        for (i, (key, value)) in attrs.into_iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            let _ = write!(self.output, "{}=\"{}\"", key, escape_label(value));
        }
        self.output.push(']');
    }

    fn defaults(&mut self, kind: &str, attrs: &AttrMap) -> &mut Self {
        if attrs.is_empty() {
            return self;
        }
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{kind} ");
        self.write_attr_list(attrs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        self.output.push_str(";\n");
        self
    }

    fn node(&mut self, id: &str, label: &str, attrs: &AttrMap) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{} ", quote_id(id));
        self.write_attr_list(
            std::iter::once(("label", label))
                .chain(attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
        );
        self.output.push_str(";\n");
        self
    }

    fn edge(&mut self, from: &str, to: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{} -> {};", quote_id(from), quote_id(to));
        self
    }

    fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }
}

impl GraphDescription {
    /// Serializes the graph as Graphviz DOT source.
    ///
    /// Layout: an optional `//` comment, default attribute statements, then nodes, then edges
    /// (each in source order), then the caption if any. Sections are separated by one blank line.
    pub fn to_dot(&self) -> String {
        let mut w = DotWriter::new(&self.name, self.comment.as_deref());
        w.defaults("graph", &self.graph_attrs)
            .defaults("node", &self.node_defaults)
            .defaults("edge", &self.edge_defaults);

        if !self.nodes.is_empty() {
            w.blank();
            for node in &self.nodes {
                w.node(&node.id, &node.label, &node.attrs);
            }
        }

        if !self.edges.is_empty() {
            w.blank();
            for edge in &self.edges {
                w.edge(&edge.from, &edge.to);
            }
        }

        if let Some(caption) = &self.caption {
            let font_size = caption.font_size.to_string();
            let mut attrs = AttrMap::new();
            attrs.insert("label".to_string(), caption.text.clone());
            attrs.insert("fontsize".to_string(), font_size);
            attrs.insert("fontcolor".to_string(), caption.font_color.clone());
            attrs.insert("labelloc".to_string(), caption.label_loc.clone());
            attrs.insert("labeljust".to_string(), caption.label_just.clone());
            w.blank().defaults("graph", &attrs);
        }

        w.build()
    }
}

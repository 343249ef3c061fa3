use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::GraphOptions;

/// Ordered attribute map (`key -> value`), emitted in insertion order.
pub type AttrMap = IndexMap<String, String>;

pub const GRAPH_NAME: &str = "MindMap";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub depth: usize,
    /// Per-node overrides of the node defaults (e.g. a highlight `fillcolor`).
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: AttrMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
}

/// Graph-level caption (used for the watermark).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caption {
    pub text: String,
    pub font_size: u32,
    pub font_color: String,
    /// Graphviz `labelloc`: `b`ottom or `t`op.
    pub label_loc: String,
    /// Graphviz `labeljust`: `l`eft or `r`ight.
    pub label_just: String,
}

impl Caption {
    /// Small, low-contrast caption in the bottom-right corner.
    pub fn watermark(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 10,
            font_color: "#CCCCCC".to_string(),
            label_loc: "b".to_string(),
            label_just: "r".to_string(),
        }
    }
}

/// Renderer-agnostic description of a mind map graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphDescription {
    pub name: String,
    /// Free-form comment written above the DOT graph statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub graph_attrs: AttrMap,
    pub node_defaults: AttrMap,
    pub edge_defaults: AttrMap,
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<Caption>,
}

fn attrs<const N: usize>(pairs: [(&str, String); N]) -> AttrMap {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}

/// Formats a float the way Graphviz attribute strings usually carry them (`1.0`, `1.5`).
fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

impl GraphDescription {
    /// An empty graph carrying the uniform style derived from `options`.
    pub fn styled(options: &GraphOptions) -> Self {
        let node = &options.node;
        let edge = &options.edge;
        Self {
            name: GRAPH_NAME.to_string(),
            comment: None,
            graph_attrs: attrs([
                ("bgcolor", options.background_color.clone()),
                ("rankdir", options.orientation.as_str().to_string()),
                ("splines", "ortho".to_string()),
                ("layout", options.engine.as_str().to_string()),
            ]),
            node_defaults: attrs([
                ("shape", node.shape.as_str().to_string()),
                ("style", "rounded,filled".to_string()),
                ("fillcolor", node.fill_color.clone()),
                ("color", node.border_color.clone()),
                ("penwidth", node.border_width.to_string()),
                ("fontname", node.font.clone()),
                ("fontsize", node.font_size.to_string()),
                ("fontcolor", node.font_color.clone()),
            ]),
            edge_defaults: attrs([
                ("color", edge.color.clone()),
                ("style", edge.style.as_str().to_string()),
                ("arrowsize", format_float(edge.arrow_size)),
                ("fontname", node.font.clone()),
                ("fontsize", edge.font_size.to_string()),
                ("fontcolor", edge.font_color.clone()),
            ]),
            nodes: Vec::new(),
            edges: Vec::new(),
            caption: None,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_by_label(&self, label: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.label == label)
    }

    pub fn parent_of(&self, id: &str) -> Option<&str> {
        self.edges
            .iter()
            .find(|e| e.to == id)
            .map(|e| e.from.as_str())
    }

    pub fn children_of<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.edges
            .iter()
            .filter(move |e| e.from == id)
            .map(|e| e.to.as_str())
    }

    /// Nodes without an incoming edge, in source order.
    pub fn roots(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes
            .iter()
            .filter(|n| !self.edges.iter().any(|e| e.to == n.id))
    }

    /// Node labels in emission order.
    pub fn labels(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.label.as_str()).collect()
    }
}

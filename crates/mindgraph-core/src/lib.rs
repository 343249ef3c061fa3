#![forbid(unsafe_code)]

//! Outline parser + mind map graph builder (headless).
//!
//! Turns an indented dash outline (typically produced by a text-generation model) into a
//! renderer-agnostic graph description:
//!
//! ```
//! use mindgraph_core::{GraphOptions, build_graph};
//!
//! let (graph, count) = build_graph("- Root\n  - Child1\n  - Child2", &GraphOptions::default());
//! assert_eq!(count, 3);
//! assert_eq!(graph.children_of("root").collect::<Vec<_>>(), ["child1", "child2"]);
//! assert!(graph.to_dot().starts_with("digraph MindMap {"));
//! ```
//!
//! Design goals:
//! - permissive parsing: malformed lines are skipped, building never fails
//! - deterministic output: same input and options give the same graph
//! - no I/O and no global state; options are a single immutable value

pub mod config;
pub mod error;
pub mod graph;
pub mod id;
pub mod outline;
pub mod prompt;

pub use config::{
    EdgeStyle, GraphOptions, Highlight, LayoutEngine, LineStyle, NodeShape, NodeStyle,
    Orientation, Watermark,
};
pub use error::{Error, Result};
pub use graph::{Caption, GraphDescription, GraphEdge, GraphNode, build_graph};
pub use id::{IdRegistry, generate_id, sanitize_id};
pub use outline::{OutlineItem, extract_labels};
pub use prompt::{render_prompt, render_prompt_with};

#[cfg(test)]
mod tests;

mod build;
mod dot;
mod model;

pub use build::build_graph;
pub use dot::{escape_label, quote_id};
pub use model::{AttrMap, Caption, GRAPH_NAME, GraphDescription, GraphEdge, GraphNode};

use crate::config::GraphOptions;
use crate::id::IdRegistry;
use crate::outline::{self, OutlineItem};

use super::model::{AttrMap, Caption, GraphDescription, GraphEdge, GraphNode};

/// Builds a mind map graph from an indented dash outline.
///
/// Returns the graph and the number of nodes emitted after depth filtering and leaf hiding. This
/// never fails: lines that are not list items are skipped.
pub fn build_graph(outline_text: &str, options: &GraphOptions) -> (GraphDescription, usize) {
    let mut graph = GraphDescription::styled(options);
    graph.comment = options.graph_comment();

    let items: Vec<OutlineItem<'_>> = outline::items(outline_text)
        .filter(|item| {
            let keep = item.depth < options.max_depth;
            if !keep {
                tracing::trace!(
                    line = item.line,
                    depth = item.depth,
                    max_depth = options.max_depth,
                    "dropping item below depth limit"
                );
            }
            keep
        })
        .collect();

    let custom_root = options.custom_root_label();
    let highlight = options.highlight_term().map(str::to_lowercase);

    let mut ids = IdRegistry::new();
    let mut parent_stack: Vec<(usize, String)> = Vec::new();
    let mut hidden = 0usize;

    for (idx, item) in items.iter().enumerate() {
        if options.hide_leaf_nodes && is_leaf(&items, idx) {
            hidden += 1;
            continue;
        }

        let label = match custom_root {
            Some(root) if item.depth == 0 => root,
            _ => item.label,
        };
        let id = ids.register(label);

        let mut attrs = AttrMap::new();
        if highlight
            .as_deref()
            .is_some_and(|term| label.to_lowercase().contains(term))
        {
            attrs.insert("fillcolor".to_string(), options.highlight.fill_color.clone());
        }

        graph.nodes.push(GraphNode {
            id: id.clone(),
            label: label.to_string(),
            depth: item.depth,
            attrs,
        });

        while parent_stack
            .last()
            .is_some_and(|(depth, _)| *depth >= item.depth)
        {
            parent_stack.pop();
        }
        if let Some((_, parent)) = parent_stack.last() {
            graph.edges.push(GraphEdge {
                from: parent.clone(),
                to: id.clone(),
            });
        }
        parent_stack.push((item.depth, id));
    }

    if let Some(text) = options.watermark_text() {
        graph.caption = Some(Caption::watermark(text));
    }

    let node_count = graph.nodes.len();
    tracing::debug!(
        items = items.len(),
        nodes = node_count,
        edges = graph.edges.len(),
        hidden,
        "built mind map graph"
    );
    (graph, node_count)
}

/// An item is a leaf when the next surviving item is missing or not deeper than it.
///
/// `items` has already been depth-filtered and excludes blank and non-list lines, so trailing
/// blank lines never change the outcome.
fn is_leaf(items: &[OutlineItem<'_>], idx: usize) -> bool {
    let depth = items[idx].depth;
    items.get(idx + 1).is_none_or(|next| next.depth <= depth)
}

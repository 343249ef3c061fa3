use crate::*;
use rustc_hash::FxHashSet;
use serde_json::json;

const DATA_STRUCTURES: &str = "\
- Data Structures
  - Linear
    - Array
    - Linked List
    - Stack
    - Queue
  - Non-Linear
    - Tree
      - Binary Tree
      - B-Tree
    - Graph
";

fn build(text: &str) -> (GraphDescription, usize) {
    build_graph(text, &GraphOptions::default())
}

fn edge_pairs(graph: &GraphDescription) -> Vec<(&str, &str)> {
    graph
        .edges
        .iter()
        .map(|e| (e.from.as_str(), e.to.as_str()))
        .collect()
}

#[test]
fn root_with_two_children() {
    let (graph, count) = build("- Root\n  - Child1\n  - Child2");
    assert_eq!(count, 3);
    assert_eq!(graph.labels(), ["Root", "Child1", "Child2"]);
    assert_eq!(edge_pairs(&graph), [("root", "child1"), ("root", "child2")]);
    assert_eq!(graph.parent_of("child1"), Some("root"));
    assert_eq!(graph.parent_of("child2"), Some("root"));
    assert_eq!(graph.parent_of("root"), None);
}

#[test]
fn max_depth_drops_deeper_items() {
    let options = GraphOptions::default().with_max_depth(2);
    let (graph, count) = build_graph("- Root\n  - Child\n    - Grandchild", &options);
    assert_eq!(count, 2);
    assert_eq!(graph.labels(), ["Root", "Child"]);
    assert_eq!(edge_pairs(&graph), [("root", "child")]);
}

#[test]
fn colliding_sanitized_ids_get_suffixes() {
    let (graph, _) = build("- A!B\n- A@B");
    let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["a_b", "a_b_1"]);
    assert_eq!(graph.labels(), ["A!B", "A@B"]);
}

#[test]
fn empty_and_blank_inputs_give_empty_graph() {
    for text in ["", "   ", "\n\n  \n", "no list items here\njust prose"] {
        let (graph, count) = build(text);
        assert_eq!(count, 0, "input {text:?}");
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}

#[test]
fn hide_leaf_nodes_keeps_only_inner_nodes() {
    let options = GraphOptions::default().with_hide_leaf_nodes(true);
    let (graph, count) = build_graph("- Root\n  - Child1\n  - Child2", &options);
    assert_eq!(count, 1);
    assert_eq!(graph.labels(), ["Root"]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn hide_leaf_nodes_on_nested_outline() {
    let options = GraphOptions::default().with_hide_leaf_nodes(true);
    let (graph, _) = build_graph(DATA_STRUCTURES, &options);
    assert_eq!(graph.labels(), ["Data Structures", "Linear", "Non-Linear", "Tree"]);
    assert_eq!(
        edge_pairs(&graph),
        [
            ("data_structures", "linear"),
            ("data_structures", "non_linear"),
            ("non_linear", "tree"),
        ]
    );
}

#[test]
fn hide_leaf_nodes_treats_trailing_item_as_leaf() {
    let options = GraphOptions::default().with_hide_leaf_nodes(true);
    // The last item is a leaf whether or not blank lines follow it.
    for text in [
        "- Root\n  - Branch\n    - Tip",
        "- Root\n  - Branch\n    - Tip\n",
        "- Root\n  - Branch\n    - Tip\n\n   \n",
    ] {
        let (graph, _) = build_graph(text, &options);
        assert_eq!(graph.labels(), ["Root", "Branch"], "input {text:?}");
    }

    // A lone root has nothing below it, so it is hidden too.
    let (graph, count) = build_graph("- Root", &options);
    assert_eq!(count, 0);
    assert!(graph.is_empty());
}

#[test]
fn hide_leaf_nodes_looks_past_blank_and_prose_lines() {
    let options = GraphOptions::default().with_hide_leaf_nodes(true);
    let text = "- Root\n\n  some prose\n  - Branch\n\n    - Tip";
    let (graph, _) = build_graph(text, &options);
    assert_eq!(graph.labels(), ["Root", "Branch"]);
    assert_eq!(edge_pairs(&graph), [("root", "branch")]);
}

#[test]
fn hide_leaf_nodes_ignores_children_below_depth_limit() {
    let options = GraphOptions::default()
        .with_hide_leaf_nodes(true)
        .with_max_depth(2);
    // `Child` only has children past the depth limit, so it is a leaf of the emitted graph.
    let (graph, _) = build_graph("- Root\n  - Child\n    - Grandchild", &options);
    assert_eq!(graph.labels(), ["Root"]);
}

#[test]
fn hidden_leaves_do_not_reserve_ids() {
    let options = GraphOptions::default().with_hide_leaf_nodes(true);
    let (graph, _) = build_graph("- Topic\n  - Topic\n  - Topic\n    - Detail", &options);
    let ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, ["topic", "topic_1"]);
}

#[test]
fn custom_root_replaces_depth_zero_label() {
    let options = GraphOptions::default().with_custom_root("My Topic");
    let (graph, _) = build_graph("- Original\n  - Child", &options);
    assert_eq!(graph.labels(), ["My Topic", "Child"]);
    assert_eq!(edge_pairs(&graph), [("my_topic", "child")]);
    assert!(graph.node_by_label("Original").is_none());
    assert_eq!(graph.node_by_label("My Topic").map(|n| n.depth), Some(0));
}

#[test]
fn empty_custom_root_is_ignored() {
    let options = GraphOptions::default().with_custom_root("");
    let (graph, _) = build_graph("- Original\n  - Child", &options);
    assert_eq!(graph.labels(), ["Original", "Child"]);
}

#[test]
fn highlight_overrides_fill_color_case_insensitively() {
    let options = GraphOptions::default().with_highlight("LIST");
    let (graph, _) = build_graph(DATA_STRUCTURES, &options);

    let highlighted: Vec<_> = graph
        .nodes
        .iter()
        .filter(|n| n.attrs.get("fillcolor").map(String::as_str) == Some("#FFD700"))
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(highlighted, ["Linked List"]);

    let others = graph.nodes.iter().filter(|n| n.label != "Linked List");
    for node in others {
        assert!(node.attrs.is_empty(), "{} should not be highlighted", node.label);
    }
}

#[test]
fn empty_highlight_term_matches_nothing() {
    let options = GraphOptions::default().with_highlight("");
    let (graph, _) = build_graph(DATA_STRUCTURES, &options);
    assert!(graph.nodes.iter().all(|n| n.attrs.is_empty()));
}

#[test]
fn siblings_after_deep_branch_attach_to_nearest_shallower_ancestor() {
    let (graph, _) = build(DATA_STRUCTURES);
    assert_eq!(graph.parent_of("non_linear"), Some("data_structures"));
    assert_eq!(graph.parent_of("graph"), Some("non_linear"));
    assert_eq!(
        graph.children_of("tree").collect::<Vec<_>>(),
        ["binary_tree", "b_tree"]
    );
}

#[test]
fn odd_indentation_rounds_down() {
    // Three spaces is still depth 1; five is depth 2.
    let (graph, _) = build("- Root\n   - Child\n     - Grandchild");
    let depths: Vec<_> = graph.nodes.iter().map(|n| n.depth).collect();
    assert_eq!(depths, [0, 1, 2]);
    assert_eq!(edge_pairs(&graph), [("root", "child"), ("child", "grandchild")]);
}

#[test]
fn depth_jump_attaches_to_last_shallower_node() {
    let (graph, _) = build("- Root\n      - Deep\n  - Shallow");
    assert_eq!(graph.nodes[1].depth, 3);
    assert_eq!(edge_pairs(&graph), [("root", "deep"), ("root", "shallow")]);
}

#[test]
fn leading_indented_item_has_no_parent() {
    let (graph, count) = build("  - Orphan\n- Root\n  - Child");
    assert_eq!(count, 3);
    assert_eq!(edge_pairs(&graph), [("root", "child")]);
    let roots: Vec<_> = graph.roots().map(|n| n.label.as_str()).collect();
    assert_eq!(roots, ["Orphan", "Root"]);
}

#[test]
fn ids_are_unique_and_edges_match_roots() {
    let text = "- A\n  - A\n    - A\n  - a\n- A\n  - B\n  - b\n    - ???\n    - !!!";
    let (graph, count) = build(text);
    assert_eq!(count, 9);

    let ids: FxHashSet<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids.len(), graph.node_count());

    let depth_zero = graph.nodes.iter().filter(|n| n.depth == 0).count();
    assert_eq!(graph.edge_count(), graph.node_count() - depth_zero);

    // Symbol-only labels collapse to a bare underscore; the suffix is appended as `_1`.
    assert_eq!(graph.node("_").map(|n| n.label.as_str()), Some("???"));
    assert_eq!(graph.node("__1").map(|n| n.label.as_str()), Some("!!!"));
    assert!(graph.node("_1").is_none());
}

#[test]
fn no_node_reaches_max_depth() {
    for max_depth in 1..=4 {
        let options = GraphOptions::default().with_max_depth(max_depth);
        let (graph, _) = build_graph(DATA_STRUCTURES, &options);
        assert!(graph.nodes.iter().all(|n| n.depth < max_depth));
    }
}

#[test]
fn building_twice_gives_identical_graphs() {
    let options = GraphOptions::default().with_highlight("tree");
    let first = build_graph(DATA_STRUCTURES, &options);
    let second = build_graph(DATA_STRUCTURES, &options);
    assert_eq!(first, second);
}

#[test]
fn watermark_requires_toggle_and_text() {
    let (graph, _) = build_graph("- Root", &GraphOptions::default());
    assert!(graph.caption.is_none());

    let (graph, _) = build_graph("- Root", &GraphOptions::default().with_watermark(""));
    assert!(graph.caption.is_none());

    let (graph, _) = build_graph("- Root", &GraphOptions::default().with_watermark("Draft"));
    assert_eq!(graph.caption, Some(Caption::watermark("Draft")));
}

#[test]
fn topic_becomes_graph_comment() {
    let (graph, _) = build_graph("- Root", &GraphOptions::default());
    assert_eq!(graph.comment, None);

    let (graph, _) = build_graph("- Root", &GraphOptions::default().with_topic("   "));
    assert_eq!(graph.comment, None);

    let (graph, _) = build_graph("- Root", &GraphOptions::default().with_topic("Graph Theory"));
    assert_eq!(graph.comment.as_deref(), Some("Mind Map for Graph Theory"));

    let value = serde_json::to_value(&graph).unwrap();
    assert_eq!(value["comment"], json!("Mind Map for Graph Theory"));
}

#[test]
fn style_options_become_default_attributes() {
    let mut options = GraphOptions::default()
        .with_orientation(Orientation::TopBottom)
        .with_engine(LayoutEngine::Neato);
    options.node.shape = NodeShape::Ellipse;
    options.edge.style = LineStyle::Dashed;
    options.edge.arrow_size = 1.5;
    options.background_color = "#222222".to_string();

    let (graph, _) = build_graph("- Root", &options);
    assert_eq!(graph.graph_attrs["rankdir"], "TB");
    assert_eq!(graph.graph_attrs["layout"], "neato");
    assert_eq!(graph.graph_attrs["bgcolor"], "#222222");
    assert_eq!(graph.node_defaults["shape"], "ellipse");
    assert_eq!(graph.node_defaults["style"], "rounded,filled");
    assert_eq!(graph.edge_defaults["style"], "dashed");
    assert_eq!(graph.edge_defaults["arrowsize"], "1.5");
}

#[test]
fn graph_serializes_to_json() {
    let options = GraphOptions::default().with_highlight("child");
    let (graph, _) = build_graph("- Root\n  - Child", &options);
    let value = serde_json::to_value(&graph).unwrap();

    assert_eq!(
        value["nodes"],
        json!([
            { "id": "root", "label": "Root", "depth": 0 },
            { "id": "child", "label": "Child", "depth": 1, "attrs": { "fillcolor": "#FFD700" } }
        ])
    );
    assert_eq!(value["edges"], json!([{ "from": "root", "to": "child" }]));
    assert!(value.get("caption").is_none());

    let back: GraphDescription = serde_json::from_value(value).unwrap();
    assert_eq!(back, graph);
}

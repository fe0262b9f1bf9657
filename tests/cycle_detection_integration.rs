use taxis::error::GraphError;
use taxis::graph::ops::{is_cyclic, topological_order};
use taxis::graph::Graph;

fn graph_from(vertices: &[&str], edges: &[(&str, &str)]) -> Graph<()> {
    let mut graph = Graph::new();
    for key in vertices {
        graph.register_vertex(*key, ()).expect("register vertex");
    }
    for (source, dest) in edges {
        graph.add_edge(source, dest).expect("add edge");
    }
    graph
}

#[test]
fn cyclic_graph_fails_to_sort() {
    let graph = graph_from(
        &["one", "cycle", "three"],
        &[
            ("cycle", "one"),
            ("cycle", "three"),
            ("three", "cycle"),
            ("three", "one"),
        ],
    );

    let err = topological_order(&graph).expect_err("expected cycle");
    match err {
        GraphError::CycleDetected { from, to } => {
            assert_eq!(from.as_str(), "three");
            assert_eq!(to.as_str(), "cycle");
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn cycle_error_names_the_closing_edge() {
    let graph = graph_from(&["a", "b"], &[("a", "b"), ("b", "a")]);
    let err = topological_order(&graph).expect_err("expected cycle");
    assert_eq!(
        err.to_string(),
        "cycle detected in dependency graph: edge from 'b' closes back to 'a'"
    );
}

#[test]
fn self_loop_is_reported_as_a_cycle() {
    let graph = graph_from(&["solo"], &[("solo", "solo")]);
    let err = topological_order(&graph).expect_err("expected cycle");
    match err {
        GraphError::CycleDetected { from, to } => {
            assert_eq!(from, to);
            assert_eq!(from.as_str(), "solo");
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn cycle_beyond_a_clean_prefix_still_aborts_the_whole_sort() {
    // "one" and "two" sort fine on their own; the later cycle must still
    // surface as an error for the whole graph.
    let graph = graph_from(
        &["one", "two", "loop-a", "loop-b"],
        &[
            ("two", "one"),
            ("loop-a", "loop-b"),
            ("loop-b", "loop-a"),
        ],
    );
    assert!(topological_order(&graph).is_err());
}

#[test]
fn graph_is_still_usable_after_a_failed_sort() {
    let mut graph = graph_from(&["a", "b"], &[("a", "b"), ("b", "a")]);
    assert!(topological_order(&graph).is_err());

    graph.register_vertex("c", ()).expect("register c");
    assert_eq!(graph.len(), 3);
    assert!(topological_order(&graph).is_err());
}

#[test]
fn diamond_reconvergence_is_not_a_cycle() {
    // both "left" and "right" reach "base"; revisiting a finished vertex
    // must not be mistaken for a back-edge
    let graph = graph_from(
        &["top", "left", "right", "base"],
        &[
            ("top", "left"),
            ("top", "right"),
            ("left", "base"),
            ("right", "base"),
        ],
    );
    assert!(topological_order(&graph).is_ok());
    assert!(!is_cyclic(&graph));
}

#[test]
fn is_cyclic_flags_cyclic_graphs_only() {
    let acyclic = graph_from(&["app", "lib"], &[("app", "lib")]);
    assert!(!is_cyclic(&acyclic));

    let cyclic = graph_from(&["a", "b"], &[("a", "b"), ("b", "a")]);
    assert!(is_cyclic(&cyclic));
}

//! End-to-end scenarios exercising the public graph API.
//!
//! Each test builds a small graph through the capability contracts and checks
//! the documented results of the structural queries on it.

use adjgraph::{
    DirectedGraph, EdgeWeighted, GraphConfig, SimpleEdgeGraph, SimpleVertexGraph,
    SynchronizedGraph, UndirectedGraph, WeightedEdgeGraph,
};

fn graph_from<G>(graph: &mut G, vertices: &[&'static str], edges: &[(&'static str, &'static str)])
where
    G: SimpleVertexGraph<&'static str> + SimpleEdgeGraph<&'static str>,
{
    for &v in vertices {
        assert!(graph.insert_vertex(v));
    }
    for (tail, head) in edges {
        assert!(graph.insert_edge(tail, head));
    }
}

#[test]
fn test_undirected_path_of_three() {
    let mut graph: UndirectedGraph<&str> = UndirectedGraph::new();
    graph_from(&mut graph, &["A", "B", "C"], &[("A", "B"), ("B", "C")]);

    assert_eq!(graph.degree(&"B"), Some(2));
    assert_eq!(graph.degree(&"A"), Some(1));
    assert!(graph.exist_path(&"A", &"C"));
    assert!(!graph.is_cyclic());
    assert_eq!(
        graph.adjacency_matrix(),
        vec![vec![0, 1, 0], vec![1, 0, 1], vec![0, 1, 0]]
    );
}

#[test]
fn test_directed_triangle_is_cyclic() {
    let mut graph: DirectedGraph<&str> = DirectedGraph::new();
    graph_from(
        &mut graph,
        &["A", "B", "C"],
        &[("A", "B"), ("B", "C"), ("C", "A")],
    );

    assert!(graph.is_cyclic());
    assert_eq!(graph.degree(&"A"), Some(2));
    assert_eq!(graph.in_degree(&"A"), Some(1));
    assert_eq!(graph.out_degree(&"A"), Some(1));
}

#[test]
fn test_duplicate_vertex_rejected() {
    let mut graph: DirectedGraph<&str> = DirectedGraph::new();
    assert!(graph.insert_vertex("X"));
    assert!(!graph.insert_vertex("X"));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_empty_graph_euler_feasible() {
    let graph: UndirectedGraph<&str> = UndirectedGraph::new();
    assert!(graph.is_euler_feasible());
    assert!(graph.vertices().is_empty());
}

#[test]
fn test_isolated_vertex_cleanup() {
    let mut graph: UndirectedGraph<&str> = UndirectedGraph::new();
    graph_from(
        &mut graph,
        &["A", "B", "C", "D"],
        &[("A", "B"), ("B", "C"), ("C", "A")],
    );

    assert!(graph.exist_vertices_disconnected());
    assert_eq!(graph.disconnected_vertices(), vec!["D"]);

    let before = graph.vertex_count();
    graph.remove_disconnected_vertices();
    assert_eq!(graph.vertex_count(), before - 1);
    assert!(graph.is_euler_feasible());
}

#[test]
fn test_weighted_route_cost() {
    let mut graph: DirectedGraph<&str, EdgeWeighted<f64>> = DirectedGraph::new();
    for v in ["home", "depot", "store", "office"] {
        graph.insert_vertex(v);
    }
    graph.insert_edge(&"home", &"depot", 2.0);
    graph.insert_edge(&"depot", &"store", 3.5);
    graph.insert_edge(&"store", &"office", 1.0);
    graph.insert_edge(&"home", &"office", 10.0);

    let route = graph.shortest_path(&"home", &"office").unwrap();
    assert_eq!(route, vec!["home", "office"]);
    assert_eq!(adjgraph::path_cost(&graph, &route), Some(10.0));

    let long_way = ["home", "depot", "store", "office"];
    assert_eq!(adjgraph::path_cost(&graph, &long_way), Some(6.5));
    assert_eq!(graph.edge_weight(&"depot", &"store"), Some(3.5));
}

#[test]
fn test_configured_graph_behind_lock() {
    let config = GraphConfig::from_toml_str(
        r"
        [capacity]
        vertices = 16
        edges = 32

        [limits]
        max_vertices = 3
        max_walk_length = 8
        ",
    )
    .unwrap();

    let mut graph = SynchronizedGraph::new(UndirectedGraph::<&str>::with_config(&config));
    graph_from(&mut graph, &["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    assert!(!graph.insert_vertex("D"));

    assert!(graph.exist_path_with_length(&"A", &"C", 8));
    assert!(!graph.exist_path_with_length(&"A", &"C", 9));
    assert_eq!(graph.euler_trail().map(|trail| trail.len()), Some(3));
}

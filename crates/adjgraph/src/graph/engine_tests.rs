//! Tests for the graph engine core: counts, degree, adjacency and removal.

use crate::config::{GraphConfig, LimitsConfig};
use crate::error::Error;

use super::contracts::{SimpleEdgeGraph, SimpleVertexGraph};
use super::engine::{DirectedGraph, UndirectedGraph};

/// Directed: A → B, A → C, B → C, D isolated.
fn build_directed() -> DirectedGraph<char> {
    let mut graph: DirectedGraph<char> = DirectedGraph::new();
    for v in ['A', 'B', 'C', 'D'] {
        assert!(graph.insert_vertex(v));
    }
    assert!(graph.insert_edge(&'A', &'B'));
    assert!(graph.insert_edge(&'A', &'C'));
    assert!(graph.insert_edge(&'B', &'C'));
    graph
}

/// Undirected: A – B, B – C, D isolated.
fn build_undirected() -> UndirectedGraph<char> {
    let mut graph: UndirectedGraph<char> = UndirectedGraph::new();
    for v in ['A', 'B', 'C', 'D'] {
        assert!(graph.insert_vertex(v));
    }
    assert!(graph.insert_edge(&'A', &'B'));
    assert!(graph.insert_edge(&'B', &'C'));
    graph
}

#[test]
fn test_flags_follow_policies() {
    let directed = build_directed();
    let undirected = build_undirected();
    assert!(directed.is_directed());
    assert!(!undirected.is_directed());
    assert!(!directed.is_weighted_vertex());
    assert!(!directed.is_weighted_edge());
}

#[test]
fn test_counts_directed() {
    let graph = build_directed();
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.total_edge_count(), 3);
    assert_eq!(graph.edge_count(&'A'), Some(2));
    assert_eq!(graph.edge_count(&'C'), Some(0));
    assert_eq!(graph.edge_count(&'Z'), None);
}

#[test]
fn test_counts_undirected_mirror_links() {
    let graph = build_undirected();
    // Two connections, each owned by both endpoints.
    assert_eq!(graph.total_edge_count(), 4);
    assert_eq!(graph.edges.len(), 2);
    assert_eq!(graph.edge_count(&'B'), Some(2));
}

#[test]
fn test_vertices_in_insertion_order() {
    let graph = build_directed();
    assert_eq!(graph.vertices(), vec!['A', 'B', 'C', 'D']);
}

#[test]
fn test_degree_directed_is_in_plus_out() {
    let graph = build_directed();
    assert_eq!(graph.degree(&'A'), Some(2));
    assert_eq!(graph.degree(&'B'), Some(2));
    assert_eq!(graph.degree(&'C'), Some(2));
    assert_eq!(graph.in_degree(&'C'), Some(2));
    assert_eq!(graph.out_degree(&'C'), Some(0));
    assert_eq!(graph.degree(&'D'), Some(0));
    assert_eq!(graph.degree(&'Z'), None);
}

#[test]
fn test_degree_undirected_is_out_degree() {
    let graph = build_undirected();
    assert_eq!(graph.degree(&'A'), Some(1));
    assert_eq!(graph.degree(&'B'), Some(2));
    assert_eq!(graph.degree(&'D'), Some(0));
    assert_eq!(graph.degree(&'Z'), None);
}

#[test]
fn test_are_adjacent_directed_is_one_way() {
    let graph = build_directed();
    assert!(graph.are_adjacent(&'A', &'B'));
    assert!(!graph.are_adjacent(&'B', &'A'));
    assert!(graph.exist_edge(&'B', &'C'));
    assert!(!graph.are_adjacent(&'A', &'Z'));
}

#[test]
fn test_are_adjacent_undirected_is_symmetric() {
    let graph = build_undirected();
    assert!(graph.are_adjacent(&'A', &'B'));
    assert!(graph.are_adjacent(&'B', &'A'));
    assert!(!graph.are_adjacent(&'A', &'C'));
}

#[test]
fn test_adjacents_by_value() {
    let graph = build_directed();
    assert_eq!(graph.adjacents(&'A'), vec!['B', 'C']);
    assert!(graph.adjacents(&'C').is_empty());
    assert!(graph.adjacents(&'Z').is_empty());
}

#[test]
fn test_undirected_connection_shares_one_record() {
    let graph = build_undirected();
    let forward = graph.edge(&'A', &'B').unwrap();
    let backward = graph.edge(&'B', &'A').unwrap();
    assert_eq!(forward.id(), backward.id());
}

#[test]
fn test_try_insert_vertex_duplicate() {
    let mut graph: DirectedGraph<&str> = DirectedGraph::new();
    graph.try_insert_vertex_with("X", ()).unwrap();
    let err = graph.try_insert_vertex_with("X", ()).unwrap_err();
    assert!(matches!(err, Error::VertexExists(_)));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_try_insert_edge_errors() {
    let mut graph = build_directed();
    let missing = graph.try_insert_edge_with(&'A', &'Z', ()).unwrap_err();
    assert!(matches!(missing, Error::VertexNotFound(_)));

    let duplicate = graph.try_insert_edge_with(&'A', &'B', ()).unwrap_err();
    assert!(matches!(duplicate, Error::EdgeExists(_, _)));

    // Reverse direction is a distinct directed edge.
    assert!(graph.try_insert_edge_with(&'B', &'A', ()).is_ok());
}

#[test]
fn test_undirected_reverse_insert_is_duplicate() {
    let mut graph = build_undirected();
    assert!(!graph.insert_edge(&'B', &'A'));
    assert_eq!(graph.total_edge_count(), 4);
}

#[test]
fn test_undirected_self_loop_single_link() {
    let mut graph = build_undirected();
    assert!(graph.insert_edge(&'D', &'D'));
    assert_eq!(graph.edge_count(&'D'), Some(1));
    assert!(graph.are_adjacent(&'D', &'D'));
}

#[test]
fn test_vertex_limit() {
    let config = GraphConfig {
        limits: LimitsConfig {
            max_vertices: Some(2),
            ..LimitsConfig::default()
        },
        ..GraphConfig::default()
    };
    let mut graph: DirectedGraph<u32> = DirectedGraph::with_config(&config);
    assert!(graph.insert_vertex(1));
    assert!(graph.insert_vertex(2));
    assert!(!graph.insert_vertex(3));

    let err = graph.try_insert_vertex_with(3, ()).unwrap_err();
    assert!(matches!(err, Error::VertexLimit(2)));
}

#[test]
fn test_remove_vertex_drops_referencing_edges() {
    let mut graph = build_directed();
    assert_eq!(graph.remove_vertex(&'C'), Some('C'));
    assert!(!graph.exist_vertex(&'C'));
    assert_eq!(graph.total_edge_count(), 1);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.adjacents(&'A'), vec!['B']);
    assert_eq!(graph.remove_vertex(&'C'), None);
}

#[test]
fn test_remove_vertex_undirected_unlinks_neighbors() {
    let mut graph = build_undirected();
    assert_eq!(graph.remove_vertex(&'B'), Some('B'));
    assert_eq!(graph.total_edge_count(), 0);
    assert!(graph.edges.is_empty());
    assert_eq!(graph.degree(&'A'), Some(0));
}

#[test]
fn test_remove_vertex_keeps_enumeration_order() {
    let mut graph = build_directed();
    graph.remove_vertex(&'B');
    assert_eq!(graph.vertices(), vec!['A', 'C', 'D']);
}

#[test]
fn test_remove_edge_directed() {
    let mut graph = build_directed();
    assert!(!graph.remove_edge(&'B', &'A'));
    assert!(graph.remove_edge(&'A', &'B'));
    assert!(!graph.are_adjacent(&'A', &'B'));
    assert_eq!(graph.total_edge_count(), 2);
    assert!(!graph.remove_edge(&'A', &'Z'));
}

#[test]
fn test_remove_edge_undirected_both_sides() {
    let mut graph = build_undirected();
    assert!(graph.remove_edge(&'B', &'A'));
    assert!(!graph.are_adjacent(&'A', &'B'));
    assert!(!graph.are_adjacent(&'B', &'A'));
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.total_edge_count(), 2);
}

#[test]
fn test_try_remove_edge_errors() {
    let mut graph = build_directed();
    let missing = graph.try_remove_edge(&'A', &'Z').unwrap_err();
    assert!(matches!(missing, Error::VertexNotFound(_)));

    let absent = graph.try_remove_edge(&'C', &'A').unwrap_err();
    assert!(matches!(absent, Error::EdgeNotFound(_, _)));

    let record = graph.try_remove_edge(&'A', &'C').unwrap();
    assert_eq!(*graph.info_of(record.tail()), 'A');
    assert_eq!(*graph.info_of(record.head()), 'C');
}

#[test]
fn test_disconnected_vertices() {
    let mut graph = build_directed();
    assert!(graph.exist_vertices_disconnected());
    assert_eq!(graph.disconnected_vertices(), vec!['D']);

    assert_eq!(graph.remove_disconnected_vertices(), vec!['D']);
    assert_eq!(graph.vertex_count(), 3);
    assert!(!graph.exist_vertices_disconnected());
    assert!(graph.remove_disconnected_vertices().is_empty());
}

#[test]
fn test_sink_is_not_disconnected_in_directed_graph() {
    let graph = build_directed();
    // C has no outgoing edges but two incoming ones.
    assert!(!graph.disconnected_vertices().contains(&'C'));
}

#[test]
fn test_clean_graph() {
    let mut graph = build_undirected();
    graph.clean_graph();
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.total_edge_count(), 0);
    assert!(graph.vertices().is_empty());
    // Cleaned graphs accept the same values again.
    assert!(graph.insert_vertex('A'));
}

#[test]
fn test_vertex_with_most_adjacents() {
    let graph = build_directed();
    assert_eq!(graph.vertex_with_most_adjacents(), Some(&'A'));

    let undirected = build_undirected();
    assert_eq!(undirected.vertex_with_most_adjacents(), Some(&'B'));

    let empty: DirectedGraph<char> = DirectedGraph::new();
    assert_eq!(empty.vertex_with_most_adjacents(), None);
}

#[test]
fn test_clone_is_independent() {
    let graph = build_directed();
    let mut copy = graph.clone();
    copy.remove_vertex(&'A');
    assert!(graph.exist_vertex(&'A'));
    assert!(!copy.exist_vertex(&'A'));
}

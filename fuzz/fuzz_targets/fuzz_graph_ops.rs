//! Fuzz target for graph mutation and query sequences.
//!
//! Drives a directed and an undirected graph through arbitrary operation
//! sequences to find:
//! - Panics from broken vertex/edge links after removals
//! - Divergence between the link view and the edge table
//! - Non-terminating traversals
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_graph_ops
//! ```

#![no_main]

use adjgraph::{Direction, Graph, SimpleEdgeGraph, SimpleVertexGraph, Unweighted};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    InsertVertex(u8),
    InsertEdge(u8, u8),
    RemoveVertex(u8),
    RemoveEdge(u8, u8),
    Cascade(u8),
    RemoveDisconnected,
    WalkLength(u8, u8, u8),
    SearchPath(u8, u8),
    EulerTrail,
}

fn run<D: Direction>(graph: &mut Graph<u8, D, Unweighted>, ops: &[Op]) {
    for op in ops {
        match *op {
            Op::InsertVertex(v) => {
                graph.insert_vertex(v);
            }
            Op::InsertEdge(a, b) => {
                graph.insert_edge(&a, &b);
            }
            Op::RemoveVertex(v) => {
                graph.remove_vertex(&v);
            }
            Op::RemoveEdge(a, b) => {
                graph.remove_edge(&a, &b);
            }
            Op::Cascade(v) => {
                graph.remove_vertex_cascade(&v);
            }
            Op::RemoveDisconnected => {
                graph.remove_disconnected_vertices();
            }
            Op::WalkLength(a, b, len) => {
                let _ = graph.exist_path_with_length(&a, &b, usize::from(len));
            }
            Op::SearchPath(a, b) => {
                let found = graph.search_path::<i32>(&a, &b);
                if let Some(shortest) = graph.shortest_path(&a, &b) {
                    assert!(found.is_found());
                    assert!(shortest.len() <= found.path.len());
                }
            }
            Op::EulerTrail => {
                let _ = graph.euler_trail();
                let _ = graph.is_cyclic();
            }
        }

        let degrees: usize = graph
            .vertices()
            .iter()
            .filter_map(|v| graph.edge_count(v))
            .sum();
        assert_eq!(degrees, graph.total_edge_count());
        assert_eq!(graph.adjacency_matrix().len(), graph.vertex_count());
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut directed: Graph<u8> = Graph::new();
    run(&mut directed, &ops);

    let mut undirected: Graph<u8, adjgraph::Undirected> = Graph::new();
    run(&mut undirected, &ops);
});

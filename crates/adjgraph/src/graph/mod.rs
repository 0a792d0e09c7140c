//! In-memory graph model and algorithms.
//!
//! One [`Graph`] type covers every variant: the direction policy
//! ([`Directed`]/[`Undirected`]) and the weighting policy ([`Unweighted`],
//! [`VertexWeighted`], [`EdgeWeighted`], [`FullyWeighted`]) are independent
//! type parameters. The algorithms are written once against the vertex/edge
//! model; only insertion and weight lookup depend on the weighting policy
//! (see [`contracts`]).
//!
//! # Example
//!
//! ```rust
//! use adjgraph::graph::{DirectedGraph, SimpleEdgeGraph, SimpleVertexGraph};
//!
//! let mut graph: DirectedGraph<char> = DirectedGraph::new();
//! for v in ['A', 'B', 'C'] {
//!     graph.insert_vertex(v);
//! }
//! graph.insert_edge(&'A', &'B');
//! graph.insert_edge(&'B', &'C');
//! graph.insert_edge(&'C', &'A');
//!
//! assert!(graph.is_cyclic());
//! assert_eq!(graph.degree(&'A'), Some(2));
//! ```

mod collection;
pub mod contracts;
mod engine;
mod euler;
mod matrix;
pub mod policy;
mod traversal;
mod types;

#[cfg(test)]
mod engine_tests;

pub use collection::Values;
pub use contracts::{
    path_cost, SimpleEdgeGraph, SimpleVertexGraph, WeightedEdgeGraph, WeightedVertexGraph,
};
pub use engine::{DirectedGraph, Graph, UndirectedGraph};
pub use policy::{
    Directed, Direction, EdgeWeighted, FullyWeighted, Undirected, Unweighted, VertexWeighted,
    Weighting,
};
pub use traversal::PathSearch;
pub use types::{Edge, EdgeId, EdgeLink, Vertex, VertexId, VertexValue};

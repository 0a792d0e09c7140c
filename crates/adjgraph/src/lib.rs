//! # adjgraph
//!
//! In-memory graph abstract data type with directed or undirected topology,
//! optional weights on vertices and/or edges, and a family of structural
//! queries and traversal algorithms.
//!
//! ## Features
//!
//! - **One graph type, two axes**: direction ([`Directed`], [`Undirected`])
//!   and weighting ([`Unweighted`], [`VertexWeighted`], [`EdgeWeighted`],
//!   [`FullyWeighted`]) are independent type parameters
//! - **Structural queries**: adjacency, degree, disconnected vertices,
//!   cascade removal
//! - **Traversals**: reachability, exact-length walks, DFS path search,
//!   BFS shortest path, cycle detection, Euler feasibility and trails
//! - **Matrix export**: adjacency (V×V) and incidence (V×E)
//! - **Synchronization**: [`SynchronizedGraph`] serializes every operation
//!   behind one mutex
//!
//! ## Quick Start
//!
//! ```rust
//! use adjgraph::{ArithmeticNumber, SimpleEdgeGraph, SimpleVertexGraph, UndirectedGraph};
//!
//! let mut graph: UndirectedGraph<&str> = UndirectedGraph::new();
//! for v in ["A", "B", "C"] {
//!     graph.insert_vertex(v);
//! }
//! graph.insert_edge(&"A", &"B");
//! graph.insert_edge(&"B", &"C");
//!
//! assert_eq!(graph.adjacency_matrix(), vec![
//!     vec![0, 1, 0],
//!     vec![1, 0, 1],
//!     vec![0, 1, 0],
//! ]);
//!
//! let found = graph.search_path::<i32>(&"A", &"C");
//! assert_eq!(found.distance, 2);
//! assert_eq!(found.path, vec!["A", "B", "C"]);
//! assert!(!graph.search_path::<i32>(&"A", &"Z").distance.is_found());
//! ```

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]
#![cfg_attr(test, allow(clippy::doc_markdown, clippy::uninlined_format_args))]

pub mod config;
#[cfg(test)]
mod config_tests;
pub mod error;
pub mod graph;
pub mod numeric;
#[cfg(test)]
mod numeric_tests;
pub mod sync;

pub use config::{CapacityConfig, ConfigError, GraphConfig, LimitsConfig};
pub use error::{Error, Result};
pub use graph::{
    path_cost, Directed, DirectedGraph, Direction, Edge, EdgeId, EdgeWeighted, FullyWeighted,
    Graph, PathSearch, SimpleEdgeGraph, SimpleVertexGraph, Undirected, UndirectedGraph,
    Unweighted, Vertex, VertexId, VertexValue, VertexWeighted, WeightedEdgeGraph,
    WeightedVertexGraph, Weighting,
};
pub use numeric::ArithmeticNumber;
pub use sync::SynchronizedGraph;

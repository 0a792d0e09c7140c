//! Insertion and weight-lookup capability contracts.
//!
//! Each weighting policy exposes exactly one vertex contract and one edge
//! contract, so `insert_vertex`/`insert_edge` never resolve ambiguously:
//!
//! | policy                | vertices               | edges                |
//! |-----------------------|------------------------|----------------------|
//! | `Unweighted`          | [`SimpleVertexGraph`]  | [`SimpleEdgeGraph`]  |
//! | `VertexWeighted<K>`   | [`WeightedVertexGraph`]| [`SimpleEdgeGraph`]  |
//! | `EdgeWeighted<R>`     | [`SimpleVertexGraph`]  | [`WeightedEdgeGraph`]|
//! | `FullyWeighted<K, R>` | [`WeightedVertexGraph`]| [`WeightedEdgeGraph`]|
//!
//! All insertions return `false` on duplicates or missing endpoints.

use crate::numeric::ArithmeticNumber;

use super::engine::Graph;
use super::policy::{Direction, EdgeWeighted, FullyWeighted, Unweighted, VertexWeighted};
use super::types::VertexValue;

/// Graphs whose vertices carry no weight.
pub trait SimpleVertexGraph<T> {
    /// Inserts a vertex; returns `false` if the value already exists.
    fn insert_vertex(&mut self, info: T) -> bool;
}

/// Graphs whose vertices carry a `K` weight.
pub trait WeightedVertexGraph<T, K> {
    /// Inserts a weighted vertex; returns `false` if the value already exists.
    fn insert_vertex(&mut self, info: T, weight: K) -> bool;

    /// Returns the weight of `info`, or `None` if it is absent.
    fn vertex_weight(&self, info: &T) -> Option<K>;
}

/// Graphs whose edges carry no weight.
pub trait SimpleEdgeGraph<T> {
    /// Inserts tail→head; returns `false` if an endpoint is absent or the
    /// edge already exists.
    fn insert_edge(&mut self, tail: &T, head: &T) -> bool;
}

/// Graphs whose edges carry an `R` weight.
pub trait WeightedEdgeGraph<T, R> {
    /// Inserts a weighted tail→head edge; returns `false` if an endpoint is
    /// absent or the edge already exists.
    fn insert_edge(&mut self, tail: &T, head: &T, weight: R) -> bool;

    /// Returns the weight of tail→head, or `None` if there is no such edge.
    fn edge_weight(&self, tail: &T, head: &T) -> Option<R>;
}

// ── Vertex contracts ──────────────────────────────────────────────────

impl<T: VertexValue, D: Direction> SimpleVertexGraph<T> for Graph<T, D, Unweighted> {
    fn insert_vertex(&mut self, info: T) -> bool {
        self.insert_vertex_flag(info, ())
    }
}

impl<T: VertexValue, D: Direction, R: 'static> SimpleVertexGraph<T> for Graph<T, D, EdgeWeighted<R>> {
    fn insert_vertex(&mut self, info: T) -> bool {
        self.insert_vertex_flag(info, ())
    }
}

impl<T: VertexValue, D: Direction, K: Clone + 'static> WeightedVertexGraph<T, K>
    for Graph<T, D, VertexWeighted<K>>
{
    fn insert_vertex(&mut self, info: T, weight: K) -> bool {
        self.insert_vertex_flag(info, weight)
    }

    fn vertex_weight(&self, info: &T) -> Option<K> {
        self.vertex(info).map(|v| v.weight().clone())
    }
}

impl<T: VertexValue, D: Direction, K: Clone + 'static, R: 'static> WeightedVertexGraph<T, K>
    for Graph<T, D, FullyWeighted<K, R>>
{
    fn insert_vertex(&mut self, info: T, weight: K) -> bool {
        self.insert_vertex_flag(info, weight)
    }

    fn vertex_weight(&self, info: &T) -> Option<K> {
        self.vertex(info).map(|v| v.weight().clone())
    }
}

// ── Edge contracts ────────────────────────────────────────────────────

impl<T: VertexValue, D: Direction> SimpleEdgeGraph<T> for Graph<T, D, Unweighted> {
    fn insert_edge(&mut self, tail: &T, head: &T) -> bool {
        self.insert_edge_flag(tail, head, ())
    }
}

impl<T: VertexValue, D: Direction, K: 'static> SimpleEdgeGraph<T> for Graph<T, D, VertexWeighted<K>> {
    fn insert_edge(&mut self, tail: &T, head: &T) -> bool {
        self.insert_edge_flag(tail, head, ())
    }
}

impl<T: VertexValue, D: Direction, R: Clone + 'static> WeightedEdgeGraph<T, R>
    for Graph<T, D, EdgeWeighted<R>>
{
    fn insert_edge(&mut self, tail: &T, head: &T, weight: R) -> bool {
        self.insert_edge_flag(tail, head, weight)
    }

    fn edge_weight(&self, tail: &T, head: &T) -> Option<R> {
        self.edge(tail, head).map(|e| e.weight().clone())
    }
}

impl<T: VertexValue, D: Direction, K: 'static, R: Clone + 'static> WeightedEdgeGraph<T, R>
    for Graph<T, D, FullyWeighted<K, R>>
{
    fn insert_edge(&mut self, tail: &T, head: &T, weight: R) -> bool {
        self.insert_edge_flag(tail, head, weight)
    }

    fn edge_weight(&self, tail: &T, head: &T) -> Option<R> {
        self.edge(tail, head).map(|e| e.weight().clone())
    }
}

/// Sums edge weights along a path of vertex values.
///
/// Returns `None` if any consecutive pair is not connected by an edge or the
/// total does not fit in `R`. A path of fewer than two vertices costs zero.
///
/// # Example
///
/// ```rust
/// use adjgraph::{path_cost, DirectedGraph, EdgeWeighted, SimpleVertexGraph, WeightedEdgeGraph};
///
/// let mut graph: DirectedGraph<u32, EdgeWeighted<i64>> = DirectedGraph::new();
/// for v in 1..=3 {
///     graph.insert_vertex(v);
/// }
/// graph.insert_edge(&1, &2, 5);
/// graph.insert_edge(&2, &3, 7);
///
/// assert_eq!(path_cost(&graph, &[1, 2, 3]), Some(12));
/// assert_eq!(path_cost(&graph, &[3, 2]), None);
/// ```
pub fn path_cost<T, G, R>(graph: &G, path: &[T]) -> Option<R>
where
    G: WeightedEdgeGraph<T, R>,
    R: ArithmeticNumber,
{
    let mut cost = R::zero();
    for pair in path.windows(2) {
        cost = cost.checked_sum(graph.edge_weight(&pair[0], &pair[1])?)?;
    }
    Some(cost)
}

//! Coarse-grained synchronized graph.
//!
//! [`SynchronizedGraph`] serializes every operation, reads included, behind
//! one `parking_lot::Mutex`. There are no concurrent readers and no
//! per-vertex locking. Clones share the same lock, and a caller can supply
//! the mutex with [`SynchronizedGraph::from_shared`] to coordinate with
//! other users of the same graph.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::graph::{
    Directed, Direction, FullyWeighted, Graph, PathSearch, SimpleEdgeGraph, SimpleVertexGraph,
    Undirected, Unweighted, VertexValue, WeightedEdgeGraph, WeightedVertexGraph, Weighting,
};
use crate::numeric::ArithmeticNumber;

/// A graph whose operations all run under a single shared mutex.
///
/// # Example
///
/// ```rust
/// use adjgraph::{SimpleEdgeGraph, SimpleVertexGraph, SynchronizedGraph, UndirectedGraph};
///
/// let mut shared = SynchronizedGraph::new(UndirectedGraph::<u32>::new());
/// let mut handle = shared.clone();
///
/// std::thread::spawn(move || {
///     handle.insert_vertex(1);
///     handle.insert_vertex(2);
/// })
/// .join()
/// .unwrap();
///
/// assert!(shared.insert_edge(&1, &2));
/// assert_eq!(shared.degree(&1), Some(1));
/// ```
pub struct SynchronizedGraph<T, D: Direction = Directed, W: Weighting = Unweighted> {
    inner: Arc<Mutex<Graph<T, D, W>>>,
}

impl<T, D: Direction, W: Weighting> Clone for SynchronizedGraph<T, D, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: VertexValue, D: Direction, W: Weighting> SynchronizedGraph<T, D, W> {
    /// Wraps `graph` behind its own mutex.
    #[must_use]
    pub fn new(graph: Graph<T, D, W>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    /// Wraps a caller-supplied mutex-protected graph.
    #[must_use]
    pub fn from_shared(inner: Arc<Mutex<Graph<T, D, W>>>) -> Self {
        Self { inner }
    }

    /// Returns the shared mutex.
    #[must_use]
    pub fn shared(&self) -> Arc<Mutex<Graph<T, D, W>>> {
        Arc::clone(&self.inner)
    }

    /// Locks the graph for a compound operation.
    pub fn lock(&self) -> MutexGuard<'_, Graph<T, D, W>> {
        self.inner.lock()
    }

    /// Runs `f` with exclusive access to the graph.
    pub fn with<R>(&self, f: impl FnOnce(&mut Graph<T, D, W>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Returns `true` for directed graphs.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        self.inner.lock().is_directed()
    }

    /// Returns `true` when vertices carry weights.
    #[must_use]
    pub fn is_weighted_vertex(&self) -> bool {
        self.inner.lock().is_weighted_vertex()
    }

    /// Returns `true` when edges carry weights.
    #[must_use]
    pub fn is_weighted_edge(&self) -> bool {
        self.inner.lock().is_weighted_edge()
    }

    /// See [`Graph::vertex_count`].
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.inner.lock().vertex_count()
    }

    /// See [`Graph::total_edge_count`].
    #[must_use]
    pub fn total_edge_count(&self) -> usize {
        self.inner.lock().total_edge_count()
    }

    /// See [`Graph::edge_count`].
    #[must_use]
    pub fn edge_count(&self, info: &T) -> Option<usize> {
        self.inner.lock().edge_count(info)
    }

    /// See [`Graph::vertices`].
    #[must_use]
    pub fn vertices(&self) -> Vec<T> {
        self.inner.lock().vertices()
    }

    /// See [`Graph::exist_vertex`].
    #[must_use]
    pub fn exist_vertex(&self, info: &T) -> bool {
        self.inner.lock().exist_vertex(info)
    }

    /// See [`Graph::exist_edge`].
    #[must_use]
    pub fn exist_edge(&self, tail: &T, head: &T) -> bool {
        self.inner.lock().exist_edge(tail, head)
    }

    /// See [`Graph::degree`].
    #[must_use]
    pub fn degree(&self, info: &T) -> Option<usize> {
        self.inner.lock().degree(info)
    }

    /// See [`Graph::in_degree`].
    #[must_use]
    pub fn in_degree(&self, info: &T) -> Option<usize> {
        self.inner.lock().in_degree(info)
    }

    /// See [`Graph::out_degree`].
    #[must_use]
    pub fn out_degree(&self, info: &T) -> Option<usize> {
        self.inner.lock().out_degree(info)
    }

    /// See [`Graph::are_adjacent`].
    #[must_use]
    pub fn are_adjacent(&self, tail: &T, head: &T) -> bool {
        self.inner.lock().are_adjacent(tail, head)
    }

    /// See [`Graph::adjacents`].
    #[must_use]
    pub fn adjacents(&self, info: &T) -> Vec<T> {
        self.inner.lock().adjacents(info)
    }

    /// See [`Graph::vertex_with_most_adjacents`].
    #[must_use]
    pub fn vertex_with_most_adjacents(&self) -> Option<T> {
        self.inner.lock().vertex_with_most_adjacents().cloned()
    }

    /// See [`Graph::remove_vertex`].
    pub fn remove_vertex(&self, info: &T) -> Option<T> {
        self.inner.lock().remove_vertex(info)
    }

    /// See [`Graph::remove_vertex_cascade`].
    pub fn remove_vertex_cascade(&self, info: &T) -> Vec<T> {
        self.inner.lock().remove_vertex_cascade(info)
    }

    /// See [`Graph::remove_edge`].
    pub fn remove_edge(&self, tail: &T, head: &T) -> bool {
        self.inner.lock().remove_edge(tail, head)
    }

    /// See [`Graph::exist_vertices_disconnected`].
    #[must_use]
    pub fn exist_vertices_disconnected(&self) -> bool {
        self.inner.lock().exist_vertices_disconnected()
    }

    /// See [`Graph::disconnected_vertices`].
    #[must_use]
    pub fn disconnected_vertices(&self) -> Vec<T> {
        self.inner.lock().disconnected_vertices()
    }

    /// See [`Graph::remove_disconnected_vertices`].
    pub fn remove_disconnected_vertices(&self) -> Vec<T> {
        self.inner.lock().remove_disconnected_vertices()
    }

    /// See [`Graph::exist_path`].
    #[must_use]
    pub fn exist_path(&self, tail: &T, head: &T) -> bool {
        self.inner.lock().exist_path(tail, head)
    }

    /// See [`Graph::exist_path_with_length`].
    #[must_use]
    pub fn exist_path_with_length(&self, tail: &T, head: &T, length: usize) -> bool {
        self.inner.lock().exist_path_with_length(tail, head, length)
    }

    /// See [`Graph::search_path`].
    #[must_use]
    pub fn search_path<N: ArithmeticNumber>(&self, tail: &T, head: &T) -> PathSearch<T, N> {
        self.inner.lock().search_path(tail, head)
    }

    /// See [`Graph::shortest_path`].
    #[must_use]
    pub fn shortest_path(&self, tail: &T, head: &T) -> Option<Vec<T>> {
        self.inner.lock().shortest_path(tail, head)
    }

    /// See [`Graph::is_cyclic`].
    #[must_use]
    pub fn is_cyclic(&self) -> bool {
        self.inner.lock().is_cyclic()
    }

    /// See [`Graph::is_euler_feasible`].
    #[must_use]
    pub fn is_euler_feasible(&self) -> bool {
        self.inner.lock().is_euler_feasible()
    }

    /// See [`Graph::euler_parity_witness`].
    #[must_use]
    pub fn euler_parity_witness(&self) -> Vec<T> {
        self.inner.lock().euler_parity_witness()
    }

    /// See [`Graph::euler_trail`].
    #[must_use]
    pub fn euler_trail(&self) -> Option<Vec<T>> {
        self.inner.lock().euler_trail()
    }

    /// See [`Graph::adjacency_matrix`].
    #[must_use]
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        self.inner.lock().adjacency_matrix()
    }

    /// See [`Graph::incidence_matrix`].
    #[must_use]
    pub fn incidence_matrix(&self) -> Vec<Vec<u8>> {
        self.inner.lock().incidence_matrix()
    }

    /// See [`Graph::clean_graph`].
    pub fn clean_graph(&self) {
        self.inner.lock().clean_graph();
    }
}

impl<T, D, W> SimpleVertexGraph<T> for SynchronizedGraph<T, D, W>
where
    D: Direction,
    W: Weighting,
    Graph<T, D, W>: SimpleVertexGraph<T>,
{
    fn insert_vertex(&mut self, info: T) -> bool {
        SimpleVertexGraph::insert_vertex(&mut *self.inner.lock(), info)
    }
}

impl<T, K, D, W> WeightedVertexGraph<T, K> for SynchronizedGraph<T, D, W>
where
    D: Direction,
    W: Weighting,
    Graph<T, D, W>: WeightedVertexGraph<T, K>,
{
    fn insert_vertex(&mut self, info: T, weight: K) -> bool {
        WeightedVertexGraph::insert_vertex(&mut *self.inner.lock(), info, weight)
    }

    fn vertex_weight(&self, info: &T) -> Option<K> {
        WeightedVertexGraph::vertex_weight(&*self.inner.lock(), info)
    }
}

impl<T, D, W> SimpleEdgeGraph<T> for SynchronizedGraph<T, D, W>
where
    D: Direction,
    W: Weighting,
    Graph<T, D, W>: SimpleEdgeGraph<T>,
{
    fn insert_edge(&mut self, tail: &T, head: &T) -> bool {
        SimpleEdgeGraph::insert_edge(&mut *self.inner.lock(), tail, head)
    }
}

impl<T, R, D, W> WeightedEdgeGraph<T, R> for SynchronizedGraph<T, D, W>
where
    D: Direction,
    W: Weighting,
    Graph<T, D, W>: WeightedEdgeGraph<T, R>,
{
    fn insert_edge(&mut self, tail: &T, head: &T, weight: R) -> bool {
        WeightedEdgeGraph::insert_edge(&mut *self.inner.lock(), tail, head, weight)
    }

    fn edge_weight(&self, tail: &T, head: &T) -> Option<R> {
        WeightedEdgeGraph::edge_weight(&*self.inner.lock(), tail, head)
    }
}

// Compile-time check: SynchronizedGraph must be Send + Sync for Send values
#[allow(dead_code)]
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<SynchronizedGraph<String>>();
    assert_send_sync::<SynchronizedGraph<u64, Undirected, FullyWeighted<f64, i64>>>();
};

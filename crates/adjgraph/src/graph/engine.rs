//! Graph engine: vertex set ownership, edge linking and structural queries.
//!
//! [`Graph`] owns every [`Vertex`] and [`Edge`] record. Vertices are kept in
//! insertion order under stable [`VertexId`]s, and a value index answers
//! queries by vertex value. Every read operation here is expressed purely in
//! terms of values; IDs never leak into the query API.

use std::fmt;
use std::marker::PhantomData;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::config::{GraphConfig, LimitsConfig};
use crate::error::{Error, Result};

use super::policy::{Directed, Direction, Undirected, Unweighted, Weighting};
use super::types::{Edge, EdgeId, EdgeLink, Vertex, VertexId, VertexValue};

/// Directed graph over values `T`, unweighted unless `W` says otherwise.
pub type DirectedGraph<T, W = Unweighted> = Graph<T, Directed, W>;

/// Undirected graph over values `T`, unweighted unless `W` says otherwise.
pub type UndirectedGraph<T, W = Unweighted> = Graph<T, Undirected, W>;

/// In-memory graph parameterized by a direction and a weighting policy.
///
/// Name the vertex type when constructing a graph (`UndirectedGraph<&str>`
/// or `UndirectedGraph::<&str>::new()`). A bare `UndirectedGraph::new()`
/// leaves the weighting open, so `insert_vertex` is ambiguous between the
/// simple and weighted contracts.
///
/// # Example
///
/// ```rust
/// use adjgraph::{SimpleEdgeGraph, SimpleVertexGraph, UndirectedGraph};
///
/// let mut graph: UndirectedGraph<&str> = UndirectedGraph::new();
/// graph.insert_vertex("A");
/// graph.insert_vertex("B");
/// graph.insert_vertex("C");
/// graph.insert_edge(&"A", &"B");
/// graph.insert_edge(&"B", &"C");
///
/// assert_eq!(graph.degree(&"B"), Some(2));
/// assert!(graph.are_adjacent(&"C", &"B"));
/// assert!(graph.exist_path(&"A", &"C"));
/// assert!(!graph.is_cyclic());
/// ```
pub struct Graph<T, D: Direction = Directed, W: Weighting = Unweighted> {
    /// Vertices in insertion order, keyed by stable ID.
    pub(crate) vertices: IndexMap<VertexId, Vertex<T, W::VertexWeight>, FxBuildHasher>,
    /// Value -> ID index.
    pub(crate) index: FxHashMap<T, VertexId>,
    /// Edge records. Undirected connections have exactly one record.
    pub(crate) edges: FxHashMap<EdgeId, Edge<W::EdgeWeight>>,
    next_vertex: u64,
    next_edge: u64,
    pub(crate) limits: LimitsConfig,
    _direction: PhantomData<fn() -> D>,
}

impl<T: VertexValue, D: Direction, W: Weighting> Graph<T, D, W> {
    /// Creates an empty graph with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0, 0)
    }

    /// Creates an empty graph with pre-allocated vertex and edge tables.
    #[must_use]
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: IndexMap::with_capacity_and_hasher(vertices, FxBuildHasher),
            index: FxHashMap::with_capacity_and_hasher(vertices, FxBuildHasher),
            edges: FxHashMap::with_capacity_and_hasher(edges, FxBuildHasher),
            next_vertex: 0,
            next_edge: 0,
            limits: LimitsConfig::default(),
            _direction: PhantomData,
        }
    }

    /// Creates an empty graph sized and limited by `config`.
    ///
    /// `config` is taken as is. Use [`Graph::try_with_config`] for a config
    /// built by hand rather than through the [`GraphConfig`] loaders.
    #[must_use]
    pub fn with_config(config: &GraphConfig) -> Self {
        let mut graph = Self::with_capacity(config.capacity.vertices, config.capacity.edges);
        graph.limits = config.limits;
        graph
    }

    /// Validates `config`, then creates a graph sized and limited by it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `config` fails [`GraphConfig::validate`].
    pub fn try_with_config(config: &GraphConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Returns the limits this graph enforces.
    #[must_use]
    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    // ── Flags ──────────────────────────────────────────────────────────

    /// Returns `true` for directed graphs.
    #[must_use]
    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    /// Returns `true` when vertices carry weights.
    #[must_use]
    pub fn is_weighted_vertex(&self) -> bool {
        W::WEIGHTED_VERTEX
    }

    /// Returns `true` when edges carry weights.
    #[must_use]
    pub fn is_weighted_edge(&self) -> bool {
        W::WEIGHTED_EDGE
    }

    // ── Counts and lookups ─────────────────────────────────────────────

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of owned edges summed over all vertices.
    ///
    /// An undirected connection is owned by both endpoints and counts twice
    /// (a self-loop counts once).
    #[must_use]
    pub fn total_edge_count(&self) -> usize {
        self.vertices.values().map(Vertex::edge_count).sum()
    }

    /// Returns the number of edges owned by `info`, or `None` if it is absent.
    #[must_use]
    pub fn edge_count(&self, info: &T) -> Option<usize> {
        self.vertex(info).map(Vertex::edge_count)
    }

    /// Returns all vertex values in enumeration (insertion) order.
    #[must_use]
    pub fn vertices(&self) -> Vec<T> {
        self.vertices.values().map(|v| v.info().clone()).collect()
    }

    /// Returns `true` if a vertex with this value exists.
    #[must_use]
    pub fn exist_vertex(&self, info: &T) -> bool {
        self.index.contains_key(info)
    }

    /// Returns `true` if the edge tail→head exists (same as [`Graph::are_adjacent`]).
    #[must_use]
    pub fn exist_edge(&self, tail: &T, head: &T) -> bool {
        self.are_adjacent(tail, head)
    }

    /// Returns the vertex record holding `info`.
    #[must_use]
    pub fn vertex(&self, info: &T) -> Option<&Vertex<T, W::VertexWeight>> {
        self.index.get(info).and_then(|id| self.vertices.get(id))
    }

    /// Returns the edge record reached from `tail` to `head`.
    #[must_use]
    pub fn edge(&self, tail: &T, head: &T) -> Option<&Edge<W::EdgeWeight>> {
        let head_id = self.id_of(head)?;
        let edge_id = self.vertex(tail)?.edge_to(head_id)?;
        self.edges.get(&edge_id)
    }

    /// Returns the values adjacent to `info` in link order (empty if absent).
    #[must_use]
    pub fn adjacents(&self, info: &T) -> Vec<T> {
        self.vertex(info)
            .map(|v| v.adjacents().map(|id| self.info_of(id).clone()).collect())
            .unwrap_or_default()
    }

    // ── Degree and adjacency ───────────────────────────────────────────

    /// Returns the number of edges leaving `info`.
    #[must_use]
    pub fn out_degree(&self, info: &T) -> Option<usize> {
        self.edge_count(info)
    }

    /// Returns the number of vertices holding an edge that reaches `info`.
    ///
    /// Scans every vertex, O(V·E) in the worst case.
    #[must_use]
    pub fn in_degree(&self, info: &T) -> Option<usize> {
        let id = self.id_of(info)?;
        Some(
            self.vertices
                .values()
                .filter(|v| v.is_adjacent(id))
                .count(),
        )
    }

    /// Returns the degree of `info`, or `None` if it is absent.
    ///
    /// Directed: in-degree + out-degree. Undirected: out-degree only, since
    /// every connection is already linked from both endpoints.
    #[must_use]
    pub fn degree(&self, info: &T) -> Option<usize> {
        if D::DIRECTED {
            Some(self.in_degree(info)? + self.out_degree(info)?)
        } else {
            self.out_degree(info)
        }
    }

    /// Returns `true` if `tail` reaches `head` through one edge.
    ///
    /// Undirected graphs additionally require the reverse link, so the
    /// relation is symmetric. Absent vertices are never adjacent.
    #[must_use]
    pub fn are_adjacent(&self, tail: &T, head: &T) -> bool {
        match (self.id_of(tail), self.id_of(head)) {
            (Some(t), Some(h)) => self.ids_adjacent(t, h),
            _ => false,
        }
    }

    /// Returns the first vertex with the largest number of owned edges.
    #[must_use]
    pub fn vertex_with_most_adjacents(&self) -> Option<&T> {
        let mut best: Option<&Vertex<T, W::VertexWeight>> = None;
        for vertex in self.vertices.values() {
            match best {
                Some(b) if b.edge_count() >= vertex.edge_count() => {}
                _ => best = Some(vertex),
            }
        }
        best.map(Vertex::info)
    }

    // ── Insertion ──────────────────────────────────────────────────────

    /// Inserts a vertex carrying `weight`.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexExists` for a duplicate value and
    /// `Error::VertexLimit` when `limits.max_vertices` is reached.
    pub fn try_insert_vertex_with(&mut self, info: T, weight: W::VertexWeight) -> Result<VertexId> {
        if self.index.contains_key(&info) {
            return Err(Error::vertex_exists(&info));
        }
        if let Some(max) = self.limits.max_vertices {
            if self.vertices.len() >= max {
                tracing::warn!(max_vertices = max, vertex = ?info, "Vertex limit reached");
                return Err(Error::VertexLimit(max));
            }
        }

        let id = VertexId(self.next_vertex);
        self.next_vertex += 1;
        self.index.insert(info.clone(), id);
        self.vertices.insert(id, Vertex::new(id, info, weight));
        Ok(id)
    }

    /// Inserts an edge tail→head carrying `weight`.
    ///
    /// Undirected graphs store a single record linked from both endpoints.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either endpoint is absent and
    /// `Error::EdgeExists` if the endpoints are already connected.
    pub fn try_insert_edge_with(
        &mut self,
        tail: &T,
        head: &T,
        weight: W::EdgeWeight,
    ) -> Result<EdgeId> {
        let tail_id = self.id_of(tail).ok_or_else(|| Error::vertex_not_found(tail))?;
        let head_id = self.id_of(head).ok_or_else(|| Error::vertex_not_found(head))?;

        let connected = if D::DIRECTED {
            self.vertex_by_id(tail_id).is_adjacent(head_id)
        } else {
            self.vertex_by_id(tail_id).is_adjacent(head_id)
                || self.vertex_by_id(head_id).is_adjacent(tail_id)
        };
        if connected {
            return Err(Error::edge_exists(tail, head));
        }

        let edge_id = EdgeId(self.next_edge);
        self.next_edge += 1;
        self.link(tail_id, EdgeLink { edge: edge_id, head: head_id });
        if !D::DIRECTED && tail_id != head_id {
            self.link(head_id, EdgeLink { edge: edge_id, head: tail_id });
        }
        self.edges
            .insert(edge_id, Edge::new(edge_id, tail_id, head_id, weight));
        Ok(edge_id)
    }

    /// Boolean form of [`Graph::try_insert_vertex_with`]: duplicates are a
    /// `false` return, not an error.
    pub(crate) fn insert_vertex_flag(&mut self, info: T, weight: W::VertexWeight) -> bool {
        match self.try_insert_vertex_with(info, weight) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(error = %err, "Vertex insertion rejected");
                false
            }
        }
    }

    /// Boolean form of [`Graph::try_insert_edge_with`].
    pub(crate) fn insert_edge_flag(&mut self, tail: &T, head: &T, weight: W::EdgeWeight) -> bool {
        match self.try_insert_edge_with(tail, head, weight) {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(error = %err, "Edge insertion rejected");
                false
            }
        }
    }

    // ── Removal ────────────────────────────────────────────────────────

    /// Removes a vertex and every edge record touching it.
    ///
    /// Returns the removed value, or `None` if it was absent.
    pub fn remove_vertex(&mut self, info: &T) -> Option<T> {
        let id = self.index.remove(info)?;
        let mut vertex = self.vertices.shift_remove(&id)?;

        for edge_id in vertex.disconnect() {
            self.edges.remove(&edge_id);
        }
        for other in self.vertices.values_mut() {
            for edge_id in other.remove_links_to(id) {
                self.edges.remove(&edge_id);
            }
        }

        tracing::debug!(vertex = ?info, "Vertex removed");
        Some(vertex.into_info())
    }

    /// Removes the edge tail→head and returns its record.
    ///
    /// Undirected graphs remove the connection only when it is linked from
    /// both endpoints, and drop both links.
    ///
    /// # Errors
    ///
    /// Returns `Error::VertexNotFound` if either endpoint is absent and
    /// `Error::EdgeNotFound` if the endpoints are not adjacent.
    pub fn try_remove_edge(&mut self, tail: &T, head: &T) -> Result<Edge<W::EdgeWeight>> {
        let tail_id = self.id_of(tail).ok_or_else(|| Error::vertex_not_found(tail))?;
        let head_id = self.id_of(head).ok_or_else(|| Error::vertex_not_found(head))?;
        if !self.ids_adjacent(tail_id, head_id) {
            return Err(Error::edge_not_found(tail, head));
        }

        let mut removed = self.unlink(tail_id, head_id);
        if !D::DIRECTED {
            removed.extend(self.unlink(head_id, tail_id));
        }
        let mut record = None;
        for edge_id in &removed {
            if let Some(edge) = self.edges.remove(edge_id) {
                record = Some(edge);
            }
        }
        record.ok_or_else(|| Error::edge_not_found(tail, head))
    }

    /// Removes the edge tail→head; returns whether anything was removed.
    pub fn remove_edge(&mut self, tail: &T, head: &T) -> bool {
        self.try_remove_edge(tail, head).is_ok()
    }

    /// Removes every vertex and edge.
    pub fn clean_graph(&mut self) {
        let vertices = self.vertices.len();
        self.vertices.clear();
        self.index.clear();
        self.edges.clear();
        tracing::debug!(removed = vertices, "Graph cleaned");
    }

    // ── Disconnected vertices ──────────────────────────────────────────

    /// Returns `true` if any vertex has degree 0.
    #[must_use]
    pub fn exist_vertices_disconnected(&self) -> bool {
        self.vertices
            .values()
            .any(|v| self.degree(v.info()) == Some(0))
    }

    /// Returns every vertex with degree 0, in enumeration order.
    #[must_use]
    pub fn disconnected_vertices(&self) -> Vec<T> {
        self.vertices
            .values()
            .filter(|v| self.degree(v.info()) == Some(0))
            .map(|v| v.info().clone())
            .collect()
    }

    /// Removes every vertex with degree 0 and returns their values.
    pub fn remove_disconnected_vertices(&mut self) -> Vec<T> {
        let disconnected = self.disconnected_vertices();
        for info in &disconnected {
            self.remove_vertex(info);
        }
        tracing::debug!(removed = disconnected.len(), "Disconnected vertices removed");
        disconnected
    }

    // ── Internal helpers ───────────────────────────────────────────────

    pub(crate) fn id_of(&self, info: &T) -> Option<VertexId> {
        self.index.get(info).copied()
    }

    /// Looks up a vertex by an ID taken from this graph's own links.
    ///
    /// Links never outlive their head (vertex removal unlinks everywhere),
    /// so a missing ID is a broken invariant.
    pub(crate) fn vertex_by_id(&self, id: VertexId) -> &Vertex<T, W::VertexWeight> {
        &self.vertices[&id]
    }

    pub(crate) fn info_of(&self, id: VertexId) -> &T {
        self.vertex_by_id(id).info()
    }

    pub(crate) fn ids_adjacent(&self, tail: VertexId, head: VertexId) -> bool {
        let forward = self.vertex_by_id(tail).is_adjacent(head);
        if D::DIRECTED {
            forward
        } else {
            forward && self.vertex_by_id(head).is_adjacent(tail)
        }
    }

    fn link(&mut self, owner: VertexId, link: EdgeLink) {
        if let Some(vertex) = self.vertices.get_mut(&owner) {
            vertex.insert_link(link);
        }
    }

    fn unlink(&mut self, owner: VertexId, head: VertexId) -> Vec<EdgeId> {
        self.vertices
            .get_mut(&owner)
            .map(|v| v.remove_links_to(head))
            .unwrap_or_default()
    }
}

impl<T: VertexValue, D: Direction, W: Weighting> Default for Graph<T, D, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, D, W> Clone for Graph<T, D, W>
where
    T: Clone,
    D: Direction,
    W: Weighting,
    W::VertexWeight: Clone,
    W::EdgeWeight: Clone,
{
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            index: self.index.clone(),
            edges: self.edges.clone(),
            next_vertex: self.next_vertex,
            next_edge: self.next_edge,
            limits: self.limits,
            _direction: PhantomData,
        }
    }
}

impl<T, D, W> fmt::Debug for Graph<T, D, W>
where
    T: fmt::Debug,
    D: Direction,
    W: Weighting,
    W::VertexWeight: fmt::Debug,
    W::EdgeWeight: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("directed", &D::DIRECTED)
            .field("vertices", &self.vertices.values().collect::<Vec<_>>())
            .field("edges", &self.edges.values().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

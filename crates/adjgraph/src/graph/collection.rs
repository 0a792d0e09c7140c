//! Container view of a graph: the vertex values as a collection.
//!
//! Treating a graph as a collection exposes only vertex values; edges are
//! not visible through this view.

use std::fmt;

use super::engine::Graph;
use super::policy::{Direction, Weighting};
use super::types::{Vertex, VertexValue};

/// Iterator over vertex values in enumeration order.
pub struct Values<'a, T, K> {
    inner: indexmap::map::Values<'a, super::types::VertexId, Vertex<T, K>>,
}

impl<'a, T, K> Iterator for Values<'a, T, K> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Vertex::info)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, K> ExactSizeIterator for Values<'_, T, K> {}

impl<T: VertexValue, D: Direction, W: Weighting> Graph<T, D, W> {
    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertex_count()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `true` if `info` is a vertex value of this graph.
    #[must_use]
    pub fn contains(&self, info: &T) -> bool {
        self.exist_vertex(info)
    }

    /// Iterates vertex values in enumeration order.
    #[must_use]
    pub fn iter(&self) -> Values<'_, T, W::VertexWeight> {
        Values {
            inner: self.vertices.values(),
        }
    }

    /// Removes every listed vertex that exists.
    ///
    /// Returns `true` iff every listed value was removed.
    pub fn remove_all(&mut self, values: &[T]) -> bool {
        let removed = values
            .iter()
            .filter(|info| self.remove_vertex(info).is_some())
            .count();
        removed == values.len()
    }

    /// Keeps only the vertices for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let doomed: Vec<T> = self.iter().filter(|&info| !keep(info)).cloned().collect();
        for info in &doomed {
            self.remove_vertex(info);
        }
    }

    /// Removes every vertex and edge (same as [`Graph::clean_graph`]).
    pub fn clear(&mut self) {
        self.clean_graph();
    }
}

impl<'a, T: VertexValue, D: Direction, W: Weighting> IntoIterator for &'a Graph<T, D, W> {
    type Item = &'a T;
    type IntoIter = Values<'a, T, W::VertexWeight>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two graphs are equal when they share flags, vertex values and adjacency
/// pairs. Weights and enumeration order are not compared.
impl<T: VertexValue, D: Direction, W: Weighting> PartialEq for Graph<T, D, W> {
    fn eq(&self, other: &Self) -> bool {
        if self.vertex_count() != other.vertex_count()
            || self.total_edge_count() != other.total_edge_count()
        {
            return false;
        }
        self.vertices.values().all(|vertex| {
            other.vertex(vertex.info()).is_some_and(|theirs| {
                theirs.edge_count() == vertex.edge_count()
                    && vertex
                        .adjacents()
                        .all(|head| other.are_adjacent(vertex.info(), self.info_of(head)))
            })
        })
    }
}

impl<T: VertexValue, D: Direction, W: Weighting> fmt::Display for Graph<T, D, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = if D::DIRECTED { "Directed" } else { "Undirected" };
        let weighting = match (W::WEIGHTED_VERTEX, W::WEIGHTED_EDGE) {
            (false, false) => "unweighted",
            (true, false) => "vertex-weighted",
            (false, true) => "edge-weighted",
            (true, true) => "vertex- and edge-weighted",
        };
        write!(
            f,
            "{direction} {weighting} graph: {} vertices, {} edges",
            self.vertex_count(),
            self.total_edge_count()
        )?;
        match self.vertex_with_most_adjacents() {
            Some(info) => write!(
                f,
                ", busiest vertex {:?} with {} edges",
                info,
                self.edge_count(info).unwrap_or(0)
            ),
            None => Ok(()),
        }
    }
}

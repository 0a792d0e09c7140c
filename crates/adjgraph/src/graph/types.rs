//! Vertex and edge records.
//!
//! A [`Vertex`] owns its value, its optional weight and an insertion-ordered
//! list of outgoing [`EdgeLink`]s. Links are views onto [`Edge`] records held
//! in the graph's edge table: a directed edge has one link (under its tail),
//! an undirected connection has one link under each endpoint pointing at the
//! same shared record.

use std::fmt;
use std::hash::Hash;

/// Values that can identify a vertex.
///
/// Two vertices are equal iff their values are equal.
pub trait VertexValue: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> VertexValue for T {}

/// Stable internal identifier of a vertex.
///
/// Identifiers are never reused within one graph instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) u64);

impl VertexId {
    /// Returns the raw identifier.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Stable internal identifier of an edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub(crate) u64);

impl EdgeId {
    /// Returns the raw identifier.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Outgoing view of an edge record, stored under the owning (tail) vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeLink {
    /// Edge record this link refers to.
    pub edge: EdgeId,
    /// Vertex reached by following the link.
    pub head: VertexId,
}

/// A connection record between two vertices, optionally weighted.
///
/// For undirected graphs the `tail`/`head` orientation is the one used at
/// insertion; both endpoints reference the same record.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<R> {
    id: EdgeId,
    tail: VertexId,
    head: VertexId,
    weight: R,
}

impl<R> Edge<R> {
    pub(crate) fn new(id: EdgeId, tail: VertexId, head: VertexId, weight: R) -> Self {
        Self {
            id,
            tail,
            head,
            weight,
        }
    }

    /// Returns the edge ID.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the tail vertex ID.
    #[must_use]
    pub fn tail(&self) -> VertexId {
        self.tail
    }

    /// Returns the head vertex ID.
    #[must_use]
    pub fn head(&self) -> VertexId {
        self.head
    }

    /// Returns the edge weight (`()` on edge-unweighted graphs).
    #[must_use]
    pub fn weight(&self) -> &R {
        &self.weight
    }

    /// Returns `true` if the record connects `a` and `b` in either orientation.
    #[must_use]
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.tail == a && self.head == b) || (self.tail == b && self.head == a)
    }
}

/// A vertex: identity value, optional weight and outgoing links.
#[derive(Debug, Clone)]
pub struct Vertex<T, K> {
    id: VertexId,
    info: T,
    weight: K,
    links: Vec<EdgeLink>,
}

impl<T, K> Vertex<T, K> {
    pub(crate) fn new(id: VertexId, info: T, weight: K) -> Self {
        Self {
            id,
            info,
            weight,
            links: Vec::new(),
        }
    }

    /// Returns the vertex ID.
    #[must_use]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// Returns the vertex value.
    #[must_use]
    pub fn info(&self) -> &T {
        &self.info
    }

    /// Returns the vertex weight (`()` on vertex-unweighted graphs).
    #[must_use]
    pub fn weight(&self) -> &K {
        &self.weight
    }

    /// Returns the outgoing links in insertion order.
    #[must_use]
    pub fn links(&self) -> &[EdgeLink] {
        &self.links
    }

    /// Returns the vertices reachable through one outgoing link, in link order.
    pub fn adjacents(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.links.iter().map(|link| link.head)
    }

    /// Returns the number of adjacent vertices.
    ///
    /// Links are always owned by their tail and never duplicated, so this
    /// equals [`Vertex::edge_count`].
    #[must_use]
    pub fn adjacent_count(&self) -> usize {
        self.adjacents().count()
    }

    /// Returns the number of owned links.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if an owned link reaches `head`.
    #[must_use]
    pub fn is_adjacent(&self, head: VertexId) -> bool {
        self.links.iter().any(|link| link.head == head)
    }

    /// Returns the edge record reaching `head`, if any.
    #[must_use]
    pub fn edge_to(&self, head: VertexId) -> Option<EdgeId> {
        self.links
            .iter()
            .find(|link| link.head == head)
            .map(|link| link.edge)
    }

    /// Appends a link; rejects a second link to the same head.
    pub(crate) fn insert_link(&mut self, link: EdgeLink) -> bool {
        if self.is_adjacent(link.head) {
            return false;
        }
        self.links.push(link);
        true
    }

    /// Removes every link reaching `head`, returning the affected edge IDs.
    pub(crate) fn remove_links_to(&mut self, head: VertexId) -> Vec<EdgeId> {
        let mut removed = Vec::new();
        self.links.retain(|link| {
            if link.head == head {
                removed.push(link.edge);
                false
            } else {
                true
            }
        });
        removed
    }

    /// Drops every owned link, returning the affected edge IDs.
    pub(crate) fn disconnect(&mut self) -> Vec<EdgeId> {
        self.links.drain(..).map(|link| link.edge).collect()
    }

    pub(crate) fn into_info(self) -> T {
        self.info
    }
}

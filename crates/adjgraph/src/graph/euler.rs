//! Euler feasibility and trail construction.

use rustc_hash::{FxHashMap, FxHashSet};

use super::engine::Graph;
use super::policy::{Direction, Weighting};
use super::types::{VertexId, VertexValue};

impl<T: VertexValue, D: Direction, W: Weighting> Graph<T, D, W> {
    /// Returns `true` iff no vertex is disconnected and every degree is even.
    ///
    /// Vacuously `true` for the empty graph.
    #[must_use]
    pub fn is_euler_feasible(&self) -> bool {
        !self.exist_vertices_disconnected()
            && self
                .vertices
                .values()
                .all(|v| self.degree(v.info()).is_some_and(|d| d % 2 == 0))
    }

    /// Parity witness for [`Graph::is_euler_feasible`].
    ///
    /// Lists every vertex (all of even degree) in enumeration order when the
    /// graph is feasible, and nothing otherwise. This is not a trail; see
    /// [`Graph::euler_trail`].
    #[must_use]
    pub fn euler_parity_witness(&self) -> Vec<T> {
        if self.is_euler_feasible() {
            self.vertices()
        } else {
            Vec::new()
        }
    }

    /// Builds an Eulerian trail with Hierholzer's algorithm.
    ///
    /// The trail uses every edge record exactly once and is returned as the
    /// sequence of visited vertex values (`E + 1` entries). Returns
    /// `Some(vec![])` for a graph without edges and `None` when no trail
    /// exists: wrong degree balance, or edges spread over several
    /// components. An undirected self-loop adds 2 to its vertex's degree here.
    #[must_use]
    pub fn euler_trail(&self) -> Option<Vec<T>> {
        if self.edges.is_empty() {
            return Some(Vec::new());
        }
        let start = self.trail_start()?;

        let mut cursors: FxHashMap<VertexId, usize> = FxHashMap::default();
        let mut used = FxHashSet::default();
        let mut stack = vec![start];
        let mut circuit = Vec::with_capacity(self.edges.len() + 1);

        while let Some(&current) = stack.last() {
            let links = self.vertex_by_id(current).links();
            let cursor = cursors.entry(current).or_insert(0);
            while *cursor < links.len() && used.contains(&links[*cursor].edge) {
                *cursor += 1;
            }
            if let Some(link) = links.get(*cursor) {
                *cursor += 1;
                used.insert(link.edge);
                stack.push(link.head);
            } else {
                circuit.push(current);
                stack.pop();
            }
        }

        if used.len() != self.edges.len() {
            tracing::trace!(
                used = used.len(),
                edges = self.edges.len(),
                "Edges span several components, no Euler trail"
            );
            return None;
        }

        circuit.reverse();
        Some(
            circuit
                .into_iter()
                .map(|id| self.info_of(id).clone())
                .collect(),
        )
    }

    /// Picks the vertex a trail must start from, or `None` if the degree
    /// balance rules out any trail.
    fn trail_start(&self) -> Option<VertexId> {
        let first_with_edges = self
            .vertices
            .values()
            .find(|v| v.edge_count() > 0)
            .map(|v| v.id());

        if D::DIRECTED {
            let mut balance: FxHashMap<VertexId, i64> = FxHashMap::default();
            for edge in self.edges.values() {
                *balance.entry(edge.tail()).or_insert(0) += 1;
                *balance.entry(edge.head()).or_insert(0) -= 1;
            }
            let mut start = None;
            let mut ends = 0usize;
            for &id in self.vertices.keys() {
                match balance.get(&id).copied().unwrap_or(0) {
                    0 => {}
                    1 if start.is_none() => start = Some(id),
                    -1 if ends == 0 => ends += 1,
                    _ => return None,
                }
            }
            match (start, ends) {
                (Some(id), 1) => Some(id),
                (None, 0) => first_with_edges,
                _ => None,
            }
        } else {
            let mut degree: FxHashMap<VertexId, usize> = FxHashMap::default();
            for edge in self.edges.values() {
                *degree.entry(edge.tail()).or_insert(0) += 1;
                *degree.entry(edge.head()).or_insert(0) += 1;
            }
            let odd: Vec<VertexId> = self
                .vertices
                .keys()
                .copied()
                .filter(|id| degree.get(id).is_some_and(|d| d % 2 == 1))
                .collect();
            match odd.len() {
                0 => first_with_edges,
                2 => odd.first().copied(),
                _ => None,
            }
        }
    }
}

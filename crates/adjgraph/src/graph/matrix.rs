//! Adjacency and incidence matrix export.
//!
//! Rows (and adjacency columns) follow the vertex enumeration order, i.e.
//! the order of [`Graph::vertices`]. Entries are 0 or 1.

use super::engine::Graph;
use super::policy::{Direction, Weighting};
use super::types::VertexValue;

impl<T: VertexValue, D: Direction, W: Weighting> Graph<T, D, W> {
    /// V×V matrix with 1 at (i, j) iff vertex i is adjacent to vertex j.
    ///
    /// Symmetric for undirected graphs.
    #[must_use]
    pub fn adjacency_matrix(&self) -> Vec<Vec<u8>> {
        let order: Vec<_> = self.vertices.keys().copied().collect();
        order
            .iter()
            .map(|&row| {
                order
                    .iter()
                    .map(|&col| u8::from(self.ids_adjacent(row, col)))
                    .collect()
            })
            .collect()
    }

    /// V×E matrix with 1 at (i, e) iff vertex i is the tail of edge column e.
    ///
    /// Columns enumerate every vertex's owned edges in vertex order, then
    /// link order, the same enumeration [`Graph::total_edge_count`] counts.
    /// An undirected connection therefore spans two columns, one per
    /// endpoint.
    #[must_use]
    pub fn incidence_matrix(&self) -> Vec<Vec<u8>> {
        let columns = self.total_edge_count();
        let mut matrix = vec![vec![0u8; columns]; self.vertex_count()];

        let mut column = 0;
        for (row, vertex) in self.vertices.values().enumerate() {
            for _ in vertex.links() {
                matrix[row][column] = 1;
                column += 1;
            }
        }
        matrix
    }
}

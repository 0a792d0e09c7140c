//! Error types for adjgraph.
//!
//! Ordinary "not found" conditions on read queries are reported through
//! `Option` or empty collections, never through [`Error`]. The strict
//! insertion API (`try_insert_*`) is the only place graph operations
//! return errors; the boolean capability contracts collapse them to `false`.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for adjgraph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in adjgraph operations.
///
/// Vertex payloads are the `Debug` rendering of the offending vertex values,
/// so the error type stays independent of the graph's value type.
#[derive(Error, Debug)]
pub enum Error {
    /// A vertex with the same value already exists.
    #[error("Vertex already exists: {0}")]
    VertexExists(String),

    /// The vertex does not exist in the graph.
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    /// The edge (tail, head) is already present.
    #[error("Edge already exists: {0} -> {1}")]
    EdgeExists(String, String),

    /// The edge (tail, head) is not present.
    #[error("Edge not found: {0} -> {1}")]
    EdgeNotFound(String, String),

    /// The configured vertex limit has been reached.
    #[error("Vertex limit reached ({0} vertices)")]
    VertexLimit(usize),

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Builds a [`Error::VertexNotFound`] from any debuggable vertex value.
    pub(crate) fn vertex_not_found<T: std::fmt::Debug>(info: &T) -> Self {
        Self::VertexNotFound(format!("{info:?}"))
    }

    /// Builds a [`Error::VertexExists`] from any debuggable vertex value.
    pub(crate) fn vertex_exists<T: std::fmt::Debug>(info: &T) -> Self {
        Self::VertexExists(format!("{info:?}"))
    }

    /// Builds a [`Error::EdgeExists`] from a (tail, head) pair.
    pub(crate) fn edge_exists<T: std::fmt::Debug>(tail: &T, head: &T) -> Self {
        Self::EdgeExists(format!("{tail:?}"), format!("{head:?}"))
    }

    /// Builds a [`Error::EdgeNotFound`] from a (tail, head) pair.
    pub(crate) fn edge_not_found<T: std::fmt::Debug>(tail: &T, head: &T) -> Self {
        Self::EdgeNotFound(format!("{tail:?}"), format!("{head:?}"))
    }
}

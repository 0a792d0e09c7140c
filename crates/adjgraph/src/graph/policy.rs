//! Direction and weighting policies.
//!
//! A graph is specialized along two independent axes by zero-sized marker
//! types: a [`Direction`] (directed or undirected) and a [`Weighting`]
//! (which of vertices/edges carry weights, and of which type). Both traits
//! are sealed so the flags stay fixed for a graph type.
//!
//! Algorithms branch on the associated constants; the branches are resolved
//! at compile time for each concrete graph type.

use std::marker::PhantomData;

mod private {
    pub trait Sealed {}
}

/// Direction policy of a graph.
pub trait Direction: private::Sealed + Send + Sync + 'static {
    /// `true` for directed graphs.
    const DIRECTED: bool;
}

/// Directed graphs: an edge tail→head lives only under its tail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Undirected graphs: one shared edge record, linked from both endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl private::Sealed for Directed {}
impl private::Sealed for Undirected {}

impl Direction for Directed {
    const DIRECTED: bool = true;
}

impl Direction for Undirected {
    const DIRECTED: bool = false;
}

/// Weighting policy of a graph.
pub trait Weighting: private::Sealed + Send + Sync + 'static {
    /// Weight stored on every vertex (`()` when unweighted).
    type VertexWeight;
    /// Weight stored on every edge record (`()` when unweighted).
    type EdgeWeight;
    /// `true` when vertices carry a weight.
    const WEIGHTED_VERTEX: bool;
    /// `true` when edges carry a weight.
    const WEIGHTED_EDGE: bool;
}

/// No weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unweighted;

/// Vertices carry a `K` weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VertexWeighted<K>(PhantomData<fn() -> K>);

/// Edges carry an `R` weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EdgeWeighted<R>(PhantomData<fn() -> R>);

/// Vertices carry a `K` weight and edges an `R` weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FullyWeighted<K, R>(PhantomData<fn() -> (K, R)>);

impl private::Sealed for Unweighted {}
impl<K> private::Sealed for VertexWeighted<K> {}
impl<R> private::Sealed for EdgeWeighted<R> {}
impl<K, R> private::Sealed for FullyWeighted<K, R> {}

impl Weighting for Unweighted {
    type VertexWeight = ();
    type EdgeWeight = ();
    const WEIGHTED_VERTEX: bool = false;
    const WEIGHTED_EDGE: bool = false;
}

impl<K: 'static> Weighting for VertexWeighted<K> {
    type VertexWeight = K;
    type EdgeWeight = ();
    const WEIGHTED_VERTEX: bool = true;
    const WEIGHTED_EDGE: bool = false;
}

impl<R: 'static> Weighting for EdgeWeighted<R> {
    type VertexWeight = ();
    type EdgeWeight = R;
    const WEIGHTED_VERTEX: bool = false;
    const WEIGHTED_EDGE: bool = true;
}

impl<K: 'static, R: 'static> Weighting for FullyWeighted<K, R> {
    type VertexWeight = K;
    type EdgeWeight = R;
    const WEIGHTED_VERTEX: bool = true;
    const WEIGHTED_EDGE: bool = true;
}

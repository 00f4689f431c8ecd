use crate::{
    delegate::edge_at,
    error::{Error, Result},
    graph::EdgeLookup,
};
use std::marker::PhantomData;

/// A directed implicit graph backed by an [`EdgeLookup`](../graph/trait.EdgeLookup.html).
///
/// The lookup maps a vertex to its out-edges. Each public query invokes the
/// lookup exactly once and returns or derives from the freshly produced
/// sequence; nothing is cached between calls.
pub struct DelegateDigraph<V, L> {
    lookup: L,
    allow_parallel_edges: bool,
    vertex: PhantomData<fn(&V)>,
}

impl<V, L> DelegateDigraph<V, L>
where
    L: EdgeLookup<V>,
{
    /// Creates a view allowing parallel edges.
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            allow_parallel_edges: true,
            vertex: PhantomData,
        }
    }

    /// Creates a view over a source declared free of parallel edges.
    ///
    /// The flag is a declared property of the source; the view reports it but
    /// cannot enforce it without extra lookups.
    pub fn simple(lookup: L) -> Self {
        Self {
            lookup,
            allow_parallel_edges: false,
            vertex: PhantomData,
        }
    }

    pub fn is_directed(&self) -> bool {
        true
    }

    pub fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    /// Returns the found flag of the lookup, ignoring the edge payload.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.lookup.edges(vertex).is_some()
    }

    /// Returns the out-edges of `vertex` exactly as produced by the lookup.
    pub fn out_edges(&self, vertex: &V) -> Result<L::Edges> {
        self.lookup.edges(vertex).ok_or(Error::VertexNotFound)
    }

    /// Returns the `index`-th out-edge of `vertex`.
    pub fn out_edge(&self, vertex: &V, index: usize) -> Result<L::Edge> {
        match self.lookup.edges(vertex) {
            Some(edges) => edge_at(edges, index),
            None => Err(Error::VertexNotFound),
        }
    }

    pub fn out_degree(&self, vertex: &V) -> Result<usize> {
        Ok(self
            .lookup
            .edges(vertex)
            .ok_or(Error::VertexNotFound)?
            .into_iter()
            .count())
    }

    pub fn is_out_edges_empty(&self, vertex: &V) -> Result<bool> {
        Ok(self
            .lookup
            .edges(vertex)
            .ok_or(Error::VertexNotFound)?
            .into_iter()
            .next()
            .is_none())
    }

    /// Returns the found flag directly, carrying the (possibly empty) edge
    /// sequence on success.
    pub fn try_get_out_edges(&self, vertex: &V) -> Option<L::Edges> {
        self.lookup.edges(vertex)
    }
}

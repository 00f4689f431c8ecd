use crate::{
    error::{Error, Result},
    graph::Edge,
};
use itertools::Itertools;
use log::debug;
use std::collections::{hash_map, HashMap};
use std::hash::Hash;
use std::slice;

/// A mutable directed graph tracking, per vertex, both its out-edges and its
/// in-edges in insertion order.
///
/// The graph is grow-only. Whether parallel edges are accepted is fixed at
/// construction time.
pub struct BidirectionalGraph<V, E> {
    vertices: HashMap<V, VertexEdges<E>>,
    allow_parallel_edges: bool,
    num_edges: usize,
}

struct VertexEdges<E> {
    out_edges: Vec<E>,
    in_edges: Vec<E>,
}

impl<E> VertexEdges<E> {
    fn new() -> Self {
        Self {
            out_edges: vec![],
            in_edges: vec![],
        }
    }
}

impl<V, E> BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + Clone,
{
    pub fn new(allow_parallel_edges: bool) -> Self {
        Self {
            vertices: HashMap::new(),
            allow_parallel_edges,
            num_edges: 0,
        }
    }

    /// Builds a graph from an edge sequence, adding missing endpoint
    /// vertices along the way. Parallel edges are allowed.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut graph = Self::new(true);
        for edge in edges {
            graph.add_edge_with_vertices(edge);
        }
        debug!(
            "loaded {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        graph
    }

    pub fn is_directed(&self) -> bool {
        true
    }

    pub fn allow_parallel_edges(&self) -> bool {
        self.allow_parallel_edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    /// Returns an iterator visiting the vertices in no particular order.
    pub fn vertices(&self) -> Vertices<V, E> {
        Vertices {
            inner: self.vertices.keys(),
        }
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    pub fn contains_edge(&self, edge: &E) -> bool
    where
        E: PartialEq,
    {
        self.vertices
            .get(edge.source())
            .map_or(false, |vertex| vertex.out_edges.iter().contains(edge))
    }

    /// Adds `vertex` with no edges; returns `false` if it is already
    /// present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        match self.vertices.entry(vertex) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(entry) => {
                entry.insert(VertexEdges::new());
                true
            }
        }
    }

    /// Records `edge` in its source's out-list and its target's in-list.
    ///
    /// Both endpoints must already be vertices of the graph. When parallel
    /// edges are disallowed and the source already has an out-edge to the
    /// same target, the edge is rejected with `Ok(false)`.
    pub fn add_edge(&mut self, edge: E) -> Result<bool> {
        if !self.vertices.contains_key(edge.source()) || !self.vertices.contains_key(edge.target())
        {
            return Err(Error::VertexNotFound);
        }
        if !self.allow_parallel_edges
            && self.vertices[edge.source()]
                .out_edges
                .iter()
                .any(|e| e.target() == edge.target())
        {
            return Ok(false);
        }
        let source = edge.source().clone();
        let target = edge.target().clone();
        if source == target {
            let vertex = self.vertices.get_mut(&source).unwrap();
            vertex.in_edges.push(edge.clone());
            vertex.out_edges.push(edge);
        } else {
            self.vertices
                .get_mut(&target)
                .unwrap()
                .in_edges
                .push(edge.clone());
            self.vertices.get_mut(&source).unwrap().out_edges.push(edge);
        }
        self.num_edges += 1;
        Ok(true)
    }

    /// Adds the endpoints of `edge` as needed, then the edge itself.
    pub fn add_edge_with_vertices(&mut self, edge: E) -> bool {
        self.add_vertex(edge.source().clone());
        self.add_vertex(edge.target().clone());
        self.add_edge(edge).unwrap()
    }

    /// Returns an iterator over the out-edges of `vertex` in insertion
    /// order, or `None` if the vertex is unknown.
    pub fn out_edges(&self, vertex: &V) -> Option<slice::Iter<'_, E>> {
        self.vertices.get(vertex).map(|v| v.out_edges.iter())
    }

    /// Returns an iterator over the in-edges of `vertex` in insertion order,
    /// or `None` if the vertex is unknown.
    pub fn in_edges(&self, vertex: &V) -> Option<slice::Iter<'_, E>> {
        self.vertices.get(vertex).map(|v| v.in_edges.iter())
    }
}

impl<V, E> Default for BidirectionalGraph<V, E>
where
    V: Clone + Eq + Hash,
    E: Edge<V> + Clone,
{
    fn default() -> Self {
        Self::new(true)
    }
}

/// An iterator visiting the vertices of a
/// [`BidirectionalGraph`](struct.BidirectionalGraph.html).
pub struct Vertices<'a, V, E> {
    inner: hash_map::Keys<'a, V, VertexEdges<E>>,
}

impl<'a, V, E> Iterator for Vertices<'a, V, E> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<'a, V, E> ExactSizeIterator for Vertices<'a, V, E> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

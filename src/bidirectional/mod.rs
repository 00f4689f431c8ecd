//! The bidirectional directed graph and its undirected structural view.

pub use graph::{BidirectionalGraph, Vertices};
pub use view::{AdjacentEdges, UndirectedView};

mod graph;
mod view;

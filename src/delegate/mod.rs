//! Delegate-backed implicit graphs.
//!
//! The vertex and edge sets of these graphs are not stored anywhere; they are
//! produced on demand by a caller-supplied [`EdgeLookup`](../graph/trait.EdgeLookup.html).
//! Because the lookup may be arbitrarily expensive, every public query
//! invokes it exactly once, never speculatively, and is never implemented by
//! composing other public operations.

pub use directed::DelegateDigraph;
pub use undirected::{DelegateUndigraph, VertexPairEquality};

mod directed;
mod undirected;

use crate::error::{Error, Result};

/// Returns the `index`-th edge of `edges`.
///
/// Shared by the directed and undirected delegate views so that an
/// out-of-range index fails identically in both. The caller is responsible
/// for having already resolved that the vertex owning `edges` exists.
pub(crate) fn edge_at<I>(edges: I, index: usize) -> Result<I::Item>
where
    I: IntoIterator,
{
    edges
        .into_iter()
        .nth(index)
        .ok_or(Error::EdgeIndexOutOfRange(index))
}

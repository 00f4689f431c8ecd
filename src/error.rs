//! Error management.

use derive_more::Display;

/// The failure conditions surfaced by the graph views.
///
/// None of these are caught or retried inside the crate; every condition is
/// returned unchanged to the immediate caller.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// The source reports the queried vertex as unknown.
    #[display(fmt = "vertex not found")]
    VertexNotFound,
    /// A positional edge index is outside `[0, degree)` for the vertex's
    /// current edge sequence.
    #[display(fmt = "edge index {} out of range", _0)]
    EdgeIndexOutOfRange(usize),
    /// The operation is structurally impossible for this view.
    #[display(fmt = "{} is not supported", _0)]
    NotSupported(&'static str),
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

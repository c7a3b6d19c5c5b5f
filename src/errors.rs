// src/errors.rs

//! Crate-wide error types.
//!
//! Lookup misses (unknown node, unknown edge) are deliberately *not* errors
//! anywhere in this crate — they come back as `None` or an empty sequence.
//! The only failing operation is an edge insertion rejected by
//! [`EdgeAdmission::Acyclic`](crate::graph::EdgeAdmission).

use std::fmt::Debug;

use thiserror::Error;

/// An edge insertion was rejected because it would close a directed cycle.
///
/// Carries the offending pair exactly as it was passed to `add_edge`.
/// The graph is left untouched by the rejected call, so this is always
/// recoverable: the caller can drop the edge, pick another pair, or report
/// the conflict upwards.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("adding edge ({u:?} -> {v:?}) would create a cycle")]
pub struct CycleError<N: Debug> {
    /// Source of the rejected edge.
    pub u: N,
    /// Destination of the rejected edge.
    pub v: N,
}

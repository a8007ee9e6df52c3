//! LabelPropError: Unified error type for labelprop public APIs
//!
//! Every fallible entry point in the crate validates its input up front and
//! reports failures through this type before any label state is touched.

use thiserror::Error;

/// Unified error type for labelprop operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LabelPropError {
    /// `indptr` does not have `n_nodes + 1` entries.
    #[error("indptr length mismatch: expected {expected}, got {got}")]
    IndptrLength { expected: usize, got: usize },
    /// `indptr[0]` is not zero.
    #[error("indptr must start at 0, got {got}")]
    IndptrStart { got: usize },
    /// `indptr` decreases between two consecutive offsets.
    #[error("indptr not non-decreasing at offset {index}")]
    IndptrNotMonotonic { index: usize },
    /// The final `indptr` offset does not equal `indices.len()`.
    #[error("indptr tail mismatch: indptr[n_nodes] = {got}, indices.len() = {expected}")]
    IndptrEdgeMismatch { expected: usize, got: usize },
    /// An `indices` entry names a node outside `[0, n_nodes)`.
    #[error("neighbor index {value} at position {position} out of bounds for {n_nodes} nodes")]
    NeighborOutOfBounds {
        position: usize,
        value: usize,
        n_nodes: usize,
    },
    /// An edge endpoint passed to the builder names a node outside `[0, n_nodes)`.
    #[error("edge endpoint {value} out of bounds for {n_nodes} nodes")]
    EdgeEndpointOutOfBounds { value: usize, n_nodes: usize },
    /// A caller-supplied label vector does not have one entry per node.
    #[error("labels length mismatch: expected {expected}, got {got}")]
    LabelsLengthMismatch { expected: usize, got: usize },
    /// A caller-supplied label lies outside `[0, n_nodes)`.
    #[error("label {label} for node {node} out of bounds for {n_nodes} nodes")]
    LabelOutOfRange {
        node: usize,
        label: usize,
        n_nodes: usize,
    },
}

//! # labelprop
//!
//! labelprop computes a community partition of an undirected graph by
//! asynchronous label propagation: every node starts as its own label, and
//! nodes iteratively adopt the most frequent label among their neighbors
//! until a full pass over the graph produces no change. The input is an
//! immutable, validated CSR adjacency ([`graph::CsrGraph`]); the output is
//! one label per node, with nodes sharing a label belonging to the same
//! community.
//!
//! ## Features
//! - Validated CSR graph construction (`from_parts` for pre-assembled arrays,
//!   `from_edges` for edge lists), fail-fast on malformed input
//! - Shuffled-order asynchronous propagation with a strict-inequality
//!   tie-break that favors label stability
//! - Optional pass cap as a safety valve; the default runs to the fixed point
//! - Partition inspection helpers (community counts, sizes, dense relabeling,
//!   fixed-point check)
//!
//! ## Determinism
//!
//! All randomized decisions use a `SmallRng` created per invocation, seeded
//! from [`propagation::LabelPropConfig::rng_seed`] when supplied. Seeded runs
//! are bit-identical; unseeded runs draw from entropy and differ. No global
//! RNG state exists, so concurrent invocations are safe. Unit tests fix seeds
//! explicitly to ensure deterministic behavior.
//!
//! ## Usage
//!
//! ```
//! use labelprop::prelude::*;
//!
//! // Two triangles joined by a single bridge edge.
//! let graph = CsrGraph::from_edges(
//!     6,
//!     &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)],
//! )?;
//! let cfg = LabelPropConfig { rng_seed: Some(42), ..Default::default() };
//! let labels = propagate(&graph, &cfg);
//! assert_eq!(labels.len(), 6);
//! assert_eq!(labels[0], labels[1]);
//! # Ok::<(), labelprop::error::LabelPropError>(())
//! ```

pub mod error;
pub mod graph;
pub mod metrics;
pub mod propagation;
pub mod shuffle;

/// A convenient prelude to import the most-used types and functions:
pub mod prelude {
    pub use crate::error::LabelPropError;
    pub use crate::graph::CsrGraph;
    pub use crate::metrics::{community_count, community_sizes, compress_labels, is_fixed_point};
    pub use crate::propagation::{LabelPropConfig, propagate, propagate_from, propagate_with_rng};
    pub use crate::shuffle::shuffle;
}

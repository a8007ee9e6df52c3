//! Immutable CSR (Compressed Sparse Row) adjacency for undirected graphs.
//!
//! A [`CsrGraph`] stores, per node, a contiguous slice of neighbor ids
//! (`indices`) located via per-node offsets (`indptr`). Construction validates
//! the arrays up front; once built, the structure is read-only and every
//! neighbor access is a contiguous slice of `indices`.
//!
//! Validated invariants:
//! - `indptr.len() == n_nodes + 1`
//! - `indptr` is non-decreasing and `indptr[0] == 0`
//! - `indptr[n_nodes] == indices.len()`
//! - every entry of `indices` lies in `[0, n_nodes)`

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LabelPropError;

/// Immutable CSR adjacency structure.
///
/// The graph is treated as undirected by convention: each undirected edge
/// `{u, v}` is expected to appear in both `u`'s and `v`'s rows. The algorithms
/// in this crate count occurrences, so a self-loop stored once in its own row
/// contributes one occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsrGraph {
    n_nodes: usize,
    indptr: Vec<usize>,
    indices: Vec<usize>,
}

// Deserialization goes through `from_parts` so serialized data cannot bypass
// the CSR invariants.
impl<'de> Deserialize<'de> for CsrGraph {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            n_nodes: usize,
            indptr: Vec<usize>,
            indices: Vec<usize>,
        }
        let raw = Raw::deserialize(deserializer)?;
        CsrGraph::from_parts(raw.n_nodes, raw.indptr, raw.indices)
            .map_err(serde::de::Error::custom)
    }
}

impl CsrGraph {
    /// Build a graph from pre-assembled CSR arrays, validating them.
    ///
    /// Fails fast with a descriptive [`LabelPropError`] before any state is
    /// constructed; a malformed input never yields a partially valid graph.
    pub fn from_parts(
        n_nodes: usize,
        indptr: Vec<usize>,
        indices: Vec<usize>,
    ) -> Result<Self, LabelPropError> {
        if indptr.len() != n_nodes + 1 {
            return Err(LabelPropError::IndptrLength {
                expected: n_nodes + 1,
                got: indptr.len(),
            });
        }
        if indptr[0] != 0 {
            return Err(LabelPropError::IndptrStart { got: indptr[0] });
        }
        for i in 0..n_nodes {
            if indptr[i] > indptr[i + 1] {
                return Err(LabelPropError::IndptrNotMonotonic { index: i });
            }
        }
        if indptr[n_nodes] != indices.len() {
            return Err(LabelPropError::IndptrEdgeMismatch {
                expected: indices.len(),
                got: indptr[n_nodes],
            });
        }
        for (position, &value) in indices.iter().enumerate() {
            if value >= n_nodes {
                return Err(LabelPropError::NeighborOutOfBounds {
                    position,
                    value,
                    n_nodes,
                });
            }
        }
        Ok(Self {
            n_nodes,
            indptr,
            indices,
        })
    }

    /// Build an undirected graph from an edge list.
    ///
    /// Each edge `{u, v}` with `u != v` is inserted into both rows; a
    /// self-loop `(u, u)` is inserted once into `u`'s row. Duplicate edges are
    /// kept (they contribute additional occurrences). Construction uses degree
    /// counts, prefix sums, and per-row write cursors.
    pub fn from_edges(n_nodes: usize, edges: &[(usize, usize)]) -> Result<Self, LabelPropError> {
        for &(u, v) in edges {
            for value in [u, v] {
                if value >= n_nodes {
                    return Err(LabelPropError::EdgeEndpointOutOfBounds { value, n_nodes });
                }
            }
        }

        // 1) degree counts
        let mut degree = vec![0usize; n_nodes];
        for &(u, v) in edges {
            degree[u] += 1;
            if u != v {
                degree[v] += 1;
            }
        }

        // 2) prefix sums
        let mut indptr = vec![0usize; n_nodes + 1];
        for i in 0..n_nodes {
            indptr[i + 1] = indptr[i] + degree[i];
        }
        let m = indptr[n_nodes];

        // 3) populate rows via write cursors
        let mut indices = vec![0usize; m];
        let mut write = indptr.clone();
        for &(u, v) in edges {
            indices[write[u]] = v;
            write[u] += 1;
            if u != v {
                indices[write[v]] = u;
                write[v] += 1;
            }
        }

        Ok(Self {
            n_nodes,
            indptr,
            indices,
        })
    }

    /// Number of nodes.
    #[inline]
    pub fn n_nodes(&self) -> usize {
        self.n_nodes
    }

    /// Total number of stored edge endpoints (`indices.len()`).
    #[inline]
    pub fn n_edge_endpoints(&self) -> usize {
        self.indices.len()
    }

    /// Degree of node `i` (number of stored neighbor occurrences).
    #[inline]
    pub fn degree(&self, i: usize) -> usize {
        self.indptr[i + 1] - self.indptr[i]
    }

    /// Neighbor slice of node `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.indices[self.indptr[i]..self.indptr[i + 1]]
    }

    /// The validated offset array.
    #[inline]
    pub fn indptr(&self) -> &[usize] {
        &self.indptr
    }

    /// The validated neighbor array.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

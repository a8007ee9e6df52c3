//! Partition inspection utilities.
//!
//! Helpers for evaluating a finished labeling: community counts and sizes,
//! dense relabeling, and a fixed-point check. Intended for debugging, testing,
//! and CI validation; none of these compute modularity.

use hashbrown::HashMap;
use itertools::Itertools;

use crate::error::LabelPropError;
use crate::graph::CsrGraph;

/// Number of distinct labels, i.e. the number of communities.
pub fn community_count(labels: &[usize]) -> usize {
    labels.iter().unique().count()
}

/// Map from label value to the number of nodes carrying it.
pub fn community_sizes(labels: &[usize]) -> HashMap<usize, usize> {
    let mut sizes = HashMap::with_capacity(labels.len());
    for &label in labels {
        *sizes.entry(label).or_insert(0) += 1;
    }
    sizes
}

/// Remap surviving labels to the dense range `0..k`.
///
/// Surviving labels are ranked by ascending value, so the result is
/// independent of node order. The partition itself is unchanged: two nodes
/// share a compressed label iff they shared an original one.
pub fn compress_labels(labels: &[usize]) -> Vec<usize> {
    let mut unique: Vec<usize> = labels.iter().copied().collect();
    unique.sort_unstable();
    unique.dedup();
    let remap: HashMap<usize, usize> = unique
        .iter()
        .enumerate()
        .map(|(new, &old)| (old, new))
        .collect();
    labels.iter().map(|l| remap[l]).collect()
}

/// Check whether `labels` is a fixed point of the propagation update rule.
///
/// True iff no node has a neighbor label strictly more frequent than its own
/// current label's neighbor tally. Validates `labels` the same way
/// [`propagate_from`](crate::propagation::propagate_from) does.
pub fn is_fixed_point(graph: &CsrGraph, labels: &[usize]) -> Result<bool, LabelPropError> {
    let n = graph.n_nodes();
    if labels.len() != n {
        return Err(LabelPropError::LabelsLengthMismatch {
            expected: n,
            got: labels.len(),
        });
    }
    for (node, &label) in labels.iter().enumerate() {
        if label >= n {
            return Err(LabelPropError::LabelOutOfRange {
                node,
                label,
                n_nodes: n,
            });
        }
    }

    let mut tally = vec![0usize; n];
    let mut touched: Vec<usize> = Vec::with_capacity(n);
    for node in 0..n {
        for &v in graph.neighbors(node) {
            let lab = labels[v];
            if tally[lab] == 0 {
                touched.push(lab);
            }
            tally[lab] += 1;
        }
        let own = tally[labels[node]];
        let beaten = touched.iter().any(|&lab| tally[lab] > own);
        for &lab in &touched {
            tally[lab] = 0;
        }
        touched.clear();
        if beaten {
            return Ok(false);
        }
    }
    Ok(true)
}

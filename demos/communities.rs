//! Detect communities in a small two-cluster graph and print the partition.
//!
//! Run with `cargo run --example communities`.

use labelprop::prelude::*;

fn main() -> Result<(), LabelPropError> {
    // Two dense clusters of four nodes each, joined by a single bridge.
    let edges = [
        // cluster A: 0..4
        (0, 1),
        (0, 2),
        (0, 3),
        (1, 2),
        (1, 3),
        (2, 3),
        // cluster B: 4..8
        (4, 5),
        (4, 6),
        (4, 7),
        (5, 6),
        (5, 7),
        (6, 7),
        // bridge
        (3, 4),
    ];
    let graph = CsrGraph::from_edges(8, &edges)?;

    let cfg = LabelPropConfig {
        rng_seed: Some(42),
        ..Default::default()
    };
    let labels = compress_labels(&propagate(&graph, &cfg));

    println!("{} communities", community_count(&labels));
    for (node, label) in labels.iter().enumerate() {
        println!("node {node} -> community {label}");
    }
    Ok(())
}

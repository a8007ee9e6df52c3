//! In-place Fisher–Yates shuffle.
//!
//! The propagation engine reshuffles its visitation order once per pass with
//! this primitive. The RNG is threaded in explicitly so runs are reproducible
//! when seeded and independent invocations share no state.

use rand::Rng;

/// Permute `slice` uniformly at random, in place.
///
/// Standard Fisher–Yates traversed from the last index down to index 1: for
/// each `i`, draw `j` uniformly from `[0, i]` and swap. A slice of length 0
/// or 1 is a no-op.
pub fn shuffle<R: Rng>(slice: &mut [usize], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

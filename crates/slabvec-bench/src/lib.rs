//! Benchmark workload builders for the slabvec container.
//!
//! Provides deterministic pre-filled containers and shuffled index
//! sequences so the criterion benches measure container work, not
//! workload generation.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use slabvec::SlabVec;

/// Build a container of `n` elements of `element_size` bytes, each slot
/// filled with its index's low bytes.
pub fn filled_slab(element_size: usize, n: usize) -> SlabVec {
    let mut v = SlabVec::with_capacity(element_size, n).expect("workload allocation");
    let mut elem = vec![0u8; element_size];
    for i in 0..n {
        let tag = (i as u64).to_le_bytes();
        for (j, b) in elem.iter_mut().enumerate() {
            *b = tag[j % tag.len()];
        }
        v.push_bytes(&elem).expect("workload push");
    }
    v
}

/// A drain order for `pop_at`: at step `i`, a valid index into a
/// container of `n - i` remaining elements. Deterministic per seed.
pub fn drain_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|i| rng.random_range(0..n - i)).collect()
}

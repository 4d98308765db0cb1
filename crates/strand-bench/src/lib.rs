//! Benchmark fixtures for Strand sequence containers.
//!
//! Provides deterministic inputs for the criterion targets:
//!
//! - [`filled`]: a container pre-populated through the append path
//! - [`lcg_stream`]: seeded pseudo-random values without an RNG crate

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strand_array::DynArray;

/// Build a container holding `0..n`, populated through `append` so the
/// buffer arrives at its natural doubled capacity.
pub fn filled(n: usize) -> DynArray<u64> {
    let mut xs = DynArray::new();
    for i in 0..n as u64 {
        xs.append(i);
    }
    xs
}

/// Generate `count` deterministic pseudo-random values from `seed`.
///
/// Simple multiply-add mixing; benches reduce the raw values modulo
/// whatever index range they need. Same seed, same stream.
pub fn lcg_stream(seed: u64, count: usize) -> Vec<u64> {
    (0..count as u64)
        .map(|i| {
            seed.wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407))
        })
        .collect()
}

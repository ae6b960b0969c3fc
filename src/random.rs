//! Seeded random number generation.
//!
//! Every run owns exactly one [`StdRng`]. Batch drivers derive one seed per
//! repetition with [`derive_seed`] so that repetitions never share a stream.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic RNG from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates an RNG from the given seed, or from OS entropy when `None`.
pub fn rng_from_option(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}

/// Derives an independent seed for `(stream, index)` under a master seed.
///
/// Uses two rounds of the SplitMix64 finalizer so that neighbouring indices
/// map to unrelated seeds.
pub fn derive_seed(master: u64, stream: u64, index: u64) -> u64 {
    let a = splitmix64(master ^ splitmix64(stream.wrapping_add(0x9E37_79B9_7F4A_7C15)));
    splitmix64(a ^ index.wrapping_mul(0xD6E8_FEB8_6659_FD93))
}

fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

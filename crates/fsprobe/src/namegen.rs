//! Random entry-name generation.
//!
//! Names are drawn uniformly from uppercase ASCII letters and digits,
//! exactly as long as requested. Length 0 yields the empty string.
//! Lengths up to 4096 are supported so oversized-name scenarios can be
//! generated directly.

use rand::rngs::StdRng;
use rand::{Rng, RngExt};

/// Alphabet for generated names: A-Z and 0-9.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a random name of exactly `len` characters using the
/// ambient RNG.
pub fn generate(len: usize) -> String {
    generate_with(&mut rand::rng(), len)
}

/// Generate a random name of exactly `len` characters from an injected
/// RNG, for reproducible harness tests.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Seeded RNG for reproducible name sequences.
pub fn seeded(seed: u64) -> StdRng {
    use rand::SeedableRng;
    StdRng::seed_from_u64(seed)
}

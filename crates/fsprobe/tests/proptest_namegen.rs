//! Property-based tests for the name generator
//!
//! Uses proptest to verify length exactness, alphabet closure, and
//! seeded reproducibility across the whole supported length range.

use fsprobe::classify::LengthBand;
use fsprobe::namegen;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_exact_length(len in 0usize..=4096) {
        let name = namegen::generate(len);
        prop_assert_eq!(name.chars().count(), len);
        // Alphabet is pure ASCII, so byte length agrees with char count
        prop_assert_eq!(name.len(), len);
    }

    #[test]
    fn prop_alphabet_closure(len in 1usize..512) {
        let name = namegen::generate(len);
        prop_assert!(name.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
    }

    #[test]
    fn prop_seeded_names_are_reproducible(seed in any::<u64>(), len in 0usize..300) {
        let a = namegen::generate_with(&mut namegen::seeded(seed), len);
        let b = namegen::generate_with(&mut namegen::seeded(seed), len);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_band_is_total_and_ordered(len in 0usize..=8192, limit in 1usize..=4096) {
        let band = LengthBand::classify(len, limit);
        match band {
            LengthBand::Empty => prop_assert_eq!(len, 0),
            LengthBand::Valid => prop_assert!(len >= 1 && len <= limit),
            LengthBand::Oversized => prop_assert!(len > limit),
        }
    }
}

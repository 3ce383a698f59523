//! Seeded, reproducible card shuffling.
//!
//! ## Algorithm
//!
//! 1. Seed a `DeckRng` (Park-Miller LCG) with the caller's seed.
//! 2. Run a backward Fisher-Yates pass: for `i` from `len - 1` down to 1,
//!    swap `i` with `floor(rng.next_f64() * (i + 1))`.
//! 3. Before every further pass, replace the generator with one reseeded
//!    from its own next draw (`DeckRng::reseeded`), then run another pass.
//!
//! The reseeding compounds: the same seed with a different iteration count
//! produces an unrelated order. Output must match other implementations of
//! this exact scheme bit for bit, so the pass structure is fixed.
//!
//! ```
//! use deck_motion::shuffle::shuffle_cards;
//!
//! let order = shuffle_cards(&["c0", "c1", "c2", "c3"], 1, 1);
//! assert_eq!(order, vec!["c2", "c1", "c3", "c0"]);
//! ```

use crate::core::DeckRng;

/// Fisher-Yates passes used when the caller doesn't choose.
pub const DEFAULT_SHUFFLE_ITERATIONS: usize = 3;

/// Return a shuffled copy of `items`.
///
/// Identical `(items, seed, iterations)` always yield the same order, and the
/// result is always a permutation of the input. Zero iterations returns the
/// input order unchanged.
#[must_use]
pub fn shuffle_cards<T: Clone>(items: &[T], seed: i64, iterations: usize) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffle_in_place(&mut shuffled, seed, iterations);
    shuffled
}

/// Shuffle `items` in place. See `shuffle_cards`.
pub fn shuffle_in_place<T>(items: &mut [T], seed: i64, iterations: usize) {
    let mut rng = DeckRng::new(seed);
    for pass in 0..iterations {
        if pass > 0 {
            rng = rng.reseeded();
        }
        fisher_yates(items, &mut rng);
    }
}

fn fisher_yates<T>(items: &mut [T], rng: &mut DeckRng) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

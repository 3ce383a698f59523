//! Deterministic random number generation for shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence on every platform
//! - **Tiny state**: One 31-bit integer; a clone continues the same sequence
//! - **Reseedable**: A generator can derive its successor from its own output
//!
//! The generator is the Park-Miller "minimal standard" LCG
//! (`state = state * 16807 mod 2^31 - 1`). It is not a good general purpose
//! RNG; it is used because shuffle output has to match other implementations
//! of the same algorithm bit for bit.
//!
//! ```
//! use deck_motion::core::DeckRng;
//!
//! let mut a = DeckRng::new(42);
//! let mut b = DeckRng::new(42);
//! assert_eq!(a.next_f64(), b.next_f64());
//! ```

/// LCG modulus, the Mersenne prime 2^31 - 1.
pub const MODULUS: i64 = 2_147_483_647;

/// LCG multiplier (7^5).
pub const MULTIPLIER: i64 = 16_807;

/// Park-Miller linear congruential generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckRng {
    state: i64,
}

impl DeckRng {
    /// Create a generator from any seed.
    ///
    /// The seed is reduced modulo `MODULUS` and shifted into
    /// `[1, MODULUS - 1]`, so zero and negative seeds are valid.
    #[must_use]
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        Self { state }
    }

    /// Advance and return the raw state, in `[1, MODULUS - 1]`.
    pub fn next_state(&mut self) -> i64 {
        self.state = self.state * MULTIPLIER % MODULUS;
        self.state
    }

    /// Advance and return a float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_state() - 1) as f64 / (MODULUS - 1) as f64
    }

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64).floor() as usize
    }

    /// Derive a fresh generator from this one's next draw.
    ///
    /// The draw is scaled into `[0, MODULUS)` and fed back through the
    /// normal seed reduction.
    #[must_use]
    pub fn reseeded(&mut self) -> Self {
        let seed = (self.next_f64() * MODULUS as f64).floor() as i64;
        Self::new(seed)
    }
}

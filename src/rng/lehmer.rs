/// Park–Miller modulus: the Mersenne prime `2^31 - 1`.
const MODULUS: i64 = 2_147_483_647;
/// Park–Miller multiplier (minimal standard).
const MULTIPLIER: i64 = 16_807;

/// Seeded Lehmer (Park–Miller) generator.
///
/// The state is a nonzero value in `[1, 2^31 - 2]` and every draw is a pure
/// function of it, so a given seed always produces the same infinite
/// sequence. The generator is a strictly sequential state machine; each
/// generation run owns its own instance.
#[derive(Clone, Copy, Debug)]
pub struct Lehmer {
    state: i64,
}

impl Lehmer {
    /// Create a generator from an arbitrary signed seed.
    ///
    /// Seeds are folded into `[1, 2^31 - 2]`: `state = seed mod (2^31 - 1)`,
    /// and non-positive results (including seed 0, which would otherwise be
    /// the generator's fixed point) are shifted up by `2^31 - 2`.
    pub fn new(seed: i64) -> Self {
        let mut state = seed % MODULUS;
        if state <= 0 {
            state += MODULUS - 1;
        }
        Self { state }
    }

    /// Next uniform draw in `[0, 1)`.
    // Inherent `next` is the generator's documented contract, not Iterator.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        // State is in [1, 2^31 - 2]; shift to [0, 2^31 - 3] so 1.0 is excluded.
        ((self.state - 1) as f64) / ((MODULUS - 1) as f64)
    }

    /// Next uniform draw in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next() * (hi - lo)
    }
}

/// Derive the scheduler's seed from the growth seed.
///
/// A fixed affine transform keeps the timing stream decorrelated from the
/// geometry stream while remaining a pure function of the configured seed.
pub fn schedule_seed(seed: i64) -> i64 {
    seed.wrapping_mul(2_654_435_761).wrapping_add(1_013_904_223)
}

#[cfg(test)]
#[path = "../../tests/unit/rng/lehmer.rs"]
mod tests;

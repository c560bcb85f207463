/***************************************/
/*        3rd party libraries          */
/***************************************/
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source for dispatch decisions.
///
/// Wraps `ChaCha8Rng` so the no-candidate fallback draws from a
/// substitutable stream: OS entropy in normal runs, a fixed seed when
/// reproducibility is wanted (configured runs and tests).
pub struct DispatchRng(pub ChaCha8Rng);

impl Default for DispatchRng {
    fn default() -> Self {
        DispatchRng(ChaCha8Rng::from_entropy())
    }
}

impl DispatchRng {
    /// Creates a `DispatchRng` seeded from the given value. Identical
    /// seeds produce identical fallback choices.
    pub fn from_seed_u64(seed: u64) -> DispatchRng {
        DispatchRng(ChaCha8Rng::seed_from_u64(seed))
    }
}

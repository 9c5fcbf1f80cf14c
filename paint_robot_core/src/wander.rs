use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::direction::Direction;

/// Generates `count` random directions. The same seed always yields the same sequence.
///
/// Optional tooling behind the CLI's `--wander`; painting never depends on it.
pub fn wander(count: usize, seed: u64) -> Vec<Direction> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Direction::ALL[rng.random_range(0..Direction::ALL.len())])
        .collect()
}

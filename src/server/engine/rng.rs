use std::hash::{DefaultHasher, Hash, Hasher};

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// Creates a generator whose sequence is fully determined by `seed`.
pub fn seeded(seed: &str) -> StdRng {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    StdRng::seed_from_u64(hasher.finish())
}

/// Creates a generator seeded from the thread-local RNG.
///
/// `ThreadRng` is not `Send`, so async services hold one of these instead.
pub fn fresh() -> StdRng {
    StdRng::from_rng(&mut rand::rng())
}

/// Builds a child seed such as `"{seed}-egg-2"`.
pub fn derive(seed: &str, suffix: impl std::fmt::Display) -> String {
    format!("{}-{}", seed, suffix)
}

/// Generates a seed string for operations where the caller supplied none.
pub fn random_seed(rng: &mut impl Rng) -> String {
    format!("{:016x}", rng.random::<u64>())
}

/// Returns true with probability `p`.
pub fn chance(rng: &mut impl Rng, p: f64) -> bool {
    rng.random::<f64>() < p
}

/// Picks an index in proportion to `weights`.
///
/// Returns 0 for an empty slice and the last index when every weight is zero.
pub fn weighted_index(rng: &mut impl Rng, weights: &[f64]) -> usize {
    if weights.is_empty() {
        return 0;
    }

    let total: f64 = weights.iter().filter(|w| **w > 0.0).sum();
    if total <= 0.0 {
        return weights.len() - 1;
    }

    let mut roll = rng.random::<f64>() * total;
    for (i, weight) in weights.iter().enumerate() {
        if *weight <= 0.0 {
            continue;
        }
        if roll < *weight {
            return i;
        }
        roll -= weight;
    }

    weights.len() - 1
}

/// Returns a shuffled copy of `items`.
pub fn shuffled<T: Clone>(rng: &mut impl Rng, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

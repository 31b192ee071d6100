use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Resolves a requested seed to a concrete value. A seed of 0 means "no seed
/// supplied" and draws a random one from an rng seeded with the current
/// wall-clock time (second granularity); the literal seed 0 can therefore
/// never be requested. Inherited behavior, kept for job-schema compatibility.
pub fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let mut rng = StdRng::seed_from_u64(now);
    rng.gen()
}

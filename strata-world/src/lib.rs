//! # Strata World
//!
//! World lifecycle on top of the noise core: configuration, seed
//! resolution and the sampler each world owns.

/// World configuration loaded from `strata_config.json5`.
pub mod config;

pub use config::{WORLD_CONFIG, WorldConfig};

use strata_utils::noise::SuperSimplexNoise;
use strata_utils::random::{Seeded, random_seed, seed_from_text};

/// A generated world: the resolved seed and the noise kernel driven
/// by it.
#[derive(Debug, Clone)]
pub struct World {
    seed: i64,
    noise: SuperSimplexNoise,
}

impl World {
    /// Creates a world from the configured seed text.
    #[must_use]
    pub fn new(config: &WorldConfig) -> Self {
        let seed = resolve_seed(&config.seed);
        log::info!("Creating world with seed {seed}");
        Self::with_seed(seed)
    }

    /// Creates a world from an already resolved numeric seed.
    #[must_use]
    pub const fn with_seed(seed: i64) -> Self {
        Self {
            seed,
            noise: SuperSimplexNoise::new(seed),
        }
    }

    /// The world's terrain noise sampler.
    #[must_use]
    pub const fn noise(&self) -> &SuperSimplexNoise {
        &self.noise
    }
}

impl Seeded for World {
    fn seed(&self) -> i64 {
        self.seed
    }
}

/// Resolves seed text: blank means random, numeric text is the seed
/// itself, anything else is hashed.
///
/// The numeric parse sees the text exactly as typed, so `" 42 "` is
/// not numeric and hashes like `"42"` instead.
fn resolve_seed(text: &str) -> i64 {
    if text.trim().is_empty() {
        return random_seed();
    }
    text.parse::<i64>()
        .unwrap_or_else(|_| seed_from_text(text.trim()))
}

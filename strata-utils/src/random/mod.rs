//! Seed material and plumbing for reproducible generators.

mod seed_generator;

pub use seed_generator::{random_seed, seed_from_text};

/// A generator whose entire output is determined by an `i64` seed.
pub trait Seeded {
    /// The seed this generator was built from.
    fn seed(&self) -> i64;
}

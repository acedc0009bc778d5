//! # Strata Utils
//!
//! Core primitives for seed-reproducible world generation: 2D vector
//! algebra, SuperSimplex noise, and seed derivation.

/// 2D vector math and floor/interpolation helpers.
pub mod math;

/// Noise generation.
pub mod noise;

/// Seed derivation and the [`Seeded`](random::Seeded) trait.
pub mod random;

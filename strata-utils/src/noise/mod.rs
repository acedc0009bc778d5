//! Noise generation for seed-reproducible world generation.
//!
//! Equal seeds produce bit-identical noise fields on every platform and
//! every run; all of the arithmetic here is ordered with that in mind.

mod super_simplex_noise;

pub use super_simplex_noise::SuperSimplexNoise;

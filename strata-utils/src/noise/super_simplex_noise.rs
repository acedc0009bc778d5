//! 2D SuperSimplex noise over a skewed triangular lattice.

use crate::math::Vector2;
use crate::random::Seeded;

/// Skew factor mapping square-grid input onto the triangular lattice,
/// `(sqrt(3) - 1) / 2`.
const SKEW: f64 = 0.366_025_403_784_439;

/// Unskew factor back out of lattice space, `-(3 - sqrt(3)) / 6`.
const UNSKEW: f64 = -0.211_324_865_405_187_13;

/// Squared radius of every vertex's contribution falloff.
const RSQUARED: f64 = 0.666_666_666_666_666_66;

/// Per-axis primes the lattice cell is multiplied by before hashing.
const PRIME: Vector2<i64> = Vector2::new(0x5205_402B_9270_C86F, 0x598C_D327_0038_17B5);

/// Avalanche multiplier for the gradient hash.
const HASH_MULTIPLIER: i64 = 0x53A3_F72D_EEC5_46F5;

/// Log2 of the gradient table length.
const GRADIENT_BITS: i64 = 7;

/// Number of gradient directions in the table.
const GRADIENT_COUNT: i64 = 1 << GRADIENT_BITS;

/// The falloff of the far diagonal vertex is a linear function of the
/// near vertex's falloff and the unskew offset, so it never needs its
/// own squared-distance evaluation.
const FALLOFF_SLOPE: f64 = 2.0 * (1.0 + 2.0 * UNSKEW) * (1.0 / UNSKEW + 2.0);
const FALLOFF_BIAS: f64 = -2.0 * (1.0 + 2.0 * UNSKEW) * (1.0 + 2.0 * UNSKEW);

/// Seed-reproducible 2D SuperSimplex noise sampler.
///
/// Two samplers built from the same seed return bit-identical values
/// for every input, across runs and across platforms. Output is not
/// normalized; samples stay well inside `[-2.26, 2.26]` and in
/// practice rarely leave `[-1, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct SuperSimplexNoise {
    seed: i64,
}

impl SuperSimplexNoise {
    /// Creates a sampler whose entire output is determined by `seed`.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    /// Samples the noise field at `point`.
    #[must_use]
    pub fn sample(&self, point: Vector2<f64>) -> f64 {
        let skew = point.sum() * SKEW;
        self.base_noise(point + skew)
    }

    /// Accumulates the four nearest lattice vertices of the already
    /// skewed `point`.
    fn base_noise(&self, point: Vector2<f64>) -> f64 {
        let floored = point.floor();
        let decimal = point - floored;

        let hashed = floored.wrapping_hadamard(PRIME);

        let offset = decimal.sum() * UNSKEW;
        let delta = decimal + offset;

        // Both vertices of the cell's shared diagonal always land
        // inside the falloff radius.
        let first = falloff(delta);
        let mut value = self.corner_noise(first, hashed, delta);

        let second = FALLOFF_SLOPE * offset + (FALLOFF_BIAS + first);
        value += self.corner_noise(
            second,
            hashed.wrapping_add(PRIME),
            delta - (1.0 + 2.0 * UNSKEW),
        );

        // The remaining two vertices depend on which halves of the
        // cell the point falls in.
        let difference = decimal.x - decimal.y;
        if offset < UNSKEW {
            if decimal.x + difference > 1.0 {
                let corner = delta - Vector2::new(3.0 * UNSKEW + 2.0, 3.0 * UNSKEW + 1.0);
                let third = falloff(corner);
                if third > 0.0 {
                    value += self.corner_noise(
                        third,
                        hashed.wrapping_add(Vector2::new(PRIME.x << 1, PRIME.y)),
                        corner,
                    );
                }
            } else {
                let corner = delta - Vector2::new(UNSKEW, UNSKEW + 1.0);
                let third = falloff(corner);
                if third > 0.0 {
                    value += self.corner_noise(
                        third,
                        hashed.wrapping_add(Vector2::new(0, PRIME.y)),
                        corner,
                    );
                }
            }
            if decimal.y - difference > 1.0 {
                let corner = delta - Vector2::new(3.0 * UNSKEW + 1.0, 3.0 * UNSKEW + 2.0);
                let fourth = falloff(corner);
                if fourth > 0.0 {
                    value += self.corner_noise(
                        fourth,
                        hashed.wrapping_add(Vector2::new(PRIME.x, PRIME.y << 1)),
                        corner,
                    );
                }
            } else {
                let corner = delta - Vector2::new(UNSKEW + 1.0, UNSKEW);
                let fourth = falloff(corner);
                if fourth > 0.0 {
                    value += self.corner_noise(
                        fourth,
                        hashed.wrapping_add(Vector2::new(PRIME.x, 0)),
                        corner,
                    );
                }
            }
        } else {
            if decimal.x + difference < 0.0 {
                let corner = delta + Vector2::new(1.0 + UNSKEW, UNSKEW);
                let third = falloff(corner);
                if third > 0.0 {
                    value += self.corner_noise(
                        third,
                        hashed.wrapping_sub(Vector2::new(PRIME.x, 0)),
                        corner,
                    );
                }
            } else {
                let corner = delta - Vector2::new(UNSKEW + 1.0, UNSKEW);
                let third = falloff(corner);
                if third > 0.0 {
                    value += self.corner_noise(
                        third,
                        hashed.wrapping_add(Vector2::new(PRIME.x, 0)),
                        corner,
                    );
                }
            }
            if decimal.y < difference {
                let corner = delta + Vector2::new(UNSKEW, UNSKEW + 1.0);
                let fourth = falloff(corner);
                if fourth > 0.0 {
                    value += self.corner_noise(
                        fourth,
                        hashed.wrapping_sub(Vector2::new(0, PRIME.y)),
                        corner,
                    );
                }
            } else {
                let corner = delta - Vector2::new(UNSKEW, UNSKEW + 1.0);
                let fourth = falloff(corner);
                if fourth > 0.0 {
                    value += self.corner_noise(
                        fourth,
                        hashed.wrapping_add(Vector2::new(0, PRIME.y)),
                        corner,
                    );
                }
            }
        }
        value
    }

    /// Quartic falloff times the gradient dot product for one vertex.
    #[inline]
    fn corner_noise(&self, falloff: f64, hashed: Vector2<i64>, delta: Vector2<f64>) -> f64 {
        let falloff_sq = falloff * falloff;
        falloff_sq * falloff_sq * self.gradient_dot(hashed, delta)
    }

    /// Picks the vertex's gradient from the seed and the prime-scaled
    /// cell coordinates, then projects `delta` onto it.
    #[inline]
    fn gradient_dot(&self, hashed: Vector2<i64>, delta: Vector2<f64>) -> f64 {
        let mut hash = self.seed ^ hashed.x ^ hashed.y;
        hash = hash.wrapping_mul(HASH_MULTIPLIER);
        hash ^= hash >> (64 - GRADIENT_BITS + 1);
        let gradient = GRADIENTS[((hash & ((GRADIENT_COUNT - 1) << 1)) >> 1) as usize];
        gradient[0] * delta.x + gradient[1] * delta.y
    }
}

impl Seeded for SuperSimplexNoise {
    fn seed(&self) -> i64 {
        self.seed
    }
}

#[inline]
fn falloff(delta: Vector2<f64>) -> f64 {
    RSQUARED - delta.x * delta.x - delta.y * delta.y
}

/// 24 gradient directions tiled to fill the 128 hash buckets, already
/// rescaled for the quartic falloff kernel.
static GRADIENTS: [[f64; 2]; 128] = [
    [6.9808964966064915, 16.853374757322378],
    [16.853374757322378, 6.9808964966064915],
    [16.853374757322378, -6.9808964966064915],
    [6.9808964966064915, -16.853374757322378],
    [-6.9808964966064915, -16.853374757322378],
    [-16.853374757322378, -6.9808964966064915],
    [-16.853374757322378, 6.9808964966064915],
    [-6.9808964966064915, 16.853374757322378],
    [2.3810537002291805, 18.085899875926934],
    [11.105002835667612, 14.472321057093197],
    [14.472321057093197, 11.105002835667612],
    [18.085899875926934, 2.3810537002291805],
    [18.085899875926934, -2.3810537002291805],
    [14.472321057093197, -11.105002835667612],
    [11.105002835667612, -14.472321057093197],
    [2.3810537002291805, -18.085899875926934],
    [-2.3810537002291805, -18.085899875926934],
    [-11.105002835667612, -14.472321057093197],
    [-14.472321057093197, -11.105002835667612],
    [-18.085899875926934, -2.3810537002291805],
    [-18.085899875926934, 2.3810537002291805],
    [-14.472321057093197, 11.105002835667612],
    [-11.105002835667612, 14.472321057093197],
    [-2.3810537002291805, 18.085899875926934],
    [6.9808964966064915, 16.853374757322378],
    [16.853374757322378, 6.9808964966064915],
    [16.853374757322378, -6.9808964966064915],
    [6.9808964966064915, -16.853374757322378],
    [-6.9808964966064915, -16.853374757322378],
    [-16.853374757322378, -6.9808964966064915],
    [-16.853374757322378, 6.9808964966064915],
    [-6.9808964966064915, 16.853374757322378],
    [2.3810537002291805, 18.085899875926934],
    [11.105002835667612, 14.472321057093197],
    [14.472321057093197, 11.105002835667612],
    [18.085899875926934, 2.3810537002291805],
    [18.085899875926934, -2.3810537002291805],
    [14.472321057093197, -11.105002835667612],
    [11.105002835667612, -14.472321057093197],
    [2.3810537002291805, -18.085899875926934],
    [-2.3810537002291805, -18.085899875926934],
    [-11.105002835667612, -14.472321057093197],
    [-14.472321057093197, -11.105002835667612],
    [-18.085899875926934, -2.3810537002291805],
    [-18.085899875926934, 2.3810537002291805],
    [-14.472321057093197, 11.105002835667612],
    [-11.105002835667612, 14.472321057093197],
    [-2.3810537002291805, 18.085899875926934],
    [6.9808964966064915, 16.853374757322378],
    [16.853374757322378, 6.9808964966064915],
    [16.853374757322378, -6.9808964966064915],
    [6.9808964966064915, -16.853374757322378],
    [-6.9808964966064915, -16.853374757322378],
    [-16.853374757322378, -6.9808964966064915],
    [-16.853374757322378, 6.9808964966064915],
    [-6.9808964966064915, 16.853374757322378],
    [2.3810537002291805, 18.085899875926934],
    [11.105002835667612, 14.472321057093197],
    [14.472321057093197, 11.105002835667612],
    [18.085899875926934, 2.3810537002291805],
    [18.085899875926934, -2.3810537002291805],
    [14.472321057093197, -11.105002835667612],
    [11.105002835667612, -14.472321057093197],
    [2.3810537002291805, -18.085899875926934],
    [-2.3810537002291805, -18.085899875926934],
    [-11.105002835667612, -14.472321057093197],
    [-14.472321057093197, -11.105002835667612],
    [-18.085899875926934, -2.3810537002291805],
    [-18.085899875926934, 2.3810537002291805],
    [-14.472321057093197, 11.105002835667612],
    [-11.105002835667612, 14.472321057093197],
    [-2.3810537002291805, 18.085899875926934],
    [6.9808964966064915, 16.853374757322378],
    [16.853374757322378, 6.9808964966064915],
    [16.853374757322378, -6.9808964966064915],
    [6.9808964966064915, -16.853374757322378],
    [-6.9808964966064915, -16.853374757322378],
    [-16.853374757322378, -6.9808964966064915],
    [-16.853374757322378, 6.9808964966064915],
    [-6.9808964966064915, 16.853374757322378],
    [2.3810537002291805, 18.085899875926934],
    [11.105002835667612, 14.472321057093197],
    [14.472321057093197, 11.105002835667612],
    [18.085899875926934, 2.3810537002291805],
    [18.085899875926934, -2.3810537002291805],
    [14.472321057093197, -11.105002835667612],
    [11.105002835667612, -14.472321057093197],
    [2.3810537002291805, -18.085899875926934],
    [-2.3810537002291805, -18.085899875926934],
    [-11.105002835667612, -14.472321057093197],
    [-14.472321057093197, -11.105002835667612],
    [-18.085899875926934, -2.3810537002291805],
    [-18.085899875926934, 2.3810537002291805],
    [-14.472321057093197, 11.105002835667612],
    [-11.105002835667612, 14.472321057093197],
    [-2.3810537002291805, 18.085899875926934],
    [6.9808964966064915, 16.853374757322378],
    [16.853374757322378, 6.9808964966064915],
    [16.853374757322378, -6.9808964966064915],
    [6.9808964966064915, -16.853374757322378],
    [-6.9808964966064915, -16.853374757322378],
    [-16.853374757322378, -6.9808964966064915],
    [-16.853374757322378, 6.9808964966064915],
    [-6.9808964966064915, 16.853374757322378],
    [2.3810537002291805, 18.085899875926934],
    [11.105002835667612, 14.472321057093197],
    [14.472321057093197, 11.105002835667612],
    [18.085899875926934, 2.3810537002291805],
    [18.085899875926934, -2.3810537002291805],
    [14.472321057093197, -11.105002835667612],
    [11.105002835667612, -14.472321057093197],
    [2.3810537002291805, -18.085899875926934],
    [-2.3810537002291805, -18.085899875926934],
    [-11.105002835667612, -14.472321057093197],
    [-14.472321057093197, -11.105002835667612],
    [-18.085899875926934, -2.3810537002291805],
    [-18.085899875926934, 2.3810537002291805],
    [-14.472321057093197, 11.105002835667612],
    [-11.105002835667612, 14.472321057093197],
    [-2.3810537002291805, 18.085899875926934],
    [6.9808964966064915, 16.853374757322378],
    [16.853374757322378, 6.9808964966064915],
    [16.853374757322378, -6.9808964966064915],
    [6.9808964966064915, -16.853374757322378],
    [-6.9808964966064915, -16.853374757322378],
    [-16.853374757322378, -6.9808964966064915],
    [-16.853374757322378, 6.9808964966064915],
    [-6.9808964966064915, 16.853374757322378],
];

#[cfg(test)]
mod tests {
    use super::*;

    fn split_mix(state: &mut u64) -> u64 {
        *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut mixed = *state;
        mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        mixed ^ (mixed >> 31)
    }

    fn next_coord(state: &mut u64) -> f64 {
        (split_mix(state) >> 11) as f64 / (1_u64 << 53) as f64 * 2000.0 - 1000.0
    }

    #[test]
    fn test_deterministic_across_instances() {
        let first = SuperSimplexNoise::new(-4_819_263_745_120_563);
        let second = SuperSimplexNoise::new(-4_819_263_745_120_563);

        let mut state = 0xD1CE;
        for _ in 0..256 {
            let point = Vector2::new(next_coord(&mut state), next_coord(&mut state));
            assert_eq!(
                first.sample(point).to_bits(),
                second.sample(point).to_bits()
            );
        }
    }

    #[test]
    fn test_known_values() {
        let noise = SuperSimplexNoise::new(1_234_567_890_123_456_789);

        let expected: [(f64, f64, f64); 10] = [
            (0.0, 0.0, 0.0),
            (0.5, 0.5, 0.136_722_280_197_745_54),
            (1.0, 1.0, 0.038_652_436_164_270_575),
            (-1.5, 2.25, -0.708_186_855_932_440_7),
            (0.1, 0.9, 0.277_560_439_484_722_2),
            (3.75, -3.25, -0.024_488_637_452_261_85),
            (123.456, -789.012, 0.516_473_410_107_402_9),
            (-0.001, -0.002, 0.005_279_022_152_615_820_6),
            (1_000_000.123, -999_999.789, 0.365_170_658_276_091_63),
            (0.25, 0.125, 0.050_492_987_344_644_14),
        ];
        for (x, y, value) in expected {
            assert_eq!(
                noise.sample(Vector2::new(x, y)).to_bits(),
                value.to_bits(),
                "sample at ({x}, {y})"
            );
        }
    }

    #[test]
    fn test_known_values_across_seeds() {
        let point = Vector2::new(17.3, -29.6);

        let expected: [(i64, f64); 7] = [
            (0, 0.247_512_175_937_209_95),
            (1, 0.444_481_120_569_478_14),
            (-1, 0.284_463_747_338_045_36),
            (42, -0.292_184_965_491_641_64),
            (i64::MIN, 0.273_920_573_774_043_16),
            (i64::MAX, 0.260_697_081_622_743_4),
            (8_682_522_807_148_012, -0.356_023_338_671_977_33),
        ];
        for (seed, value) in expected {
            assert_eq!(
                SuperSimplexNoise::new(seed).sample(point).to_bits(),
                value.to_bits(),
                "sample for seed {seed}"
            );
        }
    }

    #[test]
    fn test_lattice_points_are_zero() {
        let points = [
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, -1.0),
            Vector2::new(-5.0, 5.0),
            Vector2::new(100.0, -100.0),
            Vector2::new(-3.0, 3.0),
            Vector2::new(7.0, -7.0),
        ];
        for seed in [0, 1, 42, 1_234_567_890_123_456_789, -987_654_321] {
            let noise = SuperSimplexNoise::new(seed);
            for point in points {
                assert_eq!(noise.sample(point), 0.0, "seed {seed} at {point:?}");
            }
        }
    }

    #[test]
    fn test_output_stays_bounded() {
        let noise = SuperSimplexNoise::new(3);

        let mut state = 0x5EED;
        for _ in 0..10_000 {
            let point = Vector2::new(next_coord(&mut state), next_coord(&mut state));
            let value = noise.sample(point);
            assert!(
                (-2.3..=2.3).contains(&value),
                "sample {value} at {point:?} out of range"
            );
        }
    }

    #[test]
    fn test_nearby_samples_stay_close() {
        let noise = SuperSimplexNoise::new(3);
        let step = 1e-4;

        let mut state = 0xA11CE;
        for _ in 0..500 {
            let point = Vector2::new(next_coord(&mut state), next_coord(&mut state));
            let base = noise.sample(point);
            let along_x = noise.sample(point + Vector2::new(step, 0.0));
            let along_y = noise.sample(point + Vector2::new(0.0, step));
            assert!((along_x - base).abs() < 4e-3, "jump near {point:?}");
            assert!((along_y - base).abs() < 4e-3, "jump near {point:?}");
        }
    }

    #[test]
    fn test_seed_is_reported() {
        assert_eq!(SuperSimplexNoise::new(77).seed(), 77);
        assert_eq!(SuperSimplexNoise::new(i64::MIN).seed(), i64::MIN);
    }
}

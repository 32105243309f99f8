//! Deterministic RNG for per-network daily evaluations.
//!
//! # Determinism strategy
//!
//! Every (day, network, disease) evaluation draws from its own `SmallRng`
//! seeded by mixing the run seed with the three coordinates:
//!
//!   seed = global_seed ^ mix(day) ^ mix(network) ^ mix(disease)
//!
//! Each coordinate is multiplied by a distinct odd constant derived from the
//! golden ratio before XOR-ing, so neighbouring coordinates land far apart in
//! seed space.  Consequences:
//!
//! - Evaluations never share RNG state, so worker threads need no
//!   synchronisation and the result does not depend on scheduling order.
//! - Adding a network at the end of the list does not disturb the draws of
//!   existing networks.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{Day, DiseaseId, NetworkId};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;
const DAY_SALT:        u64 = 0xbf58_476d_1ce4_e5b9;
const DISEASE_SALT:    u64 = 0x94d0_49bb_1331_11eb;

/// RNG owned by a single network-day-disease evaluation.
///
/// Intentionally not `Clone`: two evaluations must never replay the same
/// stream by accident.
pub struct ContactRng(SmallRng);

impl ContactRng {
    /// Seed deterministically from the run seed and the evaluation coordinates.
    pub fn for_evaluation(global_seed: u64, day: Day, network: NetworkId, disease: DiseaseId) -> Self {
        let seed = global_seed
            ^ (u64::from(day.0) + 1).wrapping_mul(DAY_SALT)
            ^ (u64::from(network.0) + 1).wrapping_mul(MIXING_CONSTANT)
            ^ (u64::from(disease.0) + 1).wrapping_mul(DISEASE_SALT);
        ContactRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed directly, for tests and ad-hoc draws.
    pub fn from_seed(seed: u64) -> Self {
        ContactRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Round a non-negative mean to an integer count without bias:
    /// `floor(mean)` plus one more with probability `fract(mean)`.
    pub fn round_stochastic(&mut self, mean: f64) -> usize {
        if mean <= 0.0 || !mean.is_finite() {
            return 0;
        }
        let whole = mean.floor();
        let extra = self.gen_bool(mean - whole);
        whole as usize + usize::from(extra)
    }
}

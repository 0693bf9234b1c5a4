//! Deterministic, injectable random source for agent decisions.
//!
//! # Determinism strategy
//!
//! The engine never touches process-wide randomness.  Every stochastic call
//! (reactive sampling, uniform fallbacks in the goal-directed and strategic
//! policies) draws from an `AgentRng` handed in by the driver.
//!
//! A driver that wants one independent stream per agent seeds it with:
//!
//!   seed = global_seed XOR (agent_id * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive agent IDs uniformly across the seed space, so
//! growing a population does not disturb the streams of existing agents.
//! A driver that prefers one shared stream uses [`AgentRng::from_seed`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::AgentId;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable pseudo-random source passed to every decision call.
///
/// The type is `!Sync`; an agent's stream is owned by whoever drives it.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed and an agent ID.
    pub fn new(global_seed: u64, agent: AgentId) -> Self {
        let seed = global_seed ^ (agent.0 as u64).wrapping_mul(MIXING_CONSTANT);
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// A plain seeded stream, for drivers sharing one source across agents.
    pub fn from_seed(seed: u64) -> Self {
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, `WeightedIndex`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Uniform index into a collection of length `len`.
    ///
    /// Returns `None` when `len == 0`.
    #[inline]
    pub fn index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.0.gen_range(0..len))
    }
}

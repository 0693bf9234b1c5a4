//! Strongly typed agent identifier.
//!
//! The id is opaque to the engine: it is only carried, compared and printed.
//! The inner integer is `pub` so population builders can assign ids from a
//! running counter; it also feeds the per-agent RNG seed mixer.

use std::fmt;

/// Unique identifier of one simulated individual.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentId(pub u32);

impl AgentId {
    /// Cast to `usize` for drivers that keep their population in id order.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for AgentId {
    #[inline(always)]
    fn from(n: u32) -> AgentId {
        AgentId(n)
    }
}

impl TryFrom<usize> for AgentId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<AgentId, Self::Error> {
        u32::try_from(n).map(AgentId)
    }
}

//! Read-only view of one agent's cognitive state, shared by every policy.

use nd_belief::{BeliefStore, MetaBeliefs};
use nd_core::DecisionParams;

/// Borrowed snapshot of everything a policy may read.
///
/// Built by the agent for the duration of one `decide` call; policies never
/// mutate beliefs.
#[derive(Clone, Copy, Debug)]
pub struct CognitiveState<'a> {
    /// First-order beliefs.
    pub beliefs: &'a BeliefStore,

    /// Second-order beliefs; empty below the strategic level.
    pub meta: &'a MetaBeliefs,

    /// Partisan alignment in `[0, 1]`.
    pub party_loyalty: f64,

    pub params: &'a DecisionParams,
}

impl<'a> CognitiveState<'a> {
    #[inline]
    pub fn new(
        beliefs:       &'a BeliefStore,
        meta:          &'a MetaBeliefs,
        party_loyalty: f64,
        params:        &'a DecisionParams,
    ) -> Self {
        Self { beliefs, meta, party_loyalty, params }
    }
}

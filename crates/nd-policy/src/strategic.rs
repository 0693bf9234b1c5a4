//! Level 2: reason about the perceived consensus, then defer to the party.

use tracing::warn;

use nd_core::AgentRng;

use crate::{Choice, CognitiveState, DecisionContext, DecisionPolicy, GoalDirected};

/// Strategic choice.
///
/// 1. Compare the agent's own dominant belief with the dominant belief it
///    attributes to others (meta-belief depth 1).
///    - Same norm: take the goal-directed option, confidence
///      `aligned_confidence`.
///    - Different: uniform random pick, confidence `misaligned_confidence`.
/// 2. If the context names a party position and party loyalty is strictly
///    above `loyalty_threshold`, that position wins and confidence becomes
///    the loyalty itself.
///
/// An agent with no model of others decides exactly like [`GoalDirected`]
/// and skips the party step.
pub struct Strategic;

impl DecisionPolicy for Strategic {
    fn choose(
        &self,
        state:   &CognitiveState<'_>,
        options: &[&str],
        ctx:     &DecisionContext,
        rng:     &mut AgentRng,
    ) -> Choice {
        let Some(others) = state.meta.others() else {
            return GoalDirected.choose(state, options, ctx, rng);
        };

        let own_dominant = state.beliefs.dominant().map(|(norm, _)| norm);
        let others_dominant = others.dominant().map(|(norm, _)| norm);

        let mut choice = if own_dominant == others_dominant {
            let index = GoalDirected.choose(state, options, ctx, rng).index;
            Choice::new(index, state.params.aligned_confidence)
        } else {
            let index = rng.index(options.len()).unwrap_or(0);
            Choice::new(index, state.params.misaligned_confidence)
        };

        if let Some(position) = ctx.party_position.as_deref() {
            if state.party_loyalty > state.params.loyalty_threshold {
                match options.iter().position(|o| *o == position) {
                    Some(index) => choice = Choice::new(index, state.party_loyalty),
                    None => warn!(
                        party_position = position,
                        n_options = options.len(),
                        "party position is not among the offered options; ignoring it"
                    ),
                }
            }
        }

        choice
    }
}

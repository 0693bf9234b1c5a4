//! Level 1: act on the dominant belief through a lexical heuristic.

use nd_core::AgentRng;

use crate::lexicon::Label;
use crate::{Choice, CognitiveState, DecisionContext, DecisionPolicy};

/// Confidence reported when the agent holds no beliefs at all.
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// The norm consulted by the support/reform heuristic.
pub const LIBERTY: &str = "liberty";

/// Goal-directed choice.
///
/// Only the *first* option's label is inspected.  If it mentions `support`
/// or `reform`, the agent backs it when its `liberty` belief exceeds the
/// configured threshold and otherwise takes the second option (or the
/// first again when there is no second).  A first option mentioning
/// neither stem yields a uniform random pick.
///
/// Confidence is always the strength of the dominant belief.
pub struct GoalDirected;

impl DecisionPolicy for GoalDirected {
    fn choose(
        &self,
        state:   &CognitiveState<'_>,
        options: &[&str],
        _ctx:    &DecisionContext,
        rng:     &mut AgentRng,
    ) -> Choice {
        let confidence = state
            .beliefs
            .dominant()
            .map_or(NEUTRAL_CONFIDENCE, |(_, strength)| strength);

        let index = if Label::new(options[0]).backs_change() {
            let favours_liberty = state
                .beliefs
                .get(LIBERTY)
                .is_some_and(|v| v > state.params.liberty_threshold);
            if favours_liberty || options.len() == 1 { 0 } else { 1 }
        } else {
            rng.index(options.len()).unwrap_or(0)
        };

        Choice::new(index, confidence)
    }
}

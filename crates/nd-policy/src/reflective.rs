//! Level 3: score every option by hypothetical reasoning, take the best.

use nd_core::AgentRng;

use crate::goal_directed::NEUTRAL_CONFIDENCE;
use crate::lexicon::{Label, CONTROL, REFORM};
use crate::{Choice, CognitiveState, DecisionContext, DecisionPolicy};

/// Score one option in `[0, 1]`.
///
/// Starting from `base_score`:
/// - each belief whose name appears in the lowercased label adds
///   `belief_weight * strength`;
/// - during a crisis, a `control` label gains `crisis_bonus`, any other
///   label loses `crisis_penalty`;
/// - under pressure above `pressure_threshold`, a `reform` label gains
///   `pressure_bonus`, any other label loses `pressure_penalty`.
///
/// The sum is clamped to `[0, 1]`.
pub fn evaluate_option(state: &CognitiveState<'_>, option: &str, ctx: &DecisionContext) -> f64 {
    let p = state.params;
    let label = Label::new(option);

    let mut score = p.base_score;

    for (belief, strength) in state.beliefs.iter() {
        if label.mentions(belief) {
            score += p.belief_weight * strength;
        }
    }

    if ctx.crisis {
        score += if label.mentions(CONTROL) { p.crisis_bonus } else { -p.crisis_penalty };
    }
    if ctx.pressure_above(p.pressure_threshold) {
        score += if label.mentions(REFORM) { p.pressure_bonus } else { -p.pressure_penalty };
    }

    score.clamp(0.0, 1.0)
}

/// Reflective choice: the highest-scoring option (earliest on ties), with
/// confidence equal to its share of the total score.
pub struct Reflective;

impl DecisionPolicy for Reflective {
    fn choose(
        &self,
        state:   &CognitiveState<'_>,
        options: &[&str],
        ctx:     &DecisionContext,
        _rng:    &mut AgentRng,
    ) -> Choice {
        let scores: Vec<f64> = options
            .iter()
            .map(|o| evaluate_option(state, o, ctx))
            .collect();

        let mut best = 0;
        for (i, &s) in scores.iter().enumerate().skip(1) {
            if s > scores[best] {
                best = i;
            }
        }

        let total: f64 = scores.iter().sum();
        let confidence = if total > 0.0 { scores[best] / total } else { NEUTRAL_CONFIDENCE };

        Choice::new(best, confidence)
    }
}

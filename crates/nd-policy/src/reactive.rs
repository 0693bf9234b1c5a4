//! Level 0: a belief-free lottery over the options.

use rand::distributions::WeightedIndex;
use rand::Rng;

use nd_core::AgentRng;

use crate::{Choice, CognitiveState, DecisionContext, DecisionPolicy};

/// Draws an independent uniform weight per option, normalises the weights
/// into a distribution, and samples one option from it.
///
/// Confidence is the probability mass of the sampled option.  Beliefs and
/// context are ignored.
pub struct Reactive;

impl DecisionPolicy for Reactive {
    fn choose(
        &self,
        _state:  &CognitiveState<'_>,
        options: &[&str],
        _ctx:    &DecisionContext,
        rng:     &mut AgentRng,
    ) -> Choice {
        let weights: Vec<f64> = options.iter().map(|_| rng.random::<f64>()).collect();
        let total: f64 = weights.iter().sum();

        match WeightedIndex::new(&weights) {
            Ok(dist) => {
                let index = rng.inner().sample(&dist);
                Choice::new(index, weights[index] / total)
            }
            // Every weight drew exactly zero: fall back to a uniform pick.
            Err(_) => {
                let index = rng.index(options.len()).unwrap_or(0);
                Choice::new(index, 1.0 / options.len() as f64)
            }
        }
    }
}

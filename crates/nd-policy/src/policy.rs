//! The `DecisionPolicy` trait and the level → policy table.

use nd_belief::clamp_unit;
use nd_core::{AgentRng, IntentionalityLevel, NdError, NdResult};

use crate::{
    Choice, CognitiveState, Decision, DecisionContext, GoalDirected, Reactive, Reflective,
    Strategic,
};

/// One tier of the decision hierarchy.
///
/// # Contract
///
/// `options` is never empty (checked by [`decide`] before dispatch).  The
/// returned [`Choice::index`] must be `< options.len()`; `decide` clamps the
/// confidence to `[0, 1]` so implementations need not.
///
/// Implementations are stateless unit structs so the table below can hand
/// out `&'static` references.
pub trait DecisionPolicy: Send + Sync + 'static {
    fn choose(
        &self,
        state:   &CognitiveState<'_>,
        options: &[&str],
        ctx:     &DecisionContext,
        rng:     &mut AgentRng,
    ) -> Choice;
}

static POLICIES: [&dyn DecisionPolicy; 4] = [&Reactive, &GoalDirected, &Strategic, &Reflective];

/// The policy an agent at `level` decides with.
#[inline]
pub fn policy_for(level: IntentionalityLevel) -> &'static dyn DecisionPolicy {
    POLICIES[level.value() as usize]
}

/// Choose one of `options` for an agent at `level`.
///
/// `ctx = None` is the empty context.  Fails with [`NdError::EmptyOptions`]
/// when `options` is empty; otherwise always returns an element of `options`
/// with a confidence in `[0, 1]`.
pub fn decide<'o, S: AsRef<str>>(
    level:   IntentionalityLevel,
    state:   &CognitiveState<'_>,
    options: &'o [S],
    ctx:     Option<&DecisionContext>,
    rng:     &mut AgentRng,
) -> NdResult<Decision<'o>> {
    if options.is_empty() {
        return Err(NdError::EmptyOptions);
    }
    let labels: Vec<&'o str> = options.iter().map(|o| o.as_ref()).collect();

    let empty = DecisionContext::default();
    let ctx = ctx.unwrap_or(&empty);

    let choice = policy_for(level).choose(state, &labels, ctx, rng);
    debug_assert!(choice.index < labels.len(), "policy returned out-of-range index");
    let index = choice.index.min(labels.len() - 1);

    Ok(Decision {
        option: labels[index],
        index,
        confidence: clamp_unit(choice.confidence),
    })
}

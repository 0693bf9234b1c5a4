//! Numeric parameters of the belief-revision rules and decision policies.
//!
//! `Default` reproduces the calibrated model exactly; drivers that run
//! sensitivity sweeps build a modified copy and pass it to the agent
//! builder.  Typically loaded from a TOML/JSON file by the driver when the
//! `serde` feature is on.

use crate::{NdError, NdResult};

// ── UpdateParams ─────────────────────────────────────────────────────────────

/// Parameters of the three first-order update rules.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UpdateParams {
    /// Strength assigned to a norm the first time it is seen.
    pub prior: f64,

    /// Learning rate of the plain Bayesian pull toward the evidence.
    pub learning_rate: f64,

    /// `|evidence - prior|` below this counts as confirming evidence.
    pub confirmation_window: f64,

    /// HBU multiplier on the learning rate for confirming evidence.
    pub hbu_confirm_factor: f64,

    /// HBU multiplier on the learning rate for contradicting evidence.
    pub hbu_contradict_factor: f64,

    /// Confirmation-bias learning rate for contradicting evidence.
    pub bias_contradict_rate: f64,
}

impl Default for UpdateParams {
    fn default() -> Self {
        Self {
            prior:                 0.5,
            learning_rate:         0.3,
            confirmation_window:   0.3,
            hbu_confirm_factor:    1.39,
            hbu_contradict_factor: 0.71,
            bias_contradict_rate:  0.1,
        }
    }
}

// ── MetaParams ───────────────────────────────────────────────────────────────

/// Parameters of second-order belief tracking.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MetaParams {
    /// Weight kept on the previous meta-belief; `1 - inertia` goes to the
    /// agent's own fresh belief.
    pub inertia: f64,
}

impl Default for MetaParams {
    fn default() -> Self {
        Self { inertia: 0.7 }
    }
}

// ── DecisionParams ───────────────────────────────────────────────────────────

/// Parameters of the strategic and reflective decision policies.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecisionParams {
    /// `liberty` strength above which a goal-directed agent backs a
    /// support/reform option.
    pub liberty_threshold: f64,

    /// Strategic confidence when own and perceived dominant beliefs agree.
    pub aligned_confidence: f64,

    /// Strategic confidence when they disagree.
    pub misaligned_confidence: f64,

    /// Party loyalty strictly above this makes the party position binding.
    pub loyalty_threshold: f64,

    /// Starting score of every option under reflective evaluation.
    pub base_score: f64,

    /// Score added per matching belief, times the belief's strength.
    pub belief_weight: f64,

    /// Bonus for a `control` option during a crisis.
    pub crisis_bonus: f64,

    /// Penalty for any other option during a crisis.
    pub crisis_penalty: f64,

    /// Reform pressure strictly above this activates the pressure terms.
    pub pressure_threshold: f64,

    /// Bonus for a `reform` option under high pressure.
    pub pressure_bonus: f64,

    /// Penalty for any other option under high pressure.
    pub pressure_penalty: f64,
}

impl Default for DecisionParams {
    fn default() -> Self {
        Self {
            liberty_threshold:     0.5,
            aligned_confidence:    0.8,
            misaligned_confidence: 0.5,
            loyalty_threshold:     0.7,
            base_score:            0.5,
            belief_weight:         0.3,
            crisis_bonus:          0.2,
            crisis_penalty:        0.1,
            pressure_threshold:    0.7,
            pressure_bonus:        0.2,
            pressure_penalty:      0.1,
        }
    }
}

// ── CognitionConfig ──────────────────────────────────────────────────────────

/// Complete parameter set carried by every agent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CognitionConfig {
    pub update:   UpdateParams,
    pub meta:     MetaParams,
    pub decision: DecisionParams,
}

impl CognitionConfig {
    /// Check every parameter against its admissible range.
    ///
    /// Probabilities, rates and thresholds must lie in `[0, 1]`; the HBU
    /// factors must be positive and keep the scaled learning rate within
    /// `[0, 1]`, otherwise a single update could overshoot the evidence.
    pub fn validate(&self) -> NdResult<()> {
        let u = &self.update;
        let d = &self.decision;

        let unit = [
            ("update.prior",                  u.prior),
            ("update.learning_rate",          u.learning_rate),
            ("update.confirmation_window",    u.confirmation_window),
            ("update.bias_contradict_rate",   u.bias_contradict_rate),
            ("meta.inertia",                  self.meta.inertia),
            ("decision.liberty_threshold",    d.liberty_threshold),
            ("decision.aligned_confidence",   d.aligned_confidence),
            ("decision.misaligned_confidence", d.misaligned_confidence),
            ("decision.loyalty_threshold",    d.loyalty_threshold),
            ("decision.base_score",           d.base_score),
            ("decision.belief_weight",        d.belief_weight),
            ("decision.crisis_bonus",         d.crisis_bonus),
            ("decision.crisis_penalty",       d.crisis_penalty),
            ("decision.pressure_threshold",   d.pressure_threshold),
            ("decision.pressure_bonus",       d.pressure_bonus),
            ("decision.pressure_penalty",     d.pressure_penalty),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(NdError::Config(format!("{name} must be in [0, 1], got {value}")));
            }
        }

        for (name, factor) in [
            ("update.hbu_confirm_factor",    u.hbu_confirm_factor),
            ("update.hbu_contradict_factor", u.hbu_contradict_factor),
        ] {
            if !(factor.is_finite() && factor > 0.0) {
                return Err(NdError::Config(format!("{name} must be positive, got {factor}")));
            }
            let scaled = u.learning_rate * factor;
            if scaled > 1.0 {
                return Err(NdError::Config(format!(
                    "update.learning_rate * {name} = {scaled} exceeds 1"
                )));
            }
        }

        Ok(())
    }
}

//! The three first-order belief-revision rules.
//!
//! All rules are linear pulls of the prior toward the evidence,
//! `prior + rate * (evidence - prior)`, and differ only in how `rate` is
//! chosen:
//!
//! | Rule               | Confirming (`\|e - p\| < window`) | Contradicting        |
//! |--------------------|-----------------------------------|----------------------|
//! | `Bayesian`         | `lr`                              | `lr`                 |
//! | `Heteronomous`     | `lr * 1.39`                       | `lr * 0.71`          |
//! | `ConfirmationBias` | `lr`                              | `0.1`                |
//!
//! `Heteronomous` degrades to `Bayesian` for agents without a group identity.

use std::fmt;
use std::str::FromStr;

use nd_core::{NdError, UpdateParams};

/// Belief-revision rule selected by the driver per update.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum UpdateRule {
    /// Fixed-learning-rate pull toward the evidence.
    #[default]
    Bayesian,
    /// Heteronomous Bayesian updating: identity-protective reweighting of
    /// confirming vs. contradicting evidence.
    Heteronomous,
    /// Near-rejection of contradicting evidence.
    ConfirmationBias,
}

impl UpdateRule {
    pub const ALL: [UpdateRule; 3] = [
        UpdateRule::Bayesian,
        UpdateRule::Heteronomous,
        UpdateRule::ConfirmationBias,
    ];

    /// Canonical name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            UpdateRule::Bayesian         => "bayesian",
            UpdateRule::Heteronomous     => "hbu",
            UpdateRule::ConfirmationBias => "confirmation_bias",
        }
    }

    /// Raw (unclamped) posterior for `prior` after observing `evidence`.
    ///
    /// `has_group_identity` only matters for [`UpdateRule::Heteronomous`].
    pub fn posterior(
        self,
        prior:              f64,
        evidence:           f64,
        has_group_identity: bool,
        params:             &UpdateParams,
    ) -> f64 {
        match self {
            UpdateRule::Bayesian => bayesian(prior, evidence, params),
            UpdateRule::Heteronomous => {
                if has_group_identity {
                    heteronomous(prior, evidence, params)
                } else {
                    bayesian(prior, evidence, params)
                }
            }
            UpdateRule::ConfirmationBias => confirmation_bias(prior, evidence, params),
        }
    }
}

#[inline]
fn confirms(prior: f64, evidence: f64, params: &UpdateParams) -> bool {
    (evidence - prior).abs() < params.confirmation_window
}

#[inline]
fn pull(prior: f64, evidence: f64, rate: f64) -> f64 {
    prior + rate * (evidence - prior)
}

fn bayesian(prior: f64, evidence: f64, params: &UpdateParams) -> f64 {
    pull(prior, evidence, params.learning_rate)
}

fn heteronomous(prior: f64, evidence: f64, params: &UpdateParams) -> f64 {
    let factor = if confirms(prior, evidence, params) {
        params.hbu_confirm_factor
    } else {
        params.hbu_contradict_factor
    };
    pull(prior, evidence, params.learning_rate * factor)
}

fn confirmation_bias(prior: f64, evidence: f64, params: &UpdateParams) -> f64 {
    if confirms(prior, evidence, params) {
        bayesian(prior, evidence, params)
    } else {
        pull(prior, evidence, params.bias_contradict_rate)
    }
}

impl fmt::Display for UpdateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateRule {
    type Err = NdError;

    /// Accepts `bayesian`, `hbu` and `confirmation_bias` (also spelled
    /// `confirmationBias`).  Anything else is [`NdError::InvalidRule`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bayesian"                              => Ok(UpdateRule::Bayesian),
            "hbu"                                   => Ok(UpdateRule::Heteronomous),
            "confirmation_bias" | "confirmationBias" => Ok(UpdateRule::ConfirmationBias),
            other => Err(NdError::InvalidRule(other.to_owned())),
        }
    }
}

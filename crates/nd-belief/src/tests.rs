//! Unit tests for nd-belief.

use nd_core::{MetaParams, NdError, UpdateParams};

use crate::{clamp_unit, BeliefStore, MetaBeliefs, UpdateRule};

// ── Helpers ───────────────────────────────────────────────────────────────────

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

fn params() -> UpdateParams {
    UpdateParams::default()
}

// ── BeliefStore ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod store_tests {
    use super::*;

    #[test]
    fn neutral_store_has_liberty_and_control() {
        let s = BeliefStore::neutral(0.5);
        assert_eq!(s.len(), 2);
        assert_eq!(s.get("liberty"), Some(0.5));
        assert_eq!(s.get("control"), Some(0.5));
    }

    #[test]
    fn writes_are_clamped() {
        let mut s = BeliefStore::new();
        assert_eq!(s.set("liberty", 1.7), 1.0);
        assert_eq!(s.set("control", -0.2), 0.0);
        let collected: BeliefStore = [("x", 3.0), ("y", -1.0)].into_iter().collect();
        assert_eq!(collected.get("x"), Some(1.0));
        assert_eq!(collected.get("y"), Some(0.0));
    }

    #[test]
    fn nan_writes_become_zero() {
        let mut s = BeliefStore::new();
        assert_eq!(s.set("liberty", f64::NAN), 0.0);
        assert_eq!(s.get("liberty"), Some(0.0));
        assert_eq!(clamp_unit(f64::NAN), 0.0);
    }

    #[test]
    fn get_or_insert_initialises_unseen_norm() {
        let mut s = BeliefStore::new();
        assert_eq!(s.get_or_insert("equality", 0.5), 0.5);
        assert!(s.contains("equality"));
        s.set("equality", 0.9);
        assert_eq!(s.get_or_insert("equality", 0.5), 0.9);
    }

    #[test]
    fn dominant_picks_highest() {
        let s: BeliefStore = [("liberty", 0.3), ("control", 0.8), ("order", 0.6)]
            .into_iter()
            .collect();
        assert_eq!(s.dominant(), Some(("control", 0.8)));
    }

    #[test]
    fn dominant_ties_go_to_smallest_key() {
        let s: BeliefStore = [("liberty", 0.7), ("control", 0.7)].into_iter().collect();
        assert_eq!(s.dominant(), Some(("control", 0.7)));
    }

    #[test]
    fn dominant_of_empty_is_none() {
        assert_eq!(BeliefStore::new().dominant(), None);
    }

    #[test]
    fn iteration_is_key_ordered() {
        let s: BeliefStore = [("b", 0.1), ("a", 0.2), ("c", 0.3)].into_iter().collect();
        let keys: Vec<&str> = s.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }
}

// ── UpdateRule ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rule_tests {
    use super::*;

    #[test]
    fn bayesian_pulls_thirty_percent() {
        let p = UpdateRule::Bayesian.posterior(0.5, 1.0, false, &params());
        assert!(approx(p, 0.65), "got {p}");
    }

    #[test]
    fn hbu_boosts_confirming_evidence() {
        let p = UpdateRule::Heteronomous.posterior(0.5, 0.6, true, &params());
        assert!(approx(p, 0.5 + 0.3 * 1.39 * 0.1), "got {p}");
        assert!((p - 0.5417).abs() < 1e-4);
    }

    #[test]
    fn hbu_damps_contradicting_evidence() {
        let p = UpdateRule::Heteronomous.posterior(0.5, 0.9, true, &params());
        assert!(approx(p, 0.5 + 0.3 * 0.71 * 0.4), "got {p}");
        assert!((p - 0.5852).abs() < 1e-4);
    }

    #[test]
    fn hbu_without_identity_is_bayesian() {
        for (p, e) in [(0.5, 0.6), (0.5, 0.9), (0.2, 0.0)] {
            let hbu = UpdateRule::Heteronomous.posterior(p, e, false, &params());
            let bay = UpdateRule::Bayesian.posterior(p, e, false, &params());
            assert_eq!(hbu, bay);
        }
    }

    #[test]
    fn confirmation_bias_damps_disconfirming() {
        let biased = UpdateRule::ConfirmationBias.posterior(0.5, 0.95, false, &params());
        let bay = UpdateRule::Bayesian.posterior(0.5, 0.95, false, &params());
        assert!(approx(biased, 0.545), "got {biased}");
        assert!(approx(bay, 0.635), "got {bay}");
        assert!(biased - 0.5 < bay - 0.5);
    }

    #[test]
    fn confirmation_bias_accepts_confirming() {
        let biased = UpdateRule::ConfirmationBias.posterior(0.5, 0.7, false, &params());
        let bay = UpdateRule::Bayesian.posterior(0.5, 0.7, false, &params());
        assert_eq!(biased, bay);
    }

    #[test]
    fn wide_gap_uses_damped_rate() {
        let p = UpdateRule::ConfirmationBias.posterior(0.25, 0.75, false, &params());
        assert!(approx(p, 0.25 + 0.1 * 0.5), "got {p}");
    }

    #[test]
    fn posteriors_stay_in_unit_interval() {
        let grid: Vec<f64> = (0..=20).map(|i| i as f64 / 20.0).collect();
        for rule in UpdateRule::ALL {
            for identity in [false, true] {
                for &p in &grid {
                    for &e in &grid {
                        let post = rule.posterior(p, e, identity, &params());
                        assert!((0.0..=1.0).contains(&post), "{rule} p={p} e={e} -> {post}");
                    }
                }
            }
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!("bayesian".parse::<UpdateRule>(), Ok(UpdateRule::Bayesian));
        assert_eq!("hbu".parse::<UpdateRule>(), Ok(UpdateRule::Heteronomous));
        assert_eq!("confirmation_bias".parse::<UpdateRule>(), Ok(UpdateRule::ConfirmationBias));
        assert_eq!("confirmationBias".parse::<UpdateRule>(), Ok(UpdateRule::ConfirmationBias));
        for rule in UpdateRule::ALL {
            assert_eq!(rule.as_str().parse::<UpdateRule>(), Ok(rule));
        }
    }

    #[test]
    fn unknown_name_is_invalid_rule() {
        assert_eq!(
            "bayes".parse::<UpdateRule>(),
            Err(NdError::InvalidRule("bayes".into()))
        );
    }
}

// ── MetaBeliefs ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod meta_tests {
    use super::*;

    #[test]
    fn empty_ignores_observations() {
        let mut m = MetaBeliefs::empty();
        assert_eq!(m.observe("liberty", 0.9, 0.5, &MetaParams::default()), None);
        assert!(m.is_empty());
    }

    #[test]
    fn seeded_copy_of_own_beliefs() {
        let own: BeliefStore = [("liberty", 0.8), ("control", 0.2)].into_iter().collect();
        let m = MetaBeliefs::seeded_from(&own);
        assert_eq!(m.len(), 1);
        assert_eq!(m.others(), Some(&own));
    }

    #[test]
    fn observe_blends_with_inertia() {
        let own: BeliefStore = [("liberty", 0.5)].into_iter().collect();
        let mut m = MetaBeliefs::seeded_from(&own);
        let v = m.observe("liberty", 0.65, 0.5, &MetaParams::default()).unwrap();
        assert!(approx(v, 0.7 * 0.5 + 0.3 * 0.65), "got {v}");
    }

    #[test]
    fn observe_unseen_norm_starts_from_prior() {
        let mut m = MetaBeliefs::seeded_from(&BeliefStore::new());
        let v = m.observe("equality", 1.0, 0.5, &MetaParams::default()).unwrap();
        assert!(approx(v, 0.35 + 0.3), "got {v}");
        assert_eq!(m.others().unwrap().get("equality"), Some(v));
    }

    #[test]
    fn observe_clamps() {
        let mut m = MetaBeliefs::seeded_from(&BeliefStore::neutral(0.5));
        let v = m.observe("liberty", 5.0, 0.5, &MetaParams::default()).unwrap();
        assert_eq!(v, 1.0);
    }
}

//! Second-order beliefs: the agent's model of what others believe.
//!
//! All others are folded into one aggregate belief vector per recursion
//! depth.  Only depth 1 ("what I think others believe") is ever populated.
//! It starts as a copy of the agent's own beliefs and drifts slowly toward
//! them as the agent's own beliefs move:
//!
//!   meta[1][n] = inertia * meta[1].get(n, prior) + (1 - inertia) * own[n]

use std::collections::BTreeMap;

use nd_core::MetaParams;

use crate::store::BeliefStore;

/// Depth of "what others believe".
pub const OTHERS_DEPTH: u8 = 1;

/// Depth-indexed second-order belief stores.
///
/// Empty for agents below the strategic level; see
/// [`IntentionalityLevel::tracks_meta_beliefs`](nd_core::IntentionalityLevel::tracks_meta_beliefs).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetaBeliefs {
    depths: BTreeMap<u8, BeliefStore>,
}

impl MetaBeliefs {
    /// No second-order beliefs at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assume others initially share `own` beliefs.
    pub fn seeded_from(own: &BeliefStore) -> Self {
        let mut depths = BTreeMap::new();
        depths.insert(OTHERS_DEPTH, own.clone());
        Self { depths }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }

    /// Number of populated depths.
    #[inline]
    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn depth(&self, depth: u8) -> Option<&BeliefStore> {
        self.depths.get(&depth)
    }

    /// The aggregate "other", if tracked.
    #[inline]
    pub fn others(&self) -> Option<&BeliefStore> {
        self.depth(OTHERS_DEPTH)
    }

    /// Fold the agent's fresh belief `own_value` in `norm` into the model of
    /// others.  Unseen norms start from `prior`.  No-op when depth 1 is not
    /// tracked.  Returns the new meta-belief, if any.
    pub fn observe(
        &mut self,
        norm:      &str,
        own_value: f64,
        prior:     f64,
        params:    &MetaParams,
    ) -> Option<f64> {
        let others = self.depths.get_mut(&OTHERS_DEPTH)?;
        let previous = others.get_or(norm, prior);
        let next = params.inertia * previous + (1.0 - params.inertia) * own_value;
        Some(others.set(norm, next))
    }
}

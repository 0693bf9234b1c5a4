//! Norm-strength map with clamped writes and deterministic iteration.

use std::collections::BTreeMap;

/// Norms every agent starts with when the population builder supplies no
/// belief snapshot.
pub const DEFAULT_NORMS: [&str; 2] = ["liberty", "control"];

/// Clamp `x` into `[0, 1]`.  NaN maps to `0.0`.
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Mapping from norm name to belief strength.
///
/// Backed by a `BTreeMap` so iteration (and therefore tie-breaking in
/// [`dominant`](Self::dominant)) follows lexicographic key order regardless of
/// insertion order.  Every stored strength lies in `[0, 1]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BeliefStore {
    strengths: BTreeMap<String, f64>,
}

impl BeliefStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `{liberty: neutral, control: neutral}`.
    pub fn neutral(neutral: f64) -> Self {
        DEFAULT_NORMS.iter().map(|n| (n.to_string(), neutral)).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strengths.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty()
    }

    pub fn contains(&self, norm: &str) -> bool {
        self.strengths.contains_key(norm)
    }

    pub fn get(&self, norm: &str) -> Option<f64> {
        self.strengths.get(norm).copied()
    }

    /// Strength of `norm`, or `default` when the norm has never been seen.
    #[inline]
    pub fn get_or(&self, norm: &str, default: f64) -> f64 {
        self.get(norm).unwrap_or(default)
    }

    /// Write a strength, clamped to `[0, 1]`.  Returns the stored value.
    pub fn set(&mut self, norm: &str, strength: f64) -> f64 {
        let v = clamp_unit(strength);
        match self.strengths.get_mut(norm) {
            Some(slot) => *slot = v,
            None => {
                self.strengths.insert(norm.to_owned(), v);
            }
        }
        v
    }

    /// Current strength of `norm`, inserting `prior` first if it is unseen.
    pub fn get_or_insert(&mut self, norm: &str, prior: f64) -> f64 {
        match self.strengths.get(norm) {
            Some(&v) => v,
            None => self.set(norm, prior),
        }
    }

    /// The norm with the highest strength.
    ///
    /// Ties go to the lexicographically smallest name.  `None` when empty.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (norm, &v) in &self.strengths {
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((norm.as_str(), v)),
            }
        }
        best
    }

    /// `(norm, strength)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.strengths.iter().map(|(k, &v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for BeliefStore {
    /// Collect `(norm, strength)` pairs, clamping each strength.
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let strengths = iter
            .into_iter()
            .map(|(k, v)| (k.into(), clamp_unit(v)))
            .collect();
        Self { strengths }
    }
}

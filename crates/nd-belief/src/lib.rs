//! `nd-belief` — first- and second-order belief state and its revision rules.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                        |
//! |------------|-----------------------------------------------------------------|
//! | [`store`]  | `BeliefStore` — norm name → strength in `[0, 1]`                |
//! | [`rule`]   | `UpdateRule` (`Bayesian`, `Heteronomous`, `ConfirmationBias`)   |
//! | [`meta`]   | `MetaBeliefs` — depth-indexed model of what "others" believe    |
//!
//! # Design notes
//!
//! The rules are pure functions of `(prior, evidence)` plus, for the
//! heteronomous rule, whether the agent carries a group identity.  They
//! return the raw posterior; clamping to `[0, 1]` happens once, on write, in
//! [`BeliefStore::set`] and [`MetaBeliefs::observe`].  With priors and
//! evidence already in range and learning rates at most 1 the raw posterior
//! never leaves `[0, 1]`, but drivers that inject noisy evidence rely on the
//! clamp.

pub mod meta;
pub mod rule;
pub mod store;

#[cfg(test)]
mod tests;

pub use meta::MetaBeliefs;
pub use rule::UpdateRule;
pub use store::{clamp_unit, BeliefStore};

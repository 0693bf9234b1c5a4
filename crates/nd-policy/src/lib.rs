//! `nd-policy` — the four-tier decision hierarchy.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                     |
//! |-------------------|--------------------------------------------------------------|
//! | [`context`]       | `DecisionContext` — crisis / pressure / party position       |
//! | [`state`]         | `CognitiveState<'a>` — read-only view of one agent's mind    |
//! | [`decision`]      | `Choice`, `Decision<'o>`                                     |
//! | [`policy`]        | `DecisionPolicy` trait, `policy_for`, `decide`               |
//! | [`reactive`]      | level 0: belief-free weighted lottery                        |
//! | [`goal_directed`] | level 1: dominant belief + lexical support/reform heuristic  |
//! | [`strategic`]     | level 2: alignment with perceived consensus, party discipline|
//! | [`reflective`]    | level 3: hypothetical scoring of every option                |
//! | [`lexicon`]       | case-insensitive label matching shared by the policies       |
//!
//! # Design notes
//!
//! Dispatch is a static table from [`IntentionalityLevel`](nd_core::IntentionalityLevel)
//! to a `&'static dyn DecisionPolicy`; each policy is a unit struct with no
//! state of its own.  All reads go through `&CognitiveState`, all randomness
//! through the caller's `&mut AgentRng`, so a policy can be tested in
//! isolation with a hand-built state and a fixed seed.

pub mod context;
pub mod decision;
pub mod goal_directed;
pub mod lexicon;
pub mod policy;
pub mod reactive;
pub mod reflective;
pub mod state;
pub mod strategic;


pub use context::DecisionContext;
pub use decision::{Choice, Decision};
pub use goal_directed::GoalDirected;
pub use policy::{decide, policy_for, DecisionPolicy};
pub use reactive::Reactive;
pub use reflective::{evaluate_option, Reflective};
pub use state::CognitiveState;
pub use strategic::Strategic;

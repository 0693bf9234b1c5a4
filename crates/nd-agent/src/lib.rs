//! `nd-agent` — the cognitive agent driven by population simulations.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`agent`]    | `Agent` — beliefs, meta-beliefs, update / decide / CK      |
//! | [`builder`]  | `AgentBuilder` (fluent construction with role defaults)    |
//!
//! # Usage
//!
//! ```rust
//! use nd_agent::{Agent, AgentBuilder, DecisionContext, UpdateRule};
//! use nd_core::{AgentId, AgentRng, AgentType};
//!
//! let mut judge = AgentBuilder::new(AgentId(0), AgentType::Judge)
//!     .beliefs([("liberty", 0.8), ("control", 0.3)])
//!     .build()
//!     .unwrap();
//! judge.update_belief("liberty", 1.0, UpdateRule::Bayesian);
//!
//! let mut rng = AgentRng::new(42, judge.id());
//! let ctx = DecisionContext::new().pressure(0.9);
//! let d = judge.decide(&["support_reform", "expand_control"], Some(&ctx), &mut rng).unwrap();
//! assert_eq!(d.option, "support_reform");
//!
//! let clerk = Agent::new(AgentId(1), AgentType::Bureaucrat);
//! assert!(judge.can_form_common_knowledge_with(&clerk));
//! ```
//!
//! Agents are independent: each is owned and mutated by the driver, and
//! one agent only ever sees another as a borrowed argument to
//! [`Agent::can_form_common_knowledge_with`].

pub mod agent;
pub mod builder;


pub use agent::Agent;
pub use builder::AgentBuilder;

// Types that appear in the agent's public signatures.
pub use nd_belief::{BeliefStore, MetaBeliefs, UpdateRule};
pub use nd_policy::{Decision, DecisionContext};

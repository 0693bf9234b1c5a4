//! `nd-core` — foundational types for the norm-dynamics agent engine.
//!
//! This crate is a dependency of every other `nd-*` crate.  It has no `nd-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`level`]       | `IntentionalityLevel`, `AgentType`                    |
//! | [`rng`]         | `AgentRng` (per-agent, seedable)                      |
//! | [`config`]      | `CognitionConfig` and its parameter groups            |
//! | [`error`]       | `NdError`, `NdResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, levels and config.  |
//!
//! Agent state itself is never serialized.

pub mod config;
pub mod error;
pub mod ids;
pub mod level;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{CognitionConfig, DecisionParams, MetaParams, UpdateParams};
pub use error::{NdError, NdResult};
pub use ids::AgentId;
pub use level::{AgentType, IntentionalityLevel, UnknownAgentType};
pub use rng::AgentRng;

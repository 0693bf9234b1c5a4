//! Fluent builder for constructing an [`Agent`].
//!
//! # Usage
//!
//! ```rust
//! use nd_agent::AgentBuilder;
//! use nd_core::{AgentId, AgentType, IntentionalityLevel};
//!
//! let agent = AgentBuilder::new(AgentId(7), AgentType::Citizen)
//!     .level(IntentionalityLevel::Strategic)
//!     .beliefs([("liberty", 0.75), ("control", 0.2)])
//!     .group_identity("reformists")
//!     .party_loyalty(0.9)
//!     .position_layer(2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(agent.level(), IntentionalityLevel::Strategic);
//! assert!(!agent.meta_beliefs().is_empty());
//! ```

use nd_belief::BeliefStore;
use nd_core::{AgentId, AgentType, CognitionConfig, IntentionalityLevel, NdResult};

use crate::Agent;

/// Fluent builder for [`Agent`].
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                   |
/// |-----------------------|-------------------------------------------|
/// | `.level(l)`           | `agent_type.default_level()`              |
/// | `.beliefs(b)`         | `{liberty: prior, control: prior}`        |
/// | `.group_identity(g)`  | none (heteronomous updates act Bayesian)  |
/// | `.party_loyalty(x)`   | 0.5                                       |
/// | `.position_layer(n)`  | 4                                         |
/// | `.config(c)`          | `CognitionConfig::default()`              |
pub struct AgentBuilder {
    id:             AgentId,
    agent_type:     AgentType,
    level:          Option<IntentionalityLevel>,
    beliefs:        BeliefStore,
    group_identity: Option<String>,
    party_loyalty:  f64,
    position_layer: i32,
    config:         CognitionConfig,
}

impl AgentBuilder {
    pub fn new(id: AgentId, agent_type: AgentType) -> Self {
        Self {
            id,
            agent_type,
            level:          None,
            beliefs:        BeliefStore::new(),
            group_identity: None,
            party_loyalty:  Agent::DEFAULT_PARTY_LOYALTY,
            position_layer: Agent::DEFAULT_POSITION_LAYER,
            config:         CognitionConfig::default(),
        }
    }

    /// Override the role's default intentionality level.
    pub fn level(mut self, level: IntentionalityLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Initial belief snapshot.  Strengths are clamped to `[0, 1]`; an empty
    /// snapshot means the neutral default.
    pub fn beliefs<K, I>(mut self, beliefs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        self.beliefs = beliefs.into_iter().collect();
        self
    }

    pub fn group_identity(mut self, group: impl Into<String>) -> Self {
        self.group_identity = Some(group.into());
        self
    }

    /// Partisan alignment, clamped to `[0, 1]`.  NaN means the default.
    pub fn party_loyalty(mut self, loyalty: f64) -> Self {
        self.party_loyalty = loyalty;
        self
    }

    pub fn position_layer(mut self, layer: i32) -> Self {
        self.position_layer = layer;
        self
    }

    pub fn config(mut self, config: CognitionConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the parameter set and return the agent.
    ///
    /// Fails with [`NdError::Config`](nd_core::NdError::Config) when the
    /// supplied [`CognitionConfig`] is out of range.
    pub fn build(self) -> NdResult<Agent> {
        self.config.validate()?;
        let level = self.level.unwrap_or_else(|| self.agent_type.default_level());
        Ok(Agent::from_parts(
            self.id,
            self.agent_type,
            level,
            self.beliefs,
            self.group_identity,
            self.party_loyalty,
            self.position_layer,
            self.config,
        ))
    }
}

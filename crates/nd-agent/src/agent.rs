//! The `Agent` entity.

use std::fmt;

use tracing::{debug, trace};

use nd_belief::{BeliefStore, MetaBeliefs, UpdateRule};
use nd_core::{AgentId, AgentRng, AgentType, CognitionConfig, IntentionalityLevel, NdResult};
use nd_policy::{CognitiveState, Decision, DecisionContext};

/// One simulated individual.
///
/// `id`, `agent_type` and `level` are fixed at construction.  Beliefs change
/// only through [`update_belief`](Self::update_belief); meta-beliefs exist
/// iff `level >= Strategic` and follow every belief update.
///
/// Build with [`Agent::new`] for role defaults or
/// [`AgentBuilder`](crate::AgentBuilder) for everything else.
#[derive(Clone, Debug)]
pub struct Agent {
    id:             AgentId,
    agent_type:     AgentType,
    level:          IntentionalityLevel,
    beliefs:        BeliefStore,
    meta:           MetaBeliefs,
    group_identity: Option<String>,
    party_loyalty:  f64,
    position_layer: i32,
    config:         CognitionConfig,
}

impl Agent {
    /// Default party loyalty.
    pub const DEFAULT_PARTY_LOYALTY: f64 = 0.5;
    /// Default institutional layer (outermost).
    pub const DEFAULT_POSITION_LAYER: i32 = 4;

    /// An agent with the role's default level, neutral beliefs, no group
    /// identity, and default loyalty, layer and parameters.
    pub fn new(id: AgentId, agent_type: AgentType) -> Self {
        Self::from_parts(
            id,
            agent_type,
            agent_type.default_level(),
            BeliefStore::new(),
            None,
            Self::DEFAULT_PARTY_LOYALTY,
            Self::DEFAULT_POSITION_LAYER,
            CognitionConfig::default(),
        )
    }

    /// Assemble an agent and establish its invariants.
    ///
    /// An empty belief snapshot is replaced by neutral `liberty`/`control`
    /// beliefs at the configured prior.  Meta-beliefs are seeded from the
    /// initial beliefs for strategic and reflective agents.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        id:             AgentId,
        agent_type:     AgentType,
        level:          IntentionalityLevel,
        beliefs:        BeliefStore,
        group_identity: Option<String>,
        party_loyalty:  f64,
        position_layer: i32,
        config:         CognitionConfig,
    ) -> Self {
        let beliefs = if beliefs.is_empty() {
            BeliefStore::neutral(config.update.prior)
        } else {
            beliefs
        };
        let meta = if level.tracks_meta_beliefs() {
            MetaBeliefs::seeded_from(&beliefs)
        } else {
            MetaBeliefs::empty()
        };

        Self {
            id,
            agent_type,
            level,
            beliefs,
            meta,
            group_identity,
            party_loyalty: if party_loyalty.is_nan() {
                Self::DEFAULT_PARTY_LOYALTY
            } else {
                party_loyalty.clamp(0.0, 1.0)
            },
            position_layer,
            config,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn agent_type(&self) -> AgentType {
        self.agent_type
    }

    #[inline]
    pub fn level(&self) -> IntentionalityLevel {
        self.level
    }

    #[inline]
    pub fn beliefs(&self) -> &BeliefStore {
        &self.beliefs
    }

    /// Strength of one norm, `None` if never seen.
    #[inline]
    pub fn belief(&self, norm: &str) -> Option<f64> {
        self.beliefs.get(norm)
    }

    /// The strongest norm (lexicographically smallest on ties).
    pub fn dominant_belief(&self) -> Option<(&str, f64)> {
        self.beliefs.dominant()
    }

    #[inline]
    pub fn meta_beliefs(&self) -> &MetaBeliefs {
        &self.meta
    }

    pub fn group_identity(&self) -> Option<&str> {
        self.group_identity.as_deref()
    }

    #[inline]
    pub fn party_loyalty(&self) -> f64 {
        self.party_loyalty
    }

    #[inline]
    pub fn position_layer(&self) -> i32 {
        self.position_layer
    }

    #[inline]
    pub fn config(&self) -> &CognitionConfig {
        &self.config
    }

    // ── Belief revision ───────────────────────────────────────────────────

    /// Revise the belief in `norm` given `evidence` in `[0, 1]`.
    ///
    /// An unseen norm is created at the configured prior first.  NaN evidence
    /// carries no information and leaves the belief where it was.  The stored
    /// result is clamped to `[0, 1]`.  Strategic and reflective agents also
    /// fold the new value into their model of others.  Returns the new
    /// strength.
    pub fn update_belief(&mut self, norm: &str, evidence: f64, rule: UpdateRule) -> f64 {
        let params = &self.config.update;
        let prior = self.beliefs.get_or_insert(norm, params.prior);
        let evidence = if evidence.is_nan() { prior } else { evidence };
        let raw = rule.posterior(prior, evidence, self.group_identity.is_some(), params);
        let posterior = self.beliefs.set(norm, raw);

        let meta = self.meta.observe(norm, posterior, params.prior, &self.config.meta);

        trace!(
            agent = self.id.0,
            norm,
            rule = rule.as_str(),
            evidence,
            prior,
            posterior,
            meta = ?meta,
            "belief updated"
        );
        posterior
    }

    /// Like [`update_belief`](Self::update_belief) with the rule given by
    /// name (`bayesian`, `hbu`, `confirmation_bias`).
    ///
    /// An unknown name fails with [`NdError::InvalidRule`](nd_core::NdError::InvalidRule)
    /// before anything is touched.
    pub fn update_belief_named(&mut self, norm: &str, evidence: f64, rule: &str) -> NdResult<f64> {
        let rule: UpdateRule = rule.parse()?;
        Ok(self.update_belief(norm, evidence, rule))
    }

    // ── Decisions ─────────────────────────────────────────────────────────

    /// Choose one of `options` with the policy of this agent's level.
    ///
    /// Fails with [`NdError::EmptyOptions`](nd_core::NdError::EmptyOptions)
    /// when `options` is empty.  Randomness (reactive lotteries, uniform
    /// fallbacks) is drawn from `rng` only.
    pub fn decide<'o, S: AsRef<str>>(
        &self,
        options: &'o [S],
        ctx:     Option<&DecisionContext>,
        rng:     &mut AgentRng,
    ) -> NdResult<Decision<'o>> {
        let state = CognitiveState::new(
            &self.beliefs,
            &self.meta,
            self.party_loyalty,
            &self.config.decision,
        );
        let decision = nd_policy::decide(self.level, &state, options, ctx, rng)?;

        debug!(
            agent = self.id.0,
            level = self.level.as_str(),
            option = decision.option,
            confidence = decision.confidence,
            n_options = options.len(),
            "decided"
        );
        Ok(decision)
    }

    // ── Cross-agent ───────────────────────────────────────────────────────

    /// Whether the two agents can reach common knowledge.
    ///
    /// Both must be at least strategic, and their levels may differ by at
    /// most one: a span of two tiers breaks the recursive-belief chain.
    pub fn can_form_common_knowledge_with(&self, other: &Agent) -> bool {
        let floor = IntentionalityLevel::Strategic;
        if self.level < floor || other.level < floor {
            return false;
        }
        self.level.span(other.level) < 2
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Agent(id={}, type={}, level={}, beliefs={{",
            self.id, self.agent_type, self.level
        )?;
        for (i, (norm, strength)) in self.beliefs.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{norm}: {strength}")?;
        }
        f.write_str("})")
    }
}

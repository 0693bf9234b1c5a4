//! Intentionality levels and institutional agent types.
//!
//! The level hierarchy is totally ordered; comparisons and the absolute
//! difference between two levels ([`IntentionalityLevel::span`]) drive both
//! decision-policy dispatch and the common-knowledge predicate.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ── IntentionalityLevel ──────────────────────────────────────────────────────

/// Graded cognitive sophistication of an agent.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum IntentionalityLevel {
    /// Level 0: reacts without beliefs guiding the choice.
    Reactive = 0,
    /// Level 1: pursues goals, holds no beliefs about beliefs.
    GoalDirected = 1,
    /// Level 2: one level of recursion; models what others believe.
    Strategic = 2,
    /// Level 3: hypothetical reasoning over options.
    Reflective = 3,
}

impl IntentionalityLevel {
    /// All levels in ascending order.
    pub const ALL: [IntentionalityLevel; 4] = [
        IntentionalityLevel::Reactive,
        IntentionalityLevel::GoalDirected,
        IntentionalityLevel::Strategic,
        IntentionalityLevel::Reflective,
    ];

    /// Numeric value in `0..=3`.
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Inverse of [`value`](Self::value).  `None` for anything above 3.
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Absolute difference between two levels ("intentional span").
    #[inline]
    pub fn span(self, other: IntentionalityLevel) -> u8 {
        self.value().abs_diff(other.value())
    }

    /// `true` from level 2 upward: the agent keeps second-order beliefs.
    #[inline]
    pub fn tracks_meta_beliefs(self) -> bool {
        self >= IntentionalityLevel::Strategic
    }

    pub fn as_str(self) -> &'static str {
        match self {
            IntentionalityLevel::Reactive     => "reactive",
            IntentionalityLevel::GoalDirected => "goal_directed",
            IntentionalityLevel::Strategic    => "strategic",
            IntentionalityLevel::Reflective   => "reflective",
        }
    }
}

impl fmt::Display for IntentionalityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

// ── AgentType ─────────────────────────────────────────────────────────────────

/// Institutional role of an agent.
///
/// Only used to pick a default [`IntentionalityLevel`] when the population
/// builder does not set one explicitly.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AgentType {
    #[default]
    Citizen,
    Judge,
    Legislator,
    Bureaucrat,
    Corporation,
}

impl AgentType {
    pub const ALL: [AgentType; 5] = [
        AgentType::Citizen,
        AgentType::Judge,
        AgentType::Legislator,
        AgentType::Bureaucrat,
        AgentType::Corporation,
    ];

    /// Level assumed for this role when none is given at construction.
    pub fn default_level(self) -> IntentionalityLevel {
        match self {
            AgentType::Citizen | AgentType::Corporation   => IntentionalityLevel::GoalDirected,
            AgentType::Bureaucrat | AgentType::Legislator => IntentionalityLevel::Strategic,
            AgentType::Judge                              => IntentionalityLevel::Reflective,
        }
    }

    /// Default level for a free-text role label.
    ///
    /// Unrecognised labels fall back to [`IntentionalityLevel::GoalDirected`].
    pub fn default_level_for_label(label: &str) -> IntentionalityLevel {
        label
            .parse::<AgentType>()
            .map(AgentType::default_level)
            .unwrap_or(IntentionalityLevel::GoalDirected)
    }

    /// Lowercase label, as used in population files.
    pub fn as_str(self) -> &'static str {
        match self {
            AgentType::Citizen     => "citizen",
            AgentType::Judge       => "judge",
            AgentType::Legislator  => "legislator",
            AgentType::Bureaucrat  => "bureaucrat",
            AgentType::Corporation => "corporation",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`AgentType::from_str`] for labels outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown agent type: {0:?}")]
pub struct UnknownAgentType(pub String);

impl FromStr for AgentType {
    type Err = UnknownAgentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        AgentType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| UnknownAgentType(s.to_owned()))
    }
}

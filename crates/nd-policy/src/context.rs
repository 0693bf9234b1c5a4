//! Situational context supplied by the driver alongside the options.

/// Optional situational inputs to a decision.
///
/// Every field is optional; `DecisionContext::default()` is the empty
/// context, equivalent to passing no context at all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DecisionContext {
    /// An ongoing crisis favours `control` options under reflective scoring.
    pub crisis: bool,

    /// Reform pressure in `[0, 1]`; above the configured threshold it
    /// favours `reform` options under reflective scoring.
    pub pressure: Option<f64>,

    /// The option the agent's party backs.  Binding for strategic agents
    /// whose loyalty exceeds the configured threshold.
    pub party_position: Option<String>,
}

impl DecisionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn crisis(mut self, crisis: bool) -> Self {
        self.crisis = crisis;
        self
    }

    pub fn pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    pub fn party_position(mut self, position: impl Into<String>) -> Self {
        self.party_position = Some(position.into());
        self
    }

    /// `true` when `pressure` is set and strictly above `threshold`.
    #[inline]
    pub fn pressure_above(&self, threshold: f64) -> bool {
        self.pressure.is_some_and(|p| p > threshold)
    }
}

//! Free-text option-label matching.
//!
//! Options are plain labels such as `"support_reform"` or
//! `"strengthen_control"`; the goal-directed and reflective policies infer
//! their meaning by substring search on the lowercased label.

/// Stems that mark an option as backing change.
pub const CHANGE_STEMS: [&str; 2] = ["support", "reform"];

pub const CONTROL: &str = "control";
pub const REFORM: &str = "reform";

/// Lowercased copy of a label, computed once per option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    pub fn new(raw: &str) -> Self {
        Label(raw.to_lowercase())
    }

    /// `true` when the lowercased label contains `needle` verbatim.
    ///
    /// `needle` is not lowercased: a belief named `"Liberty"` never matches.
    #[inline]
    pub fn mentions(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// `true` when the label mentions any of [`CHANGE_STEMS`].
    pub fn backs_change(&self) -> bool {
        CHANGE_STEMS.iter().any(|stem| self.mentions(stem))
    }
}

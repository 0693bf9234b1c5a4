//! Decision results.

/// What a policy returns: an index into the option slice it was given and
/// a confidence score.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Choice {
    pub index:      usize,
    pub confidence: f64,
}

impl Choice {
    #[inline]
    pub fn new(index: usize, confidence: f64) -> Self {
        Self { index, confidence }
    }
}

/// A resolved decision, borrowing the chosen label from the caller's options.
///
/// `option == options[index]` and `confidence` lies in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Decision<'o> {
    pub option:     &'o str,
    pub index:      usize,
    pub confidence: f64,
}

//! The win-decision seam.
//!
//! The machine consults an [`Oracle`] exactly once per valid crank turn.
//! Production uses [`RandomOracle`]; tests substitute [`FixedOracle`] or
//! [`SequenceOracle`] so outcomes are deterministic without touching the
//! machine.

use rand::Rng;

/// Decides whether a crank turn is a winning turn.
///
/// `decide` takes `&mut self` so stateful implementations (seeded
/// generators, scripted sequences) fit behind the same seam.
pub trait Oracle {
    /// Decide the outcome of one crank turn.
    fn decide(&mut self) -> bool;
}

/// Production oracle: wins one turn in `one_in` on average.
///
/// Defaults to 1-in-3 odds.
#[derive(Clone, Copy, Debug)]
pub struct RandomOracle {
    one_in: u32,
}

impl RandomOracle {
    pub fn new() -> Self {
        Self { one_in: 3 }
    }

    /// Override the odds. `one_in` is clamped to at least 1, so
    /// `with_odds(1)` wins every turn.
    pub fn with_odds(one_in: u32) -> Self {
        Self {
            one_in: one_in.max(1),
        }
    }
}

impl Default for RandomOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl Oracle for RandomOracle {
    fn decide(&mut self) -> bool {
        rand::thread_rng().gen_range(0..self.one_in) == 0
    }
}

/// Test double that always answers the same way.
#[derive(Clone, Copy, Debug)]
pub struct FixedOracle {
    winning: bool,
}

impl FixedOracle {
    pub fn new(winning: bool) -> Self {
        Self { winning }
    }
}

impl Oracle for FixedOracle {
    fn decide(&mut self) -> bool {
        self.winning
    }
}

/// Test double that replays a scripted sequence of decisions.
///
/// Once the script is exhausted every further decision is a loss.
#[derive(Clone, Debug)]
pub struct SequenceOracle {
    decisions: Vec<bool>,
    next: usize,
}

impl SequenceOracle {
    pub fn new(decisions: Vec<bool>) -> Self {
        Self { decisions, next: 0 }
    }

    /// How many scripted decisions remain.
    pub fn remaining(&self) -> usize {
        self.decisions.len().saturating_sub(self.next)
    }
}

impl Oracle for SequenceOracle {
    fn decide(&mut self) -> bool {
        let decision = self.decisions.get(self.next).copied().unwrap_or(false);
        self.next += 1;
        decision
    }
}

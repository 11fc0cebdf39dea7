//! Transition log for diagnostics.
//!
//! The machine records every observable state change so a caller can
//! reconstruct the path it took, including the nested chains inside a
//! single crank turn (HasPayment -> Winner -> SoldOut).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::state::MachineState;

/// Record of a single state transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The state being transitioned from
    pub from: MachineState,
    /// The state being transitioned to
    pub to: MachineState,
    /// When the transition occurred
    pub at: DateTime<Utc>,
}

/// Ordered log of state transitions.
///
/// Self-loops are not recorded; the log tracks observable changes only.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    transitions: Vec<Transition>,
}

impl TransitionLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a transition, timestamped now.
    pub(crate) fn record(&mut self, from: MachineState, to: MachineState) {
        self.transitions.push(Transition {
            from,
            to,
            at: Utc::now(),
        });
    }

    /// Get all recorded transitions in order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Get the path of states traversed: the initial state, then the `to`
    /// state of each transition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gumball::{FixedOracle, GumballMachine, MachineState};
    ///
    /// let mut machine = GumballMachine::new(1, Box::new(FixedOracle::new(false)));
    /// machine.insert_payment();
    /// machine.turn_crank();
    ///
    /// let path = machine.history().path();
    /// assert_eq!(
    ///     path,
    ///     vec![
    ///         MachineState::NoPayment,
    ///         MachineState::HasPayment,
    ///         MachineState::Dispensing,
    ///         MachineState::SoldOut,
    ///     ]
    /// );
    /// ```
    pub fn path(&self) -> Vec<MachineState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        for transition in &self.transitions {
            path.push(transition.to);
        }
        path
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&Transition> {
        self.transitions.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_log_is_empty() {
        let log = TransitionLog::new();
        assert!(log.transitions().is_empty());
        assert!(log.path().is_empty());
        assert!(log.last().is_none());
    }

    #[test]
    fn record_appends_in_order() {
        let mut log = TransitionLog::new();
        log.record(MachineState::NoPayment, MachineState::HasPayment);
        log.record(MachineState::HasPayment, MachineState::Dispensing);

        assert_eq!(log.transitions().len(), 2);
        assert_eq!(log.last().unwrap().to, MachineState::Dispensing);
    }

    #[test]
    fn path_includes_initial_state() {
        let mut log = TransitionLog::new();
        log.record(MachineState::NoPayment, MachineState::HasPayment);
        log.record(MachineState::HasPayment, MachineState::Dispensing);
        log.record(MachineState::Dispensing, MachineState::NoPayment);

        assert_eq!(
            log.path(),
            vec![
                MachineState::NoPayment,
                MachineState::HasPayment,
                MachineState::Dispensing,
                MachineState::NoPayment,
            ]
        );
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = TransitionLog::new();
        log.record(MachineState::SoldOut, MachineState::NoPayment);

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: TransitionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.last().unwrap().from, MachineState::SoldOut);
    }
}

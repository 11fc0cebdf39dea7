//! The closed set of machine states.
//!
//! The original open class hierarchy becomes a tagged enum so the compiler
//! proves every state handles every event.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The five operating modes of the dispensing machine.
///
/// `Dispensing` and `Winner` are transient: they only exist inside a
/// `turn_crank` call while the dispense step runs. Between top-level calls
/// the machine always rests in one of the settled states.
///
/// # Example
///
/// ```rust
/// use gumball::MachineState;
///
/// assert_eq!(MachineState::NoPayment.name(), "NoPayment");
/// assert!(MachineState::NoPayment.is_settled());
/// assert!(!MachineState::Winner.is_settled());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MachineState {
    /// Inventory is empty; only a refill can recover the machine.
    SoldOut,
    /// Stock on hand, waiting for a payment.
    NoPayment,
    /// Payment inserted, waiting for the crank.
    HasPayment,
    /// Crank turned on a regular turn; the dispense step runs next.
    Dispensing,
    /// Crank turned on a winning turn; up to two units release.
    Winner,
}

impl MachineState {
    /// Get the state's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SoldOut => "SoldOut",
            Self::NoPayment => "NoPayment",
            Self::HasPayment => "HasPayment",
            Self::Dispensing => "Dispensing",
            Self::Winner => "Winner",
        }
    }

    /// Check if the machine can rest in this state between calls.
    ///
    /// `Dispensing` and `Winner` always convert to a settled state before
    /// `turn_crank` returns, so they are never observed from outside.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::SoldOut | Self::NoPayment | Self::HasPayment)
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(MachineState::SoldOut.name(), "SoldOut");
        assert_eq!(MachineState::NoPayment.name(), "NoPayment");
        assert_eq!(MachineState::HasPayment.name(), "HasPayment");
        assert_eq!(MachineState::Dispensing.name(), "Dispensing");
        assert_eq!(MachineState::Winner.name(), "Winner");
    }

    #[test]
    fn is_settled_identifies_resting_states() {
        assert!(MachineState::SoldOut.is_settled());
        assert!(MachineState::NoPayment.is_settled());
        assert!(MachineState::HasPayment.is_settled());
        assert!(!MachineState::Dispensing.is_settled());
        assert!(!MachineState::Winner.is_settled());
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(MachineState::HasPayment.to_string(), "HasPayment");
        assert_eq!(MachineState::Winner.to_string(), "Winner");
    }

    #[test]
    fn state_serializes_correctly() {
        let state = MachineState::HasPayment;
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: MachineState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}

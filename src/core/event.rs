//! Input commands and observable effects.
//!
//! Every console-visible line of the machine is a typed [`Effect`] value
//! with a `Display` rendering; rejections are ordinary effects, not errors.
//! [`Command`] is the caller-facing input vocabulary, parseable from text
//! for the CLI harness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MachineError;

/// One caller-facing input, one per machine operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    InsertPayment,
    EjectPayment,
    TurnCrank,
    Refill(u32),
}

impl FromStr for Command {
    type Err = MachineError;

    /// Parse `insert`, `eject`, `turn`, or `refill <n>`.
    ///
    /// The refill amount must be a non-negative integer; negative or
    /// malformed input is reported, never clamped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let command = match words.next() {
            Some("insert") => Self::InsertPayment,
            Some("eject") => Self::EjectPayment,
            Some("turn") => Self::TurnCrank,
            Some("refill") => {
                let amount = words.next().ok_or(MachineError::MissingAmount)?;
                let amount = amount
                    .parse::<u32>()
                    .map_err(|_| MachineError::InvalidAmount(amount.to_string()))?;
                Self::Refill(amount)
            }
            _ => return Err(MachineError::UnknownCommand(s.to_string())),
        };
        if words.next().is_some() {
            return Err(MachineError::UnknownCommand(s.to_string()));
        }
        Ok(command)
    }
}

/// Why an event was refused in the current state.
///
/// Each variant carries the state-specific reason the machine reports,
/// matching one rejection line of the machine's event log.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Rejection {
    /// Insert while sold out.
    MachineSoldOut,
    /// Eject with no payment inserted.
    NoPaymentInserted,
    /// Crank turned with no payment inserted.
    TurnedWithoutPayment,
    /// Crank turned while sold out.
    NoStock,
    /// Second payment inserted before turning the crank.
    AlreadyPaid,
    /// Insert while a dispense is in progress.
    DispensingInProgress,
    /// Eject after the crank has already turned.
    CrankAlreadyTurned,
    /// Crank turned again mid-dispense.
    DoubleTurn,
}

impl Rejection {
    /// The human-readable rejection line.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::MachineSoldOut => "you can't insert a payment, the machine is sold out",
            Self::NoPaymentInserted => "you haven't inserted a payment",
            Self::TurnedWithoutPayment => "you turned, but there's no payment",
            Self::NoStock => "you turned, but there are no gumballs",
            Self::AlreadyPaid => "you can't insert another payment",
            Self::DispensingInProgress => "please wait, we're already giving you a gumball",
            Self::CrankAlreadyTurned => "sorry, you already turned the crank",
            Self::DoubleTurn => "turning twice doesn't get you another gumball",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.reason())
    }
}

/// One observable outcome of an operation.
///
/// Operations return their effects in order, so a caller sees exactly what
/// the machine "printed": a winning turn with stock on hand yields two
/// `Released` effects followed by `Winner`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Effect {
    /// A payment was accepted.
    PaymentAccepted,
    /// The inserted payment was returned.
    PaymentReturned,
    /// The crank turned on a paid machine.
    CrankTurned,
    /// One unit released (inventory decremented).
    Released,
    /// This turn was a winning turn: two units for one payment.
    Winner,
    /// The last unit just went out; the machine is now sold out.
    OutOfStock,
    /// The dispense step ran in a state with nothing to release.
    NothingDispensed,
    /// Inventory was topped up.
    Refilled { amount: u32, inventory: u32 },
    /// The event was refused in the current state.
    Rejected(Rejection),
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PaymentAccepted => f.write_str("you inserted a payment"),
            Self::PaymentReturned => f.write_str("payment returned"),
            Self::CrankTurned => f.write_str("you turned..."),
            Self::Released => f.write_str("a gumball comes rolling out the slot..."),
            Self::Winner => f.write_str("YOU'RE A WINNER! You got two gumballs for your payment"),
            Self::OutOfStock => f.write_str("oops, out of gumballs"),
            Self::NothingDispensed => f.write_str("no gumball dispensed"),
            Self::Refilled { amount, inventory } => {
                write!(f, "refilled {amount}, inventory is now {inventory}")
            }
            Self::Rejected(rejection) => rejection.fmt(f),
        }
    }
}

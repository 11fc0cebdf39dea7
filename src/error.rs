//! Errors for the crate's fallible surfaces.
//!
//! Rejected events are not errors - they come back as
//! [`Effect::Rejected`](crate::Effect::Rejected) values. Errors cover the
//! contract violations a caller can actually commit: malformed commands
//! and refills that would corrupt the inventory counter.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("refill of {amount} would overflow the inventory counter (current {inventory})")]
    InventoryOverflow { inventory: u32, amount: u32 },

    #[error("unknown command {0:?}. Expected insert, eject, turn, or refill <n>")]
    UnknownCommand(String),

    #[error("refill amount {0:?} is not a non-negative integer")]
    InvalidAmount(String),

    #[error("refill requires an amount, e.g. `refill 5`")]
    MissingAmount,
}

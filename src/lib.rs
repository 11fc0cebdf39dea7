//! Gumball: a gumball-dispensing state machine.
//!
//! The machine wraps an inventory counter and a closed set of five states.
//! Callers drive it with four events (insert payment, eject payment, turn
//! the crank, refill), and every operation returns the ordered list of
//! [`Effect`]s it produced - including rejections, which are normal values
//! rather than errors.
//!
//! # Core Concepts
//!
//! - **States**: a closed [`MachineState`] enum, dispatched with exhaustive
//!   `match` so every state handles every event
//! - **Effects**: typed, printable outcomes returned by each operation
//! - **Oracle**: the injected [`Oracle`] collaborator deciding whether a
//!   crank turn is a winning turn, swappable for deterministic test doubles
//!
//! # Example
//!
//! ```rust
//! use gumball::{FixedOracle, GumballMachine, MachineState};
//!
//! let mut machine = GumballMachine::new(5, Box::new(FixedOracle::new(false)));
//! machine.insert_payment();
//! let effects = machine.turn_crank();
//!
//! assert_eq!(machine.inventory(), 4);
//! assert_eq!(machine.state(), MachineState::NoPayment);
//! assert!(!effects.is_empty());
//! ```

pub mod core;
pub mod error;
pub mod oracle;

// Re-export commonly used types
pub use self::core::{
    Command, Effect, GumballMachine, MachineState, Rejection, Transition, TransitionLog,
};
pub use error::MachineError;
pub use oracle::{FixedOracle, Oracle, RandomOracle, SequenceOracle};

//! Core machine types and event dispatch.
//!
//! This module contains the machine itself and its vocabulary:
//! - State definitions via the closed `MachineState` enum
//! - Input commands and observable effects
//! - The `GumballMachine` with one method per event
//! - Transition log for diagnostics
//!
//! All dispatch is an exhaustive `match` over the state enum, so every
//! state handles every event by construction.

mod event;
mod history;
mod machine;
mod state;

pub use event::{Command, Effect, Rejection};
pub use history::{Transition, TransitionLog};
pub use machine::GumballMachine;
pub use state::MachineState;

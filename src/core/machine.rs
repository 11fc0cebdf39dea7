//! The dispensing machine and its event dispatch.

use tracing::debug;

use super::event::{Command, Effect, Rejection};
use super::history::TransitionLog;
use super::state::MachineState;
use crate::error::MachineError;
use crate::oracle::{Oracle, RandomOracle};

/// A gumball-dispensing machine.
///
/// Owns an inventory counter, the current [`MachineState`], the injected
/// win-decision [`Oracle`], and a [`TransitionLog`]. Each public operation
/// dispatches on the current state with an exhaustive `match`; invalid
/// events are rejected with a state-specific [`Effect::Rejected`] and never
/// violate the machine's invariants.
///
/// A crank turn and its dispense step run inside one `&mut self` call, so
/// the oracle always sees a consistent inventory count when deciding
/// Winner vs. Dispensing.
///
/// # Example
///
/// ```rust
/// use gumball::{Effect, FixedOracle, GumballMachine, MachineState};
///
/// // Winning turn with only one gumball left: the winner path collapses
/// // to a single release and the machine sells out.
/// let mut machine = GumballMachine::new(1, Box::new(FixedOracle::new(true)));
/// machine.insert_payment();
/// let effects = machine.turn_crank();
///
/// let released = effects.iter().filter(|e| **e == Effect::Released).count();
/// assert_eq!(released, 1);
/// assert_eq!(machine.state(), MachineState::SoldOut);
/// ```
pub struct GumballMachine {
    inventory: u32,
    state: MachineState,
    oracle: Box<dyn Oracle + Send>,
    log: TransitionLog,
}

impl GumballMachine {
    /// Create a machine with an initial inventory and a win-decision oracle.
    ///
    /// Starts in `NoPayment` when stocked, `SoldOut` when empty.
    pub fn new(initial_inventory: u32, oracle: Box<dyn Oracle + Send>) -> Self {
        let state = if initial_inventory > 0 {
            MachineState::NoPayment
        } else {
            MachineState::SoldOut
        };
        Self {
            inventory: initial_inventory,
            state,
            oracle,
            log: TransitionLog::new(),
        }
    }

    /// Create a machine with the production [`RandomOracle`] (1-in-3 odds).
    pub fn with_random_oracle(initial_inventory: u32) -> Self {
        Self::new(initial_inventory, Box::new(RandomOracle::new()))
    }

    /// Insert a payment. Valid only from `NoPayment`.
    pub fn insert_payment(&mut self) -> Vec<Effect> {
        match self.state {
            MachineState::NoPayment => {
                self.transition(MachineState::HasPayment);
                vec![Effect::PaymentAccepted]
            }
            MachineState::SoldOut => self.reject(Rejection::MachineSoldOut),
            MachineState::HasPayment => self.reject(Rejection::AlreadyPaid),
            MachineState::Dispensing | MachineState::Winner => {
                self.reject(Rejection::DispensingInProgress)
            }
        }
    }

    /// Eject the inserted payment. Valid only from `HasPayment`.
    pub fn eject_payment(&mut self) -> Vec<Effect> {
        match self.state {
            MachineState::HasPayment => {
                self.transition(MachineState::NoPayment);
                vec![Effect::PaymentReturned]
            }
            MachineState::SoldOut | MachineState::NoPayment => {
                self.reject(Rejection::NoPaymentInserted)
            }
            MachineState::Dispensing | MachineState::Winner => {
                self.reject(Rejection::CrankAlreadyTurned)
            }
        }
    }

    /// Turn the crank. Valid only from `HasPayment`.
    ///
    /// On a valid turn the oracle decides the outcome: a win with more than
    /// one unit in stock enters `Winner`, anything else enters `Dispensing`,
    /// and the dispense step runs immediately - crank and dispense are one
    /// atomic caller-visible operation. A rejected turn still ends with a
    /// `NothingDispensed` effect from the dispense step.
    pub fn turn_crank(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        match self.state {
            MachineState::HasPayment => {
                effects.push(Effect::CrankTurned);
                let next = if self.oracle.decide() && self.inventory > 1 {
                    MachineState::Winner
                } else {
                    MachineState::Dispensing
                };
                self.transition(next);
                self.dispense(&mut effects);
            }
            MachineState::SoldOut => {
                effects.extend(self.reject(Rejection::NoStock));
                effects.push(Effect::NothingDispensed);
            }
            MachineState::NoPayment => {
                effects.extend(self.reject(Rejection::TurnedWithoutPayment));
                effects.push(Effect::NothingDispensed);
            }
            MachineState::Dispensing | MachineState::Winner => {
                effects.extend(self.reject(Rejection::DoubleTurn));
                effects.push(Effect::NothingDispensed);
            }
        }
        effects
    }

    /// Add stock. The only operation that can recover a `SoldOut` machine.
    ///
    /// Forces `NoPayment` whenever inventory ends up above zero, `SoldOut`
    /// otherwise. Overflow of the counter is reported, never wrapped.
    pub fn refill(&mut self, amount: u32) -> Result<Vec<Effect>, MachineError> {
        self.inventory = self
            .inventory
            .checked_add(amount)
            .ok_or(MachineError::InventoryOverflow {
                inventory: self.inventory,
                amount,
            })?;
        let next = if self.inventory > 0 {
            MachineState::NoPayment
        } else {
            MachineState::SoldOut
        };
        self.transition(next);
        Ok(vec![Effect::Refilled {
            amount,
            inventory: self.inventory,
        }])
    }

    /// Dispatch a parsed [`Command`] to the matching operation.
    pub fn apply(&mut self, command: Command) -> Result<Vec<Effect>, MachineError> {
        match command {
            Command::InsertPayment => Ok(self.insert_payment()),
            Command::EjectPayment => Ok(self.eject_payment()),
            Command::TurnCrank => Ok(self.turn_crank()),
            Command::Refill(amount) => self.refill(amount),
        }
    }

    /// Current inventory count.
    pub fn inventory(&self) -> u32 {
        self.inventory
    }

    /// Current state.
    pub fn state(&self) -> MachineState {
        self.state
    }

    /// One-line snapshot of inventory and state, for diagnostics.
    pub fn describe(&self) -> String {
        format!("gumballs: {} - state: {}", self.inventory, self.state)
    }

    /// The log of state transitions taken so far.
    pub fn history(&self) -> &TransitionLog {
        &self.log
    }

    /// The dispense step, run immediately after a successful crank turn.
    fn dispense(&mut self, effects: &mut Vec<Effect>) {
        match self.state {
            MachineState::Dispensing => {
                self.release_one(effects);
                self.settle(effects);
            }
            MachineState::Winner => {
                self.release_one(effects);
                if self.inventory == 0 {
                    // Winner with a single unit left collapses to one release.
                    effects.push(Effect::OutOfStock);
                    self.transition(MachineState::SoldOut);
                } else {
                    self.release_one(effects);
                    effects.push(Effect::Winner);
                    self.settle(effects);
                }
            }
            MachineState::SoldOut | MachineState::NoPayment | MachineState::HasPayment => {
                effects.push(Effect::NothingDispensed);
            }
        }
    }

    /// Release one unit. The decrement is guarded at zero so the
    /// non-negative invariant holds even if a release is ever requested
    /// on an empty machine.
    fn release_one(&mut self, effects: &mut Vec<Effect>) {
        effects.push(Effect::Released);
        self.inventory = self.inventory.saturating_sub(1);
    }

    /// Convert a transient dispense state back to a settled one.
    fn settle(&mut self, effects: &mut Vec<Effect>) {
        if self.inventory == 0 {
            effects.push(Effect::OutOfStock);
            self.transition(MachineState::SoldOut);
        } else {
            self.transition(MachineState::NoPayment);
        }
    }

    fn transition(&mut self, to: MachineState) {
        if self.state == to {
            return;
        }
        debug!(
            from = %self.state,
            to = %to,
            inventory = self.inventory,
            "transition"
        );
        self.log.record(self.state, to);
        self.state = to;
    }

    fn reject(&self, rejection: Rejection) -> Vec<Effect> {
        debug!(state = %self.state, %rejection, "rejected");
        vec![Effect::Rejected(rejection)]
    }
}

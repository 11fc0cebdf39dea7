//! Property-based tests for the dispensing machine.
//!
//! These tests drive arbitrary event sequences against scripted oracles
//! and verify the machine's invariants after every settled operation.

use gumball::{Command, Effect, GumballMachine, MachineState, SequenceOracle};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_command()(variant in 0..4u8, amount in 0..8u32) -> Command {
        match variant {
            0 => Command::InsertPayment,
            1 => Command::EjectPayment,
            2 => Command::TurnCrank,
            _ => Command::Refill(amount),
        }
    }
}

prop_compose! {
    fn arbitrary_session()(
        initial in 0..6u32,
        decisions in proptest::collection::vec(any::<bool>(), 0..32),
        commands in proptest::collection::vec(arbitrary_command(), 0..32),
    ) -> (u32, Vec<bool>, Vec<Command>) {
        (initial, decisions, commands)
    }
}

proptest! {
    #[test]
    fn machine_settles_between_calls((initial, decisions, commands) in arbitrary_session()) {
        let oracle = SequenceOracle::new(decisions);
        let mut machine = GumballMachine::new(initial, Box::new(oracle));

        for command in commands {
            machine.apply(command).unwrap();
            prop_assert!(machine.state().is_settled());
        }
    }

    #[test]
    fn sold_out_iff_empty((initial, decisions, commands) in arbitrary_session()) {
        let oracle = SequenceOracle::new(decisions);
        let mut machine = GumballMachine::new(initial, Box::new(oracle));

        prop_assert_eq!(
            machine.state() == MachineState::SoldOut,
            machine.inventory() == 0
        );
        for command in commands {
            machine.apply(command).unwrap();
            prop_assert_eq!(
                machine.state() == MachineState::SoldOut,
                machine.inventory() == 0
            );
        }
    }

    #[test]
    fn releases_account_for_inventory((initial, decisions, commands) in arbitrary_session()) {
        let oracle = SequenceOracle::new(decisions);
        let mut machine = GumballMachine::new(initial, Box::new(oracle));

        let mut refilled: u64 = 0;
        let mut released: u64 = 0;
        for command in commands {
            if let Command::Refill(amount) = command {
                refilled += u64::from(amount);
            }
            let effects = machine.apply(command).unwrap();
            released += effects.iter().filter(|e| **e == Effect::Released).count() as u64;
        }

        prop_assert_eq!(
            u64::from(machine.inventory()),
            u64::from(initial) + refilled - released
        );
    }

    #[test]
    fn rejections_never_change_inventory((initial, decisions, commands) in arbitrary_session()) {
        let oracle = SequenceOracle::new(decisions);
        let mut machine = GumballMachine::new(initial, Box::new(oracle));

        for command in commands {
            let before = machine.inventory();
            let effects = machine.apply(command).unwrap();
            let only_rejections = effects.iter().all(|e| {
                matches!(e, Effect::Rejected(_) | Effect::NothingDispensed)
            });
            if only_rejections {
                prop_assert_eq!(machine.inventory(), before);
            }
        }
    }

    #[test]
    fn transition_log_has_no_self_loops((initial, decisions, commands) in arbitrary_session()) {
        let oracle = SequenceOracle::new(decisions);
        let mut machine = GumballMachine::new(initial, Box::new(oracle));

        for command in commands {
            machine.apply(command).unwrap();
        }
        for transition in machine.history().transitions() {
            prop_assert_ne!(transition.from, transition.to);
        }
    }
}

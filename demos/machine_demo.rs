//! Gumball machine demo.
//!
//! With no arguments, replays the classic service session against the
//! random oracle. Pass commands to drive the machine yourself:
//!
//! Run with: cargo run --example machine_demo
//!      or:  cargo run --example machine_demo -- insert turn "refill 4"

use std::str::FromStr;

use gumball::{Command, GumballMachine};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut machine = GumballMachine::with_random_oracle(5);

    println!("{}\n", machine.describe());

    if args.is_empty() {
        for batch in scripted_session() {
            run_batch(&mut machine, &batch);
        }
    } else {
        let commands: Vec<Command> = match args.iter().map(|s| Command::from_str(s)).collect() {
            Ok(commands) => commands,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        };
        run_batch(&mut machine, &commands);
    }
}

/// The original demo script: a few sales, an ejected payment, a sell-out,
/// and a refill.
fn scripted_session() -> Vec<Vec<Command>> {
    use Command::*;
    vec![
        vec![InsertPayment, TurnCrank],
        vec![InsertPayment, EjectPayment, TurnCrank],
        vec![InsertPayment, TurnCrank, InsertPayment, TurnCrank, EjectPayment],
        vec![
            InsertPayment,
            InsertPayment,
            TurnCrank,
            InsertPayment,
            TurnCrank,
            InsertPayment,
            TurnCrank,
        ],
        vec![Refill(4)],
    ]
}

fn run_batch(machine: &mut GumballMachine, commands: &[Command]) {
    for command in commands {
        match machine.apply(*command) {
            Ok(effects) => {
                for effect in effects {
                    println!("{effect}");
                }
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }
    println!("\n{}\n", machine.describe());
}

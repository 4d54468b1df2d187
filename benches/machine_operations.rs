//! Benchmark suite for the coffee machine engine and replay session
//!
//! ```bash
//! cargo bench
//! ```

use coffee_machine::session::{ReplaySession, Session};
use coffee_machine::{CoffeeMachine, MachineState, Recipe, Supplies};
use std::path::PathBuf;

fn main() {
    divan::main();
}

/// Serve espressos until the cups run out, refilling between rounds
#[divan::bench(args = [10, 1_000, 100_000])]
fn purchase_and_refill(rounds: u32) {
    let mut machine = CoffeeMachine::new(MachineState::new(0, 0, 0, 0, 0));

    for _ in 0..rounds {
        machine
            .refill(Supplies::new(250, 0, 16, 1))
            .expect("refill failed");
        machine
            .purchase(divan::black_box(Recipe::Espresso))
            .expect("purchase failed");
    }

    divan::black_box(machine.collect_cash());
}

/// Rejected purchases against an empty machine
#[divan::bench]
fn rejected_purchase() {
    let mut machine = CoffeeMachine::new(MachineState::new(0, 0, 0, 0, 0));
    let _ = divan::black_box(machine.purchase(divan::black_box(Recipe::Cappuccino)));
}

/// Replay the scenario fixture end to end
#[divan::bench]
fn replay_fixture() {
    let mut machine = CoffeeMachine::default();
    let mut session = ReplaySession::new(PathBuf::from(
        "tests/fixtures/spec_scenarios/input.csv",
    ));
    let mut output = Vec::new();

    session
        .run(&mut machine, &mut output)
        .expect("Replay failed");
}

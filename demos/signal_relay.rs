//! Demonstration: three states, four events, printing enter hooks.
//!
//! Run with: cargo run --example signal_relay

use gearshift::{FsmError, StateMachine};

const STATE1: &str = "STATE1";
const STATE2: &str = "STATE2";
const STATE3: &str = "STATE3";

fn main() -> Result<(), FsmError> {
    let mut machine = StateMachine::new();
    machine
        .configure()
        .add_states([STATE1, STATE2, STATE3])?
        .add_transition(STATE1, STATE2, "e1")?
        .add_transition(STATE2, STATE3, "e2")?
        .add_transition(STATE3, STATE2, "e1")?
        .add_transition(STATE3, STATE1, "e3")?
        .add_transition(STATE1, STATE3, "e4")?
        .on_enter(STATE2, |state, _: &()| println!("Entering {state}"))?
        .on_enter(STATE3, |state, _: &()| println!("Entering {state}"))?;

    println!("{machine}");
    machine.trigger("e1", &())?;
    machine.trigger("e2", &())?;
    println!("{machine}");

    Ok(())
}

//! Gearshift: a small embeddable finite state machine
//!
//! Gearshift drives string-named states with named events. Callers
//! declare states, wire `(state, event) -> state` transitions, attach
//! optional enter/exit hooks, then fire events at the machine. The
//! engine is synchronous and in-memory: no concurrency, no I/O, no
//! external formats.
//!
//! # Core Concepts
//!
//! - **StateMachine**: the engine - ordered state set, transition
//!   table, current-state pointer, hooks, and transition journal
//! - **MachineConfig**: fluent facade for wiring a machine, chained
//!   with `?` since every registration validates its arguments
//! - **Payload**: an opaque value forwarded untouched to hooks
//!
//! # Example
//!
//! ```rust
//! use gearshift::{FsmError, StateMachine};
//!
//! fn main() -> Result<(), FsmError> {
//!     let mut machine = StateMachine::new();
//!     machine
//!         .configure()
//!         .add_states(["Red", "Green", "Yellow"])?
//!         .add_transition("Red", "Green", "go")?
//!         .add_transition("Green", "Yellow", "caution")?
//!         .add_transition("Yellow", "Red", "stop")?
//!         .on_enter("Green", |state, _: &()| println!("light is {state}"))?;
//!
//!     machine.trigger("go", &())?;
//!     assert_eq!(machine.current_state()?, "Green");
//!
//!     machine.trigger("caution", &())?;
//!     machine.trigger("stop", &())?;
//!     assert_eq!(machine.history().path(), vec!["Red", "Green", "Yellow", "Red"]);
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::MachineConfig;
pub use core::{Definition, FsmError, History, StateMachine, TransitionRecord};

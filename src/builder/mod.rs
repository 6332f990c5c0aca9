//! Fluent configuration facade for state machines.
//!
//! [`MachineConfig`] borrows one machine exclusively and exposes
//! chainable registration methods; all state lives in the machine.

mod config;

pub use config::MachineConfig;

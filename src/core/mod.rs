//! The state machine engine.
//!
//! This module holds the machine itself and its supporting value
//! types:
//! - [`StateMachine`] with the event-triggering algorithm
//! - [`FsmError`] for every configuration and runtime failure
//! - [`History`] journal of committed transitions
//! - [`Definition`] serializable machine shape
//!
//! Enter/exit hooks are registered as plain closures through the
//! configuration facade; the boxed wrapper around them is internal.

mod definition;
mod error;
mod history;
mod hook;
mod machine;

pub use definition::Definition;
pub use error::FsmError;
pub use history::{History, TransitionRecord};
pub use machine::StateMachine;

pub(crate) use hook::Hook;

//! Error types for machine configuration and event triggering.

use thiserror::Error;

/// Errors reported by the state machine and its configuration facade.
///
/// Every variant corresponds to a usage error (a precondition violated
/// by the caller) except [`FsmError::IllegalTransition`], which is only
/// produced when strict illegal-transition handling has been enabled
/// via [`MachineConfig::fail_on_illegal_transition`].
///
/// [`MachineConfig::fail_on_illegal_transition`]: crate::builder::MachineConfig::fail_on_illegal_transition
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FsmError {
    #[error("non-empty argument expected: state")]
    EmptyStateName,

    #[error("non-empty argument expected: states")]
    EmptyStateList,

    #[error("cannot trigger with empty event")]
    EmptyEvent,

    #[error("state machine already contains state: {0}")]
    DuplicateState(String),

    #[error("unknown state: {0}")]
    UnknownState(String),

    #[error("state machine not initialized")]
    Uninitialized,

    #[error("attempted illegal transition: {from} + {event}")]
    IllegalTransition { from: String, event: String },
}

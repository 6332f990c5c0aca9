//! Serializable snapshot of a machine's shape.
//!
//! A [`Definition`] captures states, transitions, and the current
//! state - everything about a machine except its hooks and journal,
//! which are runtime artifacts. Snapshots serialize with serde and can
//! rebuild an equivalent machine, with membership invariants
//! re-validated on the way in.

use crate::core::error::FsmError;
use crate::core::machine::StateMachine;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The declarative shape of a state machine.
///
/// # Example
///
/// ```rust
/// use gearshift::{Definition, StateMachine};
///
/// let mut machine = StateMachine::new();
/// machine
///     .configure()
///     .add_states(["Closed", "Open"])?
///     .add_transition("Closed", "Open", "open")?;
/// machine.trigger("open", &())?;
///
/// let json = serde_json::to_string(&machine.definition()).unwrap();
/// let definition: Definition = serde_json::from_str(&json).unwrap();
///
/// let restored: StateMachine = StateMachine::from_definition(definition)?;
/// assert_eq!(restored.current_state()?, "Open");
/// assert!(restored.contains_state("Closed"));
/// # Ok::<(), gearshift::FsmError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// States in registration order
    pub states: Vec<String>,
    /// Source state -> (event -> destination state)
    pub transitions: HashMap<String, HashMap<String, String>>,
    /// The active state, `None` for a machine with no states
    pub current: Option<String>,
}

impl<P> StateMachine<P> {
    /// Snapshot this machine's states, transitions, and current state.
    pub fn definition(&self) -> Definition {
        Definition {
            states: self.states.clone(),
            transitions: self.transitions.clone(),
            current: self.current.clone(),
        }
    }

    /// Rebuild a machine from a snapshot.
    ///
    /// Hooks and journal start empty; strict illegal-transition
    /// handling starts disabled. The snapshot is validated: state names
    /// must be non-empty and unique, and every transition endpoint and
    /// the current state must be registered states.
    pub fn from_definition(definition: Definition) -> Result<Self, FsmError> {
        let mut machine = StateMachine::new();
        {
            let mut config = machine.configure();
            for state in &definition.states {
                config.add_state(state)?;
            }
            for (from, row) in &definition.transitions {
                for (event, to) in row {
                    config.add_transition(from, to, event)?;
                }
            }
            if let Some(current) = &definition.current {
                config.set_initial_state(current)?;
            }
        }
        Ok(machine)
    }
}

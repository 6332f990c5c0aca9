//! The state machine engine.

use crate::builder::MachineConfig;
use crate::core::error::FsmError;
use crate::core::history::{History, TransitionRecord};
use crate::core::hook::Hook;
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// An event-driven finite state machine over string-named states.
///
/// States are kept in registration order; transitions map a
/// `(source state, event)` pair to exactly one destination, with later
/// registrations overwriting earlier ones. Exactly one state is current
/// at any time once the first state has been added.
///
/// `P` is the payload type handed through [`trigger`] into enter/exit
/// hooks. The engine never inspects it; it defaults to `()` for
/// machines that have no use for payloads.
///
/// The machine provides no internal synchronization. Every operation is
/// a bounded, synchronous computation on the calling thread; sharing
/// one machine across threads requires external synchronization by the
/// caller.
///
/// # Example
///
/// ```rust
/// use gearshift::StateMachine;
///
/// let mut machine = StateMachine::new();
/// machine
///     .configure()
///     .add_states(["Stopped", "Playing", "Paused"])?
///     .add_transition("Stopped", "Playing", "play")?
///     .add_transition("Playing", "Paused", "pause")?
///     .add_transition("Paused", "Playing", "play")?
///     .on_enter("Playing", |state, _: &()| println!("entering {state}"))?;
///
/// machine.trigger("play", &())?;
/// assert_eq!(machine.current_state()?, "Playing");
///
/// // "rewind" has no transition out of Playing: ignored by default.
/// machine.trigger("rewind", &())?;
/// assert_eq!(machine.current_state()?, "Playing");
/// # Ok::<(), gearshift::FsmError>(())
/// ```
///
/// [`trigger`]: StateMachine::trigger
#[derive(Debug, Default)]
pub struct StateMachine<P = ()> {
    pub(crate) states: Vec<String>,
    pub(crate) transitions: HashMap<String, HashMap<String, String>>,
    pub(crate) current: Option<String>,
    pub(crate) fail_on_illegal: bool,
    pub(crate) on_enter: HashMap<String, Hook<P>>,
    pub(crate) on_exit: HashMap<String, Hook<P>>,
    pub(crate) history: History,
}

impl<P> StateMachine<P> {
    /// Create an empty machine with no states.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: HashMap::new(),
            current: None,
            fail_on_illegal: false,
            on_enter: HashMap::new(),
            on_exit: HashMap::new(),
            history: History::new(),
        }
    }

    /// The configuration facade for this machine.
    ///
    /// May be retrieved again at any point to register further states,
    /// transitions, or hooks.
    pub fn configure(&mut self) -> MachineConfig<'_, P> {
        MachineConfig::new(self)
    }

    /// Whether `state` has been registered.
    pub fn contains_state(&self, state: &str) -> bool {
        self.states.iter().any(|s| s == state)
    }

    /// The active state.
    ///
    /// Fails with [`FsmError::Uninitialized`] while no state has been
    /// registered.
    pub fn current_state(&self) -> Result<&str, FsmError> {
        self.current.as_deref().ok_or(FsmError::Uninitialized)
    }

    /// The journal of committed transitions.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Fire an event against the current state.
    ///
    /// When a transition is registered for the pair, the current
    /// state's on-exit hook fires first, then the current state moves
    /// to the destination, then the destination's on-enter hook fires.
    /// Both hooks receive `payload`. Each step commits before the next
    /// runs, so a panicking hook propagates to the caller without
    /// unwinding the steps already taken.
    ///
    /// When no transition matches, the event is silently ignored
    /// unless strict handling was enabled via
    /// [`MachineConfig::fail_on_illegal_transition`], in which case
    /// [`FsmError::IllegalTransition`] names the current state and the
    /// event. Either way the current state is untouched and no hooks
    /// fire.
    pub fn trigger(&mut self, event: &str, payload: &P) -> Result<(), FsmError> {
        if event.is_empty() {
            return Err(FsmError::EmptyEvent);
        }
        let from = self.current.clone().ok_or(FsmError::Uninitialized)?;

        let destination = self
            .transitions
            .get(&from)
            .and_then(|row| row.get(event))
            .cloned();

        let Some(to) = destination else {
            if self.fail_on_illegal {
                return Err(FsmError::IllegalTransition {
                    from,
                    event: event.to_string(),
                });
            }
            trace!(state = %from, event, "no transition for event, ignoring");
            return Ok(());
        };

        if let Some(hook) = self.on_exit.get_mut(&from) {
            hook.call(&from, payload);
        }

        self.current = Some(to.clone());
        self.history.record(TransitionRecord {
            from: from.clone(),
            to: to.clone(),
            event: event.to_string(),
            timestamp: Utc::now(),
        });
        debug!(from = %from, to = %to, event, "transition committed");

        if let Some(hook) = self.on_enter.get_mut(&to) {
            hook.call(&to, payload);
        }

        Ok(())
    }
}

/// Human-readable rendering: states in registration order, the current
/// state starred, each state's outgoing `event -> destination` pairs
/// indented beneath it. The order of a single state's outgoing pairs is
/// unspecified.
impl<P> fmt::Display for StateMachine<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "StateMachine representation")?;
        for state in &self.states {
            if self.current.as_deref() == Some(state.as_str()) {
                writeln!(f, "\t*{state}*")?;
            } else {
                writeln!(f, "\t{state}")?;
            }
            if let Some(row) = self.transitions.get(state) {
                for (event, to) in row {
                    writeln!(f, "\t\t{event} -> {to}")?;
                }
            }
        }
        Ok(())
    }
}

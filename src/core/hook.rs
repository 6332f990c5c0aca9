//! Enter/exit hooks attached to individual states.
//!
//! Hooks are plain callbacks invoked during a successful transition:
//! the departing state's exit hook before the current state changes,
//! the destination state's enter hook after. The engine never inspects
//! the payload it hands them.

use std::fmt;

/// A callback attached to one state, fired on enter or exit.
///
/// The callback receives the name of the state it is attached to and a
/// reference to the payload supplied to [`StateMachine::trigger`]. It
/// may capture and mutate its own environment (`FnMut`), which is why
/// hooks are typically registered through closures:
///
/// ```rust
/// use gearshift::StateMachine;
///
/// let mut machine: StateMachine<u32> = StateMachine::new();
/// machine
///     .configure()
///     .add_states(["Idle", "Busy"])?
///     .add_transition("Idle", "Busy", "start")?
///     .on_enter("Busy", |state, payload: &u32| {
///         println!("{state} entered with job #{payload}");
///     })?;
///
/// machine.trigger("start", &7)?;
/// # Ok::<(), gearshift::FsmError>(())
/// ```
///
/// [`StateMachine::trigger`]: crate::core::StateMachine::trigger
pub struct Hook<P> {
    callback: Box<dyn FnMut(&str, &P) + Send>,
}

impl<P> Hook<P> {
    /// Wrap a callback in a hook.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&str, &P) + Send + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    pub(crate) fn call(&mut self, state: &str, payload: &P) {
        (self.callback)(state, payload)
    }
}

impl<P> fmt::Debug for Hook<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook")
    }
}

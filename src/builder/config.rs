//! The configuration facade bound to one machine.

use crate::core::{FsmError, Hook, StateMachine};

/// Fluent front-end for configuring a [`StateMachine`].
///
/// Obtained from [`StateMachine::configure`]; holds an exclusive
/// borrow of the machine for its lifetime, so configuration and
/// triggering cannot interleave accidentally. Every registration
/// method validates its arguments, mutates the machine, and returns
/// `Result<&mut Self, FsmError>` so chains compose with `?`:
///
/// ```rust
/// use gearshift::StateMachine;
///
/// let mut machine = StateMachine::new();
/// machine
///     .configure()
///     .add_states(["Draft", "Review", "Published"])?
///     .add_transition("Draft", "Review", "submit")?
///     .add_transition("Review", "Draft", "reject")?
///     .add_transition("Review", "Published", "approve")?
///     .on_enter("Review", |state, _: &()| println!("now in {state}"))?;
/// # Ok::<(), gearshift::FsmError>(())
/// ```
///
/// Errors surface at the violating call and abort the chain there;
/// registrations made by earlier calls in the chain remain in place.
#[derive(Debug)]
pub struct MachineConfig<'a, P> {
    machine: &'a mut StateMachine<P>,
}

impl<'a, P> MachineConfig<'a, P> {
    pub(crate) fn new(machine: &'a mut StateMachine<P>) -> Self {
        Self { machine }
    }

    /// Register a state at the end of the ordered set.
    ///
    /// The first state ever added becomes the current state. Fails
    /// with [`FsmError::EmptyStateName`] for an empty name and
    /// [`FsmError::DuplicateState`] if the state already exists.
    pub fn add_state(&mut self, state: &str) -> Result<&mut Self, FsmError> {
        if state.is_empty() {
            return Err(FsmError::EmptyStateName);
        }
        if self.machine.contains_state(state) {
            return Err(FsmError::DuplicateState(state.to_string()));
        }

        self.machine.states.push(state.to_string());
        if self.machine.current.is_none() {
            self.machine.current = Some(state.to_string());
        }
        Ok(self)
    }

    /// Register several states in order, each via [`add_state`].
    ///
    /// Fails with [`FsmError::EmptyStateList`] if `states` yields
    /// nothing.
    ///
    /// [`add_state`]: MachineConfig::add_state
    pub fn add_states<I, S>(&mut self, states: I) -> Result<&mut Self, FsmError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut any = false;
        for state in states {
            any = true;
            self.add_state(state.as_ref())?;
        }
        if !any {
            return Err(FsmError::EmptyStateList);
        }
        Ok(self)
    }

    /// Override the current state directly, firing no hooks.
    ///
    /// Fails with [`FsmError::EmptyStateName`] for an empty name and
    /// [`FsmError::UnknownState`] if the state was never registered.
    pub fn set_initial_state(&mut self, state: &str) -> Result<&mut Self, FsmError> {
        if state.is_empty() {
            return Err(FsmError::EmptyStateName);
        }
        if !self.machine.contains_state(state) {
            return Err(FsmError::UnknownState(state.to_string()));
        }

        self.machine.current = Some(state.to_string());
        Ok(self)
    }

    /// Register `event` as moving the machine from `from` to `to`.
    ///
    /// Registering the same `(from, event)` pair again overwrites the
    /// previous destination. Fails with [`FsmError::UnknownState`] for
    /// an unregistered endpoint and [`FsmError::EmptyEvent`] for an
    /// empty event name.
    pub fn add_transition(
        &mut self,
        from: &str,
        to: &str,
        event: &str,
    ) -> Result<&mut Self, FsmError> {
        if !self.machine.contains_state(from) {
            return Err(FsmError::UnknownState(from.to_string()));
        }
        if !self.machine.contains_state(to) {
            return Err(FsmError::UnknownState(to.to_string()));
        }
        if event.is_empty() {
            return Err(FsmError::EmptyEvent);
        }

        self.machine
            .transitions
            .entry(from.to_string())
            .or_default()
            .insert(event.to_string(), to.to_string());
        Ok(self)
    }

    /// Register a hook fired after the machine enters `state`.
    ///
    /// At most one enter hook per state; registering again replaces
    /// the previous one. Fails with [`FsmError::UnknownState`] if the
    /// state was never registered.
    pub fn on_enter<F>(&mut self, state: &str, hook: F) -> Result<&mut Self, FsmError>
    where
        F: FnMut(&str, &P) + Send + 'static,
    {
        if !self.machine.contains_state(state) {
            return Err(FsmError::UnknownState(state.to_string()));
        }
        self.machine.on_enter.insert(state.to_string(), Hook::new(hook));
        Ok(self)
    }

    /// Register a hook fired before the machine leaves `state`.
    ///
    /// At most one exit hook per state; registering again replaces the
    /// previous one. Fails with [`FsmError::UnknownState`] if the
    /// state was never registered.
    pub fn on_exit<F>(&mut self, state: &str, hook: F) -> Result<&mut Self, FsmError>
    where
        F: FnMut(&str, &P) + Send + 'static,
    {
        if !self.machine.contains_state(state) {
            return Err(FsmError::UnknownState(state.to_string()));
        }
        self.machine.on_exit.insert(state.to_string(), Hook::new(hook));
        Ok(self)
    }

    /// Choose how [`StateMachine::trigger`] treats an event with no
    /// registered transition: error when enabled, silent no-op when
    /// disabled (the default).
    ///
    /// Deliberately not chainable.
    pub fn fail_on_illegal_transition(&mut self, enabled: bool) {
        self.machine.fail_on_illegal = enabled;
    }
}

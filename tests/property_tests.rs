//! Property-based tests for the state machine engine.
//!
//! These tests use proptest to verify invariants across many randomly
//! generated state sets and transition tables.

use gearshift::{FsmError, StateMachine};
use proptest::prelude::*;

/// Unique, non-empty state names in a stable order.
fn state_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,8}", 1..8).prop_map(|set| {
        let mut names: Vec<String> = set.into_iter().collect();
        names.sort();
        names
    })
}

proptest! {
    #[test]
    fn added_states_are_members_in_insertion_order(names in state_names()) {
        let mut machine: StateMachine = StateMachine::new();
        {
            let mut config = machine.configure();
            for name in &names {
                config.add_state(name)?;
            }
        }

        for name in &names {
            prop_assert!(machine.contains_state(name));
        }
        prop_assert_eq!(&machine.definition().states, &names);
        prop_assert_eq!(machine.current_state().unwrap(), names[0].as_str());
    }

    #[test]
    fn duplicate_state_leaves_set_unchanged(names in state_names(), pick in 0..8usize) {
        let mut machine: StateMachine = StateMachine::new();
        machine.configure().add_states(&names)?;

        let duplicate = names[pick % names.len()].clone();
        let err = machine.configure().add_state(&duplicate).unwrap_err();
        prop_assert_eq!(err, FsmError::DuplicateState(duplicate));
        prop_assert_eq!(&machine.definition().states, &names);
    }

    #[test]
    fn set_initial_state_picks_any_registered_state(names in state_names(), pick in 0..8usize) {
        let mut machine: StateMachine = StateMachine::new();
        machine.configure().add_states(&names)?;

        let target = names[pick % names.len()].clone();
        machine.configure().set_initial_state(&target)?;
        prop_assert_eq!(machine.current_state().unwrap(), target.as_str());
    }

    #[test]
    fn last_registered_destination_wins(
        names in state_names(),
        destinations in prop::collection::vec(0..8usize, 1..5),
    ) {
        prop_assume!(names.len() >= 2);
        let mut machine: StateMachine = StateMachine::new();
        machine.configure().add_states(&names)?;

        let from = names[0].clone();
        let mut last = None;
        for pick in &destinations {
            let to = names[pick % names.len()].clone();
            machine.configure().add_transition(&from, &to, "go")?;
            last = Some(to);
        }

        machine.trigger("go", &())?;
        let last = last.unwrap();
        prop_assert_eq!(machine.current_state().unwrap(), last.as_str());
    }

    #[test]
    fn ring_walk_follows_registered_transitions(names in state_names(), steps in 1..20usize) {
        // wire the states into a ring on a single event and walk it
        let mut machine: StateMachine = StateMachine::new();
        {
            let mut config = machine.configure();
            config.add_states(&names)?;
            for (i, from) in names.iter().enumerate() {
                let to = &names[(i + 1) % names.len()];
                config.add_transition(from, to, "step")?;
            }
        }

        for _ in 0..steps {
            machine.trigger("step", &())?;
        }

        let expected = &names[steps % names.len()];
        prop_assert_eq!(machine.current_state().unwrap(), expected.as_str());
        prop_assert_eq!(machine.history().records().len(), steps);
        prop_assert_eq!(machine.history().path().len(), steps + 1);
    }

    #[test]
    fn unmatched_events_never_move_the_machine(names in state_names(), events in prop::collection::vec("[A-Z]{1,4}", 1..10)) {
        // events are upper-case, transitions are registered on lower-case
        // names only, so nothing ever matches
        let mut machine: StateMachine = StateMachine::new();
        machine.configure().add_states(&names)?;

        for event in &events {
            machine.trigger(event, &())?;
            prop_assert_eq!(machine.current_state().unwrap(), names[0].as_str());
        }
        prop_assert!(machine.history().records().is_empty());
    }

    #[test]
    fn strict_mode_rejects_unmatched_events(names in state_names()) {
        let mut machine: StateMachine = StateMachine::new();
        machine.configure().add_states(&names)?;
        machine.configure().fail_on_illegal_transition(true);

        let err = machine.trigger("UNWIRED", &()).unwrap_err();
        prop_assert_eq!(
            err,
            FsmError::IllegalTransition {
                from: names[0].clone(),
                event: "UNWIRED".to_string(),
            }
        );
        prop_assert_eq!(machine.current_state().unwrap(), names[0].as_str());
    }

    #[test]
    fn definition_round_trip_preserves_shape(names in state_names(), steps in 0..5usize) {
        let mut machine: StateMachine = StateMachine::new();
        {
            let mut config = machine.configure();
            config.add_states(&names)?;
            for (i, from) in names.iter().enumerate() {
                let to = &names[(i + 1) % names.len()];
                config.add_transition(from, to, "step")?;
            }
        }
        for _ in 0..steps {
            machine.trigger("step", &())?;
        }

        let json = serde_json::to_string(&machine.definition()).unwrap();
        let definition = serde_json::from_str(&json).unwrap();
        let restored: StateMachine = StateMachine::from_definition(definition).unwrap();

        prop_assert_eq!(restored.definition(), machine.definition());
        prop_assert_eq!(restored.current_state().unwrap(), machine.current_state().unwrap());
    }

    #[test]
    fn rendering_lists_every_state_once(names in state_names()) {
        let mut machine: StateMachine = StateMachine::new();
        machine.configure().add_states(&names)?;

        let rendering = machine.to_string();
        for name in &names {
            let bare = format!("\t{name}\n");
            let starred = format!("\t*{name}*\n");
            let occurrences =
                rendering.matches(&bare).count() + rendering.matches(&starred).count();
            prop_assert_eq!(occurrences, 1, "state {} rendered {} times", name, occurrences);
        }
    }
}

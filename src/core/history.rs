//! Journal of committed transitions.
//!
//! Every successful trigger appends one record: which state was left,
//! which was entered, the event that caused it, and when. Ignored
//! events and direct initial-state overrides are not journaled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use gearshift::TransitionRecord;
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: "Idle".to_string(),
///     to: "Busy".to_string(),
///     event: "start".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.event, "start");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state that was exited
    pub from: String,
    /// The state that was entered
    pub to: String,
    /// The event that triggered the transition
    pub event: String,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of every transition a machine has committed.
///
/// # Example
///
/// ```rust
/// use gearshift::StateMachine;
///
/// let mut machine = StateMachine::new();
/// machine
///     .configure()
///     .add_states(["Idle", "Busy"])?
///     .add_transition("Idle", "Busy", "start")?;
///
/// machine.trigger("start", &())?;
///
/// let path = machine.history().path();
/// assert_eq!(path, vec!["Idle", "Busy"]);
/// # Ok::<(), gearshift::FsmError>(())
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    records: Vec<TransitionRecord>,
}

impl History {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Append a committed transition.
    pub(crate) fn record(&mut self, record: TransitionRecord) {
        self.records.push(record);
    }

    /// All records in commit order.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The sequence of states traversed: the first record's source,
    /// then the destination of every record. Empty while nothing has
    /// been committed.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Elapsed time between the first and last committed transition.
    /// `None` while the journal is empty.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.first()?, self.records.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

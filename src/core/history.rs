//! Session history tracking.
//!
//! The engine records every accepted transition so callers and tests can
//! audit the path a session took. History is immutable; `record` returns a
//! new history with the transition appended. Nothing is persisted.

use super::state::RepositioningState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left.
    pub from: RepositioningState,
    /// The state being entered.
    pub to: RepositioningState,
    /// When the transition was committed.
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of a session's accepted transitions.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use repositioning::core::{RepositioningState, StateHistory, TransitionRecord};
///
/// let history = StateHistory::new();
/// let history = history.record(TransitionRecord {
///     from: RepositioningState::Initial,
///     to: RepositioningState::Aborted,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.transitions().len(), 1);
/// assert_eq!(history.get_path().len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<TransitionRecord>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// The path of states traversed: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&RepositioningState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Elapsed time between the first and last recorded transition.
    ///
    /// `None` while the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions in order.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }
}

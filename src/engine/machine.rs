//! The stateful engine around the pure transition function.
//!
//! The machine owns the single current state, applies the transition
//! function on every event, and on acceptance commits the new state and
//! history before dispatching exactly one outward notification. A
//! rejected event leaves everything untouched and notifies nobody.

use crate::core::{
    transition, Projector, RepositioningEvent, RepositioningState, StateHistory,
    TransitionOutcome, TransitionRecord,
};
use crate::engine::observer::PositionObserver;
use chrono::Utc;
use std::sync::{Arc, Weak};
use tracing::{debug, info};
use uuid::Uuid;

/// Executes the repositioning workflow for a single session.
///
/// Synchronous and single-threaded: `apply` runs to completion with no
/// internal parallelism, and the machine needs external mutual exclusion
/// before it can be shared across threads.
///
/// # Example
///
/// ```rust
/// use repositioning::core::{
///     Containment, Coordinate, GpsQuality, Position, RepositioningEvent, RequestKind,
/// };
/// use repositioning::engine::RepositioningMachine;
///
/// let mut machine = RepositioningMachine::new();
/// let estimate = Position::new(
///     Coordinate::new(48.8584, 2.2945),
///     GpsQuality::Good,
///     None,
///     Containment::OutOfZone,
/// );
///
/// let outcome = machine.apply(RepositioningEvent::Start {
///     position: estimate,
///     kind: RequestKind::Routing,
/// });
///
/// assert!(outcome.is_accepted());
/// assert!(machine.is_final());
/// ```
pub struct RepositioningMachine {
    session: Uuid,
    current: RepositioningState,
    history: StateHistory,
    projector: Projector,
    observer: Option<Weak<dyn PositionObserver>>,
}

impl RepositioningMachine {
    /// Create a machine in `Initial` with the identity projection.
    pub fn new() -> Self {
        Self::with_projector(Projector::identity())
    }

    /// Create a machine in `Initial` with a custom projection hook.
    pub fn with_projector(projector: Projector) -> Self {
        Self {
            session: Uuid::new_v4(),
            current: RepositioningState::Initial,
            history: StateHistory::new(),
            projector,
            observer: None,
        }
    }

    /// Correlation id carried by every log event of this session.
    pub fn session(&self) -> Uuid {
        self.session
    }

    /// Current state.
    pub fn current_state(&self) -> &RepositioningState {
        &self.current
    }

    /// Whether the session has reached a routable result.
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    /// Accepted transitions so far.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Point outward notifications at `observer`.
    ///
    /// Only a weak reference is kept; the caller keeps ownership.
    pub fn attach_observer(&mut self, observer: &Arc<dyn PositionObserver>) {
        self.observer = Some(Arc::downgrade(observer));
    }

    /// Stop notifying the current observer, if any.
    pub fn detach_observer(&mut self) {
        self.observer = None;
    }

    /// Apply one event and report whether it was routed.
    ///
    /// On acceptance the new state and the history record are committed
    /// before the notification runs, so the observer always sees a machine
    /// that has already moved.
    pub fn apply(&mut self, event: RepositioningEvent) -> TransitionOutcome {
        let outcome = transition(&event, &self.current, &self.projector);

        match &outcome {
            TransitionOutcome::Accepted { from, to } => {
                info!(
                    session = %self.session,
                    from = from.name(),
                    to = to.name(),
                    "state changed"
                );
                self.current = to.clone();
                self.history = self.history.record(TransitionRecord {
                    from: from.clone(),
                    to: to.clone(),
                    timestamp: Utc::now(),
                });
                self.dispatch(to);
            }
            TransitionOutcome::Rejected(rejected) => {
                debug!(
                    session = %self.session,
                    state = rejected.state,
                    event = rejected.event,
                    "event rejected"
                );
            }
        }

        outcome
    }

    /// Map the freshly-entered state to its single outward call.
    fn dispatch(&self, entered: &RepositioningState) {
        let Some(observer) = self.observer.as_ref().and_then(Weak::upgrade) else {
            debug!(session = %self.session, to = entered.name(), "no observer attached");
            return;
        };

        match entered {
            // Informational states, nothing to relay.
            RepositioningState::Initial | RepositioningState::Aborted => {}
            RepositioningState::NeedInfo { topic, .. } => observer.ask_for_help(*topic),
            RepositioningState::NeedRefinement { mode, position } => {
                observer.ask_for_repositioning(*mode, position)
            }
            RepositioningState::Projected { position } => observer.notify_projected(position),
            RepositioningState::Final {
                position,
                precision,
            } => observer.notify_routing_precision(*precision, position),
        }
    }
}

impl Default for RepositioningMachine {
    fn default() -> Self {
        Self::new()
    }
}

//! Inbound boundary: the session surface consumed by the SDK router.
//!
//! A session owns one engine and translates the router's calls into
//! events 1:1. Each inbound call answers with the transition outcome so
//! the router can tell an ignored call apart from an accepted one.
//!
//! The nominal exchange is a fixed causal chain: the request opens the
//! session (step 1/2), the engine asks its question (step 3/4), the user
//! answers (step 5/6), the engine asks for repositioning (step 7/8), the
//! user corrects (step 9/10, repeatable), and the final notification
//! closes the session (step 11/12).

use crate::core::{
    HelpTopic, Position, Projector, RefinementMode, RepositioningEvent, RepositioningState,
    RequestKind, TransitionOutcome,
};
use crate::engine::machine::RepositioningMachine;
use crate::engine::observer::PositionObserver;
use std::sync::Arc;

/// Calls the SDK router makes into the engine on behalf of the user.
pub trait RepositioningDatasource {
    /// A routing or repositioning request was made (step 1/2).
    fn user_ask_for(&mut self, kind: RequestKind, position: Position) -> TransitionOutcome;

    /// The user replied to the clarifying question (step 5/6).
    fn user_responds_to_help(&mut self, topic: HelpTopic, decision: bool) -> TransitionOutcome;

    /// The user supplied a corrected position (step 9/10); may be called
    /// repeatedly while the engine waits on refinement or confirmation.
    fn user_responds_to_repositioning(
        &mut self,
        mode: RefinementMode,
        corrected_position: Position,
    ) -> TransitionOutcome;

    /// The user accepted the projected position.
    fn user_confirms(&mut self, position: Position) -> TransitionOutcome;
}

/// Explicitly constructed owner of one repositioning engine.
///
/// Whoever needs the workflow builds a session and keeps it; there is no
/// process-wide instance.
///
/// # Example
///
/// ```rust
/// use repositioning::core::{
///     Containment, Coordinate, GpsQuality, Position, RequestKind, RepositioningState,
///     RoutingPrecision,
/// };
/// use repositioning::engine::{RepositioningDatasource, RepositioningSession};
///
/// let mut session = RepositioningSession::new();
/// let estimate = Position::new(
///     Coordinate::new(48.8584, 2.2945),
///     GpsQuality::Good,
///     None,
///     Containment::OutOfZone,
/// );
///
/// let outcome = session.user_ask_for(RequestKind::Routing, estimate);
///
/// assert!(outcome.is_accepted());
/// assert_eq!(
///     session.current_state(),
///     &RepositioningState::Final {
///         position: estimate,
///         precision: RoutingPrecision::UserFixed,
///     }
/// );
/// ```
pub struct RepositioningSession {
    machine: RepositioningMachine,
}

impl RepositioningSession {
    /// New session with the identity projection.
    pub fn new() -> Self {
        Self {
            machine: RepositioningMachine::new(),
        }
    }

    /// New session with a custom projection hook.
    pub fn with_projector(projector: Projector) -> Self {
        Self {
            machine: RepositioningMachine::with_projector(projector),
        }
    }

    /// The engine this session owns.
    pub fn machine(&self) -> &RepositioningMachine {
        &self.machine
    }

    /// Current state of the owned engine.
    pub fn current_state(&self) -> &RepositioningState {
        self.machine.current_state()
    }

    /// Point outward notifications at `observer`.
    pub fn attach_observer(&mut self, observer: &Arc<dyn PositionObserver>) {
        self.machine.attach_observer(observer);
    }

    /// Stop notifying the current observer, if any.
    pub fn detach_observer(&mut self) {
        self.machine.detach_observer();
    }

    /// Operator override: finalize on `position` from any state.
    ///
    /// Engine-level only; not part of the app-facing surface.
    pub fn force(&mut self, position: Position) -> TransitionOutcome {
        self.machine.apply(RepositioningEvent::Force { position })
    }
}

impl Default for RepositioningSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositioningDatasource for RepositioningSession {
    fn user_ask_for(&mut self, kind: RequestKind, position: Position) -> TransitionOutcome {
        self.machine
            .apply(RepositioningEvent::Start { position, kind })
    }

    fn user_responds_to_help(&mut self, topic: HelpTopic, decision: bool) -> TransitionOutcome {
        self.machine
            .apply(RepositioningEvent::MoreInfo { topic, decision })
    }

    fn user_responds_to_repositioning(
        &mut self,
        mode: RefinementMode,
        corrected_position: Position,
    ) -> TransitionOutcome {
        self.machine.apply(RepositioningEvent::LocationRefined {
            mode,
            position: corrected_position,
        })
    }

    fn user_confirms(&mut self, position: Position) -> TransitionOutcome {
        self.machine.apply(RepositioningEvent::Confirm { position })
    }
}

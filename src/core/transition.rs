//! The pure transition function.
//!
//! Everything the workflow decides happens here: a single total mapping
//! from `(event, current state)` to an explicit accepted/rejected outcome.
//! No side effects, no hidden state; the engine layers dispatch on top.

use super::event::RepositioningEvent;
use super::position::{
    Containment, GpsQuality, HelpTopic, Position, RefinementMode, RequestKind, RoutingPrecision,
};
use super::projector::Projector;
use super::state::RepositioningState;
use thiserror::Error;

/// An event presented to a state for which no rule matches.
///
/// Carries the names of the pair that failed to match so callers and logs
/// can tell "ignored" apart from "no-op by design".
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("event '{event}' has no route from state '{state}'")]
pub struct RejectedTransition {
    pub state: &'static str,
    pub event: &'static str,
}

/// Result of running the transition function.
///
/// Rejection is an ordinary value, not an error path: the machine stays
/// where it was and observers hear nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum TransitionOutcome {
    /// The event was routed; `to` is the state to commit.
    Accepted {
        from: RepositioningState,
        to: RepositioningState,
    },
    /// No rule matched; the current state is untouched.
    Rejected(RejectedTransition),
}

impl TransitionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}

/// Which clarifying question fits an undecided estimate.
///
/// Good GPS suggests the user is probably outdoors, so we double-check
/// that; bad GPS suggests indoors.
fn clarifying_topic(position: &Position) -> HelpTopic {
    if position.gps_quality == GpsQuality::Good {
        HelpTopic::Outdoor
    } else {
        HelpTopic::Indoor
    }
}

fn final_user_fixed(position: Position) -> RepositioningState {
    RepositioningState::Final {
        position,
        precision: RoutingPrecision::UserFixed,
    }
}

/// Route an event against the current state.
///
/// Pure and deterministic: the same `(event, state)` pair always produces
/// the same outcome. First match wins; the only overlap is the operator
/// override, which beats every other rule.
pub fn transition(
    event: &RepositioningEvent,
    current: &RepositioningState,
    projector: &Projector,
) -> TransitionOutcome {
    use RepositioningEvent as Event;
    use RepositioningState as State;

    let next = match (event, current) {
        // Operator override, honored regardless of where the session is.
        (Event::Force { position }, _) => Some(State::Final {
            position: *position,
            precision: RoutingPrecision::Forced,
        }),

        (Event::Start { position, kind }, State::Initial) => {
            match (*kind, position.containment) {
                (RequestKind::Reposition, Containment::InZoneInside) => {
                    Some(State::NeedRefinement {
                        mode: RefinementMode::Manual,
                        position: *position,
                    })
                }
                (RequestKind::Reposition, Containment::UnknownInZone) => {
                    Some(State::NeedInfo {
                        topic: clarifying_topic(position),
                        position: *position,
                    })
                }
                (RequestKind::Reposition, Containment::OutOfZone) => {
                    Some(final_user_fixed(*position))
                }
                // Repositioning someone already flagged outside makes no
                // sense; ignore the request.
                (RequestKind::Reposition, Containment::InZoneOutside) => None,
                (RequestKind::Routing, Containment::UnknownInZone) => {
                    Some(State::NeedInfo {
                        topic: clarifying_topic(position),
                        position: *position,
                    })
                }
                (RequestKind::Routing, Containment::OutOfZone)
                | (RequestKind::Routing, Containment::InZoneInside)
                | (RequestKind::Routing, Containment::InZoneOutside) => {
                    Some(final_user_fixed(*position))
                }
            }
        }

        // The topic stored in the state is deliberately not consulted;
        // the event's own (topic, answer) pair decides.
        (Event::MoreInfo { topic, decision }, State::NeedInfo { position, .. }) => {
            match (*topic, *decision) {
                (HelpTopic::Indoor, true) => Some(State::NeedRefinement {
                    mode: RefinementMode::Manual,
                    position: *position,
                }),
                (HelpTopic::Indoor, false) => Some(State::Final {
                    position: position.with_containment(Containment::InZoneOutside),
                    precision: RoutingPrecision::Degraded,
                }),
                (HelpTopic::Outdoor, true) => Some(State::Final {
                    position: position.with_containment(Containment::InZoneOutside),
                    precision: RoutingPrecision::UserFixed,
                }),
                (HelpTopic::Outdoor, false) => Some(State::NeedRefinement {
                    mode: RefinementMode::Assisted,
                    position: *position,
                }),
            }
        }

        // Refinement is re-entrant: a later correction while already
        // projected simply re-projects the latest supplied position.
        (
            Event::LocationRefined { position, .. },
            State::NeedRefinement { .. } | State::Projected { .. },
        ) => Some(State::Projected {
            position: projector.project(*position),
        }),

        // The confirmed position comes from the event; callers pass back
        // the projected value they were notified with.
        (Event::Confirm { position }, State::Projected { .. }) => {
            Some(final_user_fixed(*position))
        }

        _ => None,
    };

    match next {
        Some(to) => TransitionOutcome::Accepted {
            from: current.clone(),
            to,
        },
        None => TransitionOutcome::Rejected(RejectedTransition {
            state: current.name(),
            event: event.name(),
        }),
    }
}

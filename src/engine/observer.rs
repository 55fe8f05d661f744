//! Outbound boundary: the engine's notification handler.

use crate::core::{HelpTopic, Position, RefinementMode, RoutingPrecision};

/// Receiver of the engine's outward calls.
///
/// Implemented by the SDK-internal router, which relays each call to the
/// application. The engine holds at most a weak reference to its observer
/// and never owns its lifetime; an absent or dropped observer silently
/// skips dispatch while the state still commits.
///
/// Exactly one of these methods fires per accepted transition, after the
/// new state has been committed.
pub trait PositionObserver: Send + Sync {
    /// A clarifying question must be put to the user
    /// (e.g. "are you inside the building?").
    fn ask_for_help(&self, topic: HelpTopic);

    /// The user must reposition themselves; `mode` says whether they must
    /// supply the whole position or only a floor.
    fn ask_for_repositioning(&self, mode: RefinementMode, position: &Position);

    /// A corrected position has been projected and awaits confirmation.
    fn notify_projected(&self, position: &Position);

    /// Terminal for the session: routing may proceed against `position`
    /// with the given trust qualifier.
    fn notify_routing_precision(&self, precision: RoutingPrecision, position: &Position);
}

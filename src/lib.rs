//! Repositioning: a pure functional user-positioning decision engine
//!
//! Given a raw containment/quality estimate of where a user is, the engine
//! decides whether routing can proceed immediately, whether the user must
//! be asked clarifying questions, or whether the user must manually refine
//! their position, and it converges on a final position plus a precision
//! qualifier for the caller to route against.
//!
//! The crate follows a "pure core, imperative shell" split:
//!
//! - [`core`]: value types, the state/event vocabularies, and the pure
//!   transition function, where every decision lives and no side effect does
//! - [`engine`]: the stateful machine that commits transitions and
//!   dispatches exactly one outward notification per accepted event
//!
//! # Example
//!
//! ```rust
//! use repositioning::core::{
//!     Containment, Coordinate, GpsQuality, HelpTopic, Position, RefinementMode,
//!     RepositioningState, RequestKind, RoutingPrecision,
//! };
//! use repositioning::engine::{RepositioningDatasource, RepositioningSession};
//!
//! let mut session = RepositioningSession::new();
//!
//! // A routing request with an undecided estimate and bad GPS: the user
//! // is asked whether they are indoors.
//! let estimate = Position::new(
//!     Coordinate::new(48.8584, 2.2945),
//!     GpsQuality::Bad,
//!     None,
//!     Containment::UnknownInZone,
//! );
//! session.user_ask_for(RequestKind::Routing, estimate);
//! assert_eq!(
//!     session.current_state(),
//!     &RepositioningState::NeedInfo { topic: HelpTopic::Indoor, position: estimate }
//! );
//!
//! // They are: they must reposition manually, then confirm.
//! session.user_responds_to_help(HelpTopic::Indoor, true);
//! let corrected = estimate.with_floor(1);
//! session.user_responds_to_repositioning(RefinementMode::Manual, corrected);
//! let outcome = session.user_confirms(corrected);
//!
//! assert!(outcome.is_accepted());
//! assert_eq!(
//!     session.current_state(),
//!     &RepositioningState::Final {
//!         position: corrected,
//!         precision: RoutingPrecision::UserFixed,
//!     }
//! );
//! ```

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use self::core::{
    transition, Containment, Coordinate, GpsQuality, HelpTopic, Position, Projector,
    RefinementMode, RejectedTransition, RepositioningEvent, RepositioningState, RequestKind,
    RoutingPrecision, StateHistory, TransitionOutcome, TransitionRecord,
};
pub use self::engine::{
    PositionObserver, RepositioningDatasource, RepositioningMachine, RepositioningSession,
};

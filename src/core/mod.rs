//! Pure core of the repositioning workflow.
//!
//! This module contains everything that decides, and nothing that acts:
//! - Position value types and the workflow's enums
//! - The state and event vocabularies
//! - The pure transition function and its explicit outcome
//! - The projection hook
//! - Immutable session history
//!
//! All logic here is pure (no side effects), following the
//! "pure core, imperative shell" philosophy; the shell lives in
//! [`crate::engine`].

mod event;
mod history;
mod position;
mod projector;
mod state;
mod transition;

pub use event::RepositioningEvent;
pub use history::{StateHistory, TransitionRecord};
pub use position::{
    Containment, Coordinate, GpsQuality, HelpTopic, Position, RefinementMode, RequestKind,
    RoutingPrecision,
};
pub use projector::Projector;
pub use state::RepositioningState;
pub use transition::{transition, RejectedTransition, TransitionOutcome};

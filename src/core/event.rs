//! The repositioning machine's input alphabet.

use super::position::{HelpTopic, Position, RefinementMode, RequestKind};
use serde::{Deserialize, Serialize};

/// An input presented to the repositioning machine.
///
/// Events carry everything the transition function needs to decide; the
/// machine itself holds no context beyond its current state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RepositioningEvent {
    /// A routing or repositioning request opens the session.
    Start {
        position: Position,
        kind: RequestKind,
    },
    /// The user answered the clarifying question.
    MoreInfo { topic: HelpTopic, decision: bool },
    /// The user supplied a corrected position (whole position or floor).
    LocationRefined {
        mode: RefinementMode,
        position: Position,
    },
    /// The user accepted the projected position.
    Confirm { position: Position },
    /// Operator override, honored from any state.
    Force { position: Position },
}

impl RepositioningEvent {
    /// The event's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::MoreInfo { .. } => "moreInfo",
            Self::LocationRefined { .. } => "locationRefined",
            Self::Confirm { .. } => "confirm",
            Self::Force { .. } => "force",
        }
    }
}

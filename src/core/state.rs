//! The repositioning machine's state vocabulary.
//!
//! States are immutable values describing the current node of the workflow.
//! Exactly one state is current at any time; the engine replaces it
//! wholesale on every accepted transition.

use super::position::{HelpTopic, Position, RefinementMode, RoutingPrecision};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current node of the repositioning workflow.
///
/// `Aborted` is part of the vocabulary but no transition rule produces it;
/// it is kept for forward compatibility with callers that assign it
/// directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RepositioningState {
    /// Freshly constructed machine, no session started yet.
    Initial,
    /// The user must answer a clarifying question before we can continue.
    NeedInfo {
        topic: HelpTopic,
        position: Position,
    },
    /// The user must refine the position (whole position or just a floor).
    NeedRefinement {
        mode: RefinementMode,
        position: Position,
    },
    /// A refined position has been projected and awaits confirmation.
    Projected { position: Position },
    /// Terminal: routing can proceed with the given precision.
    Final {
        position: Position,
        precision: RoutingPrecision,
    },
    /// Terminal without a result.
    Aborted,
}

impl RepositioningState {
    /// The state's name for display and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::NeedInfo { .. } => "needInfo",
            Self::NeedRefinement { .. } => "needRefinement",
            Self::Projected { .. } => "projected",
            Self::Final { .. } => "final",
            Self::Aborted => "aborted",
        }
    }

    /// Whether this state carries a routable result.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Final { .. })
    }
}

impl fmt::Display for RepositioningState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Position value types shared by the whole repositioning workflow.
//!
//! A [`Position`] is an immutable snapshot of a user's location estimate.
//! Derived values are produced by copying with exactly one field replaced
//! (`with_containment`, `with_floor`); nothing is ever mutated in place.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Opaque geographic coordinate.
///
/// The engine never interprets the values; it only carries them, compares
/// them, and hands them back to the caller. The SDK supplies finite floats,
/// so hashing the raw bit patterns stays consistent with equality.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.longitude.to_bits().hash(state);
        self.latitude.to_bits().hash(state);
    }
}

/// Coarse confidence bucket attached to a position estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GpsQuality {
    Good,
    Bad,
}

/// Classification of the estimate relative to the zone of interest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Containment {
    /// Clearly outside the zone.
    OutOfZone,
    /// Inside the zone's bounds but inside/outside is undecided.
    UnknownInZone,
    /// Inside the zone's bounds, flagged as outdoors.
    InZoneOutside,
    /// Inside the zone, indoors.
    InZoneInside,
}

/// Trust qualifier attached to a final position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutingPrecision {
    /// The user confirmed the location; routing can trust it fully.
    UserFixed,
    /// Routing may proceed but the result can be wrong.
    Degraded,
    /// An operator override supplied the location.
    Forced,
}

/// Which clarifying question was asked of the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HelpTopic {
    Indoor,
    Outdoor,
}

/// How much of the position the user must supply during refinement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefinementMode {
    /// The user must return the whole position.
    Manual,
    /// The coordinate is known; only the floor is needed.
    Assisted,
}

/// The two entry intents a session can start with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestKind {
    Reposition,
    Routing,
}

/// Immutable snapshot of a user's location estimate.
///
/// # Example
///
/// ```rust
/// use repositioning::core::{Containment, Coordinate, GpsQuality, Position};
///
/// let estimate = Position::new(
///     Coordinate::new(48.8584, 2.2945),
///     GpsQuality::Good,
///     None,
///     Containment::UnknownInZone,
/// );
///
/// let refined = estimate.with_floor(2);
/// assert_eq!(refined.floor, Some(2));
/// assert_eq!(refined.coordinate, estimate.coordinate);
/// assert_ne!(refined, estimate);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub coordinate: Coordinate,
    pub gps_quality: GpsQuality,
    /// Absent until a refinement step supplies it.
    pub floor: Option<i32>,
    pub containment: Containment,
}

impl Position {
    pub fn new(
        coordinate: Coordinate,
        gps_quality: GpsQuality,
        floor: Option<i32>,
        containment: Containment,
    ) -> Self {
        Self {
            coordinate,
            gps_quality,
            floor,
            containment,
        }
    }

    /// Copy of this position with the containment replaced.
    pub fn with_containment(self, containment: Containment) -> Self {
        Self {
            containment,
            ..self
        }
    }

    /// Copy of this position with the floor replaced.
    pub fn with_floor(self, floor: i32) -> Self {
        Self {
            floor: Some(floor),
            ..self
        }
    }
}

impl Hash for Position {
    // The floor joins the hash only when present; equality still compares
    // it unconditionally.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate.hash(state);
        self.gps_quality.hash(state);
        if let Some(floor) = self.floor {
            floor.hash(state);
        }
        self.containment.hash(state);
    }
}

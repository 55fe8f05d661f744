//! Projection hook applied to refined positions.
//!
//! Projection is a pure transform run on a user-corrected position before
//! the machine holds it as projected. The default is the identity; an SDK
//! embedding the engine can install a real geometric projection without
//! the engine knowing anything about it.

use super::position::Position;

/// Pure transform from a refined position to its projected form.
///
/// # Example
///
/// ```rust
/// use repositioning::core::{Containment, Coordinate, GpsQuality, Position, Projector};
///
/// let snap_to_ground = Projector::new(|p: Position| p.with_floor(0));
///
/// let corrected = Position::new(
///     Coordinate::new(18.0, 40.0),
///     GpsQuality::Good,
///     Some(4),
///     Containment::InZoneInside,
/// );
///
/// assert_eq!(snap_to_ground.project(corrected).floor, Some(0));
/// assert_eq!(Projector::identity().project(corrected), corrected);
/// ```
pub struct Projector {
    transform: Box<dyn Fn(Position) -> Position + Send + Sync>,
}

impl Projector {
    /// Create a projector from a pure transform function.
    ///
    /// The transform must be deterministic; the engine may re-run it on
    /// every refinement event of a session.
    pub fn new<F>(transform: F) -> Self
    where
        F: Fn(Position) -> Position + Send + Sync + 'static,
    {
        Self {
            transform: Box::new(transform),
        }
    }

    /// The identity projection.
    pub fn identity() -> Self {
        Self::new(|position| position)
    }

    /// Apply the projection.
    pub fn project(&self, position: Position) -> Position {
        (self.transform)(position)
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Containment, Coordinate, GpsQuality};

    fn position() -> Position {
        Position::new(
            Coordinate::new(18.0, 40.0),
            GpsQuality::Good,
            Some(4),
            Containment::InZoneInside,
        )
    }

    #[test]
    fn identity_returns_input_unchanged() {
        assert_eq!(Projector::identity().project(position()), position());
        assert_eq!(Projector::default().project(position()), position());
    }

    #[test]
    fn custom_transform_is_applied() {
        let projector = Projector::new(|p: Position| p.with_floor(0));
        assert_eq!(projector.project(position()).floor, Some(0));
    }

    #[test]
    fn projection_is_deterministic() {
        let projector = Projector::new(|p: Position| p.with_containment(Containment::InZoneInside));
        assert_eq!(projector.project(position()), projector.project(position()));
    }
}

//! Forced Override
//!
//! Shows the operator override cutting a session short: whatever the
//! engine is waiting on, a forced position finalizes immediately with
//! `Forced` precision.
//!
//! Run with: cargo run --example forced_override

use repositioning::core::{
    Containment, Coordinate, GpsQuality, HelpTopic, Position, RefinementMode, RequestKind,
    RoutingPrecision,
};
use repositioning::engine::{
    PositionObserver, RepositioningDatasource, RepositioningSession,
};
use std::sync::Arc;

struct ConsoleObserver;

impl PositionObserver for ConsoleObserver {
    fn ask_for_help(&self, topic: HelpTopic) {
        println!("<- ask for help: {topic:?}");
    }

    fn ask_for_repositioning(&self, mode: RefinementMode, position: &Position) {
        println!("<- ask for repositioning: {mode:?} around {position:?}");
    }

    fn notify_projected(&self, position: &Position) {
        println!("<- projected: {position:?}");
    }

    fn notify_routing_precision(&self, precision: RoutingPrecision, position: &Position) {
        println!("<- routing precision: {precision:?} at {position:?}");
    }
}

fn main() {
    println!("=== Forced Override ===\n");

    let observer: Arc<dyn PositionObserver> = Arc::new(ConsoleObserver);
    let mut session = RepositioningSession::new();
    session.attach_observer(&observer);

    // A repositioning request stalls on the clarifying question.
    let estimate = Position::new(
        Coordinate::new(45.7640, 4.8357),
        GpsQuality::Bad,
        None,
        Containment::UnknownInZone,
    );
    println!("-> reposition request with {estimate:?}");
    session.user_ask_for(RequestKind::Reposition, estimate);

    // The operator knows better and forces a precise indoor position.
    let forced = Position::new(
        Coordinate::new(45.7641, 4.8359),
        GpsQuality::Good,
        Some(1),
        Containment::InZoneInside,
    );
    println!("-> operator forces {forced:?}");
    let outcome = session.force(forced);

    println!("\noutcome accepted: {}", outcome.is_accepted());
    println!("final state: {}", session.current_state());
}

//! Assisted Routing Flow
//!
//! Walks the full exchange for a routing request with an undecided
//! estimate: clarifying question, assisted refinement, projection, and
//! the final routing-precision notification.
//!
//! Run with: cargo run --example assisted_routing

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
    println!("=== Assisted Routing Flow ===\n");

    let observer: Arc<dyn PositionObserver> = Arc::new(ConsoleObserver);
    let mut session = RepositioningSession::new();
    session.attach_observer(&observer);

    // The app asks for a route; the SDK's estimate is undecided but the
    // GPS looks good, so the user is asked to confirm being outdoors.
    let estimate = Position::new(
        Coordinate::new(48.8584, 2.2945),
        GpsQuality::Good,
        None,
        Containment::UnknownInZone,
    );
    println!("-> routing request with {estimate:?}");
    session.user_ask_for(RequestKind::Routing, estimate);

    // The user says they are not outdoors: we know the coordinate well
    // enough, only the floor is missing.
    println!("-> user answers: not outdoors");
    session.user_responds_to_help(HelpTopic::Outdoor, false);

    let corrected = estimate.with_floor(2);
    println!("-> user supplies floor 2");
    session.user_responds_to_repositioning(RefinementMode::Assisted, corrected);

    println!("-> user confirms");
    session.user_confirms(corrected);

    println!("\nfinal state: {}", session.current_state());
    println!(
        "path: {:?}",
        session
            .machine()
            .history()
            .get_path()
            .iter()
            .map(|state| state.name())
            .collect::<Vec<_>>()
    );
}

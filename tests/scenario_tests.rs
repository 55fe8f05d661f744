//! End-to-end workflow scenarios driven through the session boundary.
//!
//! Each test walks a session the way the SDK router would, checking the
//! state after every inbound call and, for the full chains, the exact
//! sequence of outward notifications.

use repositioning::core::{
    Containment, Coordinate, GpsQuality, HelpTopic, Position, RefinementMode, RepositioningState,
    RequestKind, RoutingPrecision,
};
use repositioning::engine::{
    PositionObserver, RepositioningDatasource, RepositioningSession,
};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq)]
enum Outward {
    Help(HelpTopic),
    Reposition(RefinementMode, Position),
    Projected(Position),
    Precision(RoutingPrecision, Position),
}

struct RecordingObserver {
    calls: Arc<Mutex<Vec<Outward>>>,
}

impl PositionObserver for RecordingObserver {
    fn ask_for_help(&self, topic: HelpTopic) {
        self.calls.lock().unwrap().push(Outward::Help(topic));
    }

    fn ask_for_repositioning(&self, mode: RefinementMode, position: &Position) {
        self.calls
            .lock()
            .unwrap()
            .push(Outward::Reposition(mode, *position));
    }

    fn notify_projected(&self, position: &Position) {
        self.calls.lock().unwrap().push(Outward::Projected(*position));
    }

    fn notify_routing_precision(&self, precision: RoutingPrecision, position: &Position) {
        self.calls
            .lock()
            .unwrap()
            .push(Outward::Precision(precision, *position));
    }
}

fn observed_session() -> (
    RepositioningSession,
    Arc<dyn PositionObserver>,
    Arc<Mutex<Vec<Outward>>>,
) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let observer: Arc<dyn PositionObserver> = Arc::new(RecordingObserver {
        calls: calls.clone(),
    });
    let mut session = RepositioningSession::new();
    session.attach_observer(&observer);
    (session, observer, calls)
}

fn estimate(gps_quality: GpsQuality, containment: Containment) -> Position {
    Position::new(Coordinate::new(0.0, 0.0), gps_quality, None, containment)
}

#[test]
fn session_is_well_initialized() {
    let session = RepositioningSession::new();
    assert_eq!(session.current_state(), &RepositioningState::Initial);
}

#[test]
fn repositioning_when_out_of_zone_finalizes_immediately() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Good, Containment::OutOfZone);

    session.user_ask_for(RequestKind::Reposition, position);

    assert_eq!(
        session.current_state(),
        &RepositioningState::Final {
            position,
            precision: RoutingPrecision::UserFixed,
        }
    );
}

#[test]
fn repositioning_when_flagged_outside_is_ignored() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Good, Containment::InZoneOutside);

    let outcome = session.user_ask_for(RequestKind::Reposition, position);

    assert!(outcome.is_rejected());
    assert_eq!(session.current_state(), &RepositioningState::Initial);
}

#[test]
fn repositioning_when_undecided_with_good_gps_asks_outdoor() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Good, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Reposition, position);

    assert_eq!(
        session.current_state(),
        &RepositioningState::NeedInfo {
            topic: HelpTopic::Outdoor,
            position,
        }
    );
}

#[test]
fn repositioning_when_undecided_with_bad_gps_asks_indoor() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Bad, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Reposition, position);

    assert_eq!(
        session.current_state(),
        &RepositioningState::NeedInfo {
            topic: HelpTopic::Indoor,
            position,
        }
    );
}

#[test]
fn repositioning_when_inside_needs_manual_refinement() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Bad, Containment::InZoneInside);

    session.user_ask_for(RequestKind::Reposition, position);

    assert_eq!(
        session.current_state(),
        &RepositioningState::NeedRefinement {
            mode: RefinementMode::Manual,
            position,
        }
    );
}

#[test]
fn routing_when_out_of_zone_uses_the_position_directly() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Good, Containment::OutOfZone);

    session.user_ask_for(RequestKind::Routing, position);

    assert_eq!(
        session.current_state(),
        &RepositioningState::Final {
            position,
            precision: RoutingPrecision::UserFixed,
        }
    );
}

#[test]
fn routing_when_undecided_with_good_gps_asks_outdoor() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Good, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);

    assert_eq!(
        session.current_state(),
        &RepositioningState::NeedInfo {
            topic: HelpTopic::Outdoor,
            position,
        }
    );
}

#[test]
fn routing_good_gps_user_denies_outdoor_then_assisted_refinement() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Good, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);
    session.user_responds_to_help(HelpTopic::Outdoor, false);

    assert_eq!(
        session.current_state(),
        &RepositioningState::NeedRefinement {
            mode: RefinementMode::Assisted,
            position,
        }
    );
}

#[test]
fn routing_good_gps_assisted_refinement_projects_the_correction() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Good, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);
    session.user_responds_to_help(HelpTopic::Outdoor, false);

    let corrected = position.with_floor(1);
    session.user_responds_to_repositioning(RefinementMode::Assisted, corrected);

    assert_eq!(
        session.current_state(),
        &RepositioningState::Projected {
            position: corrected,
        }
    );
}

#[test]
fn routing_good_gps_resending_a_correction_reprojects() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Good, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);
    session.user_responds_to_help(HelpTopic::Outdoor, false);
    session.user_responds_to_repositioning(RefinementMode::Assisted, position.with_floor(1));

    let again = position.with_floor(4);
    session.user_responds_to_repositioning(RefinementMode::Assisted, again);

    assert_eq!(
        session.current_state(),
        &RepositioningState::Projected { position: again }
    );
}

#[test]
fn routing_good_gps_confirmation_finalizes_user_fixed() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Good, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);
    session.user_responds_to_help(HelpTopic::Outdoor, false);

    let corrected = position.with_floor(1);
    session.user_responds_to_repositioning(RefinementMode::Assisted, corrected);
    session.user_confirms(corrected);

    assert_eq!(
        session.current_state(),
        &RepositioningState::Final {
            position: corrected,
            precision: RoutingPrecision::UserFixed,
        }
    );
}

#[test]
fn routing_good_gps_user_confirms_outdoor_then_reclassified_final() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Good, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);
    session.user_responds_to_help(HelpTopic::Outdoor, true);

    assert_eq!(
        session.current_state(),
        &RepositioningState::Final {
            position: position.with_containment(Containment::InZoneOutside),
            precision: RoutingPrecision::UserFixed,
        }
    );
}

#[test]
fn routing_when_undecided_with_bad_gps_asks_indoor() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Bad, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);

    assert_eq!(
        session.current_state(),
        &RepositioningState::NeedInfo {
            topic: HelpTopic::Indoor,
            position,
        }
    );
}

#[test]
fn routing_bad_gps_user_confirms_indoor_then_manual_refinement() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Bad, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);
    session.user_responds_to_help(HelpTopic::Indoor, true);

    assert_eq!(
        session.current_state(),
        &RepositioningState::NeedRefinement {
            mode: RefinementMode::Manual,
            position,
        }
    );
}

#[test]
fn routing_bad_gps_manual_correction_then_confirm() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Bad, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);
    session.user_responds_to_help(HelpTopic::Indoor, true);

    let manual = Position::new(
        Coordinate::new(18.0, 40.0),
        GpsQuality::Good,
        Some(0),
        Containment::InZoneInside,
    );
    session.user_responds_to_repositioning(RefinementMode::Manual, manual);
    assert_eq!(
        session.current_state(),
        &RepositioningState::Projected { position: manual }
    );

    session.user_confirms(manual);
    assert_eq!(
        session.current_state(),
        &RepositioningState::Final {
            position: manual,
            precision: RoutingPrecision::UserFixed,
        }
    );
}

#[test]
fn routing_bad_gps_user_denies_indoor_then_degraded_final() {
    let mut session = RepositioningSession::new();
    let position = estimate(GpsQuality::Bad, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);
    session.user_responds_to_help(HelpTopic::Indoor, false);

    assert_eq!(
        session.current_state(),
        &RepositioningState::Final {
            position: position.with_containment(Containment::InZoneOutside),
            precision: RoutingPrecision::Degraded,
        }
    );
}

#[test]
fn full_chain_notifies_in_protocol_order() {
    let (mut session, _observer, calls) = observed_session();
    let position = estimate(GpsQuality::Bad, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);
    session.user_responds_to_help(HelpTopic::Indoor, true);
    let corrected = position.with_floor(2);
    session.user_responds_to_repositioning(RefinementMode::Manual, corrected);
    session.user_confirms(corrected);

    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            Outward::Help(HelpTopic::Indoor),
            Outward::Reposition(RefinementMode::Manual, position),
            Outward::Projected(corrected),
            Outward::Precision(RoutingPrecision::UserFixed, corrected),
        ]
    );
}

#[test]
fn ignored_calls_stay_invisible_to_the_observer() {
    let (mut session, _observer, calls) = observed_session();

    // Nothing has started; answers and confirmations have no route.
    session.user_responds_to_help(HelpTopic::Outdoor, true);
    session.user_confirms(estimate(GpsQuality::Good, Containment::InZoneInside));

    assert!(calls.lock().unwrap().is_empty());
    assert_eq!(session.current_state(), &RepositioningState::Initial);
}

#[test]
fn force_finalizes_with_forced_precision_and_notifies() {
    let (mut session, _observer, calls) = observed_session();
    let position = estimate(GpsQuality::Good, Containment::UnknownInZone);

    session.user_ask_for(RequestKind::Routing, position);

    let forced = estimate(GpsQuality::Good, Containment::InZoneInside).with_floor(3);
    session.force(forced);

    assert_eq!(
        session.current_state(),
        &RepositioningState::Final {
            position: forced,
            precision: RoutingPrecision::Forced,
        }
    );
    assert_eq!(
        calls.lock().unwrap().last(),
        Some(&Outward::Precision(RoutingPrecision::Forced, forced))
    );
}

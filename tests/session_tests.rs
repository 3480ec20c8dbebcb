mod fixtures;

use fixtures::*;
use waypoint_planner::config::PlannerConfig;
use waypoint_planner::error::PlannerError;
use waypoint_planner::notify::RecordingNotifier;
use waypoint_planner::polyline::Polyline;
use waypoint_planner::session::RoutingSession;
use waypoint_planner::viewport::{HeadlessViewport, MapEvent};

type TestSession = RoutingSession<MockFinder, MockGeometry, HeadlessViewport, RecordingNotifier>;

fn session(finder: MockFinder, geometry: MockGeometry) -> TestSession {
    RoutingSession::new(
        &PlannerConfig::default(),
        finder,
        geometry,
        HeadlessViewport::new(),
        RecordingNotifier::new(),
    )
}

fn click_all(session: &mut TestSession, cities: &[City]) {
    for city in cities {
        session
            .handle_event(MapEvent::Click(city.coords()))
            .expect("city inside geofence");
    }
}

#[test]
fn marker_count_tracks_waypoints() {
    let mut session = session(MockFinder::new(), MockGeometry::new());

    for (expected, city) in [AHMEDABAD, OUTSIDE[0], SURAT, OUTSIDE[1], RAJKOT].iter().enumerate() {
        let _ = session.add_waypoint(city.coords());
        assert_eq!(
            session.waypoints().len(),
            session.viewport().marker_count(),
            "diverged after click {}",
            expected + 1
        );
    }
    assert_eq!(session.waypoints().len(), 3);
}

#[test]
fn click_outside_geofence_is_rejected() {
    let mut session = session(MockFinder::new(), MockGeometry::new());
    click_all(&mut session, &[AHMEDABAD]);
    session.notifier().drain();

    let result = session.handle_event(MapEvent::Click((19.0, 71.0)));

    assert!(matches!(result, Err(PlannerError::OutOfBounds { .. })));
    assert_eq!(session.waypoints().len(), 1);
    assert_eq!(session.notifier().count_titled("Out of Gujarat"), 1);
    assert_eq!(session.notifier().len(), 1);
}

#[test]
fn find_path_draws_one_polyline_per_hop() {
    let finder = MockFinder::new()
        .with_segment(locations(&[AHMEDABAD, NADIAD, ANAND]), 70_000.0)
        .with_segment(locations(&[ANAND, VADODARA]), 40_000.0);
    let mut session = session(finder, MockGeometry::new());
    click_all(&mut session, &[AHMEDABAD, ANAND, VADODARA]);

    let stitched = session.find_path().unwrap();

    assert_eq!(stitched.len(), 4);
    assert_eq!(session.last_result(), Some(&stitched));
    assert_eq!(session.viewport().polylines().len(), 3);
    assert_eq!(session.overlay().polyline_count(), 3);
    let (bounds, padding) = session.viewport().last_fit().expect("view fitted");
    assert_eq!(*padding, (30, 30));
    assert_eq!(bounds.south_west(), (VADODARA.lat, AHMEDABAD.lng));
    assert_eq!(bounds.north_east(), (AHMEDABAD.lat, VADODARA.lng));
}

#[test]
fn hop_failure_skips_only_that_hop() {
    let finder = MockFinder::new().with_segment(locations(&[AHMEDABAD, NADIAD, ANAND, VADODARA]), 1.0);
    let geometry = MockGeometry::new().then_straight().then_fail().then_straight();
    let mut session = session(finder, geometry);
    click_all(&mut session, &[AHMEDABAD, VADODARA]);
    session.notifier().drain();

    session.find_path().unwrap();

    let polylines = session.viewport().polylines();
    assert_eq!(polylines.len(), 2);
    assert_eq!(polylines[0].points(), &[AHMEDABAD.coords(), NADIAD.coords()]);
    assert_eq!(polylines[1].points(), &[ANAND.coords(), VADODARA.coords()]);

    let summary = session.last_render().unwrap();
    assert_eq!((summary.drawn, summary.failed), (2, 1));

    let (bounds, _) = session.viewport().last_fit().expect("view fitted");
    assert_eq!(bounds.north_east(), (AHMEDABAD.lat, VADODARA.lng));
    assert_eq!(bounds.south_west(), (VADODARA.lat, AHMEDABAD.lng));

    let notes = session.notifier().drain();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].description, "Failed to fetch route for segment 2");
}

#[test]
fn hop_without_route_is_not_reported() {
    let finder = MockFinder::new().with_segment(locations(&[AHMEDABAD, NADIAD]), 1.0);
    let mut session = session(finder, MockGeometry::new().then_no_route());
    click_all(&mut session, &[AHMEDABAD, NADIAD]);
    session.notifier().drain();

    session.find_path().unwrap();

    assert!(session.viewport().polylines().is_empty());
    assert!(session.viewport().last_fit().is_none(), "nothing drawn, nothing to fit");
    assert!(session.notifier().is_empty());
}

#[test]
fn render_replaces_previous_polylines() {
    let finder = MockFinder::new()
        .with_segment(locations(&[AHMEDABAD, NADIAD, VADODARA]), 1.0)
        .with_segment(locations(&[AHMEDABAD, GANDHINAGAR]), 1.0);
    let mut session = session(finder, MockGeometry::new());
    click_all(&mut session, &[AHMEDABAD, VADODARA]);

    session.find_path().unwrap();
    assert_eq!(session.viewport().polylines().len(), 2);

    session.find_path().unwrap();
    let polylines = session.viewport().polylines();
    assert_eq!(polylines.len(), 1);
    assert_eq!(
        polylines[0],
        &Polyline::new(vec![AHMEDABAD.coords(), GANDHINAGAR.coords()])
    );
}

#[test]
fn fatal_error_clears_previous_overlay_and_result() {
    let finder = MockFinder::new()
        .with_segment(locations(&[AHMEDABAD, NADIAD, VADODARA]), 1.0)
        .with_transport_failure();
    let mut session = session(finder, MockGeometry::new());
    click_all(&mut session, &[AHMEDABAD, VADODARA]);
    session.find_path().unwrap();

    let result = session.find_path();

    assert!(matches!(result, Err(PlannerError::TransportFailure(_))));
    assert!(session.viewport().polylines().is_empty());
    assert!(session.last_result().is_none());
    assert_eq!(session.viewport().marker_count(), 2, "markers survive a failed run");
}

#[test]
fn insufficient_waypoints_leaves_overlay_alone() {
    let mut session = session(MockFinder::new(), MockGeometry::new());
    click_all(&mut session, &[AHMEDABAD]);

    let result = session.find_path();

    assert!(matches!(result, Err(PlannerError::InsufficientWaypoints(1))));
    assert_eq!(session.finder().call_count(), 0);
}

#[test]
fn reset_twice_leaves_empty_state() {
    let finder = MockFinder::new().with_segment(locations(&[SURAT, BHARUCH, VADODARA]), 1.0);
    let mut session = session(finder, MockGeometry::new());
    click_all(&mut session, &[SURAT, VADODARA]);
    session.find_path().unwrap();

    session.reset();
    let after_first = (
        session.waypoints().len(),
        session.viewport().layers().count(),
        session.overlay().polyline_count(),
        session.last_result().is_none(),
    );
    session.reset();
    let after_second = (
        session.waypoints().len(),
        session.viewport().layers().count(),
        session.overlay().polyline_count(),
        session.last_result().is_none(),
    );

    assert_eq!(after_first, (0, 0, 0, true));
    assert_eq!(after_first, after_second);
    assert_eq!(session.notifier().count_titled("Map reset"), 2);
}

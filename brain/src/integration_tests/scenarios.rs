use crate::{
    integration_tests::{full_throttle, TestRunner, TestScenario},
    routing::NavigatorStatus,
};
use common::racing;
use nalgebra::{Point2, Vector2};
use simulate::{CarMotion, Prop, PropId};

#[test]
fn ai_drives_to_distant_waypoint() {
    let test = TestRunner::new()
        .scenario(TestScenario {
            opponent_loc: Point2::new(0.0, 1000.0),
            waypoints: vec![Point2::origin()],
            ..Default::default()
        })
        .run_for_millis(19000);

    let finished = test
        .history
        .iter()
        .find(|s| s.navigator == NavigatorStatus::Finished)
        .unwrap();
    // 1000 units at 75 per second.
    assert!((finished.time - 13.33).abs() < 0.1, "{}", finished.time);
    let distance = finished.opponent.loc.coords.norm();
    assert!(distance < racing::ARRIVAL_THRESHOLD, "{}", distance);

    let navigator = test.race.navigator();
    assert!(navigator.route().is_empty());
    assert_eq!(navigator.route().visited(), 1);
    assert_eq!(test.race.opponent().desired_accel(), Vector2::zeros());
    assert_eq!(test.last().opponent.vel, Vector2::zeros());
}

#[test]
fn ai_consumes_every_waypoint() {
    let waypoints: Vec<_> = (1..=9)
        .map(|i| Point2::new(100.0, 1000.0 - 100.0 * i as f32))
        .collect();
    let test = TestRunner::new()
        .scenario(TestScenario {
            opponent_loc: Point2::new(100.0, 1000.0),
            waypoints: waypoints.clone(),
            ..Default::default()
        })
        .run_for_millis(14000);

    let navigator = test.race.navigator();
    assert_eq!(navigator.route().visited(), waypoints.len());
    assert!(navigator.route().is_empty());
    assert_eq!(navigator.status(), NavigatorStatus::Finished);
    assert_eq!(test.race.opponent().desired_accel(), Vector2::zeros());

    // Coasts to a stop not far past the last waypoint.
    for snapshot in &test.history {
        assert!(snapshot.opponent.loc.y > 100.0 - 80.0, "{:?}", snapshot.opponent.loc);
    }
}

#[test]
fn ai_steers_around_road_block() {
    let test = TestRunner::new()
        .scenario(TestScenario {
            opponent_loc: Point2::new(100.0, 400.0),
            waypoints: vec![Point2::new(100.0, 0.0)],
            road_blocks: vec![Point2::new(104.0, 200.0)],
            ..Default::default()
        })
        .run_for_millis(8000);

    assert!(test
        .history
        .iter()
        .any(|s| s.navigator == NavigatorStatus::Avoiding(PropId(0))));
    assert!(test
        .history
        .iter()
        .any(|s| s.opponent.motion == CarMotion::Colliding));

    // It swerves left of the straight line instead of stopping.
    let min_x = test
        .history
        .iter()
        .map(|s| s.opponent.loc.x)
        .fold(f32::INFINITY, f32::min);
    assert!(min_x < 100.0 - 1.0, "{}", min_x);
    for snapshot in test
        .history
        .iter()
        .take_while(|s| s.navigator != NavigatorStatus::Finished)
    {
        assert!(snapshot.opponent.vel.norm() > 0.0, "{}", snapshot.frame);
    }

    assert_eq!(test.race.navigator().route().visited(), 1);
}

#[test]
fn player_boost_runs_out_after_leaving_pad() {
    let test = TestRunner::new()
        .scenario(TestScenario {
            speed_boosts: vec![Point2::new(100.0, 1000.0)],
            ..Default::default()
        })
        .driver(full_throttle)
        .run_for_millis(4000);

    let pad = test.track.speed_boosts[0].hitbox();
    assert!(test.history[0].player.boost_active);

    let last_on_pad = test
        .history
        .iter()
        .rposition(|s| s.player.hitbox.collides_with(pad))
        .unwrap();
    let expired = test.history[last_on_pad..]
        .iter()
        .find(|s| !s.player.boost_active)
        .unwrap();
    let boosted_for = expired.time - test.history[last_on_pad].time;
    assert!(
        boosted_for >= racing::BOOST_DURATION - 1e-3,
        "{}",
        boosted_for,
    );
    assert!(
        boosted_for <= racing::BOOST_DURATION + 3.0 * racing::PHYSICS_DT,
        "{}",
        boosted_for,
    );

    let top_speed = test
        .history
        .iter()
        .map(|s| s.player.vel.norm())
        .fold(0.0, f32::max);
    assert!(top_speed > racing::CAR_BASE_SPEED, "{}", top_speed);
    assert!(test.last().player.vel.norm() <= racing::CAR_BASE_SPEED + 1e-3);
    assert_eq!(test.race.player().car().max_speed(), racing::CAR_BASE_SPEED);
}

#[test]
fn player_knocked_back_from_road_block() {
    let test = TestRunner::new()
        .scenario(TestScenario {
            player_loc: Point2::new(100.0, 500.0),
            road_blocks: vec![Point2::new(100.0, 488.0)],
            ..Default::default()
        })
        .driver(full_throttle)
        .run_for_millis(2000);

    let hit = test
        .history
        .iter()
        .position(|s| s.player.motion == CarMotion::Colliding)
        .unwrap();
    assert!(hit > 0);
    let before = &test.history[hit - 1].player;
    let after = &test.history[hit].player;

    // Pushed back down the screen, away from the block, and sent backwards.
    assert!(after.loc.y > before.loc.y, "{:?} {:?}", before.loc, after.loc);
    assert!(after.vel.y > 0.0, "{:?}", after.vel);
    let block = test.track.road_blocks[0].hitbox();
    assert!(!after.hitbox.collides_with(block), "{:?}", after.hitbox);
}

#[test]
fn ai_rounds_tight_corner() {
    let waypoints = vec![
        Point2::new(250.0, 950.0),
        Point2::new(265.0, 950.0),
        Point2::new(265.0, 965.0),
    ];
    let test = TestRunner::new()
        .scenario(TestScenario {
            waypoints: waypoints.clone(),
            ..Default::default()
        })
        .run_for_millis(5000);

    let navigator = test.race.navigator();
    assert_eq!(navigator.route().visited(), waypoints.len());
    assert_eq!(navigator.status(), NavigatorStatus::Finished);
    assert_eq!(test.race.opponent().desired_accel(), Vector2::zeros());
}

#[test]
fn ai_turns_back_for_waypoint_behind() {
    let test = TestRunner::new()
        .scenario(TestScenario {
            waypoints: vec![Point2::new(250.0, 950.0), Point2::new(250.0, 1100.0)],
            ..Default::default()
        })
        .run_for_millis(8000);

    let navigator = test.race.navigator();
    assert_eq!(navigator.route().visited(), 2);
    assert_eq!(test.race.opponent().desired_accel(), Vector2::zeros());
}

#[test]
fn ai_rounds_tight_corner_on_boost() {
    let test = TestRunner::new()
        .scenario(TestScenario {
            // The pad sits under the spawn point.
            speed_boosts: vec![Point2::new(250.0, 1000.0)],
            waypoints: vec![
                Point2::new(250.0, 950.0),
                Point2::new(280.0, 950.0),
                Point2::new(280.0, 920.0),
            ],
            ..Default::default()
        })
        .run_for_millis(5000);

    let finished = test
        .history
        .iter()
        .position(|s| s.navigator == NavigatorStatus::Finished)
        .unwrap();
    assert!(
        test.history[..finished].iter().skip(1).all(|s| s.opponent.boost_active),
        "{}",
        finished,
    );
    assert_eq!(test.race.navigator().route().visited(), 3);
    assert_eq!(test.race.opponent().desired_accel(), Vector2::zeros());
}


//! The built-in level and a scripted stand-in for the keyboard.

use brain::mechanics::simple_steer_towards;
use common::{physics, prelude::*};
use nalgebra::Point2;
use simulate::{PlayerCar, PlayerInput, Prop, PropId, RoadBlock, SpeedBoost, Track};

pub const PLAYER_SPAWN: (f32, f32) = (120.0, 1860.0);
pub const OPPONENT_SPAWN: (f32, f32) = (250.0, 1860.0);

const PLAYER_LANE_X: f32 = 120.0;
/// How far up the road the scripted driver looks for road blocks.
const LOOKAHEAD: f32 = 120.0;
/// Room left between the car and a road block when passing it.
const PASSING_GAP: f32 = 12.0;
const STEER_DEADZONE: f32 = 0.05;
const HANDBRAKE_ANGLE: f32 = 1.0;

pub fn spawn(loc: (f32, f32)) -> Point2<f32> {
    Point2::new(loc.0, loc.1)
}

pub fn track() -> Track {
    let road_blocks = [
        (60.0, 1500.0),
        (116.0, 1300.0),
        (200.0, 1250.0),
        (130.0, 1000.0),
        (244.0, 900.0),
        (40.0, 700.0),
        (110.0, 500.0),
        (220.0, 450.0),
        (150.0, 250.0),
    ];
    let speed_boosts = [(116.0, 1700.0), (100.0, 1100.0), (244.0, 1440.0), (120.0, 600.0)];
    Track::new(
        road_blocks
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| RoadBlock::new(PropId(i as u32), Point2::new(x, y)))
            .collect(),
        speed_boosts
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| SpeedBoost::new(PropId(100 + i as u32), Point2::new(x, y)))
            .collect(),
    )
}

pub fn opponent_waypoints() -> Vec<Point2<f32>> {
    vec![
        Point2::new(250.0, 1500.0),
        Point2::new(230.0, 1100.0),
        Point2::new(250.0, 700.0),
        Point2::new(250.0, 300.0),
        Point2::new(250.0, 16.0),
    ]
}

/// Full throttle up the player's lane, swinging around the next road block
/// and pulling the handbrake for sharp corrections.
pub fn drive(player: &PlayerCar, track: &Track) -> PlayerInput {
    let car = player.car();
    let hitbox = car.hitbox();

    let next_block = track
        .road_blocks
        .iter()
        .map(Prop::hitbox)
        .filter(|b| b.bottom() < hitbox.top() && b.bottom() > hitbox.top() - LOOKAHEAD)
        .filter(|b| {
            b.right() + PASSING_GAP > hitbox.left() && b.left() - PASSING_GAP < hitbox.right()
        })
        .max_by(|a, b| a.bottom().total_cmp(&b.bottom()));

    let target_x = match next_block {
        Some(block) if block.center().x > hitbox.center().x => {
            block.left() - PASSING_GAP - hitbox.width()
        }
        Some(block) => block.right() + PASSING_GAP,
        None => PLAYER_LANE_X,
    };
    let target = Point2::new(target_x, car.loc().y - LOOKAHEAD);

    let diff = match simple_steer_towards(car.loc(), target) {
        Some(heading) => {
            (physics::car_rotation_for_heading(&heading) - car.rot()).normalize_angle()
        }
        None => 0.0,
    };
    PlayerInput {
        forward: true,
        backward: false,
        left: diff < -STEER_DEADZONE,
        right: diff > STEER_DEADZONE,
        handbrake: diff.abs() > HANDBRAKE_ANGLE,
    }
}

use crate::{
    car::{Car, CarMotion, CarSnapshot},
    config::CarConfig,
};
use common::{physics, prelude::*, racing};
use nalgebra::{Point2, Unit, Vector2};

/// The AI-driven car.
///
/// Its dynamics are simpler than the player's: while it has a heading it
/// moves along that heading at its top speed, and without one it coasts to
/// a stop under drag. Steering decisions come from outside, one heading per
/// frame.
#[derive(Clone, Debug)]
pub struct OpponentCar {
    car: Car,
    desired_accel: Vector2<f32>,
    motion: CarMotion,
}

impl OpponentCar {
    pub fn new(loc: Point2<f32>, config: CarConfig) -> Self {
        Self::from_car(Car::new(loc, config))
    }

    pub fn from_car(car: Car) -> Self {
        Self {
            car,
            desired_accel: Vector2::zeros(),
            motion: CarMotion::Idle,
        }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn car_mut(&mut self) -> &mut Car {
        &mut self.car
    }

    /// The acceleration the car wanted last frame. Zero once it has nowhere
    /// to go.
    pub fn desired_accel(&self) -> Vector2<f32> {
        self.desired_accel
    }

    pub fn motion(&self) -> CarMotion {
        self.motion
    }

    pub fn snapshot(&self) -> CarSnapshot {
        self.car.snapshot(self.motion)
    }

    /// Advances the car by one frame of `dt` seconds toward `heading`.
    pub fn step(&mut self, dt: f32, heading: Option<Unit<Vector2<f32>>>) -> CarMotion {
        match heading {
            Some(heading) => {
                self.turn_towards(dt, &heading);
                self.desired_accel = heading.into_inner() * self.car.accel();
                self.car.set_vel(heading.into_inner() * self.car.max_speed());
                self.motion = CarMotion::Accelerating;
            }
            None => {
                self.desired_accel = Vector2::zeros();
                let vel = self.car.vel() * self.car.config().coast_drag;
                if vel.norm() < racing::REST_SPEED {
                    self.car.set_vel(Vector2::zeros());
                } else {
                    self.car.set_vel(vel);
                }
                self.motion = CarMotion::Idle;
            }
        }
        self.car.clamp_speed();
        self.car.integrate(dt);
        self.motion
    }

    /// Marks the car as having driven into a road block this frame.
    pub fn mark_colliding(&mut self) {
        self.motion = CarMotion::Colliding;
    }

    /// Rotates toward `heading` by at most one frame's worth of turning, the
    /// short way around.
    fn turn_towards(&mut self, dt: f32, heading: &Unit<Vector2<f32>>) {
        let target_rot = physics::car_rotation_for_heading(heading);
        let diff = (target_rot - self.car.rot()).normalize_angle();
        let max_turn = self.car.config().turn_speed * dt;
        let turn = diff.max(-max_turn).min(max_turn);
        self.car.set_rot(self.car.rot() + turn);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        car::{Car, CarMotion},
        config::CarConfig,
        opponent_car::OpponentCar,
    };
    use common::racing;
    use nalgebra::{Point2, Unit, Vector2};
    use std::f32::consts::PI;

    const DT: f32 = 1.0 / 60.0;
    const EPS: f32 = 1e-3;

    #[test]
    fn drives_along_heading_at_top_speed() {
        let mut car = OpponentCar::new(Point2::new(0.0, 100.0), CarConfig::opponent());
        let up = Unit::new_normalize(Vector2::new(0.0, -1.0));
        let motion = car.step(DT, Some(up));
        assert_eq!(motion, CarMotion::Accelerating);
        assert!((car.car().speed() - racing::CAR_BASE_SPEED).abs() < EPS);
        assert!((car.car().loc().y - (100.0 - racing::CAR_BASE_SPEED * DT)).abs() < EPS);
        assert!(car.desired_accel().norm() > 0.0);
    }

    #[test]
    fn boost_speeds_it_up() {
        let mut car = OpponentCar::new(Point2::origin(), CarConfig::opponent());
        car.car_mut().activate_boost();
        car.step(DT, Some(Vector2::x_axis()));
        assert!((car.car().speed() - racing::CAR_BOOST_SPEED).abs() < EPS);
        car.car_mut().deactivate_boost();
        car.step(DT, Some(Vector2::x_axis()));
        assert!((car.car().speed() - racing::CAR_BASE_SPEED).abs() < EPS);
    }

    #[test]
    fn turns_gradually() {
        let mut car = OpponentCar::new(Point2::origin(), CarConfig::opponent());
        // Facing up; asked to face down, a half turn away.
        let down = Unit::new_normalize(Vector2::new(0.0, 1.0));
        car.step(DT, Some(down));
        let max_turn = racing::OPPONENT_TURN_SPEED * DT;
        assert!((car.car().rot().abs() - max_turn).abs() < 1e-5, "{}", car.car().rot());

        for _ in 0..120 {
            car.step(DT, Some(down));
        }
        assert!((car.car().rot().abs() - PI).abs() < 1e-3, "{}", car.car().rot());
    }

    #[test]
    fn turns_the_short_way_across_the_seam() {
        // Facing just left of straight down; asked to face just right of it.
        let start = PI - 0.1;
        let mut car =
            OpponentCar::from_car(Car::new(Point2::origin(), CarConfig::opponent()).with_rot(start));
        let heading = Unit::new_normalize(Vector2::new(-(0.1f32).sin(), (0.1f32).cos()));
        car.step(DT, Some(heading));
        let moved = (car.car().rot() - start + PI).rem_euclid(2.0 * PI) - PI;
        assert!(moved > 0.0, "{}", car.car().rot());
    }

    #[test]
    fn coasts_to_rest() {
        let mut car = OpponentCar::from_car(
            Car::new(Point2::origin(), CarConfig::opponent()).with_vel(Vector2::new(0.0, -75.0)),
        );
        let mut last_speed = car.car().speed();
        for _ in 0..600 {
            let motion = car.step(DT, None);
            assert_eq!(motion, CarMotion::Idle);
            assert!(car.car().speed() <= last_speed);
            assert_eq!(car.desired_accel(), Vector2::zeros());
            last_speed = car.car().speed();
        }
        assert_eq!(car.car().speed(), 0.0);
        let resting = car.car().loc();
        car.step(DT, None);
        assert_eq!(car.car().loc(), resting);
    }
}

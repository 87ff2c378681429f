use crate::{
    car::{Car, CarMotion, CarSnapshot},
    collision::Correction,
    config::CarConfig,
    input::PlayerInput,
};
use common::{prelude::*, racing};
use nalgebra::{Point2, Vector2};

/// The car driven by the keyboard.
#[derive(Clone, Debug)]
pub struct PlayerCar {
    car: Car,
    motion: CarMotion,
}

impl PlayerCar {
    pub fn new(loc: Point2<f32>, config: CarConfig) -> Self {
        Self::from_car(Car::new(loc, config))
    }

    pub fn from_car(car: Car) -> Self {
        Self {
            car,
            motion: CarMotion::Idle,
        }
    }

    pub fn car(&self) -> &Car {
        &self.car
    }

    pub fn car_mut(&mut self) -> &mut Car {
        &mut self.car
    }

    pub fn motion(&self) -> CarMotion {
        self.motion
    }

    pub fn snapshot(&self) -> CarSnapshot {
        self.car.snapshot(self.motion)
    }

    /// Advances the car by one frame of `dt` seconds.
    pub fn step(&mut self, dt: f32, input: &PlayerInput) -> CarMotion {
        let config = *self.car.config();

        let steer = input.steer();
        if steer != 0.0 {
            let turn_speed = if input.handbrake {
                config.handbrake_turn_speed
            } else {
                config.turn_speed
            };
            self.car.set_rot(self.car.rot() + steer * turn_speed * dt);
        }

        let forward = self.car.forward_axis().into_inner();
        let right = self.car.right_axis().into_inner();

        let throttle = input.throttle();
        self.car
            .set_vel(self.car.vel() + forward * (throttle * self.car.accel() * dt));
        self.car.clamp_speed();

        // Grip is applied separately along and across the heading. Sideways
        // speed bleeds off much faster, except under the handbrake.
        let (forward_friction, lateral_friction) = if input.handbrake {
            (config.handbrake_forward_friction, config.handbrake_lateral_friction)
        } else {
            (config.forward_friction, config.lateral_friction)
        };
        let vel = self.car.vel();
        let forward_speed = vel.dot(&forward) * damping(forward_friction, dt);
        let lateral_speed = vel.dot(&right) * damping(lateral_friction, dt);
        self.car.set_vel(forward * forward_speed + right * lateral_speed);

        self.car.integrate(dt);

        self.motion = classify(input, lateral_speed);
        self.motion
    }

    /// Responds to a road block: pushed out by `correction`, speed reversed
    /// and slightly damped.
    pub fn bounce_off(&mut self, correction: &Correction) {
        self.car.translate(correction.to_vector());
        self.car.set_vel(-self.car.vel() * racing::BOUNCE_DAMPING);
        self.motion = CarMotion::Colliding;
    }

    /// Shoves the car `distance` units along `direction`. A zero direction
    /// leaves the car where it is.
    pub fn knock_back(&mut self, direction: Vector2<f32>, distance: f32) {
        self.car.translate(direction.normalize_or_zero() * distance);
        self.motion = CarMotion::Colliding;
    }
}

fn damping(friction: f32, dt: f32) -> f32 {
    (1.0 - friction * dt).max(0.0)
}

fn classify(input: &PlayerInput, lateral_speed: f32) -> CarMotion {
    if input.handbrake && lateral_speed.abs() > racing::DRIFT_LATERAL_SPEED {
        CarMotion::Drifting
    } else if input.is_idle() {
        CarMotion::Idle
    } else {
        CarMotion::Accelerating
    }
}

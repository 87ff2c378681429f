use crate::config::CarConfig;
use common::{physics, prelude::*};
use nalgebra::{Point2, Unit, Vector2};

/// The state every car has, whoever is driving it.
///
/// The hitbox is never stored independently of the location; every write to
/// the location goes through [`Car::set_loc`], which moves the hitbox along.
#[derive(Clone, Debug)]
pub struct Car {
    loc: Point2<f32>,
    vel: Vector2<f32>,
    rot: f32,
    hitbox: BoundingRectangle,
    boost_active: bool,
    boost_timer: f32,
    config: CarConfig,
}

/// What a car is doing this frame, for picking sprites and sounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CarMotion {
    Idle,
    Accelerating,
    Drifting,
    Colliding,
}

/// Everything the renderer, camera and finish-line check need to know about
/// a car after a frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarSnapshot {
    pub loc: Point2<f32>,
    pub rot: f32,
    pub vel: Vector2<f32>,
    pub hitbox: BoundingRectangle,
    pub boost_active: bool,
    pub motion: CarMotion,
}

impl Car {
    /// Spawns a car at rest, facing up the screen. `config` is expected to
    /// have passed [`CarConfig::validate`].
    pub fn new(loc: Point2<f32>, config: CarConfig) -> Self {
        Self {
            loc,
            vel: Vector2::zeros(),
            rot: 0.0,
            hitbox: hitbox_at(loc, &config),
            boost_active: false,
            boost_timer: 0.0,
            config,
        }
    }

    pub fn with_rot(mut self, rot: f32) -> Self {
        self.rot = rot.normalize_angle();
        self
    }

    pub fn with_vel(mut self, vel: Vector2<f32>) -> Self {
        self.vel = vel;
        self
    }

    pub fn loc(&self) -> Point2<f32> {
        self.loc
    }

    pub fn vel(&self) -> Vector2<f32> {
        self.vel
    }

    pub fn speed(&self) -> f32 {
        self.vel.norm()
    }

    pub fn rot(&self) -> f32 {
        self.rot
    }

    pub fn hitbox(&self) -> &BoundingRectangle {
        &self.hitbox
    }

    pub fn config(&self) -> &CarConfig {
        &self.config
    }

    /// A unit vector in the forward direction.
    pub fn forward_axis(&self) -> Unit<Vector2<f32>> {
        physics::car_forward_axis_2d(self.rot)
    }

    /// A unit vector in the right direction.
    pub fn right_axis(&self) -> Unit<Vector2<f32>> {
        physics::car_right_axis_2d(self.rot)
    }

    pub fn is_boost_active(&self) -> bool {
        self.boost_active
    }

    /// Seconds since the last boost pickup.
    pub fn boost_timer(&self) -> f32 {
        self.boost_timer
    }

    /// The top speed in effect right now.
    pub fn max_speed(&self) -> f32 {
        if self.boost_active {
            self.config.boost_max_speed
        } else {
            self.config.max_speed
        }
    }

    /// The throttle acceleration in effect right now.
    pub fn accel(&self) -> f32 {
        if self.boost_active {
            self.config.boost_accel
        } else {
            self.config.accel
        }
    }

    /// Starts (or restarts) the boost window.
    pub fn activate_boost(&mut self) {
        self.boost_active = true;
        self.boost_timer = 0.0;
    }

    pub fn deactivate_boost(&mut self) {
        self.boost_active = false;
        self.boost_timer = 0.0;
    }

    /// Called by the frame loop once per frame. The timer only runs while a
    /// boost is active.
    pub fn advance_boost_timer(&mut self, dt: f32) {
        if self.boost_active {
            self.boost_timer += dt;
        }
    }

    /// Whether the boost window has run out. Expiry is applied by calling
    /// [`Car::deactivate_boost`].
    pub fn is_boost_expired(&self) -> bool {
        self.boost_active && self.boost_timer >= self.config.boost_duration
    }

    pub fn snapshot(&self, motion: CarMotion) -> CarSnapshot {
        CarSnapshot {
            loc: self.loc,
            rot: self.rot,
            vel: self.vel,
            hitbox: self.hitbox,
            boost_active: self.boost_active,
            motion,
        }
    }

    pub(crate) fn set_loc(&mut self, loc: Point2<f32>) {
        self.loc = loc;
        self.hitbox = hitbox_at(loc, &self.config);
    }

    pub(crate) fn translate(&mut self, offset: Vector2<f32>) {
        self.set_loc(self.loc + offset);
    }

    pub(crate) fn set_vel(&mut self, vel: Vector2<f32>) {
        self.vel = vel;
    }

    pub(crate) fn set_rot(&mut self, rot: f32) {
        self.rot = rot.normalize_angle();
    }

    /// Scales the velocity down to the current top speed, keeping its
    /// direction.
    pub(crate) fn clamp_speed(&mut self) {
        let max_speed = self.max_speed();
        let speed = self.vel.norm();
        if speed > max_speed {
            self.vel *= max_speed / speed;
        }
    }

    pub(crate) fn integrate(&mut self, dt: f32) {
        self.set_loc(self.loc + self.vel * dt);
    }
}

fn hitbox_at(loc: Point2<f32>, config: &CarConfig) -> BoundingRectangle {
    BoundingRectangle::new(loc - config.hitbox_anchor, config.width, config.height)
}

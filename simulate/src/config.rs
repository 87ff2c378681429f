use common::racing;
use nalgebra::Vector2;
use std::{error::Error, fmt};

/// The dynamics constants of one car.
///
/// Speeds are in units per second, accelerations in units per second
/// squared, turn speeds in radians per second, frictions per second.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarConfig {
    pub max_speed: f32,
    pub accel: f32,
    pub boost_max_speed: f32,
    pub boost_accel: f32,
    pub boost_duration: f32,
    pub turn_speed: f32,
    pub handbrake_turn_speed: f32,
    pub forward_friction: f32,
    pub lateral_friction: f32,
    pub handbrake_forward_friction: f32,
    pub handbrake_lateral_friction: f32,
    /// Per-frame velocity decay while coasting, in `(0, 1]`.
    pub coast_drag: f32,
    pub width: f32,
    pub height: f32,
    /// The hitbox's top-left corner is the car's location minus this.
    pub hitbox_anchor: Vector2<f32>,
}

impl Default for CarConfig {
    fn default() -> Self {
        Self {
            max_speed: racing::CAR_BASE_SPEED,
            accel: racing::CAR_BASE_ACCEL,
            boost_max_speed: racing::CAR_BOOST_SPEED,
            boost_accel: racing::CAR_BOOST_ACCEL,
            boost_duration: racing::BOOST_DURATION,
            turn_speed: racing::CAR_TURN_SPEED,
            handbrake_turn_speed: racing::CAR_HANDBRAKE_TURN_SPEED,
            forward_friction: racing::FORWARD_FRICTION,
            lateral_friction: racing::LATERAL_FRICTION,
            handbrake_forward_friction: racing::HANDBRAKE_FORWARD_FRICTION,
            handbrake_lateral_friction: racing::HANDBRAKE_LATERAL_FRICTION,
            coast_drag: racing::COAST_DRAG,
            width: racing::CAR_WIDTH,
            height: racing::CAR_HEIGHT,
            hitbox_anchor: Vector2::zeros(),
        }
    }
}

impl CarConfig {
    /// The tuning used for the AI car. It turns faster so it can follow its
    /// smoothed heading.
    pub fn opponent() -> Self {
        Self::default().with_turn_speed(racing::OPPONENT_TURN_SPEED, racing::OPPONENT_TURN_SPEED)
    }

    pub fn with_speeds(mut self, max_speed: f32, boost_max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self.boost_max_speed = boost_max_speed;
        self
    }

    pub fn with_accel(mut self, accel: f32, boost_accel: f32) -> Self {
        self.accel = accel;
        self.boost_accel = boost_accel;
        self
    }

    pub fn with_turn_speed(mut self, turn_speed: f32, handbrake_turn_speed: f32) -> Self {
        self.turn_speed = turn_speed;
        self.handbrake_turn_speed = handbrake_turn_speed;
        self
    }

    pub fn with_hitbox(mut self, width: f32, height: f32, anchor: Vector2<f32>) -> Self {
        self.width = width;
        self.height = height;
        self.hitbox_anchor = anchor;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("max_speed", self.max_speed)?;
        positive("accel", self.accel)?;
        positive("boost_duration", self.boost_duration)?;
        positive("turn_speed", self.turn_speed)?;
        positive("handbrake_turn_speed", self.handbrake_turn_speed)?;
        if !(self.boost_max_speed > self.max_speed) {
            return Err(ConfigError::BoostNotAboveBaseline("boost_max_speed"));
        }
        if !(self.boost_accel > self.accel) {
            return Err(ConfigError::BoostNotAboveBaseline("boost_accel"));
        }
        non_negative("forward_friction", self.forward_friction)?;
        non_negative("lateral_friction", self.lateral_friction)?;
        non_negative("handbrake_forward_friction", self.handbrake_forward_friction)?;
        non_negative("handbrake_lateral_friction", self.handbrake_lateral_friction)?;
        non_negative("width", self.width)?;
        non_negative("height", self.height)?;
        if !(self.coast_drag > 0.0 && self.coast_drag <= 1.0) {
            return Err(ConfigError::OutOfRange("coast_drag"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    NotPositive(&'static str),
    Negative(&'static str),
    OutOfRange(&'static str),
    BoostNotAboveBaseline(&'static str),
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive(name) => write!(f, "{} must be positive", name),
            ConfigError::Negative(name) => write!(f, "{} must not be negative", name),
            ConfigError::OutOfRange(name) => write!(f, "{} is out of range", name),
            ConfigError::BoostNotAboveBaseline(name) => {
                write!(f, "{} must be greater than its baseline", name)
            }
        }
    }
}

pub fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive(name))
    }
}

pub fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative(name))
    }
}

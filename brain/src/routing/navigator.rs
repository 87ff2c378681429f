use crate::{
    mechanics::{avoid_obstacle, simple_steer_towards, turn_towards},
    routing::WaypointRoute,
};
use common::{prelude::*, racing};
use log::{debug, info};
use nalgebra::{Unit, Vector2};
use simulate::{config, first_hit, Car, ConfigError, OpponentCar, Prop, PropId, RoadBlock};
use std::fmt;

/// Tuning for how the AI follows its route.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NavigatorConfig {
    /// A waypoint closer than this is considered reached.
    pub arrival_threshold: f32,
    /// How far an obstacle bends the heading, from 0 (ignored) to 1 (only
    /// the avoidance direction counts).
    pub avoidance_weight: f32,
    /// How far each frame's heading moves toward the new one. Must be above
    /// 0; 1 means no smoothing.
    pub heading_smoothing: f32,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            arrival_threshold: racing::ARRIVAL_THRESHOLD,
            avoidance_weight: racing::AVOIDANCE_WEIGHT,
            heading_smoothing: racing::HEADING_SMOOTHING,
        }
    }
}

impl NavigatorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        config::positive("arrival_threshold", self.arrival_threshold)?;
        unit_interval("avoidance_weight", self.avoidance_weight)?;
        config::positive("heading_smoothing", self.heading_smoothing)?;
        unit_interval("heading_smoothing", self.heading_smoothing)?;
        Ok(())
    }
}

fn unit_interval(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange(name))
    }
}

/// What the navigator decided on its last step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavigatorStatus {
    Steering,
    Avoiding(PropId),
    Finished,
}

impl fmt::Display for NavigatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigatorStatus::Steering => f.write_str("steering"),
            NavigatorStatus::Avoiding(PropId(id)) => write!(f, "avoiding {}", id),
            NavigatorStatus::Finished => f.write_str("finished"),
        }
    }
}

/// Drives the AI car through its waypoints, bending around road blocks.
#[derive(Clone, Debug)]
pub struct Navigator {
    route: WaypointRoute,
    config: NavigatorConfig,
    heading: Option<Unit<Vector2<f32>>>,
    status: NavigatorStatus,
}

impl Navigator {
    pub fn new(route: WaypointRoute) -> Self {
        Self::with_config(route, NavigatorConfig::default())
    }

    pub fn with_config(route: WaypointRoute, config: NavigatorConfig) -> Self {
        let status = if route.is_empty() {
            NavigatorStatus::Finished
        } else {
            NavigatorStatus::Steering
        };
        Self {
            route,
            config,
            heading: None,
            status,
        }
    }

    pub fn route(&self) -> &WaypointRoute {
        &self.route
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// The smoothed heading from the last step. `None` before the first step
    /// and after the route runs out.
    pub fn heading(&self) -> Option<Unit<Vector2<f32>>> {
        self.heading
    }

    pub fn status(&self) -> NavigatorStatus {
        self.status
    }

    /// Picks a heading for `car` and drives it one frame.
    pub fn step(
        &mut self,
        dt: f32,
        car: &mut OpponentCar,
        road_blocks: &[RoadBlock],
    ) -> NavigatorStatus {
        let heading = self.plan(dt, car.car(), road_blocks);
        car.step(dt, heading);
        if let NavigatorStatus::Avoiding(_) = self.status {
            car.mark_colliding();
        }
        self.status
    }

    /// Decides which way `car` should head over the next `dt` seconds,
    /// without moving it. `None` means there is nowhere left to go.
    pub fn plan(
        &mut self,
        dt: f32,
        car: &Car,
        road_blocks: &[RoadBlock],
    ) -> Option<Unit<Vector2<f32>>> {
        let (desired, distance) = match self.next_target(car) {
            Some(target) => target,
            None => {
                self.heading = None;
                self.status = NavigatorStatus::Finished;
                return None;
            }
        };

        let desired = match first_hit(road_blocks, car.hitbox()) {
            Some(block) => {
                if self.status != NavigatorStatus::Avoiding(block.id()) {
                    debug!("avoiding road block {}", block.id().0);
                }
                self.status = NavigatorStatus::Avoiding(block.id());
                avoid_obstacle(
                    car.hitbox(),
                    block.hitbox(),
                    &desired,
                    self.config.avoidance_weight,
                )
            }
            None => {
                self.status = NavigatorStatus::Steering;
                desired
            }
        };

        let heading = match self.heading {
            Some(previous) if distance > self.turning_reach(dt, car) => {
                turn_towards(&previous, &desired, self.config.heading_smoothing)
            }
            _ => desired,
        };
        self.heading = Some(heading);
        Some(heading)
    }

    /// Targets closer than this are steered at directly. Smoothing caps how
    /// far the heading turns each frame, so a car on a smoothed heading
    /// circles anything inside its turning circle without ever arriving.
    fn turning_reach(&self, dt: f32, car: &Car) -> f32 {
        let weight = self.config.heading_smoothing;
        let turn_per_frame = weight.atan2(1.0 - weight);
        2.0 * car.max_speed() * dt / turn_per_frame
    }

    /// Pops every waypoint already within reach and returns the direction and
    /// distance to the first one that is not.
    fn next_target(&mut self, car: &Car) -> Option<(Unit<Vector2<f32>>, f32)> {
        let loc = car.loc();
        while let Some(target) = self.route.head() {
            let distance = (target - loc).norm();
            if distance >= self.config.arrival_threshold {
                return simple_steer_towards(loc, target).map(|dir| (dir, distance));
            }
            self.route.pop();
            debug!(
                "reached waypoint {} at {}",
                self.route.visited(),
                target.pretty()
            );
            if self.route.is_empty() {
                info!("route finished after {} waypoints", self.route.visited());
            }
        }
        None
    }
}

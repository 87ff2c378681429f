//! Various constants of the race.
//!
//! Distances are in world units (one unit is one pixel of sprite art). Times
//! are in seconds.

/// The frame rate the game runs at.
pub const PHYSICS_TICK_FREQ: f32 = 60.0;

/// The number of seconds between frames.
pub const PHYSICS_DT: f32 = 1.0 / PHYSICS_TICK_FREQ;

/// The size of a car's hitbox. Both cars use the 16×16 sprite tile.
pub const CAR_WIDTH: f32 = 16.0;
pub const CAR_HEIGHT: f32 = 16.0;

/// The top speed of a car without boost.
pub const CAR_BASE_SPEED: f32 = 75.0;

/// The top speed of a car while boosting.
pub const CAR_BOOST_SPEED: f32 = 150.0;

/// Throttle acceleration without boost.
pub const CAR_BASE_ACCEL: f32 = 150.0;

/// Throttle acceleration while boosting.
pub const CAR_BOOST_ACCEL: f32 = 300.0;

/// Turn rate in radians per second.
pub const CAR_TURN_SPEED: f32 = 3.0;

/// Turn rate in radians per second while the handbrake is held.
pub const CAR_HANDBRAKE_TURN_SPEED: f32 = 4.5;

/// Turn rate of the AI car in radians per second.
pub const OPPONENT_TURN_SPEED: f32 = 6.0;

/// Per-second damping of the velocity component along the car's heading.
pub const FORWARD_FRICTION: f32 = 0.5;

/// Per-second damping of the velocity component across the car's heading.
pub const LATERAL_FRICTION: f32 = 8.0;

/// Forward damping while the handbrake is held.
pub const HANDBRAKE_FORWARD_FRICTION: f32 = 0.25;

/// Lateral damping while the handbrake is held. Lower grip is what makes the
/// car slide.
pub const HANDBRAKE_LATERAL_FRICTION: f32 = 2.0;

/// Per-frame velocity decay of a car with nothing to drive toward.
pub const COAST_DRAG: f32 = 0.98;

/// Below this speed a coasting car is considered stopped.
pub const REST_SPEED: f32 = 0.5;

/// Lateral speed above which a handbraking car counts as drifting.
pub const DRIFT_LATERAL_SPEED: f32 = 5.0;

/// How long a speed boost lasts after the last pickup.
pub const BOOST_DURATION: f32 = 1.25;

/// The fraction of speed kept when bouncing off a road block.
pub const BOUNCE_DAMPING: f32 = 0.95;

/// How far a car is shoved away from a road block it hits.
pub const KNOCKBACK_DISTANCE: f32 = 2.0;

/// Extra distance added to a collision correction so the rectangles end up
/// strictly apart rather than touching.
pub const SEPARATION_SLOP: f32 = 0.01;

/// The AI car counts a waypoint as reached within this distance.
pub const ARRIVAL_THRESHOLD: f32 = 2.0;

/// How much of the avoidance direction is mixed into the AI's heading while
/// it is inside a road block.
pub const AVOIDANCE_WEIGHT: f32 = 0.5;

/// How much of the new heading the AI adopts each frame.
pub const HEADING_SMOOTHING: f32 = 0.1;

/// The road block hitbox sits inside its 16×16 sprite.
pub const ROAD_BLOCK_HITBOX_OFFSET_X: f32 = 3.0;
pub const ROAD_BLOCK_HITBOX_OFFSET_Y: f32 = 6.0;
pub const ROAD_BLOCK_HITBOX_WIDTH: f32 = 8.0;
pub const ROAD_BLOCK_HITBOX_HEIGHT: f32 = 4.0;

/// Speed boost pads cover their whole sprite.
pub const SPEED_BOOST_SIZE: f32 = 16.0;

/// The bounds of the map.
pub const MAP_WIDTH: f32 = 288.0;
pub const MAP_HEIGHT: f32 = 1920.0;

/// A car whose position is above this line has finished.
pub const FINISH_LINE_Y: f32 = 32.0;

//! How cars are oriented on screen.
//!
//! A car's rotation is an angle in radians. At rotation zero the car faces
//! the top of the screen (negative `y`); positive rotation turns clockwise
//! on screen.

use crate::ext::ExtendF32;
use lazy_static::lazy_static;
use nalgebra::{Unit, UnitComplex, Vector2};
use std::f32::consts::FRAC_PI_2;

lazy_static! {
    pub static ref CAR_LOCAL_FORWARD_AXIS_2D: Unit<Vector2<f32>> =
        Unit::new_unchecked(Vector2::new(0.0, -1.0));
    pub static ref CAR_LOCAL_RIGHT_AXIS_2D: Unit<Vector2<f32>> = Vector2::x_axis();
}

/// Returns the forward axis in world coordinates of a car with the given
/// rotation.
pub fn car_forward_axis_2d(rot: f32) -> Unit<Vector2<f32>> {
    UnitComplex::new(rot) * *CAR_LOCAL_FORWARD_AXIS_2D
}

/// Returns the right axis in world coordinates of a car with the given
/// rotation.
pub fn car_right_axis_2d(rot: f32) -> Unit<Vector2<f32>> {
    UnitComplex::new(rot) * *CAR_LOCAL_RIGHT_AXIS_2D
}

/// Returns the rotation of a car facing along `heading`.
///
/// The sprite's forward axis is a quarter turn away from the world x axis,
/// hence the offset.
pub fn car_rotation_for_heading(heading: &Unit<Vector2<f32>>) -> f32 {
    (heading.y.atan2(heading.x) + FRAC_PI_2).normalize_angle()
}

use nalgebra::{Unit, Vector2};
use std::f32::consts::PI;

/// Vectors shorter than this are treated as having no direction.
pub const MIN_AXIS_NORM: f32 = 1e-6;

pub trait ExtendF32 {
    /// Normalize an angle to between -PI and PI.
    fn normalize_angle(self) -> Self;
}

impl ExtendF32 for f32 {
    fn normalize_angle(self) -> Self {
        let result = self % (PI * 2.0);
        if result < -PI {
            result + (PI * 2.0)
        } else if result >= PI {
            result - (PI * 2.0)
        } else {
            result
        }
    }
}

pub trait ExtendVector2 {
    /// The vector rotated a quarter turn, from +x toward +y.
    fn perpendicular(&self) -> Self;
    /// Returns the zero vector instead of dividing by zero.
    fn normalize_or_zero(&self) -> Self;
    /// The direction of this vector, or `None` if it is (nearly) zero.
    fn to_axis(&self) -> Option<Unit<Vector2<f32>>>;
}

impl ExtendVector2 for Vector2<f32> {
    fn perpendicular(&self) -> Self {
        Vector2::new(-self.y, self.x)
    }

    fn normalize_or_zero(&self) -> Self {
        match self.to_axis() {
            Some(axis) => axis.into_inner(),
            None => Vector2::zeros(),
        }
    }

    fn to_axis(&self) -> Option<Unit<Vector2<f32>>> {
        Unit::try_new(*self, MIN_AXIS_NORM)
    }
}

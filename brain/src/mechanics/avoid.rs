use crate::mechanics::blend;
use common::prelude::*;
use nalgebra::{Unit, Vector2};

/// Bends `desired` away from an obstacle the vehicle is touching.
///
/// The push is a quarter turn from the obstacle-to-vehicle direction, which
/// slides the vehicle along the obstacle's edge instead of backing it off.
/// When the two boxes share a center there is nothing to push against and
/// `desired` is returned unchanged.
pub fn avoid_obstacle(
    vehicle: &BoundingRectangle,
    obstacle: &BoundingRectangle,
    desired: &Unit<Vector2<f32>>,
    weight: f32,
) -> Unit<Vector2<f32>> {
    let away = vehicle.center() - obstacle.center();
    let avoidance = match away.perpendicular().to_axis() {
        Some(avoidance) => avoidance,
        None => return *desired,
    };
    blend(desired, &avoidance, weight).unwrap_or(avoidance)
}

#[cfg(test)]
mod tests {
    use crate::mechanics::avoid_obstacle;
    use common::prelude::*;
    use nalgebra::{Point2, Unit, Vector2};

    fn rect(x: f32, y: f32, width: f32, height: f32) -> BoundingRectangle {
        BoundingRectangle::new(Point2::new(x, y), width, height)
    }

    #[test]
    fn obstacle_dead_ahead() {
        // Driving up the screen into a block just above.
        let vehicle = rect(100.0, 100.0, 16.0, 16.0);
        let obstacle = rect(104.0, 90.0, 8.0, 12.0);
        let up = Unit::new_normalize(Vector2::new(0.0, -1.0));
        let heading = avoid_obstacle(&vehicle, &obstacle, &up, 0.5);
        // Veers sideways but keeps going forward.
        assert!(heading.x < -0.5, "{:?}", heading);
        assert!(heading.y < -0.5, "{:?}", heading);
        assert!((heading.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn concentric_boxes_keep_heading() {
        let vehicle = rect(0.0, 0.0, 16.0, 16.0);
        let obstacle = rect(4.0, 6.0, 8.0, 4.0);
        let up = Unit::new_normalize(Vector2::new(0.0, -1.0));
        assert_eq!(avoid_obstacle(&vehicle, &obstacle, &up, 0.5), up);
    }

    #[test]
    fn opposed_avoidance_falls_back_to_avoidance() {
        // Obstacle to the left; the push points straight down, against a
        // heading straight up.
        let vehicle = rect(10.0, 0.0, 16.0, 16.0);
        let obstacle = rect(0.0, 0.0, 16.0, 16.0);
        let up = Unit::new_normalize(Vector2::new(0.0, -1.0));
        let heading = avoid_obstacle(&vehicle, &obstacle, &up, 0.5);
        assert_eq!(heading, Unit::new_normalize(Vector2::new(0.0, 1.0)));
    }
}

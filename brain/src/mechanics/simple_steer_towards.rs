use common::prelude::*;
use nalgebra::{Point2, Unit, Vector2};

/// Below this dot product two headings count as pointing apart.
const OPPOSED_DOT: f32 = -0.9;

/// The straight-line heading from `loc` to `target_loc`, or `None` when the
/// two points coincide.
pub fn simple_steer_towards(
    loc: Point2<f32>,
    target_loc: Point2<f32>,
) -> Option<Unit<Vector2<f32>>> {
    (target_loc - loc).to_axis()
}

/// Moves `weight` of the way from `from` to `to` and re-normalizes. Two
/// headings that cancel out yield `None`.
pub fn blend(
    from: &Unit<Vector2<f32>>,
    to: &Unit<Vector2<f32>>,
    weight: f32,
) -> Option<Unit<Vector2<f32>>> {
    from.into_inner().lerp(&to.into_inner(), weight).to_axis()
}

/// Like [`blend`], but always makes progress. A straight blend between nearly
/// opposite headings barely turns (or cancels out), so in that case `from`
/// swings a quarter turn toward whichever side `to` lies on instead.
pub fn turn_towards(
    from: &Unit<Vector2<f32>>,
    to: &Unit<Vector2<f32>>,
    weight: f32,
) -> Unit<Vector2<f32>> {
    let from_vec = from.into_inner();
    let mut to_vec = to.into_inner();
    if from_vec.dot(&to_vec) < OPPOSED_DOT {
        let swing = from_vec.perpendicular();
        let side = from_vec.x * to_vec.y - from_vec.y * to_vec.x;
        to_vec = if side < 0.0 { -swing } else { swing };
    }
    from_vec.lerp(&to_vec, weight).to_axis().unwrap_or(*to)
}

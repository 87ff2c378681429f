//! Pushes an overlapping rectangle out of an obstacle along the axis that
//! needs the least displacement.

use common::{prelude::*, racing::SEPARATION_SLOP};
use nalgebra::Vector2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Which axis to separate along when both need exactly the same
/// displacement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TieBreak {
    Horizontal,
    Vertical,
}

impl Default for TieBreak {
    fn default() -> Self {
        TieBreak::Horizontal
    }
}

/// A displacement along a single axis. `amount` is signed: negative moves
/// left or up, positive moves right or down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Correction {
    pub axis: Axis,
    pub amount: f32,
}

impl Correction {
    pub fn to_vector(&self) -> Vector2<f32> {
        match self.axis {
            Axis::Horizontal => Vector2::new(self.amount, 0.0),
            Axis::Vertical => Vector2::new(0.0, self.amount),
        }
    }
}

/// Returns the correction that moves `moving` out of `obstacle`, or `None`
/// if they do not overlap.
pub fn resolve(moving: &BoundingRectangle, obstacle: &BoundingRectangle) -> Option<Correction> {
    resolve_with(moving, obstacle, TieBreak::default())
}

pub fn resolve_with(
    moving: &BoundingRectangle,
    obstacle: &BoundingRectangle,
    tie_break: TieBreak,
) -> Option<Correction> {
    let horizontal = penetration(
        (moving.left(), moving.right()),
        (obstacle.left(), obstacle.right()),
    )?;
    let vertical = penetration(
        (moving.top(), moving.bottom()),
        (obstacle.top(), obstacle.bottom()),
    )?;

    let axis = if horizontal.depth < vertical.depth {
        Axis::Horizontal
    } else if vertical.depth < horizontal.depth {
        Axis::Vertical
    } else {
        match tie_break {
            TieBreak::Horizontal => Axis::Horizontal,
            TieBreak::Vertical => Axis::Vertical,
        }
    };
    let chosen = match axis {
        Axis::Horizontal => horizontal,
        Axis::Vertical => vertical,
    };
    Some(Correction {
        axis,
        amount: chosen.sign * (chosen.depth + SEPARATION_SLOP),
    })
}

#[derive(Copy, Clone)]
struct Penetration {
    depth: f32,
    sign: f32,
}

/// How far the interval `a` must move to leave `b`, toward whichever side of
/// `b` is closer. `None` if the closed intervals do not intersect.
fn penetration((a_min, a_max): (f32, f32), (b_min, b_max): (f32, f32)) -> Option<Penetration> {
    if a_max < b_min || a_min > b_max {
        return None;
    }
    let toward_min = a_max - b_min;
    let toward_max = b_max - a_min;
    Some(if toward_min < toward_max {
        Penetration {
            depth: toward_min,
            sign: -1.0,
        }
    } else {
        Penetration {
            depth: toward_max,
            sign: 1.0,
        }
    })
}

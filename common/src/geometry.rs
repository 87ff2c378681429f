//! Axis-aligned rectangles, the only collision shape in the game.
//!
//! Coordinates are screen coordinates: `x` grows to the right and `y` grows
//! downward, so `top` is the smaller `y`.

use nalgebra::{Point2, Vector2};
use std::{error::Error, fmt};

/// An axis-aligned bounding rectangle.
///
/// Width and height are never negative.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingRectangle {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
}

#[derive(Debug, PartialEq)]
pub enum GeometryError {
    NegativeExtent { width: f32, height: f32 },
}

impl Error for GeometryError {}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::NegativeExtent { width, height } => write!(
                f,
                "rectangle extent must not be negative (width {}, height {})",
                width, height,
            ),
        }
    }
}

impl BoundingRectangle {
    /// Creates a rectangle whose top-left corner is `loc`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `width` or `height` is negative. Use
    /// [`BoundingRectangle::try_new`] for extents that come from outside the
    /// crate.
    pub fn new(loc: Point2<f32>, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "{} {}", width, height);
        Self {
            x: loc.x,
            y: loc.y,
            width,
            height,
        }
    }

    pub fn try_new(loc: Point2<f32>, width: f32, height: f32) -> Result<Self, GeometryError> {
        // Written so NaN is rejected too.
        if !(width >= 0.0 && height >= 0.0) {
            return Err(GeometryError::NegativeExtent { width, height });
        }
        Ok(Self::new(loc, width, height))
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// The top-left corner.
    pub fn loc(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point2<f32> {
        Point2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The same rectangle moved so its top-left corner is at `loc`.
    pub fn with_loc(&self, loc: Point2<f32>) -> Self {
        Self::new(loc, self.width, self.height)
    }

    pub fn translated(&self, offset: Vector2<f32>) -> Self {
        self.with_loc(self.loc() + offset)
    }

    pub fn collides_with(&self, other: &Self) -> bool {
        overlaps(self, other)
    }
}

/// Returns true if the two rectangles intersect.
///
/// The intervals are closed, so rectangles that share only an edge or a
/// corner are reported as overlapping.
pub fn overlaps(a: &BoundingRectangle, b: &BoundingRectangle) -> bool {
    !(a.right() < b.left() || a.left() > b.right() || a.top() > b.bottom() || a.bottom() < b.top())
}

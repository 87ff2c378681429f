use crate::geometry::BoundingRectangle;
use nalgebra::{Point2, Unit, Vector2};
use std::fmt::{self, Formatter};

pub trait PrettyPrint {
    type PrettyPrinter: fmt::Display;
    fn pretty(&self) -> Self::PrettyPrinter;
}

impl PrettyPrint for Vector2<f32> {
    type PrettyPrinter = Vector2PrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

impl PrettyPrint for Point2<f32> {
    type PrettyPrinter = Vector2PrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: self.coords }
    }
}

pub struct Vector2PrettyPrinter {
    data: Vector2<f32>,
}

impl fmt::Display for Vector2PrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "({:.0}, {:.0})", self.data.x, self.data.y)
    }
}

impl PrettyPrint for Unit<Vector2<f32>> {
    type PrettyPrinter = UnitVector2PrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

pub struct UnitVector2PrettyPrinter {
    data: Unit<Vector2<f32>>,
}

impl fmt::Display for UnitVector2PrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "@({:.2}, {:.2})", self.data.x, self.data.y)
    }
}

impl PrettyPrint for BoundingRectangle {
    type PrettyPrinter = BoundingRectanglePrettyPrinter;

    fn pretty(&self) -> Self::PrettyPrinter {
        Self::PrettyPrinter { data: *self }
    }
}

pub struct BoundingRectanglePrettyPrinter {
    data: BoundingRectangle,
}

impl fmt::Display for BoundingRectanglePrettyPrinter {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "[{:.0}, {:.0} {:.0}×{:.0}]",
            self.data.x(),
            self.data.y(),
            self.data.width(),
            self.data.height(),
        )
    }
}

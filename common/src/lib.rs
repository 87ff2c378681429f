#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::{
    geometry::{overlaps, BoundingRectangle, GeometryError},
    pretty::PrettyPrint,
};

pub mod ext;
pub mod geometry;
pub mod physics;
pub mod prelude;
mod pretty;
pub mod racing;

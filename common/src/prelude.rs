pub use crate::{
    ext::{ExtendF32, ExtendVector2},
    geometry::{overlaps, BoundingRectangle},
    pretty::PrettyPrint,
};

//! Static things on the track that cars can run into.
//!
//! Props carry no rendering state. The renderer keeps its own table of
//! sprites and looks them up by [`PropKind`] (or by [`PropId`] for per-prop
//! art).

use common::{prelude::*, racing};
use derive_new::new;
use nalgebra::{Point2, Vector2};

/// Identifies a prop within a level. Assigned by whoever builds the level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropKind {
    RoadBlock,
    SpeedBoost,
}

pub trait Prop {
    fn id(&self) -> PropId;
    fn kind(&self) -> PropKind;
    /// The top-left corner of the prop's sprite.
    fn loc(&self) -> Point2<f32>;
    fn hitbox(&self) -> &BoundingRectangle;

    fn collides_with(&self, other: &BoundingRectangle) -> bool {
        self.hitbox().collides_with(other)
    }
}

/// A barrier cars bounce off (the player) or steer around (the AI).
#[derive(Clone, Debug, PartialEq)]
pub struct RoadBlock {
    id: PropId,
    loc: Point2<f32>,
    hitbox: BoundingRectangle,
}

impl RoadBlock {
    pub fn new(id: PropId, loc: Point2<f32>) -> Self {
        let offset = Vector2::new(
            racing::ROAD_BLOCK_HITBOX_OFFSET_X,
            racing::ROAD_BLOCK_HITBOX_OFFSET_Y,
        );
        let hitbox = BoundingRectangle::new(
            loc + offset,
            racing::ROAD_BLOCK_HITBOX_WIDTH,
            racing::ROAD_BLOCK_HITBOX_HEIGHT,
        );
        Self { id, loc, hitbox }
    }
}

impl Prop for RoadBlock {
    fn id(&self) -> PropId {
        self.id
    }

    fn kind(&self) -> PropKind {
        PropKind::RoadBlock
    }

    fn loc(&self) -> Point2<f32> {
        self.loc
    }

    fn hitbox(&self) -> &BoundingRectangle {
        &self.hitbox
    }
}

/// A pad that boosts whichever car drives over it. It stays on the track and
/// triggers again on every visit.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeedBoost {
    id: PropId,
    loc: Point2<f32>,
    hitbox: BoundingRectangle,
}

impl SpeedBoost {
    pub fn new(id: PropId, loc: Point2<f32>) -> Self {
        let hitbox =
            BoundingRectangle::new(loc, racing::SPEED_BOOST_SIZE, racing::SPEED_BOOST_SIZE);
        Self { id, loc, hitbox }
    }
}

impl Prop for SpeedBoost {
    fn id(&self) -> PropId {
        self.id
    }

    fn kind(&self) -> PropKind {
        PropKind::SpeedBoost
    }

    fn loc(&self) -> Point2<f32> {
        self.loc
    }

    fn hitbox(&self) -> &BoundingRectangle {
        &self.hitbox
    }
}

/// The props of one level, in a stable order. Owned by the caller and lent
/// to the simulation each frame.
#[derive(Clone, Debug, Default, new)]
pub struct Track {
    pub road_blocks: Vec<RoadBlock>,
    pub speed_boosts: Vec<SpeedBoost>,
}

/// Returns the first prop, in collection order, whose hitbox overlaps
/// `hitbox`. Later props are not examined.
pub fn first_hit<'a, P: Prop>(props: &'a [P], hitbox: &BoundingRectangle) -> Option<&'a P> {
    props.iter().find(|p| p.collides_with(hitbox))
}

#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::{
    car::{Car, CarMotion, CarSnapshot},
    collision::{resolve, resolve_with, Axis, Correction, TieBreak},
    config::{CarConfig, ConfigError},
    input::PlayerInput,
    opponent_car::OpponentCar,
    player_car::PlayerCar,
    props::{first_hit, Prop, PropId, PropKind, RoadBlock, SpeedBoost, Track},
};

mod car;
pub mod collision;
pub mod config;
mod input;
mod opponent_car;
mod player_car;
mod props;

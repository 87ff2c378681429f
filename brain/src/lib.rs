#![cfg_attr(feature = "strict", deny(warnings))]

pub use crate::{
    race::{Race, RaceSnapshot},
    routing::{Navigator, NavigatorConfig, NavigatorStatus, WaypointRoute},
};

#[cfg(test)]
mod integration_tests;
pub mod mechanics;
mod race;
pub mod routing;

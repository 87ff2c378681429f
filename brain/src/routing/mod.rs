pub use self::{
    navigator::{Navigator, NavigatorConfig, NavigatorStatus},
    route::WaypointRoute,
};

mod navigator;
mod route;

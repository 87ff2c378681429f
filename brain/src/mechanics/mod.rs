pub use self::{
    avoid::avoid_obstacle,
    simple_steer_towards::{blend, simple_steer_towards, turn_towards},
};

mod avoid;
mod simple_steer_towards;

//! Kinematic and placement configuration of the AgileX CobotMagic robot.
//!
//! Everything here is static data, queried once while a robot is placed
//! in a scene. The only side effect is [`RobotModel::new`] handing the
//! joint damping to the host.

mod config;
mod model;
mod placement;

pub use crate::{config::*, model::*, placement::*};

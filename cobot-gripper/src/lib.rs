//! Actuation mapping of the CobotMagic two-finger gripper.
//!
//! A [`GripperActuationModel`] turns a low-dimensional command into joint
//! targets for both fingers. How the command is mapped is selected by an
//! [`ActuationPolicy`]; the binary CobotMagic gripper integrates the sign of
//! a single command into both finger channels at once.
//!
//! ```
//! use cobot_core::AssetPath;
//! use cobot_gripper::GripperActuationModel;
//!
//! let mut gripper = GripperActuationModel::cobot_magic(AssetPath::new("gripper.xml"), 0);
//! assert_eq!(gripper.degrees_of_freedom(), 1);
//! let targets = gripper.format_action(&[1.0]).unwrap();
//! assert_eq!(targets[0], targets[1]);
//! ```

mod actuation;
mod config;
mod geometry;
mod model;

pub use crate::{actuation::*, config::*, geometry::*, model::*};

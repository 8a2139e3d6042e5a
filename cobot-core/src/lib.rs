//! Shared building blocks of the CobotMagic robot model: the error type,
//! arm sides, and the seams through which the host injects resolved assets
//! and receives joint attribute writes.

mod arm;
mod asset;
mod config;
mod error;
mod joint_attribute;

pub use arm::*;
pub use asset::*;
pub use config::*;
pub use error::*;
pub use joint_attribute::*;

// re-export
pub use nalgebra::Vector3;

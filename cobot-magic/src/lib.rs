//! CobotMagic dual-armed mobile robot with its two-finger grippers.
//!
//! ```
//! use cobot_magic::{
//!     robot::RobotKinematicConfig, ArmSide, BimanualAssembly, DummyJointAttributeSink,
//!     RootedAssetResolver, SceneContext,
//! };
//!
//! let mut sink = DummyJointAttributeSink::new((0..12).map(|i| format!("joint{i}")).collect());
//! let mut robot = BimanualAssembly::try_new(
//!     RobotKinematicConfig::cobot_magic(),
//!     0,
//!     RootedAssetResolver::new("assets"),
//!     &mut sink,
//!     &SceneContext::table(0.8),
//! )
//! .unwrap();
//! robot.format_action(ArmSide::Left, &[1.0]).unwrap();
//! ```

mod assembly;

pub use crate::assembly::*;
pub use cobot_core::*;

pub mod gripper {
    pub use cobot_gripper::*;
}

pub mod robot {
    pub use cobot_robot::*;
}

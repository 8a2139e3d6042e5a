use cobot_core::{ArmSide, AssetPath, Error, JointAttribute, JointAttributeSink};
use tracing::debug;

use crate::config::RobotKinematicConfig;

/// A robot instance built from a [`RobotKinematicConfig`].
#[derive(Debug, Clone)]
pub struct RobotModel {
    config: RobotKinematicConfig,
    asset: AssetPath,
    idn: String,
}

impl RobotModel {
    /// Validates `config` and writes its joint damping into `sink`.
    ///
    /// Damping is written exactly once, here; the model does not touch the
    /// sink afterwards.
    pub fn new<S, I>(
        config: RobotKinematicConfig,
        asset: AssetPath,
        idn: I,
        mut sink: S,
    ) -> Result<Self, Error>
    where
        S: JointAttributeSink,
        I: ToString,
    {
        config.validate()?;
        debug!(robot = %config.name, ?asset, "applying joint damping");
        sink.set_joint_attribute(JointAttribute::Damping, config.joint_damping())?;
        Ok(Self {
            config,
            asset,
            idn: idn.to_string(),
        })
    }

    pub fn config(&self) -> &RobotKinematicConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn idn(&self) -> &str {
        &self.idn
    }

    pub fn asset(&self) -> &AssetPath {
        &self.asset
    }

    pub fn naming_prefix(&self) -> String {
        format!("robot{}_", self.idn)
    }

    /// End-effector link name of `side`, qualified by this instance's prefix.
    pub fn eef_name(&self, side: ArmSide) -> String {
        format!(
            "{}{}",
            self.naming_prefix(),
            self.config.end_effector_identifiers()[side]
        )
    }
}

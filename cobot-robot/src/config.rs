use std::path::Path;

use cobot_core::{ArmSide, ArmType, Error, PerArm, Vector3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::placement::PlacementOffsets;

pub const COBOT_MAGIC: &str = "CobotMagic";
pub const COBOT_MAGIC_ASSET: &str = "robots/cobot_magic/robot.xml";

/// Sub-components attached to the robot unless the scene asks otherwise.
/// These are names only, the host assembles them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct DefaultSubcomponents {
    pub base: String,
    pub grippers: PerArm<String>,
    pub controller_configs: PerArm<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RobotKinematicConfig {
    // TOML tables (maps, nested structs) have to follow the plain values.
    pub name: String,
    /// Logical asset name, resolved by the host.
    pub asset: String,
    pub arm_type: ArmType,
    pub joints_per_arm: usize,
    /// Initial joint positions, arm by arm in [`ArmType::arms`] order.
    pub init_qpos: Vec<f64>,
    /// Passive damping of every joint, in the same order as `init_qpos`.
    pub joint_damping: Vec<f64>,
    pub top_offset: [f64; 3],
    pub horizontal_radius: f64,
    pub eef_names: PerArm<String>,
    pub default_subcomponents: DefaultSubcomponents,
    pub base_xpos_offsets: PlacementOffsets,
}

impl RobotKinematicConfig {
    /// AgileX CobotMagic, a Mobile ALOHA style dual-armed robot.
    pub fn cobot_magic() -> Self {
        let arm_qpos = [0.0, 0.3, 0.3, -0.6, 0.0, 0.0];
        let arm_damping = [0.1, 0.1, 0.1, 0.1, 0.1, 0.01];
        Self {
            name: COBOT_MAGIC.to_owned(),
            asset: COBOT_MAGIC_ASSET.to_owned(),
            arm_type: ArmType::Bimanual,
            joints_per_arm: 6,
            init_qpos: [arm_qpos, arm_qpos].concat(),
            joint_damping: [arm_damping, arm_damping].concat(),
            top_offset: [0.0, 0.0, 0.0],
            horizontal_radius: 0.5,
            eef_names: PerArm::new("fl_link6".to_owned(), "fr_link6".to_owned()),
            default_subcomponents: DefaultSubcomponents {
                base: "TracerMobileBase".to_owned(),
                grippers: PerArm::splat("CobotMagicGripper".to_owned()),
                controller_configs: PerArm::splat("default_cobot_magic".to_owned()),
            },
            base_xpos_offsets: PlacementOffsets::cobot_magic(),
        }
    }

    pub fn try_new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let config: Self = cobot_core::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<Self, Error> {
        let config: Self = cobot_core::from_toml_str(s, path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.joints_per_arm == 0 {
            return Err(Error::InvalidConfig(format!(
                "{}: joints_per_arm must be positive",
                self.name
            )));
        }
        let joints = self.num_joints();
        if self.init_qpos.len() != joints {
            return Err(Error::InvalidConfig(format!(
                "{}: init_qpos has {} values, expected {}",
                self.name,
                self.init_qpos.len(),
                joints
            )));
        }
        if self.joint_damping.len() != joints {
            return Err(Error::InvalidConfig(format!(
                "{}: joint_damping has {} values, expected {}",
                self.name,
                self.joint_damping.len(),
                joints
            )));
        }
        if let Some(d) = self
            .joint_damping
            .iter()
            .find(|d| !d.is_finite() || **d < 0.0)
        {
            return Err(Error::InvalidConfig(format!(
                "{}: invalid joint damping {}",
                self.name, d
            )));
        }
        if !self.horizontal_radius.is_finite() || self.horizontal_radius < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "{}: invalid horizontal radius {}",
                self.name, self.horizontal_radius
            )));
        }
        Ok(())
    }

    pub fn num_joints(&self) -> usize {
        self.arm_type.arms().len() * self.joints_per_arm
    }

    pub fn arm_type(&self) -> ArmType {
        self.arm_type
    }

    pub fn arms(&self) -> &'static [ArmSide] {
        self.arm_type.arms()
    }

    pub fn initial_joint_pose(&self) -> &[f64] {
        &self.init_qpos
    }

    /// Initial joint positions of one arm.
    pub fn arm_joint_pose(&self, side: ArmSide) -> Option<&[f64]> {
        if self.joints_per_arm == 0 {
            return None;
        }
        let index = self.arms().iter().position(|s| *s == side)?;
        self.init_qpos
            .chunks(self.joints_per_arm)
            .nth(index)
    }

    pub fn joint_damping(&self) -> &[f64] {
        &self.joint_damping
    }

    /// Resolves the mounting offset of the base for a scene context.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownPlacementContext`] if `context` is not configured.
    /// - [`Error::MissingPlacementParameter`] if the context depends on the
    ///   table length and none was given.
    pub fn placement_offset(
        &self,
        context: &str,
        table_length: Option<f64>,
    ) -> Result<Vector3<f64>, Error> {
        self.base_xpos_offsets.resolve(context, table_length)
    }

    pub fn end_effector_identifiers(&self) -> &PerArm<String> {
        &self.eef_names
    }

    pub fn default_subcomponents(&self) -> &DefaultSubcomponents {
        &self.default_subcomponents
    }

    pub fn horizontal_reach_radius(&self) -> f64 {
        self.horizontal_radius
    }

    pub fn top_offset(&self) -> Vector3<f64> {
        Vector3::from(self.top_offset)
    }

    pub fn vertical_offset(&self) -> f64 {
        self.top_offset[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cobot_magic_is_valid() {
        let config = RobotKinematicConfig::cobot_magic();
        config.validate().unwrap();
        assert_eq!(config.num_joints(), 12);
        assert_eq!(
            config.initial_joint_pose(),
            [0.0, 0.3, 0.3, -0.6, 0.0, 0.0, 0.0, 0.3, 0.3, -0.6, 0.0, 0.0]
        );
        assert_eq!(
            config.joint_damping(),
            [0.1, 0.1, 0.1, 0.1, 0.1, 0.01, 0.1, 0.1, 0.1, 0.1, 0.1, 0.01]
        );
    }

    #[test]
    fn test_arm_joint_pose() {
        let config = RobotKinematicConfig::cobot_magic();
        assert_eq!(
            config.arm_joint_pose(ArmSide::Left),
            config.arm_joint_pose(ArmSide::Right)
        );
        assert_eq!(
            config.arm_joint_pose(ArmSide::Right).unwrap(),
            [0.0, 0.3, 0.3, -0.6, 0.0, 0.0]
        );

        let single = RobotKinematicConfig {
            arm_type: ArmType::Single,
            init_qpos: vec![0.0; 6],
            joint_damping: vec![0.1; 6],
            ..RobotKinematicConfig::cobot_magic()
        };
        single.validate().unwrap();
        assert!(single.arm_joint_pose(ArmSide::Left).is_none());
        assert!(single.arm_joint_pose(ArmSide::Right).is_some());
    }

    #[test]
    fn test_validate() {
        let mut config = RobotKinematicConfig::cobot_magic();
        config.init_qpos.pop();
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = RobotKinematicConfig::cobot_magic();
        config.joint_damping.push(0.1);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = RobotKinematicConfig::cobot_magic();
        config.joint_damping[3] = -0.1;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let mut config = RobotKinematicConfig::cobot_magic();
        config.joints_per_arm = 0;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        assert!(config.arm_joint_pose(ArmSide::Left).is_none());

        let mut config = RobotKinematicConfig::cobot_magic();
        config.horizontal_radius = f64::NAN;
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_footprint() {
        let config = RobotKinematicConfig::cobot_magic();
        assert_eq!(config.horizontal_reach_radius(), 0.5);
        assert_eq!(config.vertical_offset(), 0.0);
        assert_eq!(config.top_offset(), Vector3::zeros());
        assert_eq!(config.arm_type(), ArmType::Bimanual);
    }
}

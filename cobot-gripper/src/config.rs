use std::path::Path;

use cobot_core::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    actuation::{ActuationPolicy, COBOT_MAGIC_SPEED},
    geometry::GripperGeometry,
};

pub const COBOT_MAGIC_GRIPPER: &str = "CobotMagicGripper";
pub const COBOT_MAGIC_GRIPPER_BASE: &str = "CobotMagicGripperBase";
pub const COBOT_MAGIC_GRIPPER_ASSET: &str = "grippers/cobot_magic_gripper.xml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GripperConfig {
    pub name: String,
    /// Logical asset name, resolved by the host.
    pub asset: String,
    /// Rest position of every finger joint, one value per channel.
    pub init_qpos: Vec<f64>,
    pub policy: ActuationPolicy,
    pub geometry: GripperGeometry,
}

impl GripperConfig {
    /// Binary CobotMagic gripper: one command drives both fingers.
    pub fn cobot_magic() -> Self {
        Self {
            name: COBOT_MAGIC_GRIPPER.to_owned(),
            policy: ActuationPolicy::MirroredIncremental {
                speed: COBOT_MAGIC_SPEED,
            },
            ..Self::cobot_magic_base()
        }
    }

    /// CobotMagic gripper with one command per finger.
    pub fn cobot_magic_base() -> Self {
        Self {
            name: COBOT_MAGIC_GRIPPER_BASE.to_owned(),
            asset: COBOT_MAGIC_GRIPPER_ASSET.to_owned(),
            init_qpos: vec![0.042, 0.042],
            policy: ActuationPolicy::Direct,
            geometry: GripperGeometry::cobot_magic(),
        }
    }

    /// Returns the built-in preset registered under `name`.
    pub fn from_variant_name(name: &str) -> Result<Self, Error> {
        match name {
            COBOT_MAGIC_GRIPPER => Ok(Self::cobot_magic()),
            COBOT_MAGIC_GRIPPER_BASE => Ok(Self::cobot_magic_base()),
            _ => Err(Error::UnknownGripperVariant(name.to_owned())),
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

    pub fn channels(&self) -> usize {
        self.init_qpos.len()
    }

    pub fn dof(&self) -> usize {
        self.policy.dof(self.channels())
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.init_qpos.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "gripper {} has no joint channels",
                self.name
            )));
        }
        if let Some(speed) = self.policy.speed() {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "gripper {} has invalid speed {}",
                    self.name, speed
                )));
            }
        }
        if self.geometry.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "gripper {} has no geometry",
                self.name
            )));
        }
        Ok(())
    }
}

use cobot_core::{AssetPath, Error};
use tracing::trace;

use crate::{
    actuation::{ActuationPolicy, ActuationState},
    config::GripperConfig,
    geometry::GripperGeometry,
};

/// A gripper instance: static description plus the actuation state that
/// integrates commands across control steps.
///
/// Each instance owns its state, so grippers on different arms never
/// influence each other.
#[derive(Debug, Clone)]
pub struct GripperActuationModel {
    config: GripperConfig,
    asset: AssetPath,
    idn: String,
    state: ActuationState,
}

impl GripperActuationModel {
    pub fn new<S: ToString>(config: GripperConfig, asset: AssetPath, idn: S) -> Result<Self, Error> {
        config.validate()?;
        let state = ActuationState::zeros(config.channels());
        Ok(Self {
            config,
            asset,
            idn: idn.to_string(),
            state,
        })
    }

    /// Creates the binary CobotMagic gripper.
    pub fn cobot_magic<S: ToString>(asset: AssetPath, idn: S) -> Self {
        let config = GripperConfig::cobot_magic();
        Self {
            state: ActuationState::zeros(config.channels()),
            config,
            asset,
            idn: idn.to_string(),
        }
    }

    /// Maps an external command onto the actuation state and returns the
    /// new joint targets.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if `command` does not have exactly
    /// [`degrees_of_freedom`](Self::degrees_of_freedom) elements. The state is
    /// not modified in that case.
    pub fn format_action(&mut self, command: &[f64]) -> Result<&[f64], Error> {
        self.config.policy.apply(&mut self.state, command)?;
        trace!(
            gripper = %self.name(),
            idn = %self.idn,
            ?command,
            state = ?self.state.channels(),
            "format_action"
        );
        Ok(self.state.channels())
    }

    pub fn current_action(&self) -> &[f64] {
        self.state.channels()
    }

    /// Returns every channel to zero.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    pub fn initial_pose(&self) -> &[f64] {
        &self.config.init_qpos
    }

    /// Number of command elements [`format_action`](Self::format_action)
    /// expects. May be smaller than the number of joint channels.
    pub fn degrees_of_freedom(&self) -> usize {
        self.config.dof()
    }

    pub fn channels(&self) -> usize {
        self.config.channels()
    }

    pub fn speed(&self) -> Option<f64> {
        self.config.policy.speed()
    }

    pub fn policy(&self) -> &ActuationPolicy {
        &self.config.policy
    }

    pub fn geometry_map(&self) -> &GripperGeometry {
        &self.config.geometry
    }

    /// Geometry map with identifiers qualified by this instance's prefix.
    pub fn important_geoms(&self) -> GripperGeometry {
        self.config.geometry.with_prefix(&self.naming_prefix())
    }

    pub fn naming_prefix(&self) -> String {
        format!("gripper{}_", self.idn)
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

    pub fn config(&self) -> &GripperConfig {
        &self.config
    }
}

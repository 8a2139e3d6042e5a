use cobot_core::{
    ArmSide, ArmType, AssetResolver, Error, JointAttributeSink, PerArm, Vector3,
};
use cobot_gripper::{GripperActuationModel, GripperConfig};
use cobot_robot::{RobotKinematicConfig, RobotModel};
use tracing::debug;

/// Where the robot is being placed: a scene context key and, for
/// table-relative contexts, the table length.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneContext {
    pub key: String,
    pub table_length: Option<f64>,
}

impl SceneContext {
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self {
            key: key.into(),
            table_length: None,
        }
    }

    pub fn table(table_length: f64) -> Self {
        Self {
            key: cobot_robot::TABLE.to_owned(),
            table_length: Some(table_length),
        }
    }
}

/// A bimanual robot with one gripper per arm, placed in a scene.
#[derive(Debug)]
pub struct BimanualAssembly {
    robot: RobotModel,
    grippers: PerArm<GripperActuationModel>,
    base_offset: Vector3<f64>,
}

impl BimanualAssembly {
    /// Builds the robot and its default grippers.
    ///
    /// Nothing is written to `sink` unless every part resolves.
    pub fn try_new<R, S, I>(
        config: RobotKinematicConfig,
        idn: I,
        resolver: R,
        sink: S,
        scene: &SceneContext,
    ) -> Result<Self, Error>
    where
        R: AssetResolver,
        S: JointAttributeSink,
        I: ToString,
    {
        if config.arm_type() != ArmType::Bimanual {
            return Err(Error::InvalidConfig(format!(
                "{} is not a bimanual robot",
                config.name
            )));
        }
        let idn = idn.to_string();
        let base_offset = config.placement_offset(&scene.key, scene.table_length)?;
        let robot_asset = resolver.resolve(&config.asset)?;
        let grippers = config
            .default_subcomponents()
            .grippers
            .clone()
            .try_map(|side, name| {
                let gripper_config = GripperConfig::from_variant_name(&name)?;
                let asset = resolver.resolve(&gripper_config.asset)?;
                GripperActuationModel::new(gripper_config, asset, format!("{idn}_{side}"))
            })?;
        let robot = RobotModel::new(config, robot_asset, &idn, sink)?;
        debug!(
            robot = %robot.name(),
            %idn,
            scene = %scene.key,
            ?base_offset,
            "assembled"
        );
        Ok(Self {
            robot,
            grippers,
            base_offset,
        })
    }

    pub fn robot(&self) -> &RobotModel {
        &self.robot
    }

    pub fn gripper(&self, side: ArmSide) -> &GripperActuationModel {
        self.grippers.get(side)
    }

    pub fn base_offset(&self) -> Vector3<f64> {
        self.base_offset
    }

    /// Sends a command to the gripper on `side` only.
    pub fn format_action(&mut self, side: ArmSide, command: &[f64]) -> Result<&[f64], Error> {
        self.grippers.get_mut(side).format_action(command)
    }

    pub fn reset_grippers(&mut self) {
        for side in ArmSide::ALL {
            self.grippers.get_mut(side).reset();
        }
    }
}

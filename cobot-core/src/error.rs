use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("cobot: Dimension mismatch (dof = {}, input = {})", dof, input)]
    DimensionMismatch { dof: usize, input: usize },
    #[error("cobot: No placement context={} is found.", .0)]
    UnknownPlacementContext(String),
    #[error("cobot: Placement context={} requires a table length.", .0)]
    MissingPlacementParameter(String),
    #[error("cobot: No gripper variant={} is found.", .0)]
    UnknownGripperVariant(String),
    #[error("cobot: No arm side={} is found.", .0)]
    UnknownArmSide(String),
    #[error(
        "cobot: Length mismatch for joint attribute={} (joints = {}, values = {})",
        attribute,
        joints,
        values
    )]
    LengthMismatch {
        attribute: String,
        joints: usize,
        values: usize,
    },
    #[error("cobot: Invalid config: {}", .0)]
    InvalidConfig(String),
    #[error("cobot: No File {:?} is found ({}).", .0, .1)]
    NoFile(PathBuf, #[source] std::io::Error),
    #[error("cobot: No ParentDirectory {:?} is found.", .0)]
    NoParentDirectory(PathBuf),
    #[error("cobot: Failed to parse {:?} as toml ({}).", .0, .1)]
    TomlParseFailure(PathBuf, #[source] toml::de::Error),
}

use std::{fmt, ops::Index, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ArmSide {
    Left,
    Right,
}

impl ArmSide {
    pub const ALL: [ArmSide; 2] = [ArmSide::Left, ArmSide::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for ArmSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArmSide {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "left" => Self::Left,
            "right" => Self::Right,
            _ => return Err(Error::UnknownArmSide(s.to_owned())),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ArmType {
    Single,
    Bimanual,
}

impl ArmType {
    /// Returns the arms that a robot of this type carries.
    ///
    /// A single-armed robot only has the right arm.
    pub fn arms(self) -> &'static [ArmSide] {
        match self {
            Self::Single => &[ArmSide::Right],
            Self::Bimanual => &ArmSide::ALL,
        }
    }
}

/// One value per arm side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PerArm<T> {
    pub left: T,
    pub right: T,
}

impl<T> PerArm<T> {
    pub fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            left: value.clone(),
            right: value,
        }
    }

    pub fn get(&self, side: ArmSide) -> &T {
        match side {
            ArmSide::Left => &self.left,
            ArmSide::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: ArmSide) -> &mut T {
        match side {
            ArmSide::Left => &mut self.left,
            ArmSide::Right => &mut self.right,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArmSide, &T)> {
        [(ArmSide::Left, &self.left), (ArmSide::Right, &self.right)].into_iter()
    }

    pub fn try_map<U, E, F>(self, mut f: F) -> Result<PerArm<U>, E>
    where
        F: FnMut(ArmSide, T) -> Result<U, E>,
    {
        Ok(PerArm {
            left: f(ArmSide::Left, self.left)?,
            right: f(ArmSide::Right, self.right)?,
        })
    }
}

impl<T> Index<ArmSide> for PerArm<T> {
    type Output = T;

    fn index(&self, side: ArmSide) -> &Self::Output {
        self.get(side)
    }
}

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const LEFT_FINGER: &str = "left_finger";
pub const RIGHT_FINGER: &str = "right_finger";

/// Logical part name to the geometry identifiers the host collision system
/// knows it by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct GripperGeometry {
    parts: BTreeMap<String, Vec<String>>,
}

impl GripperGeometry {
    pub fn new<I, K, V>(parts: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator,
        V::Item: Into<String>,
    {
        Self {
            parts: parts
                .into_iter()
                .map(|(k, v)| (k.into(), v.into_iter().map(Into::into).collect()))
                .collect(),
        }
    }

    /// Finger geometries of the CobotMagic gripper.
    pub fn cobot_magic() -> Self {
        Self::new([
            (LEFT_FINGER, ["link_left_geom"]),
            (RIGHT_FINGER, ["link_right_geom"]),
        ])
    }

    pub fn part(&self, name: &str) -> Option<&[String]> {
        self.parts.get(name).map(Vec::as_slice)
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.parts
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Returns a copy with `prefix` prepended to every geometry identifier.
    /// Part names are left as they are.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self {
            parts: self
                .parts
                .iter()
                .map(|(k, v)| {
                    (
                        k.clone(),
                        v.iter().map(|g| format!("{prefix}{g}")).collect(),
                    )
                })
                .collect(),
        }
    }
}

use std::collections::BTreeMap;

use cobot_core::{Error, Vector3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const BINS: &str = "bins";
pub const EMPTY: &str = "empty";
pub const TABLE: &str = "table";

/// Offset of the robot's mounting base relative to a scene anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
#[serde(deny_unknown_fields)]
pub enum PlacementOffset {
    Fixed {
        offset: [f64; 3],
    },
    /// `intercept + slope * table_length`.
    TableRelative {
        intercept: [f64; 3],
        slope: [f64; 3],
    },
}

impl PlacementOffset {
    /// Resolves the offset. `table_length` is ignored by fixed offsets.
    pub fn resolve(&self, context: &str, table_length: Option<f64>) -> Result<Vector3<f64>, Error> {
        match self {
            Self::Fixed { offset } => Ok(Vector3::from(*offset)),
            Self::TableRelative { intercept, slope } => {
                let table_length = table_length
                    .ok_or_else(|| Error::MissingPlacementParameter(context.to_owned()))?;
                if !table_length.is_finite() {
                    return Err(Error::InvalidConfig(format!(
                        "table length for placement context={context} must be finite, got {table_length}"
                    )));
                }
                Ok(Vector3::from(*intercept) + Vector3::from(*slope) * table_length)
            }
        }
    }
}

/// Placement offset per scene context key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PlacementOffsets(BTreeMap<String, PlacementOffset>);

impl PlacementOffsets {
    pub fn new<I, K>(offsets: I) -> Self
    where
        I: IntoIterator<Item = (K, PlacementOffset)>,
        K: Into<String>,
    {
        Self(offsets.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// On a table the base recedes by half of the table length.
    pub fn cobot_magic() -> Self {
        Self::new([
            (
                BINS,
                PlacementOffset::Fixed {
                    offset: [-0.5, -0.1, 0.0],
                },
            ),
            (
                EMPTY,
                PlacementOffset::Fixed {
                    offset: [-0.29, 0.0, 0.0],
                },
            ),
            (
                TABLE,
                PlacementOffset::TableRelative {
                    intercept: [-0.26, 0.0, 0.0],
                    slope: [-0.5, 0.0, 0.0],
                },
            ),
        ])
    }

    pub fn get(&self, context: &str) -> Option<&PlacementOffset> {
        self.0.get(context)
    }

    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn resolve(&self, context: &str, table_length: Option<f64>) -> Result<Vector3<f64>, Error> {
        self.get(context)
            .ok_or_else(|| Error::UnknownPlacementContext(context.to_owned()))?
            .resolve(context, table_length)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn test_fixed_ignores_table_length() {
        let offset = PlacementOffset::Fixed {
            offset: [1.0, 2.0, 3.0],
        };
        assert_eq!(
            offset.resolve("a", None).unwrap(),
            offset.resolve("a", Some(4.0)).unwrap()
        );
    }

    #[test]
    fn test_table_relative() {
        let offsets = PlacementOffsets::cobot_magic();
        for (length, x) in [(0.0, -0.26), (0.8, -0.66), (1.0, -0.76), (2.0, -1.26)] {
            let v = offsets.resolve(TABLE, Some(length)).unwrap();
            assert_approx_eq!(v.x, x);
            assert_approx_eq!(v.y, 0.0);
            assert_approx_eq!(v.z, 0.0);
        }
    }

    #[test]
    fn test_table_requires_length() {
        let offsets = PlacementOffsets::cobot_magic();
        assert!(matches!(
            offsets.resolve(TABLE, None),
            Err(Error::MissingPlacementParameter(c)) if c == TABLE
        ));
        assert!(matches!(
            offsets.resolve(TABLE, Some(f64::INFINITY)),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unknown_context() {
        assert!(matches!(
            PlacementOffsets::cobot_magic().resolve("kitchen", Some(1.0)),
            Err(Error::UnknownPlacementContext(c)) if c == "kitchen"
        ));
        assert!(PlacementOffsets::default().resolve(BINS, None).is_err());
    }

    #[test]
    fn test_contexts() {
        assert_eq!(
            PlacementOffsets::cobot_magic().contexts().collect::<Vec<_>>(),
            vec![BINS, EMPTY, TABLE]
        );
    }

    #[test]
    fn test_deserialize() {
        let offset: PlacementOffset =
            serde_json::from_str(r#"{"type":"Fixed","offset":[-0.29,0.0,0.0]}"#).unwrap();
        assert_eq!(offset, *PlacementOffsets::cobot_magic().get(EMPTY).unwrap());
        assert!(serde_json::from_str::<PlacementOffset>(r#"{"type":"Lambda"}"#).is_err());
    }
}

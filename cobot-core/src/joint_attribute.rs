use std::fmt;

use auto_impl::auto_impl;
use tracing::debug;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum JointAttribute {
    Damping,
}

impl JointAttribute {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Damping => "damping",
        }
    }
}

impl fmt::Display for JointAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Receiver of per-joint attribute values, implemented by the host that
/// owns the robot description.
#[auto_impl(&mut, Box)]
pub trait JointAttributeSink {
    /// Returns names of joints that the values are written to, in order.
    fn joint_names(&self) -> Vec<String>;

    /// Writes one value per joint.
    fn set_joint_attribute(
        &mut self,
        attribute: JointAttribute,
        values: &[f64],
    ) -> Result<(), Error>;
}

/// Records every write, for tests and dry runs.
#[derive(Debug, Default)]
pub struct DummyJointAttributeSink {
    joint_names: Vec<String>,
    pub writes: Vec<(JointAttribute, Vec<f64>)>,
}

impl DummyJointAttributeSink {
    pub fn new(joint_names: Vec<String>) -> Self {
        Self {
            joint_names,
            writes: Vec::new(),
        }
    }

    /// Returns the values most recently written for `attribute`.
    pub fn attribute(&self, attribute: JointAttribute) -> Option<&[f64]> {
        self.writes
            .iter()
            .rev()
            .find(|(a, _)| *a == attribute)
            .map(|(_, values)| values.as_slice())
    }
}

impl JointAttributeSink for DummyJointAttributeSink {
    fn joint_names(&self) -> Vec<String> {
        self.joint_names.clone()
    }

    fn set_joint_attribute(
        &mut self,
        attribute: JointAttribute,
        values: &[f64],
    ) -> Result<(), Error> {
        if values.len() != self.joint_names.len() {
            return Err(Error::LengthMismatch {
                attribute: attribute.to_string(),
                joints: self.joint_names.len(),
                values: values.len(),
            });
        }
        debug!(%attribute, ?values, "set joint attribute");
        self.writes.push((attribute, values.to_vec()));
        Ok(())
    }
}

use std::ops::RangeInclusive;

use cobot_core::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Bound of every actuation channel, in normalized joint position.
pub const ACTUATION_LIMIT: RangeInclusive<f64> = -1.0..=1.0;

/// Per-step increment of the CobotMagic gripper.
pub const COBOT_MAGIC_SPEED: f64 = 0.2;

/// Current joint targets of one gripper.
///
/// Every channel stays inside [`ACTUATION_LIMIT`] after each update.
#[derive(Debug, Clone, PartialEq)]
pub struct ActuationState {
    channels: Vec<f64>,
}

impl ActuationState {
    pub fn zeros(channels: usize) -> Self {
        Self {
            channels: vec![0.0; channels],
        }
    }

    pub fn channels(&self) -> &[f64] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn reset(&mut self) {
        self.channels.iter_mut().for_each(|c| *c = 0.0);
    }

    fn clamp(&mut self) {
        for channel in &mut self.channels {
            if !ACTUATION_LIMIT.contains(&*channel) {
                debug!(
                    "Out of limit: channel={}, limit={:?}",
                    channel, ACTUATION_LIMIT
                );
                *channel = channel.clamp(*ACTUATION_LIMIT.start(), *ACTUATION_LIMIT.end());
            }
        }
    }
}

/// How an external command is mapped onto the actuation state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type")]
#[serde(deny_unknown_fields)]
pub enum ActuationPolicy {
    /// One command element per channel, written through as the new target.
    Direct,
    /// A single command whose sign moves every channel by `speed`, so that
    /// both fingers always open and close together.
    MirroredIncremental { speed: f64 },
}

impl ActuationPolicy {
    /// Number of command elements expected for a gripper with `channels`
    /// joint channels.
    pub fn dof(&self, channels: usize) -> usize {
        match self {
            Self::Direct => channels,
            Self::MirroredIncremental { .. } => 1,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self {
            Self::Direct => None,
            Self::MirroredIncremental { speed } => Some(*speed),
        }
    }

    /// Applies `command` to `state` and clamps the result.
    ///
    /// The state is left untouched when the command has the wrong length.
    pub fn apply(&self, state: &mut ActuationState, command: &[f64]) -> Result<(), Error> {
        let dof = self.dof(state.len());
        if command.len() != dof {
            return Err(Error::DimensionMismatch {
                dof,
                input: command.len(),
            });
        }
        match self {
            Self::Direct => {
                for (channel, c) in state.channels.iter_mut().zip(command) {
                    *channel = if c.is_nan() { 0.0 } else { *c };
                }
            }
            Self::MirroredIncremental { speed } => {
                let step = sign(command[0]) * speed;
                for channel in &mut state.channels {
                    *channel += step;
                }
            }
        }
        state.clamp();
        Ok(())
    }
}

/// Sign of `v` as -1, 0 or 1. Unlike [`f64::signum`], zero maps to zero;
/// NaN is treated as zero as well.
fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    const MIRRORED: ActuationPolicy = ActuationPolicy::MirroredIncremental {
        speed: COBOT_MAGIC_SPEED,
    };

    #[test]
    fn test_sign() {
        assert_eq!(sign(0.3), 1.0);
        assert_eq!(sign(-7.0), -1.0);
        assert_eq!(sign(0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(f64::NAN), 0.0);
    }

    #[test]
    fn test_dof() {
        assert_eq!(MIRRORED.dof(2), 1);
        assert_eq!(ActuationPolicy::Direct.dof(2), 2);
        assert_eq!(MIRRORED.speed(), Some(COBOT_MAGIC_SPEED));
        assert_eq!(ActuationPolicy::Direct.speed(), None);
    }

    #[test]
    fn test_mirrored_ignores_magnitude() {
        let mut small = ActuationState::zeros(2);
        let mut large = ActuationState::zeros(2);
        MIRRORED.apply(&mut small, &[0.01]).unwrap();
        MIRRORED.apply(&mut large, &[25.0]).unwrap();
        assert_eq!(small, large);
        assert_approx_eq!(small.channels()[0], 0.2);
        assert_approx_eq!(small.channels()[1], 0.2);
    }

    #[test]
    fn test_mirrored_clamps_low() {
        let mut state = ActuationState::zeros(2);
        for _ in 0..20 {
            MIRRORED.apply(&mut state, &[-1.0]).unwrap();
        }
        assert_eq!(state.channels(), [-1.0, -1.0]);
    }

    #[test]
    fn test_direct_nan_is_zero() {
        let mut state = ActuationState::zeros(2);
        ActuationPolicy::Direct
            .apply(&mut state, &[f64::NAN, 0.4])
            .unwrap();
        assert_eq!(state.channels()[0], 0.0);
        assert_approx_eq!(state.channels()[1], 0.4);
    }

    #[test]
    fn test_direct_clamps_command() {
        let mut state = ActuationState::zeros(2);
        ActuationPolicy::Direct
            .apply(&mut state, &[0.5, -3.0])
            .unwrap();
        assert_approx_eq!(state.channels()[0], 0.5);
        assert_eq!(state.channels()[1], -1.0);
    }

    #[test]
    fn test_wrong_length_leaves_state() {
        let mut state = ActuationState::zeros(2);
        MIRRORED.apply(&mut state, &[1.0]).unwrap();
        let before = state.clone();
        assert!(matches!(
            MIRRORED.apply(&mut state, &[1.0, 1.0]),
            Err(Error::DimensionMismatch { dof: 1, input: 2 })
        ));
        assert!(matches!(
            ActuationPolicy::Direct.apply(&mut state, &[1.0]),
            Err(Error::DimensionMismatch { dof: 2, input: 1 })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset() {
        let mut state = ActuationState::zeros(2);
        MIRRORED.apply(&mut state, &[1.0]).unwrap();
        state.reset();
        assert_eq!(state, ActuationState::zeros(2));
    }

    #[test]
    fn test_policy_deserialize() {
        let policy: ActuationPolicy = from_json(r#"{"type":"MirroredIncremental","speed":0.2}"#);
        assert_eq!(policy, MIRRORED);
        let policy: ActuationPolicy = from_json(r#"{"type":"Direct"}"#);
        assert_eq!(policy, ActuationPolicy::Direct);
    }

    fn from_json(s: &str) -> ActuationPolicy {
        serde_json::from_str(s).unwrap()
    }
}

use serde::{Deserialize, Serialize};

use crate::utils::constants::{PITCH_STEP, ROLL_STEP, THROTTLE_STEP, YAW_STEP};

/// One tick's worth of control deltas, consumed by [`Simulator::step`].
///
/// Values are additive offsets, not absolute settings; the simulator clamps
/// the resulting state, not the deltas.
///
/// [`Simulator::step`]: crate::sim::Simulator::step
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    /// Throttle change, applied to the [0, 1] setting
    pub throttle_delta: f64,
    /// Pitch change [rad]
    pub pitch_delta: f64,
    /// Yaw change [rad]
    pub yaw_delta: f64,
    /// Roll change [rad]
    pub roll_delta: f64,
}

impl ControlInput {
    /// Parse a free-form command line into a combined control input.
    ///
    /// Tokens are whitespace-separated and compose additively ("w w" pitches
    /// up twice as hard). Unrecognized tokens are ignored.
    pub fn parse(line: &str) -> Self {
        let mut input = Self::default();

        for token in line.split_whitespace() {
            match token {
                "+" | "t+" | "throttle+" => input.throttle_delta += THROTTLE_STEP,
                "-" | "t-" | "throttle-" => input.throttle_delta -= THROTTLE_STEP,
                "w" | "pitch+" | "p+" => input.pitch_delta += PITCH_STEP,
                "s" | "pitch-" | "p-" => input.pitch_delta -= PITCH_STEP,
                "a" | "yaw-" | "y-" => input.yaw_delta -= YAW_STEP,
                "d" | "yaw+" | "y+" => input.yaw_delta += YAW_STEP,
                "q" | "roll-" | "r-" => input.roll_delta -= ROLL_STEP,
                "e" | "roll+" | "r+" => input.roll_delta += ROLL_STEP,
                _ => {}
            }
        }

        input
    }
}

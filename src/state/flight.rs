use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Full state of the craft, advanced once per tick by the simulator.
///
/// Attitude is stored as raw yaw/pitch/roll angles rather than a quaternion;
/// the simplified force model only ever needs the composed forward/up axes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FlightState {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Heading angle [rad], unbounded
    pub yaw: f64,

    /// Nose-up angle [rad], held within +/-45 degrees
    pub pitch: f64,

    /// Bank angle [rad], held within +/-80 degrees
    pub roll: f64,

    /// Throttle setting in [0, 1]; forced to 0 once fuel runs out
    pub throttle: f64,

    /// Remaining fuel [units], never negative
    pub fuel: f64,

    /// Accumulated score, 100 per ring passed
    pub score: u32,
}

impl Default for FlightState {
    /// Canonical launch state: 80 m up, 30 m/s forward, 40% throttle,
    /// a full 120-unit tank and no score.
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 80.0, 0.0),
            velocity: Vector3::new(0.0, 0.0, 30.0),
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            throttle: 0.4,
            fuel: 120.0,
            score: 0,
        }
    }
}

impl FlightState {
    /// Create a state at a specific position, otherwise default
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Current speed magnitude [m/s]
    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

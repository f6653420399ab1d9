use serde::{Deserialize, Serialize};

use crate::utils::constants::GRAVITY;
use crate::utils::SimError;

/// Constants for the simplified quadratic-drag/lift force model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Craft mass [kg]
    pub mass: f64,
    /// Thrust at full throttle [N]
    pub thrust_power: f64,
    /// Quadratic drag coefficient, opposes velocity
    pub drag_coefficient: f64,
    /// Lift coefficient, scales with speed^2 along the body up axis
    pub lift_coefficient: f64,
    /// Gravitational acceleration [m/s^2]
    pub gravity: f64,
    /// Fuel burned per second at full throttle [units/s]
    pub fuel_burn_per_sec: f64,
    /// Induced yaw rate per radian of roll, approximating a coordinated turn
    pub roll_yaw_coupling: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            mass: 750.0,
            thrust_power: 26000.0,
            drag_coefficient: 0.04,
            lift_coefficient: 0.018,
            gravity: GRAVITY,
            fuel_burn_per_sec: 0.25,
            roll_yaw_coupling: 0.35,
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.mass <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "mass must be positive, got {}",
                self.mass
            )));
        }
        if self.fuel_burn_per_sec < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "fuel burn rate must be non-negative, got {}",
                self.fuel_burn_per_sec
            )));
        }
        Ok(())
    }
}

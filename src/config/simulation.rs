use serde::{Deserialize, Serialize};

use crate::config::PhysicsConfig;
use crate::rings::RingFieldConfig;
use crate::utils::SimError;

/// Top-level simulation configuration: force model, ring field, tick length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub physics: PhysicsConfig,
    pub rings: RingFieldConfig,
    /// Seconds of simulated time per tick
    pub time_step: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            rings: RingFieldConfig::default(),
            time_step: 0.1,
        }
    }
}

impl SimConfig {
    pub fn load(path: &str) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.time_step <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "time step must be positive, got {}",
                self.time_step
            )));
        }
        self.physics.validate()?;
        self.rings.validate()?;
        Ok(())
    }
}

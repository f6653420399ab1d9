use log::{debug, info};
use nalgebra::Vector3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::rings::Ring;
use crate::utils::SimError;

/// Configuration for the randomized ring field laid out along the +Z travel
/// axis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingFieldConfig {
    /// Number of rings to generate
    pub count: usize,
    /// Distance between consecutive rings along the travel axis (m).
    pub spacing: f64,
    /// Rings are offset laterally by a uniform draw from [-lateral_range, lateral_range] (m).
    pub lateral_range: f64,
    /// Minimum ring altitude (m).
    pub altitude_min: f64,
    /// Maximum ring altitude (m).
    pub altitude_max: f64,
    /// Passage radius shared by every ring (m).
    pub radius: f64,
    /// Seed for the random number generator; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RingFieldConfig {
    /// Default field: 6 rings every 320 m, lateral scatter within 220 m,
    /// altitude between 40 and 220 m, 45 m radius, entropy-seeded.
    fn default() -> Self {
        Self {
            count: 6,
            spacing: 320.0,
            lateral_range: 220.0,
            altitude_min: 40.0,
            altitude_max: 220.0,
            radius: 45.0,
            seed: None,
        }
    }
}

impl RingFieldConfig {
    pub fn with_count(count: usize) -> Self {
        Self {
            count,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if self.spacing <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "ring spacing must be positive, got {}",
                self.spacing
            )));
        }
        if self.radius <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "ring radius must be positive, got {}",
                self.radius
            )));
        }
        if self.lateral_range < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "lateral range must be non-negative, got {}",
                self.lateral_range
            )));
        }
        if self.altitude_min > self.altitude_max {
            return Err(SimError::InvalidConfig(format!(
                "altitude range is inverted: min {} > max {}",
                self.altitude_min, self.altitude_max
            )));
        }
        Ok(())
    }

    /// Generate the ring field. Ring `i` (1-indexed) sits at `spacing * i`
    /// along the travel axis with randomized lateral offset and altitude.
    pub fn generate(&self) -> Result<Vec<Ring>, SimError> {
        self.validate()?;

        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        info!("Generating {} rings (seed: {:?})", self.count, self.seed);

        let mut rings = Vec::with_capacity(self.count);
        for i in 0..self.count {
            let position = Vector3::new(
                rng.gen_range(-self.lateral_range..=self.lateral_range),
                rng.gen_range(self.altitude_min..=self.altitude_max),
                self.spacing * (i as f64 + 1.0),
            );
            debug!("Ring {} at {:?}", i + 1, position);
            rings.push(Ring::new(position, self.radius));
        }

        Ok(rings)
    }
}

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A scoring ring. Created once at setup; `passed` flips to true the first
/// time the craft comes within `radius` of the center and never resets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ring {
    /// Ring center in world space [m]
    pub position: Vector3<f64>,

    /// Passage radius [m]
    pub radius: f64,

    /// Whether the ring has already been scored
    pub passed: bool,
}

impl Ring {
    pub fn new(position: Vector3<f64>, radius: f64) -> Self {
        Self {
            position,
            radius,
            passed: false,
        }
    }

    /// Whether a point lies within the ring's passage radius
    pub fn contains(&self, point: &Vector3<f64>) -> bool {
        (point - self.position).norm() <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_boundary() {
        let ring = Ring::new(Vector3::new(0.0, 100.0, 320.0), 45.0);

        assert!(ring.contains(&Vector3::new(0.0, 100.0, 320.0)));
        // Exactly on the radius still counts
        assert!(ring.contains(&Vector3::new(45.0, 100.0, 320.0)));
        assert!(!ring.contains(&Vector3::new(45.001, 100.0, 320.0)));
    }
}

use nalgebra::{Rotation3, Vector3};
use std::f64::consts::PI;

use crate::utils::constants::NORMALIZE_EPSILON;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Normalize a vector, returning the zero vector for near-zero inputs
/// instead of dividing by a vanishing length.
pub fn normalize_or_zero(v: &Vector3<f64>) -> Vector3<f64> {
    let len = v.norm();
    if len < NORMALIZE_EPSILON {
        Vector3::zeros()
    } else {
        v / len
    }
}

/// Rotate a vector about the world X axis by a signed angle
pub fn rotate_x(v: &Vector3<f64>, radians: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), radians) * v
}

/// Rotate a vector about the world Y axis by a signed angle
pub fn rotate_y(v: &Vector3<f64>, radians: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), radians) * v
}

/// Rotate a vector about the world Z axis by a signed angle
pub fn rotate_z(v: &Vector3<f64>, radians: f64) -> Vector3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), radians) * v
}

/// Body forward axis (+Z reference) for a yaw/pitch/roll attitude.
///
/// Rotations are composed roll, then pitch, then yaw. The order is load-bearing:
/// rotations do not commute and the flight model depends on this one.
pub fn orientation_forward(yaw: f64, pitch: f64, roll: f64) -> Vector3<f64> {
    let forward = Vector3::new(0.0, 0.0, 1.0);
    let forward = rotate_z(&forward, roll);
    let forward = rotate_x(&forward, pitch);
    let forward = rotate_y(&forward, yaw);
    normalize_or_zero(&forward)
}

/// Body up axis (+Y reference) for a yaw/pitch/roll attitude.
///
/// Same roll -> pitch -> yaw composition as [`orientation_forward`].
pub fn orientation_up(yaw: f64, pitch: f64, roll: f64) -> Vector3<f64> {
    let up = Vector3::new(0.0, 1.0, 0.0);
    let up = rotate_z(&up, roll);
    let up = rotate_x(&up, pitch);
    let up = rotate_y(&up, yaw);
    normalize_or_zero(&up)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_near_zero_returns_zero() {
        let tiny = Vector3::new(1e-9, -1e-9, 1e-8);
        assert_eq!(normalize_or_zero(&tiny), Vector3::zeros());
        assert_eq!(normalize_or_zero(&Vector3::zeros()), Vector3::zeros());
    }

    #[test]
    fn test_normalize_unit_vector_is_unit() {
        let v = Vector3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(normalize_or_zero(&v).norm(), 1.0, epsilon = 1e-12);

        let v = Vector3::new(3.0, -4.0, 12.0);
        assert_relative_eq!(normalize_or_zero(&v).norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_axis_rotations() {
        let half_pi = PI / 2.0;

        // +Z rotated about X by 90 degrees lands on -Y... check against the
        // standard right-handed rotation matrices.
        let v = Vector3::new(0.0, 0.0, 1.0);
        let r = rotate_x(&v, half_pi);
        assert_relative_eq!(r.y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(r.z, 0.0, epsilon = 1e-12);

        let v = Vector3::new(0.0, 0.0, 1.0);
        let r = rotate_y(&v, half_pi);
        assert_relative_eq!(r.x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.z, 0.0, epsilon = 1e-12);

        let v = Vector3::new(1.0, 0.0, 0.0);
        let r = rotate_z(&v, half_pi);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vector3::new(1.5, -2.0, 0.75);
        for angle in [-2.2, -0.5, 0.0, 0.3, 1.9] {
            assert_relative_eq!(rotate_x(&v, angle).norm(), v.norm(), epsilon = 1e-12);
            assert_relative_eq!(rotate_y(&v, angle).norm(), v.norm(), epsilon = 1e-12);
            assert_relative_eq!(rotate_z(&v, angle).norm(), v.norm(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_orientation_identity() {
        let forward = orientation_forward(0.0, 0.0, 0.0);
        let up = orientation_up(0.0, 0.0, 0.0);
        assert_relative_eq!(forward.z, 1.0, epsilon = 1e-12);
        assert_relative_eq!(up.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_orientation_vectors_are_unit_length() {
        for yaw in [-3.0, 0.0, 0.7, 6.9] {
            for pitch in [-0.7, 0.0, 0.7] {
                for roll in [-1.3, 0.0, 1.3] {
                    let forward = orientation_forward(yaw, pitch, roll);
                    let up = orientation_up(yaw, pitch, roll);
                    assert_relative_eq!(forward.norm(), 1.0, epsilon = 1e-9);
                    assert_relative_eq!(up.norm(), 1.0, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_orientation_rotation_order() {
        // With 90 degrees of roll, a pitch command rotates the +Z reference
        // about world X before yaw is applied. Composing in a different order
        // gives a different vector, so pin the roll -> pitch -> yaw result.
        let pitch = deg_to_rad(30.0);
        let roll = deg_to_rad(90.0);
        let forward = orientation_forward(0.0, pitch, roll);

        let expected = rotate_x(&rotate_z(&Vector3::new(0.0, 0.0, 1.0), roll), pitch);
        assert_relative_eq!(forward.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(forward.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(forward.z, expected.z, epsilon = 1e-12);
    }
}

use std::f64::consts::PI;

pub const GRAVITY: f64 = 9.81; // m/s^2

// Attitude limits
pub const MAX_PITCH: f64 = 45.0 * PI / 180.0; // rad
pub const MAX_ROLL: f64 = 80.0 * PI / 180.0; // rad

// Per-token control increments
pub const THROTTLE_STEP: f64 = 0.04;
pub const PITCH_STEP: f64 = 0.8 * PI / 180.0; // rad
pub const YAW_STEP: f64 = 1.2 * PI / 180.0; // rad
pub const ROLL_STEP: f64 = 1.4 * PI / 180.0; // rad

// Scoring
pub const RING_SCORE: u32 = 100;

// Vectors shorter than this normalize to zero
pub const NORMALIZE_EPSILON: f64 = 1e-6;

use log::{debug, info};
use nalgebra::Vector3;

use crate::config::{PhysicsConfig, SimConfig};
use crate::rings::{Ring, RingFieldConfig};
use crate::state::{ControlInput, FlightState};
use crate::utils::constants::{MAX_PITCH, MAX_ROLL, RING_SCORE};
use crate::utils::{orientation_forward, orientation_up, SimError};

/// The simulation engine. Owns the single [`FlightState`] and the ring
/// collection; the only way to mutate either is [`Simulator::step`].
///
/// Each call to `step` runs the fixed phase order: apply control input,
/// integrate forces over `dt`, evaluate ring passage, clamp to the ground
/// plane. The order is part of the contract; a ring dipping below the ground
/// is still checked against the pre-clamp position.
#[derive(Debug, Clone)]
pub struct Simulator {
    state: FlightState,
    rings: Vec<Ring>,
    physics: PhysicsConfig,
}

impl Simulator {
    /// Create a simulator with `ring_count` entropy-seeded rings and the
    /// default force model.
    pub fn new(ring_count: usize) -> Result<Self, SimError> {
        let config = SimConfig {
            rings: RingFieldConfig::with_count(ring_count),
            ..Default::default()
        };
        Self::from_config(&config)
    }

    /// Create a simulator from an explicit configuration. Seeded ring fields
    /// make runs reproducible for tests.
    pub fn from_config(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            state: FlightState::default(),
            rings: config.rings.generate()?,
            physics: config.physics.clone(),
        })
    }

    /// Read-only view of the craft state
    pub fn state(&self) -> &FlightState {
        &self.state
    }

    /// Read-only view of the ring field
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Advance the simulation by one tick of `dt` seconds.
    pub fn step(&mut self, input: &ControlInput, dt: f64) {
        self.apply_input(input);
        self.integrate(dt);
        self.check_rings();
        self.clamp_to_ground();
    }

    fn apply_input(&mut self, input: &ControlInput) {
        let state = &mut self.state;
        state.throttle = (state.throttle + input.throttle_delta).clamp(0.0, 1.0);
        state.pitch = (state.pitch + input.pitch_delta).clamp(-MAX_PITCH, MAX_PITCH);
        state.yaw += input.yaw_delta;
        state.roll = (state.roll + input.roll_delta).clamp(-MAX_ROLL, MAX_ROLL);
    }

    fn integrate(&mut self, dt: f64) {
        let physics = &self.physics;
        let state = &mut self.state;

        let forward = orientation_forward(state.yaw, state.pitch, state.roll);
        let up = orientation_up(state.yaw, state.pitch, state.roll);

        let thrust = forward * (physics.thrust_power * state.throttle);
        let speed = state.velocity.norm();
        let drag = state.velocity * (-physics.drag_coefficient * speed);
        let lift = up * (physics.lift_coefficient * speed * speed);
        let gravity = Vector3::new(0.0, -physics.mass * physics.gravity, 0.0);

        // Banked turn: roll feeds a gradual heading change. The forward/up
        // axes above were taken from the pre-coupling yaw; that one-step lag
        // is part of the flight model, not an ordering bug.
        state.yaw += state.roll * physics.roll_yaw_coupling * dt;

        let acceleration = (thrust + drag + lift + gravity) / physics.mass;
        state.velocity += acceleration * dt;
        state.position += state.velocity * dt;

        let burn = physics.fuel_burn_per_sec * state.throttle * dt;
        state.fuel = (state.fuel - burn).max(0.0);
        if state.fuel <= 0.0 {
            // Tank is dry; the throttle stays locked at zero from here on.
            state.throttle = 0.0;
        }

        debug!(
            "Integrated dt={}: position={:?}, speed={:.2}, fuel={:.2}",
            dt, state.position, state.velocity.norm(), state.fuel
        );
    }

    fn check_rings(&mut self) {
        for ring in &mut self.rings {
            if ring.passed {
                continue;
            }
            if ring.contains(&self.state.position) {
                ring.passed = true;
                self.state.score += RING_SCORE;
                info!(
                    "Ring at {:?} passed, score now {}",
                    ring.position, self.state.score
                );
            }
        }
    }

    fn clamp_to_ground(&mut self) {
        let state = &mut self.state;
        if state.position.y < 0.0 {
            state.position.y = 0.0;
            if state.velocity.y < 0.0 {
                // Bounce with most of the energy gone.
                state.velocity.y *= -0.2;
            }
        }
    }
}

mod physics;
mod simulation;

pub use physics::PhysicsConfig;
pub use simulation::SimConfig;

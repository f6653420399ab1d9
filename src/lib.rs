pub mod config;
pub mod rings;
pub mod sim;
pub mod state;
pub mod utils;

pub use config::{PhysicsConfig, SimConfig};
pub use rings::{Ring, RingFieldConfig};
pub use sim::Simulator;
pub use state::{ControlInput, FlightState};
pub use utils::SimError;

mod flight;
mod input;

pub use flight::FlightState;
pub use input::ControlInput;

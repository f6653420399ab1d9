mod assertions;
mod helpers;

pub use assertions::{assert_flight_state_valid, assert_score_consistent};
pub use helpers::*;

use ringflight::utils::{MAX_PITCH, MAX_ROLL};
use ringflight::{FlightState, Ring};

/// Assert that a flight state is finite and inside its documented bounds
#[track_caller]
pub fn assert_flight_state_valid(state: &FlightState) {
    assert!(state.position.x.is_finite(), "Position x is not finite");
    assert!(state.position.y.is_finite(), "Position y is not finite");
    assert!(state.position.z.is_finite(), "Position z is not finite");

    assert!(state.velocity.x.is_finite(), "Velocity x is not finite");
    assert!(state.velocity.y.is_finite(), "Velocity y is not finite");
    assert!(state.velocity.z.is_finite(), "Velocity z is not finite");

    assert!(state.yaw.is_finite(), "Yaw is not finite");

    assert!(
        (0.0..=1.0).contains(&state.throttle),
        "Throttle {} outside [0, 1]",
        state.throttle
    );
    assert!(
        state.pitch.abs() <= MAX_PITCH,
        "Pitch {} outside bounds",
        state.pitch
    );
    assert!(
        state.roll.abs() <= MAX_ROLL,
        "Roll {} outside bounds",
        state.roll
    );
    assert!(state.fuel >= 0.0, "Fuel {} is negative", state.fuel);
    assert!(state.position.y >= 0.0, "Craft below the ground plane");
}

/// Assert that the score matches the passed-ring count at 100 apiece
#[track_caller]
pub fn assert_score_consistent(state: &FlightState, rings: &[Ring]) {
    let passed = rings.iter().filter(|r| r.passed).count() as u32;
    assert_eq!(state.score, passed * 100, "Score out of sync with rings");
    assert_eq!(state.score % 100, 0, "Score is not a multiple of 100");
}

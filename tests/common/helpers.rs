use ringflight::{ControlInput, RingFieldConfig, SimConfig, Simulator};

pub const DT: f64 = 0.1;

/// Build a simulator with a reproducible ring field
pub fn seeded_simulator(ring_count: usize, seed: u64) -> Simulator {
    let config = SimConfig {
        rings: RingFieldConfig {
            count: ring_count,
            seed: Some(seed),
            ..Default::default()
        },
        ..Default::default()
    };
    Simulator::from_config(&config).expect("valid test config")
}

/// Step the simulator `n` times with the same input
pub fn run_steps(simulator: &mut Simulator, input: &ControlInput, n: usize) {
    for _ in 0..n {
        simulator.step(input, DT);
    }
}

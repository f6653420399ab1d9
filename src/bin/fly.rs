use std::io::{self, BufRead, Write};

use ringflight::utils::{normalize_or_zero, orientation_forward, rad_to_deg};
use ringflight::{ControlInput, SimError, Simulator};

const DT: f64 = 0.1; // seconds per tick
const RING_COUNT: usize = 6;

fn print_hud(simulator: &Simulator, tick: u64) {
    let state = simulator.state();
    let remaining = simulator.rings().iter().filter(|r| !r.passed).count();

    // Speed along the body forward axis, for a sense of how coordinated the
    // flight is.
    let forward = orientation_forward(state.yaw, state.pitch, state.roll);
    let forward_speed = normalize_or_zero(&state.velocity).dot(&forward) * state.speed();

    println!("\n=== tick {} ({:.1}s) ===", tick, DT);
    println!(
        "position (x,y,z): {:.2}, {:.2}, {:.2} m",
        state.position.x, state.position.y, state.position.z
    );
    println!(
        "speed: {:.2} m/s  (forward={:.2})",
        state.speed(),
        forward_speed
    );
    println!(
        "yaw/pitch/roll (deg): {:.2} / {:.2} / {:.2}",
        rad_to_deg(state.yaw),
        rad_to_deg(state.pitch),
        rad_to_deg(state.roll)
    );
    println!(
        "throttle: {:.0}%  fuel: {:.2} u",
        state.throttle * 100.0,
        state.fuel
    );
    println!("score: {}  rings left: {}", state.score, remaining);
}

fn print_help() {
    println!("\ncommands (several may be combined on one line):");
    println!("  + or t+ or throttle+ : increase throttle");
    println!("  - or t- or throttle- : decrease throttle");
    println!("  w / pitch+ / p+      : nose up");
    println!("  s / pitch- / p-      : nose down");
    println!("  a / yaw- / y-        : turn left");
    println!("  d / yaw+ / y+        : turn right");
    println!("  q / roll- / r-       : roll left");
    println!("  e / roll+ / r+       : roll right");
    println!("  help                 : show this again");
    println!("  exit                 : quit immediately");
}

fn main() -> Result<(), SimError> {
    env_logger::init();

    let mut simulator = Simulator::new(RING_COUNT)?;

    println!("ringflight: a turn-stepped flight simulator");
    println!("fly through the rings before the fuel runs out.");
    print_help();

    let stdin = io::stdin();
    let mut tick = 0u64;

    while simulator.state().fuel > 0.0 {
        print_hud(&simulator, tick);
        print!("input: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line == "exit" {
            break;
        }
        if line == "help" {
            print_help();
            continue;
        }

        let input = ControlInput::parse(line);
        simulator.step(&input, DT);
        tick += 1;
    }

    println!("\nflight over, final score: {}", simulator.state().score);
    Ok(())
}

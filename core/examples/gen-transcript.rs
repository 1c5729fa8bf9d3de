//! Generates replay JSON files for the replay CLI.
//!
//! Usage:
//!   cargo run -p slapper-core --example gen-transcript -- [idle|brawl|fall] > replay.json

use slapper_core::*;

const TICKS: u32 = 1200;
const DT: f64 = 1.6;

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "idle".to_string());

    let config = default_config();
    let right = PlayerInput { buttons: button::RIGHT };
    let left = PlayerInput { buttons: button::LEFT };

    let transcript: Vec<TickInput> = match mode.as_str() {
        "idle" => {
            // Both players drop onto the platform and stand there
            vec![TickInput { dt: DT, inputs: [NULL_INPUT; 2] }; TICKS as usize]
        }
        "brawl" => {
            // Players charge each other and hop, bouncing off on contact
            (0..TICKS)
                .map(|tick| {
                    let p0 = if tick % 90 < 60 { left } else { PlayerInput { buttons: button::JUMP } };
                    let p1 = if tick % 70 < 50 {
                        right
                    } else {
                        PlayerInput { buttons: button::RIGHT | button::JUMP }
                    };
                    TickInput { dt: DT, inputs: [p0, p1] }
                })
                .collect()
        }
        "fall" => {
            // Player 2 keeps running off the left edge
            vec![TickInput { dt: DT, inputs: [NULL_INPUT, left] }; TICKS as usize]
        }
        _ => {
            eprintln!("Unknown mode: {}. Use 'idle', 'brawl', or 'fall'", mode);
            std::process::exit(1);
        }
    };

    let input = ReplayInput { config, transcript };

    // Verify by running the sim
    match run_replay(&input) {
        Ok(run) => {
            eprintln!("=== Sim result ({} mode) ===", mode);
            eprintln!("Final tick: {}", run.output.ticks);
            eprintln!("Scores: P1={}, P2={}", run.output.scores[0], run.output.scores[1]);
            eprintln!("Falls: P1={}, P2={}", run.output.falls[0], run.output.falls[1]);
        }
        Err(err) => {
            eprintln!("Invalid config: {err}");
            std::process::exit(1);
        }
    }

    match serde_json::to_string(&input) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("Failed to serialize replay: {err}");
            std::process::exit(1);
        }
    }
}

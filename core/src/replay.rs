use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::hash::{hash_state, hash_transcript};
use crate::init::create_initial_state;
use crate::step::step_mut;
use crate::types::*;

/// One recorded frame: the scaled delta and both players' intents.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub dt: f64,
    pub inputs: [PlayerInput; 2],
}

/// A match to re-run headless.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayInput {
    pub config: MatchConfig,
    pub transcript: Vec<TickInput>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReplayOutput {
    pub ticks: Tick,
    pub scores: [i32; 2],
    /// Total fall-outs per player.
    pub falls: [u32; 2],
    pub transcript_hash: [u8; 32],
    pub state_hash: [u8; 32],
}

/// Final state plus summary of a replay.
pub struct ReplayRun {
    pub state: GameState,
    pub output: ReplayOutput,
}

pub fn run_replay(input: &ReplayInput) -> Result<ReplayRun, ConfigError> {
    let mut state = create_initial_state(&input.config)?;
    let mut falls = [0u32; 2];

    for tick in &input.transcript {
        let events = step_mut(&mut state, &tick.inputs, tick.dt, &input.config);
        for (count, fell) in falls.iter_mut().zip(events.fell_out) {
            *count += fell as u32;
        }
    }

    let output = ReplayOutput {
        ticks: state.tick,
        scores: state.scores(),
        falls,
        transcript_hash: hash_transcript(&input.transcript),
        state_hash: hash_state(&state),
    };
    info!(
        "replay finished: {} ticks, scores {} - {}, falls {:?}",
        output.ticks, output.scores[0], output.scores[1], output.falls
    );
    Ok(ReplayRun { state, output })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::default_config;

    fn walk_off(ticks: usize) -> ReplayInput {
        let left = PlayerInput { buttons: button::LEFT };
        ReplayInput {
            config: default_config(),
            transcript: vec![TickInput { dt: 1.6, inputs: [NULL_INPUT, left] }; ticks],
        }
    }

    #[test]
    fn replay_counts_ticks_and_falls() {
        let run = run_replay(&walk_off(300)).unwrap();
        assert_eq!(run.output.ticks, 300);
        assert_eq!(run.output.falls[0], 0);
        assert!(run.output.falls[1] >= 1);
        assert_eq!(run.output.scores, run.state.scores());
        assert_eq!(run.output.scores[0], run.output.falls[1] as i32);
    }

    #[test]
    fn replay_is_deterministic() {
        let input = walk_off(500);
        let a = run_replay(&input).unwrap();
        let b = run_replay(&input).unwrap();
        assert_eq!(a.output, b.output);
        assert_eq!(a.state, b.state);
    }

    #[test]
    fn replay_rejects_bad_config() {
        let mut input = walk_off(10);
        input.config.max_speed = 0.0;
        assert_eq!(run_replay(&input).err(), Some(ConfigError::MaxSpeed(0.0)));
    }

    #[test]
    fn replay_input_json_roundtrip() {
        let input = walk_off(3);
        let json = serde_json::to_string(&input).unwrap();
        let back: ReplayInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, input);
    }
}

use sha2::{Digest, Sha256};

use crate::replay::TickInput;
use crate::types::{Facing, GameState};

/// SHA-256 hash of the full input transcript.
pub fn hash_transcript(transcript: &[TickInput]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for tick in transcript {
        hasher.update(tick.dt.to_le_bytes());
        for input in &tick.inputs {
            hasher.update(input.buttons.to_le_bytes());
        }
    }
    hasher.finalize().into()
}

/// SHA-256 fingerprint of everything the simulation mutates.
/// Two runs that agree here are in lockstep.
pub fn hash_state(state: &GameState) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(state.tick.to_le_bytes());
    for p in &state.players {
        hasher.update(p.x.to_le_bytes());
        hasher.update(p.y.to_le_bytes());
        hasher.update(p.vx.to_le_bytes());
        hasher.update(p.vy.to_le_bytes());
        hasher.update([p.airborne as u8, (p.facing == Facing::Right) as u8]);
        hasher.update(p.score.to_le_bytes());
    }
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init::{create_initial_state, default_config};
    use crate::types::NULL_INPUT;

    fn idle(ticks: usize) -> Vec<TickInput> {
        vec![TickInput { dt: 1.6, inputs: [NULL_INPUT; 2] }; ticks]
    }

    #[test]
    fn transcript_hash_deterministic() {
        let transcript = idle(100);
        assert_eq!(hash_transcript(&transcript), hash_transcript(&transcript));
    }

    #[test]
    fn different_transcripts_different_hash() {
        let t1 = idle(100);
        let mut t2 = idle(100);
        t2[50].inputs[0].buttons = 1;
        assert_ne!(hash_transcript(&t1), hash_transcript(&t2));

        let mut t3 = idle(100);
        t3[10].dt = 1.7;
        assert_ne!(hash_transcript(&t1), hash_transcript(&t3));
    }

    #[test]
    fn state_hash_tracks_mutation() {
        let state = create_initial_state(&default_config()).unwrap();
        let mut moved = state.clone();
        assert_eq!(hash_state(&state), hash_state(&moved));
        moved.players[1].score = -1;
        assert_ne!(hash_state(&state), hash_state(&moved));
    }
}

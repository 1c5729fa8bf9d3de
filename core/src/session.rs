use log::info;

use crate::clock::FrameClock;
use crate::error::ConfigError;
use crate::init::create_initial_state;
use crate::input::{default_bindings, KeyBindings, KeyState};
use crate::render::{render_frame, Surface};
use crate::replay::TickInput;
use crate::step::step_mut;
use crate::types::*;

/// One local match driven frame by frame.
///
/// Owns the only mutable copy of the game and of the held keys: key events
/// write into `keys`, and `frame` snapshots them once before stepping, so the
/// simulation never observes a key change mid-tick.
pub struct Session {
    config: MatchConfig,
    state: GameState,
    keys: KeyState,
    bindings: [KeyBindings; 2],
    clock: FrameClock,
    transcript: Option<Vec<TickInput>>,
}

impl Session {
    pub fn new(config: MatchConfig, start_ms: f64) -> Result<Self, ConfigError> {
        let state = create_initial_state(&config)?;
        info!("session started at {start_ms}ms");
        Ok(Session {
            config,
            state,
            keys: KeyState::new(),
            bindings: default_bindings(),
            clock: FrameClock::new(start_ms),
            transcript: None,
        })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn set_bindings(&mut self, bindings: [KeyBindings; 2]) {
        self.bindings = bindings;
    }

    /// Returns true when the browser default for this key should be suppressed.
    pub fn key_down(&mut self, code: u32) -> bool {
        self.keys.key_down(code)
    }

    pub fn key_up(&mut self, code: u32) {
        self.keys.key_up(code);
    }

    pub fn release_all_keys(&mut self) {
        self.keys.clear();
    }

    /// Input, simulation, render: everything one animation frame does.
    pub fn frame<S: Surface + ?Sized>(&mut self, timestamp_ms: f64, surface: &mut S) -> StepEvents {
        let events = self.update(timestamp_ms);
        render_frame(&self.state, &self.config, surface);
        events
    }

    /// `frame` without drawing.
    pub fn update(&mut self, timestamp_ms: f64) -> StepEvents {
        let dt = self.clock.tick(timestamp_ms);
        let inputs = self.keys.snapshot(&self.bindings);
        if let Some(transcript) = self.transcript.as_mut() {
            transcript.push(TickInput { dt, inputs });
        }
        step_mut(&mut self.state, &inputs, dt, &self.config)
    }

    /// Start capturing every frame's input for replay. Restarts any capture in progress.
    pub fn start_recording(&mut self) {
        self.transcript = Some(Vec::new());
    }

    pub fn is_recording(&self) -> bool {
        self.transcript.is_some()
    }

    /// Stop recording and hand back what was captured.
    pub fn take_transcript(&mut self) -> Option<Vec<TickInput>> {
        self.transcript.take()
    }
}

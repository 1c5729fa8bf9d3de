use serde::{Deserialize, Serialize};

// ── Primitives ──────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

/// Index into `GameState::players`. 0 = player 1, 1 = player 2.
pub type PlayerId = usize;
pub type Tick = u32;

// ── Input ───────────────────────────────────────────────────

/// Button bitmask constants.
pub mod button {
    pub const LEFT: u8 = 1;
    pub const RIGHT: u8 = 2;
    pub const JUMP: u8 = 4;
}

/// Intents held by one player for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInput {
    pub buttons: u8,
}

impl PlayerInput {
    pub fn pressed(&self, mask: u8) -> bool {
        self.buttons & mask != 0
    }
}

pub const NULL_INPUT: PlayerInput = PlayerInput { buttons: 0 };

// ── Player ──────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Top-left corner of the bounding box.
    pub x: f64,
    pub y: f64,
    /// Where the player reappears after falling out.
    pub spawn: Vec2,
    pub vx: f64,
    pub vy: f64,
    pub width: f64,
    pub height: f64,
    pub max_speed: f64,
    pub airborne: bool,
    pub facing: Facing,
    /// Can go negative.
    pub score: i32,
    pub color: String,
}

// ── Map ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

// ── Game State ──────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub tick: Tick,
    pub players: [Player; 2],
    pub platforms: Vec<Platform>,
}

impl GameState {
    pub fn scores(&self) -> [i32; 2] {
        [self.players[0].score, self.players[1].score]
    }
}

/// Rule transitions observed during one advance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepEvents {
    pub fell_out: [bool; 2],
    pub landed: [bool; 2],
    pub knockback: bool,
}

// ── Config ──────────────────────────────────────────────────

/// How a fall-out changes the scoreboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringRule {
    /// Faller loses one, then both players gain one.
    #[default]
    Compounding,
    /// Faller loses one, the other player gains one.
    Transfer,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub canvas_width: f64,
    /// Fall-out threshold. Walls are not solid.
    pub canvas_height: f64,
    pub friction: f64,
    pub gravity: f64,
    #[serde(default)]
    pub scoring: ScoringRule,
    pub player_size: f64,
    pub max_speed: f64,
    pub platforms: Vec<Platform>,
    pub spawn_points: [Vec2; 2],
    pub colors: [String; 2],
}

use crate::types::Vec2;

// All values are per scaled tick (elapsed ms / MS_PER_TICK) unless noted.

// Physics
pub const GRAVITY: f64 = 0.3;
pub const FRICTION: f64 = 0.85;
pub const JUMP_VELOCITY: f64 = -8.0;
pub const MAX_SPEED: f64 = 10.0;
pub const MOVE_STEP: f64 = 1.0;
pub const KNOCKBACK_SPEED: f64 = 2.0;

// Player hitbox (square)
pub const PLAYER_SIZE: f64 = 30.0;

// Canvas
pub const CANVAS_WIDTH: f64 = 800.0;
pub const CANVAS_HEIGHT: f64 = 625.0;

// Arena: one platform inset from both canvas edges
pub const PLATFORM_INSET: f64 = 100.0;
pub const PLATFORM_Y: f64 = 500.0;
pub const PLATFORM_HEIGHT: f64 = 50.0;

// Spawns: player 1 measured from the right edge, player 2 from the left
pub const SPAWN_RIGHT_INSET: f64 = 180.0;
pub const SPAWN_LEFT_X: f64 = 150.0;
pub const SPAWN_Y: f64 = 350.0;

// Timing
pub const MS_PER_TICK: f64 = 10.0;
/// Timestamp fed to the very first frame before rAF takes over.
pub const FIRST_FRAME_MS: f64 = 1.6;

// Colors
pub const PLAYER1_COLOR: &str = "blue";
pub const PLAYER2_COLOR: &str = "lightblue";
pub const PLATFORM_COLOR: &str = "red";
pub const BACKGROUND_COLOR: &str = "black";

// HUD
pub const SCORE_FONT: &str = "30px Arial";
/// Score anchor per player id. Player 1 plays on the right, so its score sits right.
pub const SCORE_ANCHORS: [Vec2; 2] = [Vec2 { x: 670.0, y: 100.0 }, Vec2 { x: 100.0, y: 100.0 }];

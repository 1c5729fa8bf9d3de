use crate::constants::*;
use crate::types::*;

impl Player {
    /// Square player standing still at `spawn`, facing right, not airborne.
    pub fn new(id: PlayerId, spawn: Vec2, size: f64, max_speed: f64, color: &str) -> Self {
        Player {
            id,
            x: spawn.x,
            y: spawn.y,
            spawn,
            vx: 0.0,
            vy: 0.0,
            width: size,
            height: size,
            max_speed,
            airborne: false,
            facing: Facing::Right,
            score: 0,
            color: color.to_string(),
        }
    }

    /// Launch upward unless already in the air.
    pub fn jump(&mut self) {
        if !self.airborne {
            self.vy = JUMP_VELOCITY;
            self.airborne = true;
        }
    }

    /// One step of rightward acceleration. vx can reach max_speed but never pass it
    /// from below; facing flips even when the cap blocks the step.
    pub fn move_right(&mut self) {
        if self.vx < self.max_speed {
            self.vx += MOVE_STEP;
        }
        self.facing = Facing::Right;
    }

    pub fn move_left(&mut self) {
        if self.vx > -self.max_speed {
            self.vx -= MOVE_STEP;
        }
        self.facing = Facing::Left;
    }

    /// Back to the spawn point. Velocity is kept.
    pub fn respawn(&mut self) {
        self.x = self.spawn.x;
        self.y = self.spawn.y;
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2 {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

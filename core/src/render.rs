//! Render contract. The core decides what a frame contains; a `Surface`
//! decides how to put it on screen.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::*;

/// Anything that can draw a frame: a canvas 2D context, a recorder, a sprite renderer.
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str);

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str, font: &str);

    /// Plain filled box by default. Sprite-capable surfaces override this and
    /// pick an animation from `player.facing`.
    fn draw_player(&mut self, player: &Player) {
        self.fill_rect(player.x, player.y, player.width, player.height, &player.color);
    }
}

/// Background, score HUD, players, then platforms on top.
pub fn render_frame<S: Surface + ?Sized>(state: &GameState, config: &MatchConfig, surface: &mut S) {
    surface.fill_rect(0.0, 0.0, config.canvas_width, config.canvas_height, BACKGROUND_COLOR);

    for (anchor, player) in SCORE_ANCHORS.iter().zip(&state.players) {
        surface.fill_text(
            &player.score.to_string(),
            anchor.x,
            anchor.y,
            &player.color,
            SCORE_FONT,
        );
    }

    for player in &state.players {
        surface.draw_player(player);
    }

    for platform in &state.platforms {
        surface.fill_rect(
            platform.x,
            platform.y,
            platform.width,
            platform.height,
            &platform.color,
        );
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawCommand {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
        color: String,
        font: String,
    },
    Player {
        id: PlayerId,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: String,
        facing: Facing,
    },
}

/// Surface that records draw calls instead of drawing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandBuffer {
    pub commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for CommandBuffer {
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, color: &str, font: &str) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            color: color.to_string(),
            font: font.to_string(),
        });
    }

    fn draw_player(&mut self, player: &Player) {
        self.commands.push(DrawCommand::Player {
            id: player.id,
            x: player.x,
            y: player.y,
            width: player.width,
            height: player.height,
            color: player.color.clone(),
            facing: player.facing,
        });
    }
}

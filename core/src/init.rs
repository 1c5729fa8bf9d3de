use log::info;

use crate::constants::*;
use crate::error::ConfigError;
use crate::types::*;

/// Single red platform spanning the canvas minus a 100px inset on each side.
pub fn arena(canvas_width: f64) -> Vec<Platform> {
    vec![Platform {
        x: PLATFORM_INSET,
        y: PLATFORM_Y,
        width: canvas_width - 2.0 * PLATFORM_INSET,
        height: PLATFORM_HEIGHT,
        color: PLATFORM_COLOR.to_string(),
    }]
}

/// Default rules laid out for a canvas of the given size.
pub fn config_for_canvas(canvas_width: f64, canvas_height: f64) -> MatchConfig {
    MatchConfig {
        canvas_width,
        canvas_height,
        friction: FRICTION,
        gravity: GRAVITY,
        scoring: ScoringRule::Compounding,
        player_size: PLAYER_SIZE,
        max_speed: MAX_SPEED,
        platforms: arena(canvas_width),
        spawn_points: [
            Vec2 { x: canvas_width - SPAWN_RIGHT_INSET, y: SPAWN_Y },
            Vec2 { x: SPAWN_LEFT_X, y: SPAWN_Y },
        ],
        colors: [PLAYER1_COLOR.to_string(), PLAYER2_COLOR.to_string()],
    }
}

/// 800x625 canvas, the size the browser front end uses.
pub fn default_config() -> MatchConfig {
    config_for_canvas(CANVAS_WIDTH, CANVAS_HEIGHT)
}

impl MatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.canvas_width > 0.0 && self.canvas_height > 0.0) {
            return Err(ConfigError::EmptyCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !(self.player_size > 0.0) {
            return Err(ConfigError::PlayerSize(self.player_size));
        }
        if !(self.max_speed > 0.0) {
            return Err(ConfigError::MaxSpeed(self.max_speed));
        }
        if !(0.0..=1.0).contains(&self.friction) {
            return Err(ConfigError::Friction(self.friction));
        }
        if !(self.gravity >= 0.0) {
            return Err(ConfigError::Gravity(self.gravity));
        }
        for (index, plat) in self.platforms.iter().enumerate() {
            if !(plat.width >= 0.0 && plat.height >= 0.0) {
                return Err(ConfigError::PlatformSize {
                    index,
                    width: plat.width,
                    height: plat.height,
                });
            }
        }
        Ok(())
    }
}

/// Create the initial game state from a match config.
pub fn create_initial_state(config: &MatchConfig) -> Result<GameState, ConfigError> {
    config.validate()?;

    let players = [0usize, 1].map(|id| {
        Player::new(
            id,
            config.spawn_points[id],
            config.player_size,
            config.max_speed,
            &config.colors[id],
        )
    });

    info!(
        "new match: {}x{} canvas, {} platform(s), {:?} scoring",
        config.canvas_width,
        config.canvas_height,
        config.platforms.len(),
        config.scoring
    );

    Ok(GameState {
        tick: 0,
        players,
        platforms: config.platforms.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_correct() {
        let config = default_config();
        let state = create_initial_state(&config).unwrap();
        assert_eq!(state.tick, 0);
        assert_eq!(state.platforms.len(), 1);

        // Player 1 spawns on the right
        assert_eq!(state.players[0].id, 0);
        assert_eq!(state.players[0].x, 620.0);
        assert_eq!(state.players[0].y, 350.0);
        assert_eq!(state.players[0].color, "blue");

        // Player 2 on the left
        assert_eq!(state.players[1].id, 1);
        assert_eq!(state.players[1].x, 150.0);
        assert_eq!(state.players[1].y, 350.0);
        assert_eq!(state.players[1].color, "lightblue");

        assert_eq!(state.scores(), [0, 0]);
        assert!(state.players.iter().all(|p| !p.airborne && p.vx == 0.0 && p.vy == 0.0));
    }

    #[test]
    fn arena_map_structure() {
        let plats = arena(CANVAS_WIDTH);
        assert_eq!(plats.len(), 1);
        assert_eq!(plats[0].x, 100.0);
        assert_eq!(plats[0].y, 500.0);
        assert_eq!(plats[0].width, 600.0);
        assert_eq!(plats[0].height, 50.0);
        assert_eq!(plats[0].color, "red");
    }

    #[test]
    fn spawn_tracks_canvas_width() {
        let config = config_for_canvas(1000.0, 700.0);
        assert_eq!(config.spawn_points[0].x, 820.0);
        assert_eq!(config.platforms[0].width, 800.0);
    }

    #[test]
    fn rejects_empty_canvas() {
        let mut config = default_config();
        config.canvas_height = 0.0;
        assert!(matches!(
            create_initial_state(&config),
            Err(ConfigError::EmptyCanvas { .. })
        ));
    }

    #[test]
    fn rejects_negative_platform() {
        let mut config = default_config();
        config.platforms[0].width = -1.0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::PlatformSize { index: 0, width: -1.0, height: 50.0 })
        );
    }

    #[test]
    fn rejects_bad_physics() {
        let mut config = default_config();
        config.friction = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::Friction(1.5)));

        let mut config = default_config();
        config.gravity = -0.3;
        assert_eq!(config.validate(), Err(ConfigError::Gravity(-0.3)));

        let mut config = default_config();
        config.player_size = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::PlayerSize(0.0)));
    }

    #[test]
    fn config_json_roundtrip_defaults_scoring() {
        let config = default_config();
        let mut json: serde_json::Value = serde_json::to_value(&config).unwrap();
        json.as_object_mut().unwrap().remove("scoring");
        let back: MatchConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back.scoring, ScoringRule::Compounding);
        assert_eq!(back, config);
    }
}

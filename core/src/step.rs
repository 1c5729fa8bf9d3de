use crate::physics::*;
use crate::score::apply_fall_out;
use crate::types::*;

/// Advance the simulation by `dt` scaled ticks (elapsed ms / 10).
///
/// Sub-step order:
///  1. Per player, in id order: friction, gravity, Euler integration, fall-out
///     (score + respawn, velocity kept)
///  2. Platform collision for every (platform, player) pair
///  3. Player-vs-player knockback
///  4. Advance tick
///
/// Integrating before resolving collisions means a player resting on a
/// platform ends every tick with vy == 0 and sits exactly on its top.
pub fn advance(state: &mut GameState, dt: f64, config: &MatchConfig) -> StepEvents {
    let mut events = StepEvents::default();

    // 1. Integrate + fall-out
    for id in 0..state.players.len() {
        integrate(&mut state.players[id], dt, config.friction, config.gravity);
        if has_fallen(&state.players[id], config.canvas_height) {
            apply_fall_out(&mut state.players, id, config.scoring);
            events.fell_out[id] = true;
        }
    }

    // 2. Platform collision
    for platform in &state.platforms {
        for (id, player) in state.players.iter_mut().enumerate() {
            if platform_collision(platform, player) {
                events.landed[id] = true;
            }
        }
    }

    // 3. Knockback
    events.knockback = player_collision(&mut state.players);

    // 4. Advance tick
    state.tick += 1;
    events
}

/// Apply one frame of input snapshots, then advance.
pub fn step_mut(
    state: &mut GameState,
    inputs: &[PlayerInput; 2],
    dt: f64,
    config: &MatchConfig,
) -> StepEvents {
    for (player, input) in state.players.iter_mut().zip(inputs) {
        apply_player_input(player, input);
    }
    advance(state, dt, config)
}

/// Pure transition: `prev` is left untouched.
pub fn step(prev: &GameState, inputs: &[PlayerInput; 2], dt: f64, config: &MatchConfig) -> GameState {
    let mut next = prev.clone();
    step_mut(&mut next, inputs, dt, config);
    next
}

use log::debug;

use crate::constants::*;
use crate::types::*;

/// Turn one frame of intents into velocity changes: jump, then right, then left.
/// Holding both directions cancels out unless one side is capped.
pub fn apply_player_input(p: &mut Player, input: &PlayerInput) {
    if input.pressed(button::JUMP) {
        p.jump();
    }
    if input.pressed(button::RIGHT) {
        p.move_right();
    }
    if input.pressed(button::LEFT) {
        p.move_left();
    }
}

/// Friction, then gravity, then explicit Euler over `dt` scaled ticks.
/// Gravity applies even while grounded; platform contact cancels it every tick.
pub fn integrate(p: &mut Player, dt: f64, friction: f64, gravity: f64) {
    p.vx *= friction;
    p.vy += gravity;
    p.x += p.vx * dt;
    p.y += p.vy * dt;
}

/// Strictly below the bottom edge of the play area.
pub fn has_fallen(p: &Player, canvas_height: f64) -> bool {
    p.y > canvas_height
}

/// Land the player on top of `platform` if their boxes overlap.
///
/// Overlap is tested on center displacement against half the combined extents.
/// Resolution is vertical only: the player is snapped onto the top surface
/// (floored to a whole pixel) whatever side it came from. Vertical velocity and
/// the airborne flag are only cleared when moving down. Returns true when the
/// player was landed.
pub fn platform_collision(platform: &Platform, p: &mut Player) -> bool {
    let dx = (p.x + p.width / 2.0) - (platform.x + platform.width / 2.0);
    let dy = (p.y + p.height / 2.0) - (platform.y + platform.height / 2.0);
    let min_dx = p.width / 2.0 + platform.width / 2.0;
    let min_dy = p.height / 2.0 + platform.height / 2.0;

    if dx.abs() >= min_dx || dy.abs() >= min_dy {
        return false;
    }

    p.y = (platform.y - p.height).floor();
    if p.vy > 0.0 {
        p.vy = 0.0;
        p.airborne = false;
        return true;
    }
    false
}

/// Open-interval AABB test: touching edges do not overlap.
pub fn players_overlap(a: &Player, b: &Player) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}

/// Shove two overlapping players apart and kick them away from each other.
///
/// The player with the strictly larger x is "right"; on a tie players[1] is.
/// The right player moves right by half the gap first, and the left player's
/// push is computed from that already-moved x, so the correction is
/// deliberately lopsided. Velocities are floored at KNOCKBACK_SPEED apart.
/// Fires every tick the pair overlaps. Returns true when it fired.
pub fn player_collision(players: &mut [Player; 2]) -> bool {
    if !players_overlap(&players[0], &players[1]) {
        return false;
    }

    let (right, left): (PlayerId, PlayerId) = if players[0].x > players[1].x { (0, 1) } else { (1, 0) };

    players[right].x += (players[right].x - players[left].x) / 2.0;
    players[left].x -= (players[right].x - players[left].x) / 2.0;
    players[right].vx = players[right].vx.abs() + KNOCKBACK_SPEED;
    players[left].vx = -players[left].vx.abs() - KNOCKBACK_SPEED;

    debug!(
        "knockback: player {} right at x={}, player {} left at x={}",
        right + 1,
        players[right].x,
        left + 1,
        players[left].x
    );
    true
}

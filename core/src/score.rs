use log::debug;

use crate::types::*;

/// Score a fall-out for `faller` and put them back at their spawn.
///
/// Under `Compounding` the faller's own +1 cancels their -1, so only the other
/// player's score visibly moves. Velocity survives the respawn.
pub fn apply_fall_out(players: &mut [Player; 2], faller: PlayerId, rule: ScoringRule) {
    debug_assert!(faller < 2, "no player {faller}");
    let other = faller ^ 1;
    players[faller].score -= 1;
    match rule {
        ScoringRule::Compounding => {
            players[0].score += 1;
            players[1].score += 1;
        }
        ScoringRule::Transfer => {
            players[other].score += 1;
        }
    }
    players[faller].respawn();

    debug!(
        "player {} fell out ({:?}): scores {} - {}",
        faller + 1,
        rule,
        players[0].score,
        players[1].score
    );
}

/// Player with the strictly higher score, None on a tie.
pub fn leader(players: &[Player; 2]) -> Option<PlayerId> {
    if players[0].score > players[1].score {
        Some(0)
    } else if players[1].score > players[0].score {
        Some(1)
    } else {
        None
    }
}

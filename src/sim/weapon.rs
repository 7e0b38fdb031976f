//! Auto-targeting fire control

use super::state::{GameEvent, Projectile, Session};
use super::targeting::find_nearest;
use crate::direction_to;

/// Slack on the cooldown check so per-frame `f32` deltas that sum to the
/// cooldown on paper (48 x 1/60s = 0.8s) still count as ready
const COOLDOWN_EPSILON: f32 = 1e-4;

/// Advance the cooldown accumulator by `dt` and fire at the nearest enemy
/// in range once the cooldown has elapsed.
///
/// Targeting only runs once the cooldown is ready. With no target the
/// accumulator keeps growing, so the next shot goes out as soon as a
/// target appears. Returns true if a projectile was spawned.
pub fn try_fire(session: &mut Session, dt: f32, events: &mut Vec<GameEvent>) -> bool {
    session.fire.since_last_shot += dt;

    let cooldown = session
        .tuning
        .effective_cooldown(session.progression.powerups_collected);
    if session.fire.since_last_shot + COOLDOWN_EPSILON < cooldown {
        return false;
    }

    let origin = session.player.pos;
    let Some((_, target)) = find_nearest(&session.enemies, origin, session.tuning.shooting_range)
    else {
        return false;
    };

    let dir = direction_to(origin, target.pos);
    let projectile = Projectile {
        pos: origin,
        dir,
        speed: session.tuning.projectile_speed,
        radius: session.tuning.projectile_radius,
        active: true,
    };

    match session.projectiles.spawn(projectile) {
        Ok(_) => {
            session.fire.since_last_shot = 0.0;
            log::debug!("Fired at ({:.1}, {:.1})", target.pos.x, target.pos.y);
            events.push(GameEvent::ProjectileFired { from: origin, dir });
            true
        }
        Err(full) => {
            log::warn!("Projectile dropped: {}", full);
            events.push(GameEvent::SpawnDropped {
                capacity: full.capacity,
            });
            false
        }
    }
}

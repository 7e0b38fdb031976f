//! Per-frame simulation update
//!
//! Order within a frame:
//! 1. Player moves from input
//! 2. Projectiles advance; spent ones are pruned
//! 3. Fire control (targeting only when the cooldown is ready)
//! 4. Enemies home in on the player; contacts hurt the player and remove the enemy
//! 5. Projectile x enemy hits
//! 6. Power-up pickup, then power-up spawn
//! 7. Enemy spawn roll
//! 8. Wave timer
//! 9. Death check (full session reset)

use glam::Vec2;

use super::collision::{bodies_overlap, resolve_projectile_hits};
use super::progression::{
    advance_wave, check_player_death, check_powerup_collection, maybe_spawn_powerup,
    try_spawn_enemy,
};
use super::state::{GameEvent, Session};
use super::weapon::try_fire;
use crate::platform::RandomSource;
use crate::{clamp_to_bounds, direction_to};

/// Held directional input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    /// Raw movement axis (not normalized, so diagonals are faster)
    pub fn axis(&self) -> Vec2 {
        let mut axis = Vec2::ZERO;
        if self.up {
            axis.y -= 1.0;
        }
        if self.down {
            axis.y += 1.0;
        }
        if self.left {
            axis.x -= 1.0;
        }
        if self.right {
            axis.x += 1.0;
        }
        axis
    }
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(
    session: &mut Session,
    input: &TickInput,
    dt: f32,
    rng: &mut impl RandomSource,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    update_player(session, input, dt);
    update_projectiles(session, dt);
    try_fire(session, dt, &mut events);
    update_enemies(session, dt, &mut events);

    let kills = resolve_projectile_hits(
        &mut session.projectiles,
        &mut session.enemies,
        &mut events,
    );
    session.progression.enemies_shot += kills;

    check_powerup_collection(session, &mut events);
    maybe_spawn_powerup(session, rng, &mut events);
    try_spawn_enemy(session, rng, &mut events);
    advance_wave(session, dt, &mut events);
    check_player_death(session, &mut events);

    events
}

/// Move the player from held input, kept fully on screen
pub fn update_player(session: &mut Session, input: &TickInput, dt: f32) {
    let tuning = &session.tuning;
    let player = &mut session.player;
    let moved = player.pos + input.axis() * tuning.player_speed * dt;
    player.pos = clamp_to_bounds(
        moved,
        player.radius,
        tuning.screen_width,
        tuning.screen_height,
    );
}

/// Advance projectiles and prune those that are spent or off the playfield
pub fn update_projectiles(session: &mut Session, dt: f32) {
    let size = session.tuning.screen_size();
    session.projectiles.sweep(|projectile| {
        if projectile.active {
            projectile.pos += projectile.dir * projectile.speed * dt;
            let p = projectile.pos;
            if p.y < 0.0 || p.y > size.y || p.x < 0.0 || p.x > size.x {
                projectile.active = false;
            }
        }
        projectile.active
    });
}

/// Steer every enemy at the player and resolve player contact.
///
/// A touching enemy costs one health and is removed; the sweep re-reads the
/// live count so no enemy is skipped or removed twice.
pub fn update_enemies(session: &mut Session, dt: f32, events: &mut Vec<GameEvent>) {
    let tuning = &session.tuning;
    let player = &mut session.player;

    session.enemies.sweep(|enemy| {
        enemy.dir = direction_to(enemy.pos, player.pos);
        enemy.pos += enemy.dir * tuning.enemy_speed * dt;
        enemy.pos = clamp_to_bounds(
            enemy.pos,
            enemy.radius,
            tuning.screen_width,
            tuning.screen_height,
        );

        if bodies_overlap(&*player, &*enemy) {
            player.health -= 1;
            log::debug!("Player hit, health {}", player.health);
            events.push(GameEvent::PlayerHit {
                health: player.health,
            });
            return false;
        }
        true
    });
}

//! Circle-circle collision and combat resolution

use glam::Vec2;

use super::pool::Pool;
use super::state::{Enemy, GameEvent, Projectile};
use super::targeting::Body;

/// Strict overlap test: touching circles (distance == sum of radii) do not overlap
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let reach = a_radius + b_radius;
    a.distance_squared(b) < reach * reach
}

#[inline]
pub fn bodies_overlap<A: Body, B: Body>(a: &A, b: &B) -> bool {
    circles_overlap(a.pos(), a.radius(), b.pos(), b.radius())
}

/// Projectile x enemy pass.
///
/// Each active projectile is tested against the live enemies in index
/// order and stops at its first hit: the projectile is deactivated and the
/// enemy removed. Projectiles that were already inactive are skipped.
/// Returns the number of enemies destroyed.
pub fn resolve_projectile_hits(
    projectiles: &mut Pool<Projectile>,
    enemies: &mut Pool<Enemy>,
    events: &mut Vec<GameEvent>,
) -> u32 {
    let mut kills = 0;

    projectiles.for_each_live(|projectile| {
        if !projectile.active {
            return;
        }
        let hit = enemies.iter().position(|enemy| bodies_overlap(&*projectile, enemy));
        if let Some(index) = hit {
            projectile.active = false;
            let enemy = enemies.remove_at(index);
            kills += 1;
            events.push(GameEvent::EnemyKilled { pos: enemy.pos });
        }
    });

    kills
}

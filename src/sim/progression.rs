//! Wave timer, enemy/power-up spawning and the death reset

use glam::Vec2;

use super::collision::bodies_overlap;
use super::state::{Enemy, GameEvent, Session};
use crate::platform::RandomSource;
use crate::tuning::Tuning;

/// Give up rejection sampling after this many draws and keep the farthest candidate
const MAX_PLACEMENT_ATTEMPTS: u32 = 256;

/// Screen edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    fn from_roll(roll: i32) -> Self {
        match roll {
            0 => Edge::Top,
            1 => Edge::Bottom,
            2 => Edge::Left,
            _ => Edge::Right,
        }
    }

    /// Unit heading pointing into the playfield
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(0.0, 1.0),
            Edge::Bottom => Vec2::new(0.0, -1.0),
            Edge::Left => Vec2::new(1.0, 0.0),
            Edge::Right => Vec2::new(-1.0, 0.0),
        }
    }
}

/// Build an enemy at a uniformly random point on a random screen edge.
///
/// The inward heading is only a hint; movement re-aims at the player every frame.
pub fn enemy_on_edge(tuning: &Tuning, rng: &mut impl RandomSource) -> Enemy {
    let edge = Edge::from_roll(rng.uniform_int(0, 3));
    let w = tuning.screen_width;
    let h = tuning.screen_height;

    let pos = match edge {
        Edge::Top => Vec2::new(rng.uniform_int(0, w as i32) as f32, 0.0),
        Edge::Bottom => Vec2::new(rng.uniform_int(0, w as i32) as f32, h),
        Edge::Left => Vec2::new(0.0, rng.uniform_int(0, h as i32) as f32),
        Edge::Right => Vec2::new(w, rng.uniform_int(0, h as i32) as f32),
    };

    Enemy {
        pos,
        radius: tuning.enemy_radius,
        dir: edge.inward(),
    }
}

/// Roll against the current spawn chance and add one enemy on success.
///
/// Returns true if an enemy was added.
pub fn try_spawn_enemy(
    session: &mut Session,
    rng: &mut impl RandomSource,
    events: &mut Vec<GameEvent>,
) -> bool {
    if rng.uniform_int(0, 100) >= session.progression.spawn_chance {
        return false;
    }
    if session.enemies.is_full() {
        log::warn!(
            "Enemy spawn dropped: pool full ({} entries)",
            session.enemies.capacity()
        );
        events.push(GameEvent::SpawnDropped {
            capacity: session.enemies.capacity(),
        });
        return false;
    }

    let enemy = enemy_on_edge(&session.tuning, rng);
    let pos = enemy.pos;
    match session.enemies.spawn(enemy) {
        Ok(_) => {
            events.push(GameEvent::EnemySpawned { pos });
            true
        }
        Err(full) => {
            log::warn!("Enemy spawn dropped: {}", full);
            false
        }
    }
}

/// Pick a power-up position at least `powerup_min_player_distance` from the player
pub fn place_powerup(tuning: &Tuning, player_pos: Vec2, rng: &mut impl RandomSource) -> Vec2 {
    let margin = tuning.powerup_edge_margin;
    let max_x = tuning.screen_width as i32 - margin;
    let max_y = tuning.screen_height as i32 - margin;

    let mut best = Vec2::ZERO;
    let mut best_dist = f32::NEG_INFINITY;
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = Vec2::new(
            rng.uniform_int(margin, max_x) as f32,
            rng.uniform_int(margin, max_y) as f32,
        );
        let dist = candidate.distance(player_pos);
        if dist >= tuning.powerup_min_player_distance {
            return candidate;
        }
        if dist > best_dist {
            best_dist = dist;
            best = candidate;
        }
    }

    log::warn!(
        "No power-up spot {} from the player after {} draws, using farthest ({:.1})",
        tuning.powerup_min_player_distance,
        MAX_PLACEMENT_ATTEMPTS,
        best_dist
    );
    best
}

/// Spawn a power-up when none is live and the kill count just reached a
/// new multiple of the kill interval. Each milestone yields one power-up.
pub fn maybe_spawn_powerup(
    session: &mut Session,
    rng: &mut impl RandomSource,
    events: &mut Vec<GameEvent>,
) -> bool {
    let interval = session.tuning.powerup_kill_interval.max(1);
    let kills = session.progression.enemies_shot;

    if session.powerup.active || kills == 0 || kills % interval != 0 {
        return false;
    }
    if kills == session.progression.last_powerup_milestone {
        return false;
    }

    let pos = place_powerup(&session.tuning, session.player.pos, rng);
    session.powerup.pos = pos;
    session.powerup.radius = session.tuning.powerup_radius;
    session.powerup.active = true;
    session.progression.last_powerup_milestone = kills;

    log::debug!("Power-up spawned at ({:.0}, {:.0}) after {} kills", pos.x, pos.y, kills);
    events.push(GameEvent::PowerUpSpawned { pos });
    true
}

/// Collect the live power-up if the player overlaps it
pub fn check_powerup_collection(session: &mut Session, events: &mut Vec<GameEvent>) -> bool {
    if !session.powerup.active || !bodies_overlap(&session.player, &session.powerup) {
        return false;
    }

    session.powerup.active = false;
    session.progression.powerups_collected += 1;
    session.progression.spawn_chance += session.tuning.spawn_chance_step;

    log::info!(
        "Power-up collected ({} total), spawn chance now {}%",
        session.progression.powerups_collected,
        session.progression.spawn_chance
    );
    events.push(GameEvent::PowerUpCollected {
        total: session.progression.powerups_collected,
    });
    true
}

/// Advance the wave timer; on expiry clear the board and reward the player.
///
/// Returns true if a wave was completed this frame.
pub fn advance_wave(session: &mut Session, dt: f32, events: &mut Vec<GameEvent>) -> bool {
    session.progression.wave_timer += dt;
    if session.progression.wave_timer < session.tuning.wave_duration {
        return false;
    }

    session.enemies.clear();
    session.player.health += 1;
    session.powerup.active = false;
    session.progression.wave += 1;
    session.progression.wave_timer = 0.0;

    log::info!(
        "Wave {} begins (health {})",
        session.progression.wave,
        session.player.health
    );
    events.push(GameEvent::WaveCompleted {
        wave: session.progression.wave,
    });
    true
}

/// Reset the whole session once health is gone. Returns true if it reset.
pub fn check_player_death(session: &mut Session, events: &mut Vec<GameEvent>) -> bool {
    if session.player.health > 0 {
        return false;
    }

    let wave = session.progression.wave;
    let kills = session.progression.enemies_shot;
    log::info!("Player died on wave {} with {} kills, restarting run", wave, kills);

    session.reset();
    events.push(GameEvent::PlayerDied { wave, kills });
    true
}

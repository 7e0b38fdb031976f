//! Session state and core simulation types
//!
//! Everything one run mutates lives in [`Session`]; there is no global
//! state, so independent sessions (and tests) never interfere.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pool::Pool;
use crate::tuning::Tuning;

/// The player avatar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    /// Drops by one per enemy contact; a session reset happens at <= 0
    pub health: i32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: tuning.player_start,
            radius: tuning.player_radius,
            health: tuning.player_start_health,
        }
    }
}

/// A homing enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    /// Unit heading; recomputed toward the player every frame
    pub dir: Vec2,
}

/// An auto-fired shot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    /// Unit direction of travel
    pub dir: Vec2,
    pub speed: f32,
    pub radius: f32,
    /// Cleared on hit or when leaving the playfield; pruned next update
    pub active: bool,
}

/// Fire-rate power-up (at most one live at a time)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub radius: f32,
    pub active: bool,
}

impl PowerUp {
    pub fn inactive(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            radius: tuning.powerup_radius,
            active: false,
        }
    }
}

/// Wave timer and difficulty counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    /// Seconds elapsed in the current wave
    pub wave_timer: f32,
    /// 1-based wave number
    pub wave: u32,
    /// Percent chance per frame of an enemy spawn
    pub spawn_chance: i32,
    pub powerups_collected: u32,
    pub enemies_shot: u32,
    /// Kill milestone that last produced a power-up (0 = none yet)
    pub last_powerup_milestone: u32,
}

impl Progression {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            wave_timer: 0.0,
            wave: 1,
            spawn_chance: tuning.initial_spawn_chance,
            powerups_collected: 0,
            enemies_shot: 0,
            last_powerup_milestone: 0,
        }
    }
}

/// Auto-fire cooldown accumulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireControl {
    /// Seconds since the last shot; keeps growing while there is no target
    pub since_last_shot: f32,
}

impl FireControl {
    pub fn new() -> Self {
        Self {
            since_last_shot: 0.0,
        }
    }
}

impl Default for FireControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Things that happened during one update, for drawing and scoring
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ProjectileFired { from: Vec2, dir: Vec2 },
    /// Enemy destroyed by a projectile, at its last position
    EnemyKilled { pos: Vec2 },
    /// Enemy reached the player; `health` is the value after the hit
    PlayerHit { health: i32 },
    EnemySpawned { pos: Vec2 },
    PowerUpSpawned { pos: Vec2 },
    PowerUpCollected { total: u32 },
    /// `wave` is the new wave number
    WaveCompleted { wave: u32 },
    /// Health ran out and the run restarted
    PlayerDied { wave: u32, kills: u32 },
    /// A spawn was dropped because its pool was full
    SpawnDropped { capacity: usize },
}

/// Everything a single run mutates
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub tuning: Tuning,
    pub player: Player,
    pub enemies: Pool<Enemy>,
    pub projectiles: Pool<Projectile>,
    pub powerup: PowerUp,
    pub progression: Progression,
    pub fire: FireControl,
}

impl Session {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            player: Player::new(&tuning),
            enemies: Pool::new(tuning.enemy_capacity),
            projectiles: Pool::new(tuning.projectile_capacity),
            powerup: PowerUp::inactive(&tuning),
            progression: Progression::new(&tuning),
            fire: FireControl::new(),
            tuning,
        }
    }

    /// Restore every piece of run state to its initial value.
    ///
    /// Shared by the death path and every scene transition that starts a
    /// fresh run. Idempotent.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.tuning);
        self.enemies.clear();
        self.projectiles.clear();
        self.powerup = PowerUp::inactive(&self.tuning);
        self.progression = Progression::new(&self.tuning);
        self.fire = FireControl::new();
    }

    /// Seconds left in the current wave (for the HUD)
    pub fn time_remaining(&self) -> f32 {
        (self.tuning.wave_duration - self.progression.wave_timer).max(0.0)
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: &self.player,
            enemies: self.enemies.as_slice(),
            projectiles: self.projectiles.as_slice(),
            powerup: self.powerup.active.then_some(&self.powerup),
            health: self.player.health,
            wave: self.progression.wave,
            time_remaining: self.time_remaining(),
            kills: self.progression.enemies_shot,
            powerups_collected: self.progression.powerups_collected,
        }
    }
}

/// Borrowed view of a session, everything a HUD/renderer needs
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub projectiles: &'a [Projectile],
    /// Only present while the power-up is live
    pub powerup: Option<&'a PowerUp>,
    pub health: i32,
    pub wave: u32,
    pub time_remaining: f32,
    pub kills: u32,
    pub powerups_collected: u32,
}

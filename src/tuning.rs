//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so runs can be
//! rebalanced (or made deterministic for tests) without touching sim code.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub screen_width: f32,
    pub screen_height: f32,

    // === Player ===
    pub player_start: Vec2,
    pub player_radius: f32,
    /// Units per second
    pub player_speed: f32,
    pub player_start_health: i32,

    // === Enemies ===
    pub enemy_radius: f32,
    pub enemy_speed: f32,
    pub enemy_capacity: usize,

    // === Weapon ===
    pub projectile_capacity: usize,
    pub projectile_speed: f32,
    pub projectile_radius: f32,
    pub base_cooldown: f32,
    /// Fractional cooldown reduction per power-up collected
    pub fire_rate_increase: f32,
    pub min_cooldown: f32,
    pub shooting_range: f32,

    // === Progression ===
    pub wave_duration: f32,
    /// Percent, compared against a roll in 0..=100
    pub initial_spawn_chance: i32,
    pub spawn_chance_step: i32,
    pub powerup_kill_interval: u32,
    pub powerup_radius: f32,
    pub powerup_min_player_distance: f32,
    pub powerup_edge_margin: i32,

    // === Scenes / loop ===
    pub intro_duration: f32,
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_radius: PLAYER_RADIUS,
            player_speed: PLAYER_SPEED,
            player_start_health: PLAYER_START_HEALTH,

            enemy_radius: ENEMY_RADIUS,
            enemy_speed: ENEMY_SPEED,
            enemy_capacity: MAX_ENEMIES,

            projectile_capacity: MAX_PROJECTILES,
            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,
            base_cooldown: BASE_COOLDOWN,
            fire_rate_increase: FIRE_RATE_INCREASE,
            min_cooldown: MIN_COOLDOWN,
            shooting_range: SHOOTING_RANGE,

            wave_duration: WAVE_DURATION,
            initial_spawn_chance: INITIAL_SPAWN_CHANCE,
            spawn_chance_step: SPAWN_CHANCE_STEP,
            powerup_kill_interval: POWERUP_KILL_INTERVAL,
            powerup_radius: POWERUP_RADIUS,
            powerup_min_player_distance: POWERUP_MIN_PLAYER_DISTANCE,
            powerup_edge_margin: POWERUP_EDGE_MARGIN,

            intro_duration: INTRO_DURATION,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Seconds between shots after `collected` power-ups.
    ///
    /// The linear reduction goes to zero (and then negative) past
    /// `1 / fire_rate_increase` power-ups, so it is floored at `min_cooldown`.
    pub fn effective_cooldown(&self, collected: u32) -> f32 {
        let scale = 1.0 - collected as f32 * self.fire_rate_increase;
        (self.base_cooldown * scale).max(self.min_cooldown)
    }

    /// Playfield size as a vector
    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }
}

//! Wave Survivor - A top-down arena survival shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entity pools, targeting, combat, waves)
//! - `scene`: Intro / menu / playing / game-over state machine
//! - `platform`: Clock, input and randomness capabilities the core consumes
//! - `settings`: Runtime settings and debug overrides
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use scene::{FrameInput, FrameOutcome, Game, GameSnapshot, Scene};
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 400.0;
    pub const PLAYER_START_Y: f32 = 300.0;
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 200.0;
    pub const PLAYER_START_HEALTH: i32 = 10;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 15.0;
    pub const ENEMY_SPEED: f32 = 100.0;
    pub const MAX_ENEMIES: usize = 1000;

    /// Projectile defaults
    pub const MAX_PROJECTILES: usize = 100;
    pub const PROJECTILE_SPEED: f32 = PLAYER_SPEED * 4.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;
    /// Seconds between shots with no power-ups
    pub const BASE_COOLDOWN: f32 = 0.8;
    /// Cooldown reduction per power-up collected (5%)
    pub const FIRE_RATE_INCREASE: f32 = 0.05;
    /// Cooldown never drops below this, however many power-ups are held
    pub const MIN_COOLDOWN: f32 = 0.05;
    pub const SHOOTING_RANGE: f32 = 500.0;

    /// Wave / progression
    pub const WAVE_DURATION: f32 = 30.0;
    /// Percent chance per frame that an enemy spawns
    pub const INITIAL_SPAWN_CHANCE: i32 = 2;
    pub const SPAWN_CHANCE_STEP: i32 = 1;
    /// A power-up appears every N kills
    pub const POWERUP_KILL_INTERVAL: u32 = 10;
    pub const POWERUP_RADIUS: f32 = 15.0;
    pub const POWERUP_MIN_PLAYER_DISTANCE: f32 = 100.0;
    pub const POWERUP_EDGE_MARGIN: i32 = 50;

    /// Scenes
    pub const INTRO_DURATION: f32 = 3.0;

    /// Frame deltas above this are clamped (debugger pauses, window drags)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Unit vector from `from` toward `to`, or zero when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Clamp a circle's center so the whole circle stays inside a `width` x `height` rectangle
#[inline]
pub fn clamp_to_bounds(pos: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, (width - radius).max(radius)),
        pos.y.clamp(radius, (height - radius).max(radius)),
    )
}

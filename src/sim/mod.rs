//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay free of I/O:
//! - Elapsed time comes in as an argument
//! - Randomness only through `RandomSource`
//! - Stable iteration order (pool index order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod pool;
pub mod progression;
pub mod state;
pub mod targeting;
pub mod tick;
pub mod weapon;

pub use collision::{bodies_overlap, circles_overlap, resolve_projectile_hits};
pub use pool::{Pool, PoolFull};
pub use progression::{
    Edge, advance_wave, check_player_death, check_powerup_collection, enemy_on_edge,
    maybe_spawn_powerup, place_powerup, try_spawn_enemy,
};
pub use state::{
    Enemy, FireControl, GameEvent, Player, PowerUp, Progression, Projectile, Session, Snapshot,
};
pub use targeting::{Body, find_nearest};
pub use tick::{TickInput, tick};
pub use weapon::try_fire;

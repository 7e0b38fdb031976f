//! Nearest-target acquisition

use glam::Vec2;

use super::pool::Pool;
use super::state::{Enemy, Player, PowerUp, Projectile};

/// Anything with a circular collision body
pub trait Body {
    fn pos(&self) -> Vec2;
    fn radius(&self) -> f32;
}

impl Body for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}

impl Body for Enemy {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}

impl Body for Projectile {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}

impl Body for PowerUp {
    fn pos(&self) -> Vec2 {
        self.pos
    }
    fn radius(&self) -> f32 {
        self.radius
    }
}

/// Find the live entry closest to `origin`, if it is strictly closer than
/// `max_range`.
///
/// Linear scan; on equal distances the lowest index wins.
pub fn find_nearest<T: Body>(pool: &Pool<T>, origin: Vec2, max_range: f32) -> Option<(usize, &T)> {
    let mut best: Option<(usize, &T)> = None;
    let mut best_dist = max_range;

    for (index, item) in pool.iter().enumerate() {
        let dist = origin.distance(item.pos());
        if dist < best_dist {
            best_dist = dist;
            best = Some((index, item));
        }
    }

    best
}

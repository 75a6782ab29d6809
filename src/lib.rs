//! Sky Raid - A vertical arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions, game state)
//! - `config`: Data-driven session configuration (world, archetypes, difficulty)
//!
//! Rendering, input binding and audio live outside this crate. A driver feeds
//! one [`sim::TickInput`] per step into [`sim::tick`] and reads
//! [`sim::GameState::snapshot`] afterwards.

pub mod config;
pub mod sim;

pub use config::{ConfigError, WorldConfig};

use glam::Vec2;

/// Game configuration constants (defaults for [`WorldConfig`])
pub mod consts {
    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    /// Distance from the bottom of the world at spawn
    pub const PLAYER_START_OFFSET: f32 = 100.0;
    /// Vertical speed (pixels per tick, no inertia)
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Horizontal inertia is multiplied by this every tick
    pub const INERTIA_DECAY: f32 = 0.9;
    /// Inertia added per tick while a direction is held
    pub const INERTIA_NUDGE: f32 = 0.5;
    pub const START_HEALTH: u32 = 3;
    pub const START_LIVES: u32 = 3;
    pub const START_BOMBS: u32 = 3;
    pub const MAX_BOMBS: u32 = 5;
    /// Ticks between shots
    pub const FIRE_RATE: u32 = 10;
    /// Invincibility after taking a hit (ticks)
    pub const INVINCIBILITY_TICKS: u32 = 60;
    /// Spread weapon duration after collecting a power-up (ticks)
    pub const SPREAD_TICKS: u32 = 300;

    /// Player shot defaults
    pub const SHOT_WIDTH: f32 = 5.0;
    pub const SHOT_HEIGHT: f32 = 10.0;
    pub const SHOT_SPEED: f32 = 7.0;

    /// Enemy shot defaults
    pub const ENEMY_SHOT_SPEED: f32 = 4.0;
    pub const ENEMY_SHOT_RADIUS: f32 = 5.0;
    pub const ENEMY_FIRE_DELAY: u32 = 100;

    /// Spawning
    pub const SPAWN_INTERVAL: u32 = 100;
    pub const MIN_SPAWN_INTERVAL: u32 = 20;
    pub const DIFFICULTY_STEP_TICKS: u64 = 1000;
    pub const SPAWN_JITTER: f32 = 20.0;

    /// Pickups
    pub const PICKUP_SIZE: f32 = 30.0;
    pub const PICKUP_SPEED: f32 = 2.0;
    pub const PICKUP_INTERVAL: u32 = 500;
    pub const PICKUP_DROP_CHANCE: f32 = 0.1;
}

/// Unit vector pointing from `from` toward `to` at the given angle convention
/// (y grows downward, angle = atan2(dy, dx)).
#[inline]
pub fn heading(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    let angle = delta.y.atan2(delta.x);
    Vec2::new(angle.cos(), angle.sin())
}

/// Move `current` toward `target` by at most `max_step`, never overshooting
#[inline]
pub fn approach(current: f32, target: f32, max_step: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_step {
        target
    } else {
        current + max_step * delta.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_points_at_target() {
        let dir = heading(Vec2::ZERO, Vec2::new(0.0, 10.0));
        assert!(dir.x.abs() < 0.0001);
        assert!((dir.y - 1.0).abs() < 0.0001);

        let dir = heading(Vec2::new(10.0, 10.0), Vec2::new(0.0, 10.0));
        assert!((dir.x + 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_approach_does_not_overshoot() {
        assert_eq!(approach(0.0, 10.0, 3.0), 3.0);
        assert_eq!(approach(0.0, -10.0, 3.0), -3.0);
        assert_eq!(approach(9.0, 10.0, 3.0), 10.0);
        assert_eq!(approach(5.0, 5.0, 3.0), 5.0);
    }
}

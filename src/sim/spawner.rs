//! Enemy wave spawner and difficulty pacing

use glam::Vec2;

use super::rng::GameRng;
use super::state::{EntityIds, Enemy, Movement};
use crate::config::{Selection, WorldConfig};

/// Wave timer and difficulty counter
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    /// Ticks since the last wave
    pub ticks_since_wave: u32,
    /// Global difficulty level, +1 every `difficulty.step_ticks`
    pub level: u32,
    /// Waves emitted so far
    pub waves: u32,
}

impl Spawner {
    /// Bump the difficulty level on step boundaries. Returns the new level if raised.
    pub fn update_difficulty(&mut self, tick: u64, config: &WorldConfig) -> Option<u32> {
        if tick > 0 && tick.is_multiple_of(config.difficulty.step_ticks) {
            self.level += 1;
            log::info!("Difficulty raised to level {} at tick {}", self.level, tick);
            return Some(self.level);
        }
        None
    }

    /// Ticks between waves at the current difficulty
    pub fn current_interval(&self, tick: u64, config: &WorldConfig) -> u32 {
        config
            .difficulty
            .spawn_interval(config.spawn_interval, self.level, tick)
    }

    /// Emit a wave when the timer elapses
    pub fn maybe_spawn(
        &mut self,
        tick: u64,
        config: &WorldConfig,
        rng: &mut GameRng,
        ids: &mut EntityIds,
    ) -> Vec<Enemy> {
        self.ticks_since_wave += 1;
        if self.ticks_since_wave < self.current_interval(tick, config) {
            return Vec::new();
        }
        self.ticks_since_wave = 0;

        let archetype_idx = match config.selection {
            Selection::Random => rng.index(config.archetypes.len()),
            Selection::Cycle => self.waves as usize % config.archetypes.len(),
        };
        let count = rng.range_inclusive(config.wave_size.min, config.wave_size.max);
        self.waves += 1;

        let wave = build_wave(archetype_idx, count, tick, config, rng, ids);
        log::debug!(
            "Wave {} at tick {}: {} x '{}'",
            self.waves,
            tick,
            count,
            config.archetypes[archetype_idx].name
        );
        wave
    }
}

/// Lay out `count` enemies evenly across the width, just above the top edge
fn build_wave(
    archetype_idx: usize,
    count: u32,
    tick: u64,
    config: &WorldConfig,
    rng: &mut GameRng,
    ids: &mut EntityIds,
) -> Vec<Enemy> {
    let archetype = &config.archetypes[archetype_idx];
    let width = config.bounds.width;
    let max_x = (width - archetype.width).max(0.0);
    let slot = width / count as f32;
    let speed = archetype.base_speed * config.difficulty.stage_at(tick).speed_multiplier;

    (0..count)
        .map(|i| {
            let centered = slot * i as f32 + (slot - archetype.width) / 2.0;
            let x = (centered + rng.jitter(config.jitter)).clamp(0.0, max_x);
            Enemy {
                id: ids.next_id(),
                archetype: archetype_idx,
                pos: Vec2::new(x, -archetype.height),
                size: Vec2::new(archetype.width, archetype.height),
                speed,
                health: archetype.spawn_health(),
                movement: Movement::from_pattern(archetype.pattern, x),
                lifetime: 0,
                shoot_chance: archetype.shoot_chance,
                fire_delay: archetype.fire_delay,
                shot: archetype.shot,
                score: archetype.score,
            }
        })
        .collect()
}

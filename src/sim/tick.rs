//! Fixed-step simulation tick
//!
//! Core game loop that advances the simulation deterministically. Phase order
//! within a tick is fixed: clock, player, spawner, enemy AI, projectiles,
//! collisions, pickups, then the game-over check.

use super::state::{GameEvent, GamePhase, GameState};
use super::{ai, collision, pickup, player, projectile};

/// Abstract actions held during a tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub fire: bool,
    pub use_bomb: bool,
}

impl TickInput {
    const LEFT: u8 = 1 << 0;
    const RIGHT: u8 = 1 << 1;
    const UP: u8 = 1 << 2;
    const DOWN: u8 = 1 << 3;
    const FIRE: u8 = 1 << 4;
    const BOMB: u8 = 1 << 5;

    /// Decode a packed input byte (bits: left, right, up, down, fire, bomb)
    pub fn from_bits(bits: u8) -> Self {
        Self {
            move_left: bits & Self::LEFT != 0,
            move_right: bits & Self::RIGHT != 0,
            move_up: bits & Self::UP != 0,
            move_down: bits & Self::DOWN != 0,
            fire: bits & Self::FIRE != 0,
            use_bomb: bits & Self::BOMB != 0,
        }
    }

    /// Pack into an input byte
    pub fn to_bits(self) -> u8 {
        let mut bits = 0;
        for (held, bit) in [
            (self.move_left, Self::LEFT),
            (self.move_right, Self::RIGHT),
            (self.move_up, Self::UP),
            (self.move_down, Self::DOWN),
            (self.fire, Self::FIRE),
            (self.use_bomb, Self::BOMB),
        ] {
            if held {
                bits |= bit;
            }
        }
        bits
    }
}

/// Advance the game state by one fixed step
pub fn tick(state: &mut GameState, input: &TickInput) {
    // GameOver is terminal
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.events.clear();
    let now = state.clock.advance();
    let bounds = state.config.bounds;

    // --- Player ---
    let output = player::update(
        &mut state.world.player,
        input,
        &state.config.player,
        &bounds,
        &mut state.ids,
    );
    state.world.player_shots.extend(output.shots);
    if output.bomb {
        let cleared = state.world.clear_hostiles();
        log::debug!("Bomb at tick {}: cleared {} enemies", now, cleared);
        state.events.push(GameEvent::BombDetonated {
            enemies_cleared: cleared,
        });
    }

    // --- Spawning ---
    if let Some(level) = state.spawner.update_difficulty(now, &state.config) {
        state.events.push(GameEvent::DifficultyRaised { level });
    }
    // The blast also swallows this tick's wave
    if !output.bomb {
        let wave = state
            .spawner
            .maybe_spawn(now, &state.config, &mut state.rng, &mut state.ids);
        if let Some(first) = wave.first() {
            state.events.push(GameEvent::WaveSpawned {
                archetype: first.archetype,
                count: wave.len() as u32,
            });
        }
        state.world.enemies.extend(wave);
    }

    // --- Enemy AI ---
    let shots = ai::update_enemies(
        &mut state.world.enemies,
        &state.world.player,
        &bounds,
        &state.config.enemy_shot,
        &mut state.rng,
        &mut state.ids,
    );
    state.world.enemy_shots.extend(shots);

    // --- Projectiles ---
    projectile::advance(&mut state.world.player_shots, &bounds);
    projectile::advance(&mut state.world.enemy_shots, &bounds);

    // --- Collisions ---
    let outcome = collision::resolve(
        &mut state.world,
        &state.config,
        &mut state.rng,
        &mut state.ids,
        &mut state.events,
    );
    state.score += outcome.score;
    state.kills += outcome.kills;

    // --- Pickups (a downed player collects nothing) ---
    if state.world.player.health > 0 {
        if let Some(drop) = pickup::maybe_drop(
            &mut state.pickup_timer,
            &bounds,
            &state.config.pickups,
            &mut state.rng,
            &mut state.ids,
        ) {
            state.world.pickups.push(drop);
        }
        pickup::advance(
            &mut state.world.pickups,
            &mut state.world.player,
            &bounds,
            &state.config.player,
            &state.config.pickups,
            &mut state.events,
        );
    }

    // --- Game over check ---
    if state.world.player.health == 0 {
        state.phase = GamePhase::GameOver;
        log::info!(
            "Game over at tick {} (score {}, {} kills)",
            now,
            state.score,
            state.kills
        );
        state.events.push(GameEvent::GameOver { tick: now });
    }
}

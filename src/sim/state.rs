//! Game state and core simulation types
//!
//! Everything a session mutates lives in [`GameState`]; entity collections are
//! grouped in [`World`] so each system can borrow just the slices it owns.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::GameRng;
use super::shape::{Rect, Shape};
use super::spawner::Spawner;
use crate::config::{ConfigError, PatternKind, PlayerConfig, ShotKind, WorldConfig};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (terminal)
    GameOver,
}

/// Monotonic logical clock, advanced once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Clock {
    tick: u64,
}

impl Clock {
    /// Advance by one tick and return the new tick
    pub fn advance(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    pub fn now(&self) -> u64 {
        self.tick
    }
}

/// Entity ID allocator
#[derive(Debug, Clone)]
pub struct EntityIds {
    next: u32,
}

impl Default for EntityIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl EntityIds {
    pub fn next_id(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Player weapon tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeaponTier {
    /// One centered shot
    #[default]
    Single,
    /// Centered shot plus one on each wing
    Spread,
}

/// The player's ship
#[derive(Debug, Clone)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal inertia (pixels per tick)
    pub inertia: f32,
    pub health: u32,
    pub lives: u32,
    pub bombs: u32,
    /// Ticks since the last shot
    pub fire_cooldown: u32,
    pub fire_rate: u32,
    /// > 0 means immune to damage
    pub invincible_ticks: u32,
    pub weapon: WeaponTier,
    /// Remaining ticks of a timed weapon tier
    pub weapon_ticks: u32,
}

impl Player {
    /// Spawn centered near the bottom of the world, ready to fire
    pub fn new(config: &PlayerConfig, world_width: f32, world_height: f32) -> Self {
        let y = (world_height - crate::consts::PLAYER_START_OFFSET)
            .min(world_height - config.height)
            .max(0.0);
        Self {
            pos: Vec2::new((world_width - config.width) / 2.0, y),
            size: Vec2::new(config.width, config.height),
            inertia: 0.0,
            health: config.health,
            lives: config.lives,
            bombs: config.bombs,
            fire_cooldown: config.fire_rate,
            fire_rate: config.fire_rate,
            invincible_ticks: 0,
            weapon: WeaponTier::Single,
            weapon_ticks: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn is_invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    /// Apply damage unless invincible. Returns true if health changed.
    ///
    /// The counter is decremented at the start of every later tick, so it is
    /// set one past the window to cover `invincibility_ticks` full ticks.
    pub fn take_damage(&mut self, amount: u32, invincibility_ticks: u32) -> bool {
        if self.is_invincible() || amount == 0 {
            return false;
        }
        self.health = self.health.saturating_sub(amount);
        if invincibility_ticks > 0 {
            self.invincible_ticks = invincibility_ticks.saturating_add(1);
        }
        true
    }
}

/// Per-pattern movement state, carrying only what its pattern needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Movement {
    Straight,
    Zigzag {
        step: f32,
        /// +1.0 right, -1.0 left
        direction: f32,
    },
    Dive {
        trigger_ticks: u32,
        boost: f32,
        /// Velocity locked in when the dive starts
        committed: Option<Vec2>,
    },
    Follow {
        rate: f32,
    },
    BossWeave {
        amplitude: f32,
        wavelength: f32,
        /// Center of the sweep
        anchor_x: f32,
    },
}

impl Movement {
    /// Fresh movement state for a pattern, spawned at `x`
    pub fn from_pattern(kind: PatternKind, x: f32) -> Self {
        match kind {
            PatternKind::Straight => Movement::Straight,
            PatternKind::Zigzag { step } => Movement::Zigzag {
                step,
                direction: 1.0,
            },
            PatternKind::Dive {
                trigger_ticks,
                boost,
            } => Movement::Dive {
                trigger_ticks,
                boost,
                committed: None,
            },
            PatternKind::Follow { rate } => Movement::Follow { rate },
            PatternKind::BossWeave {
                amplitude,
                wavelength,
            } => Movement::BossWeave {
                amplitude,
                wavelength,
                anchor_x: x,
            },
        }
    }
}

/// An enemy ship
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    /// Index into the archetype table
    pub archetype: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Base fall speed after difficulty scaling
    pub speed: f32,
    pub health: u32,
    pub movement: Movement,
    /// Ticks alive
    pub lifetime: u32,
    pub shoot_chance: f32,
    pub fire_delay: u32,
    pub shot: ShotKind,
    pub score: u32,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect().center()
    }

    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Enemy,
}

/// A projectile (rectangle anchored top-left, circle anchored at center)
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub shape: Shape,
    pub owner: Owner,
    pub damage: u32,
}

impl Projectile {
    pub fn bounds(&self) -> Rect {
        self.shape.bounds_at(self.pos)
    }
}

/// Pickup types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    /// Restore health up to the maximum
    Health,
    /// Temporary spread weapon
    Spread,
    /// One extra bomb
    Bomb,
}

impl PickupKind {
    pub const ALL: [PickupKind; 3] = [PickupKind::Health, PickupKind::Spread, PickupKind::Bomb];
}

/// A falling pickup
#[derive(Debug, Clone)]
pub struct Pickup {
    pub id: u32,
    pub kind: PickupKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Pickup {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Things that happened during a tick, for presentation and audio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WaveSpawned { archetype: usize, count: u32 },
    EnemyDestroyed { id: u32, archetype: usize, score: u32 },
    PlayerHit { damage: u32, health: u32 },
    BombDetonated { enemies_cleared: usize },
    PickupCollected { kind: PickupKind },
    DifficultyRaised { level: u32 },
    GameOver { tick: u64 },
}

/// All live entities
#[derive(Debug, Clone)]
pub struct World {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub player_shots: Vec<Projectile>,
    pub enemy_shots: Vec<Projectile>,
    pub pickups: Vec<Pickup>,
}

impl World {
    /// Bomb: drop every enemy and enemy projectile at once
    pub fn clear_hostiles(&mut self) -> usize {
        let cleared = self.enemies.len();
        self.enemies.clear();
        self.enemy_shots.clear();
        cleared
    }
}

/// Complete session state
///
/// The config is fixed once the session starts; callers only get to read it.
///
/// ```compile_fail
/// use sky_raid::{WorldConfig, sim::GameState};
///
/// let mut state = GameState::new(WorldConfig::default()).unwrap();
/// state.config.archetypes.clear();
/// ```
#[derive(Debug, Clone)]
pub struct GameState {
    /// Validated session config
    pub(crate) config: WorldConfig,
    pub rng: GameRng,
    pub clock: Clock,
    pub phase: GamePhase,
    pub world: World,
    pub spawner: Spawner,
    /// Ticks since the last periodic pickup drop
    pub pickup_timer: u32,
    pub ids: EntityIds,
    pub score: u64,
    pub kills: u32,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Validate the config and start a session
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let player = Player::new(&config.player, config.bounds.width, config.bounds.height);
        Ok(Self {
            rng: GameRng::new(config.seed),
            clock: Clock::default(),
            phase: GamePhase::Playing,
            world: World {
                player,
                enemies: Vec::new(),
                player_shots: Vec::new(),
                enemy_shots: Vec::new(),
                pickups: Vec::new(),
            },
            spawner: Spawner::default(),
            pickup_timer: 0,
            ids: EntityIds::default(),
            score: 0,
            kills: 0,
            events: Vec::new(),
            config,
        })
    }

    /// The validated config this session runs with
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Current tick
    pub fn tick_count(&self) -> u64 {
        self.clock.now()
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

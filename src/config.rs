//! Session configuration
//!
//! Everything here is supplied once at session start and stays immutable for
//! the run. Configs round-trip through JSON; missing fields fall back to the
//! defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Configuration errors, reported when a session is constructed
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("World bounds must be positive and finite, got {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
    #[error("Player ({width}x{height}) does not fit inside the world")]
    PlayerTooLarge { width: f32, height: f32 },
    #[error("Fire cooldown threshold must be at least 1 tick")]
    ZeroFireRate,
    #[error("Player must start with at least 1 health")]
    ZeroStartHealth,
    #[error("Starting health {health} exceeds maximum health {max}")]
    HealthAboveMax { health: u32, max: u32 },
    #[error("{0} speed must be positive and finite")]
    InvalidSpeed(&'static str),
    #[error("{0} size must be positive and finite")]
    InvalidSize(&'static str),
    #[error("{0} damage must be at least 1")]
    ZeroShotDamage(&'static str),
    #[error("Archetype table is empty")]
    NoArchetypes,
    #[error("Archetype '{0}' has a non-positive size")]
    InvalidArchetypeSize(String),
    #[error("Archetype '{0}' base speed must be positive and finite")]
    InvalidArchetypeSpeed(String),
    #[error("Archetype '{0}' has zero health")]
    ZeroArchetypeHealth(String),
    #[error("Archetype '{name}' shoot chance {chance} is outside [0, 1]")]
    InvalidShootChance { name: String, chance: f32 },
    #[error("Archetype '{0}' has invalid pattern parameters")]
    InvalidPattern(String),
    #[error("Wave size range [{min}, {max}] is malformed")]
    InvalidWaveSize { min: u32, max: u32 },
    #[error("Spawn interval must be at least 1 tick")]
    ZeroSpawnInterval,
    #[error("Difficulty step must be at least 1 tick")]
    ZeroDifficultyStep,
    #[error("Difficulty stage {0} is out of order or lowers a multiplier")]
    InvalidDifficultyStage(usize),
    #[error("Pickup drop chance {0} is outside [0, 1]")]
    InvalidDropChance(f32),
}

/// World bounds. Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
        }
    }
}

/// Player shot parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotConfig {
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub damage: u32,
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self {
            width: SHOT_WIDTH,
            height: SHOT_HEIGHT,
            speed: SHOT_SPEED,
            damage: 1,
        }
    }
}

/// Enemy shot parameters (rectangles for straight shots, circles for aimed)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyShotConfig {
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    pub speed: f32,
    pub damage: u32,
}

impl Default for EnemyShotConfig {
    fn default() -> Self {
        Self {
            width: SHOT_WIDTH,
            height: SHOT_HEIGHT,
            radius: ENEMY_SHOT_RADIUS,
            speed: ENEMY_SHOT_SPEED,
            damage: 1,
        }
    }
}

/// Player tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub width: f32,
    pub height: f32,
    /// Vertical speed (pixels per tick)
    pub speed: f32,
    pub inertia_decay: f32,
    pub inertia_nudge: f32,
    pub health: u32,
    pub max_health: u32,
    pub lives: u32,
    pub bombs: u32,
    pub max_bombs: u32,
    /// Cooldown threshold in ticks
    pub fire_rate: u32,
    /// Ticks after a hit during which further damage is ignored (0 disables)
    pub invincibility_ticks: u32,
    pub spread_ticks: u32,
    pub shot: ShotConfig,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            speed: PLAYER_SPEED,
            inertia_decay: INERTIA_DECAY,
            inertia_nudge: INERTIA_NUDGE,
            health: START_HEALTH,
            max_health: START_HEALTH,
            lives: START_LIVES,
            bombs: START_BOMBS,
            max_bombs: MAX_BOMBS,
            fire_rate: FIRE_RATE,
            invincibility_ticks: INVINCIBILITY_TICKS,
            spread_ticks: SPREAD_TICKS,
            shot: ShotConfig::default(),
        }
    }
}

/// Movement pattern of an archetype, with its tuning parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PatternKind {
    /// Falls straight down
    Straight,
    /// Falls while sweeping sideways `step` pixels per tick, bouncing off the edges
    Zigzag { step: f32 },
    /// Falls straight until it has lived more than `trigger_ticks`, then commits
    /// to a dive at `boost` x speed
    Dive { trigger_ticks: u32, boost: f32 },
    /// Falls while drifting toward the player at `rate` x speed per tick
    Follow { rate: f32 },
    /// Sweeps side to side as a sine of its own depth
    BossWeave { amplitude: f32, wavelength: f32 },
}

/// How an archetype fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotKind {
    /// Axis-aligned rectangle falling straight down
    #[default]
    Straight,
    /// Circle launched toward the player's current position
    Aimed,
}

/// An enemy template
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Archetype {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub base_speed: f32,
    /// Color or sprite tag passed through to the renderer
    pub visual: String,
    /// Per-tick fire probability
    pub shoot_chance: f32,
    /// Rolls to fire only once its lifetime exceeds this many ticks
    pub fire_delay: u32,
    pub pattern: PatternKind,
    /// Defaults to 1 when unspecified
    pub health: Option<u32>,
    pub shot: ShotKind,
    pub score: u32,
}

impl Default for Archetype {
    fn default() -> Self {
        Self {
            name: "basic".into(),
            width: 50.0,
            height: 50.0,
            base_speed: 2.0,
            visual: "green".into(),
            shoot_chance: 0.01,
            fire_delay: ENEMY_FIRE_DELAY,
            pattern: PatternKind::Straight,
            health: None,
            shot: ShotKind::Straight,
            score: 100,
        }
    }
}

impl Archetype {
    /// Spawn health (at least 1)
    pub fn spawn_health(&self) -> u32 {
        self.health.unwrap_or(1)
    }

    /// The classic five-enemy table
    pub fn default_table() -> Vec<Archetype> {
        vec![
            Archetype::default(),
            Archetype {
                name: "fast".into(),
                width: 40.0,
                height: 40.0,
                base_speed: 3.0,
                visual: "purple".into(),
                shoot_chance: 0.02,
                pattern: PatternKind::Zigzag { step: 2.0 },
                ..Default::default()
            },
            Archetype {
                name: "tank".into(),
                width: 60.0,
                height: 60.0,
                base_speed: 1.5,
                visual: "red".into(),
                shoot_chance: 0.005,
                pattern: PatternKind::BossWeave {
                    amplitude: 80.0,
                    wavelength: 60.0,
                },
                health: Some(3),
                score: 300,
                ..Default::default()
            },
            Archetype {
                name: "tracker".into(),
                width: 50.0,
                height: 50.0,
                base_speed: 2.5,
                visual: "orange".into(),
                shoot_chance: 0.03,
                pattern: PatternKind::Follow { rate: 0.5 },
                shot: ShotKind::Aimed,
                score: 150,
                ..Default::default()
            },
            Archetype {
                name: "diver".into(),
                width: 50.0,
                height: 50.0,
                base_speed: 3.0,
                visual: "yellow".into(),
                shoot_chance: 0.02,
                pattern: PatternKind::Dive {
                    trigger_ticks: 50,
                    boost: 2.0,
                },
                score: 150,
                ..Default::default()
            },
        ]
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidArchetypeSize(self.name.clone()));
        }
        if !positive(self.base_speed) {
            return Err(ConfigError::InvalidArchetypeSpeed(self.name.clone()));
        }
        if self.health == Some(0) {
            return Err(ConfigError::ZeroArchetypeHealth(self.name.clone()));
        }
        if !(0.0..=1.0).contains(&self.shoot_chance) {
            return Err(ConfigError::InvalidShootChance {
                name: self.name.clone(),
                chance: self.shoot_chance,
            });
        }
        let pattern_ok = match self.pattern {
            PatternKind::Straight => true,
            PatternKind::Zigzag { step } => step >= 0.0,
            PatternKind::Dive { boost, .. } => boost > 0.0,
            PatternKind::Follow { rate } => rate >= 0.0,
            PatternKind::BossWeave {
                amplitude,
                wavelength,
            } => amplitude >= 0.0 && wavelength > 0.0,
        };
        if !pattern_ok {
            return Err(ConfigError::InvalidPattern(self.name.clone()));
        }
        Ok(())
    }
}

/// How the spawner picks an archetype for each wave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Random,
    /// Walk the table in order, one archetype per wave
    Cycle,
}

/// Inclusive wave size range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveSize {
    pub min: u32,
    pub max: u32,
}

impl Default for WaveSize {
    fn default() -> Self {
        Self { min: 1, max: 3 }
    }
}

/// Multipliers that apply from `at_tick` onward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyStage {
    pub at_tick: u64,
    pub speed_multiplier: f32,
    pub spawn_rate_multiplier: f32,
}

/// Difficulty pacing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultySchedule {
    /// Difficulty level increments every `step_ticks`
    pub step_ticks: u64,
    /// Spawn interval shrinks by this many ticks per level
    pub interval_step: u32,
    /// Floor for the effective spawn interval (capped at the scaled base)
    pub min_interval: u32,
    /// Sorted by `at_tick`, multipliers never decrease
    pub stages: Vec<DifficultyStage>,
}

impl Default for DifficultySchedule {
    fn default() -> Self {
        Self {
            step_ticks: DIFFICULTY_STEP_TICKS,
            interval_step: 1,
            min_interval: MIN_SPAWN_INTERVAL,
            stages: vec![
                DifficultyStage {
                    at_tick: 0,
                    speed_multiplier: 1.0,
                    spawn_rate_multiplier: 1.0,
                },
                DifficultyStage {
                    at_tick: 5_000,
                    speed_multiplier: 1.25,
                    spawn_rate_multiplier: 1.25,
                },
                DifficultyStage {
                    at_tick: 15_000,
                    speed_multiplier: 1.5,
                    spawn_rate_multiplier: 1.5,
                },
            ],
        }
    }
}

impl DifficultySchedule {
    /// Stage in effect at `tick` (neutral when no stage has started yet)
    pub fn stage_at(&self, tick: u64) -> DifficultyStage {
        self.stages
            .iter()
            .rev()
            .find(|s| s.at_tick <= tick)
            .copied()
            .unwrap_or(DifficultyStage {
                at_tick: 0,
                speed_multiplier: 1.0,
                spawn_rate_multiplier: 1.0,
            })
    }

    /// Effective spawn interval for a base interval, level and tick
    pub fn spawn_interval(&self, base: u32, level: u32, tick: u64) -> u32 {
        let stage = self.stage_at(tick);
        let scaled = (base as f32 / stage.spawn_rate_multiplier).round() as u32;
        // The floor only limits the per-level reduction, it never slows a fast base
        let floor = self.min_interval.min(scaled);
        scaled
            .saturating_sub(level.saturating_mul(self.interval_step))
            .max(floor)
            .max(1)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.step_ticks == 0 {
            return Err(ConfigError::ZeroDifficultyStep);
        }
        let mut prev: Option<&DifficultyStage> = None;
        for (i, stage) in self.stages.iter().enumerate() {
            let positive = stage.speed_multiplier > 0.0 && stage.spawn_rate_multiplier > 0.0;
            let monotonic = prev.is_none_or(|p| {
                stage.at_tick > p.at_tick
                    && stage.speed_multiplier >= p.speed_multiplier
                    && stage.spawn_rate_multiplier >= p.spawn_rate_multiplier
            });
            if !positive || !monotonic {
                return Err(ConfigError::InvalidDifficultyStage(i));
            }
            prev = Some(stage);
        }
        Ok(())
    }
}

/// What happens when an enemy body touches the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPolicy {
    pub damage: u32,
    /// Remove the enemy on contact (otherwise it keeps flying)
    pub removes_enemy: bool,
}

impl Default for ContactPolicy {
    fn default() -> Self {
        Self {
            damage: 1,
            removes_enemy: true,
        }
    }
}

/// Pickup tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    pub size: f32,
    pub speed: f32,
    /// Ticks between periodic drops (0 disables)
    pub interval: u32,
    /// Chance a destroyed enemy leaves a pickup behind
    pub drop_chance: f32,
    /// Health restored by a health pack
    pub heal: u32,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            size: PICKUP_SIZE,
            speed: PICKUP_SPEED,
            interval: PICKUP_INTERVAL,
            drop_chance: PICKUP_DROP_CHANCE,
            heal: 1,
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// RNG seed for the session
    pub seed: u64,
    pub bounds: Bounds,
    pub player: PlayerConfig,
    pub archetypes: Vec<Archetype>,
    pub selection: Selection,
    pub wave_size: WaveSize,
    /// Base ticks between waves
    pub spawn_interval: u32,
    /// Max horizontal jitter around each enemy's even slot
    pub jitter: f32,
    pub difficulty: DifficultySchedule,
    pub contact: ContactPolicy,
    pub enemy_shot: EnemyShotConfig,
    pub pickups: PickupConfig,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            bounds: Bounds::default(),
            player: PlayerConfig::default(),
            archetypes: Archetype::default_table(),
            selection: Selection::Random,
            wave_size: WaveSize::default(),
            spawn_interval: SPAWN_INTERVAL,
            jitter: SPAWN_JITTER,
            difficulty: DifficultySchedule::default(),
            contact: ContactPolicy::default(),
            enemy_shot: EnemyShotConfig::default(),
            pickups: PickupConfig::default(),
        }
    }
}

impl WorldConfig {
    /// Default config with the given seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!(
            "Loaded config from {} ({} archetypes)",
            path.display(),
            config.archetypes.len()
        );
        Ok(config)
    }

    /// Reject configurations the simulation cannot run in
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Bounds { width, height } = self.bounds;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidBounds { width, height });
        }

        let player = &self.player;
        if !(player.width > 0.0 && player.height > 0.0)
            || player.width > width
            || player.height > height
        {
            return Err(ConfigError::PlayerTooLarge {
                width: player.width,
                height: player.height,
            });
        }
        if player.fire_rate == 0 {
            return Err(ConfigError::ZeroFireRate);
        }
        if player.health == 0 {
            return Err(ConfigError::ZeroStartHealth);
        }
        if player.health > player.max_health {
            return Err(ConfigError::HealthAboveMax {
                health: player.health,
                max: player.max_health,
            });
        }
        self.validate_motion()?;

        if self.archetypes.is_empty() {
            return Err(ConfigError::NoArchetypes);
        }
        for archetype in &self.archetypes {
            archetype.validate()?;
        }

        let WaveSize { min, max } = self.wave_size;
        if min == 0 || min > max {
            return Err(ConfigError::InvalidWaveSize { min, max });
        }
        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        self.difficulty.validate()?;

        let chance = self.pickups.drop_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(ConfigError::InvalidDropChance(chance));
        }

        Ok(())
    }

    /// Everything that moves must eventually reach a removal edge
    fn validate_motion(&self) -> Result<(), ConfigError> {
        let shot = &self.player.shot;
        if !(positive(shot.width) && positive(shot.height)) {
            return Err(ConfigError::InvalidSize("Player shot"));
        }
        if !positive(shot.speed) {
            return Err(ConfigError::InvalidSpeed("Player shot"));
        }
        if shot.damage == 0 {
            return Err(ConfigError::ZeroShotDamage("Player shot"));
        }

        let enemy_shot = &self.enemy_shot;
        if !(positive(enemy_shot.width) && positive(enemy_shot.height) && positive(enemy_shot.radius)) {
            return Err(ConfigError::InvalidSize("Enemy shot"));
        }
        if !positive(enemy_shot.speed) {
            return Err(ConfigError::InvalidSpeed("Enemy shot"));
        }
        if enemy_shot.damage == 0 {
            return Err(ConfigError::ZeroShotDamage("Enemy shot"));
        }

        if !positive(self.pickups.size) {
            return Err(ConfigError::InvalidSize("Pickup"));
        }
        if !positive(self.pickups.speed) {
            return Err(ConfigError::InvalidSpeed("Pickup"));
        }
        Ok(())
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.archetypes.len(), 5);
        assert_eq!(config.archetypes[2].spawn_health(), 3);
        assert_eq!(config.archetypes[0].spawn_health(), 1);
    }

    #[test]
    fn test_rejects_zero_fire_rate() {
        let mut config = WorldConfig::default();
        config.player.fire_rate = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroFireRate)));
    }

    #[test]
    fn test_rejects_empty_archetypes() {
        let config = WorldConfig {
            archetypes: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoArchetypes)));
    }

    #[test]
    fn test_rejects_zero_bounds() {
        let config = WorldConfig {
            bounds: Bounds {
                width: 0.0,
                height: 600.0,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_wave_size() {
        let config = WorldConfig {
            wave_size: WaveSize { min: 4, max: 2 },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidWaveSize { min: 4, max: 2 })
        ));

        let config = WorldConfig {
            wave_size: WaveSize { min: 0, max: 2 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_start_health() {
        let mut config = WorldConfig::default();
        config.player.health = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroStartHealth)));
    }

    #[test]
    fn test_rejects_health_above_max() {
        let mut config = WorldConfig::default();
        config.player.health = 4;
        config.player.max_health = 3;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::HealthAboveMax { health: 4, max: 3 })
        ));
    }

    #[test]
    fn test_rejects_stalled_player_shot() {
        let mut config = WorldConfig::default();
        config.player.shot.speed = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeed("Player shot"))));

        config.player.shot.speed = -7.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_harmless_player_shot() {
        let mut config = WorldConfig::default();
        config.player.shot.damage = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroShotDamage("Player shot"))));
    }

    #[test]
    fn test_rejects_stalled_enemy_shot() {
        let mut config = WorldConfig::default();
        config.enemy_shot.speed = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeed("Enemy shot"))));
    }

    #[test]
    fn test_rejects_zero_enemy_shot_radius() {
        let mut config = WorldConfig::default();
        config.enemy_shot.radius = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSize("Enemy shot"))));
    }

    #[test]
    fn test_rejects_stalled_pickups() {
        let mut config = WorldConfig::default();
        config.pickups.speed = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeed("Pickup"))));
    }

    #[test]
    fn test_rejects_zero_pickup_size() {
        let mut config = WorldConfig::default();
        config.pickups.size = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSize("Pickup"))));
    }

    #[test]
    fn test_rejects_stalled_archetype() {
        let mut config = WorldConfig::default();
        config.archetypes[0].base_speed = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidArchetypeSpeed(name)) if name == "basic"
        ));
    }

    #[test]
    fn test_rejects_decreasing_difficulty() {
        let mut config = WorldConfig::default();
        config.difficulty.stages[1].spawn_rate_multiplier = 0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDifficultyStage(1))
        ));
    }

    #[test]
    fn test_spawn_interval_never_increases() {
        let schedule = DifficultySchedule::default();
        let mut last = u32::MAX;
        for tick in (0..40_000u64).step_by(500) {
            let level = (tick / schedule.step_ticks) as u32;
            let interval = schedule.spawn_interval(100, level, tick);
            assert!(interval <= last);
            assert!(interval >= schedule.min_interval);
            last = interval;
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WorldConfig::from_json(
            r#"{
                "seed": 42,
                "spawn_interval": 30,
                "archetypes": [
                    { "name": "weaver", "pattern": { "kind": "boss_weave", "amplitude": 40.0, "wavelength": 30.0 }, "health": 5 }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.spawn_interval, 30);
        assert_eq!(config.player.fire_rate, FIRE_RATE);
        assert_eq!(config.archetypes[0].spawn_health(), 5);
        assert_eq!(config.archetypes[0].width, 50.0);
    }

    #[test]
    fn test_json_validation_errors_surface() {
        let result = WorldConfig::from_json(r#"{ "archetypes": [] }"#);
        assert!(matches!(result, Err(ConfigError::NoArchetypes)));

        let result = WorldConfig::from_json("not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}

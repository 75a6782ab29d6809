//! Read-only view of a session for renderers
//!
//! Owned copies of everything a presentation layer needs to draw one frame.
//! Nothing here feeds back into the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::shape::Shape;
use super::state::{GamePhase, GameState, Owner, PickupKind, WeaponTier};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Vec2,
    pub size: Vec2,
    pub health: u32,
    pub lives: u32,
    pub bombs: u32,
    pub invincible: bool,
    pub weapon: WeaponTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub health: u32,
    /// Archetype visual tag (color or sprite name)
    pub visual: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub pos: Vec2,
    pub shape: Shape,
    pub owner: Owner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupView {
    pub id: u32,
    pub kind: PickupKind,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Everything drawable after a tick, in stable simulation order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub phase: GamePhase,
    pub score: u64,
    pub difficulty: u32,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub player_shots: Vec<ProjectileView>,
    pub enemy_shots: Vec<ProjectileView>,
    pub pickups: Vec<PickupView>,
}

impl GameState {
    /// Capture the current state for presentation
    pub fn snapshot(&self) -> Snapshot {
        let world = &self.world;
        let player = &world.player;
        let projectile_view = |p: &super::state::Projectile| ProjectileView {
            id: p.id,
            pos: p.pos,
            shape: p.shape,
            owner: p.owner,
        };

        Snapshot {
            tick: self.clock.now(),
            phase: self.phase,
            score: self.score,
            difficulty: self.spawner.level,
            player: PlayerView {
                pos: player.pos,
                size: player.size,
                health: player.health,
                lives: player.lives,
                bombs: player.bombs,
                invincible: player.is_invincible(),
                weapon: player.weapon,
            },
            enemies: world
                .enemies
                .iter()
                .map(|e| EnemyView {
                    id: e.id,
                    pos: e.pos,
                    size: e.size,
                    health: e.health,
                    visual: self
                        .config
                        .archetypes
                        .get(e.archetype)
                        .map(|a| a.visual.clone())
                        .unwrap_or_default(),
                })
                .collect(),
            player_shots: world.player_shots.iter().map(projectile_view).collect(),
            enemy_shots: world.enemy_shots.iter().map(projectile_view).collect(),
            pickups: world
                .pickups
                .iter()
                .map(|p| PickupView {
                    id: p.id,
                    kind: p.kind,
                    pos: p.pos,
                    size: p.size,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::WorldConfig;
    use crate::sim::{GameState, TickInput, tick};

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(WorldConfig::with_seed(11)).unwrap();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire);
        let snap = state.snapshot();
        assert_eq!(snap.tick, 1);
        assert_eq!(snap.player.health, 3);
        assert_eq!(snap.player.bombs, 3);
        assert!(!snap.player.invincible);
        assert_eq!(snap.player_shots.len(), 1);
        assert!(snap.enemies.is_empty());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(WorldConfig::with_seed(11)).unwrap();
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"phase\":\"Playing\""));
    }
}

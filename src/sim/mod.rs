//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order within each collection)
//! - No rendering, input or platform dependencies

pub mod ai;
pub mod collision;
pub mod pickup;
pub mod player;
pub mod projectile;
pub mod rng;
pub mod shape;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{CollisionOutcome, circle_rect_overlap, rects_overlap};
pub use rng::GameRng;
pub use shape::{Rect, Shape};
pub use snapshot::{EnemyView, PickupView, PlayerView, ProjectileView, Snapshot};
pub use spawner::Spawner;
pub use state::{
    Clock, Enemy, EntityIds, GameEvent, GamePhase, GameState, Movement, Owner, Pickup, PickupKind,
    Player, Projectile, WeaponTier, World,
};
pub use tick::{TickInput, tick};

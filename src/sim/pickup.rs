//! Pickups: periodic drops, falling, and collection

use glam::Vec2;

use super::collision::rects_overlap;
use super::player::grant_spread;
use super::rng::GameRng;
use super::state::{EntityIds, GameEvent, Pickup, PickupKind, Player};
use crate::config::{Bounds, PickupConfig, PlayerConfig};

/// Create a pickup centered on `center`
pub fn spawn_at(kind: PickupKind, center: Vec2, config: &PickupConfig, ids: &mut EntityIds) -> Pickup {
    let size = Vec2::splat(config.size);
    Pickup {
        id: ids.next_id(),
        kind,
        pos: center - size * 0.5,
        size,
        speed: config.speed,
    }
}

/// Periodic drop from above the world at a random x
pub fn maybe_drop(
    timer: &mut u32,
    bounds: &Bounds,
    config: &PickupConfig,
    rng: &mut GameRng,
    ids: &mut EntityIds,
) -> Option<Pickup> {
    if config.interval == 0 {
        return None;
    }
    *timer += 1;
    if *timer < config.interval {
        return None;
    }
    *timer = 0;

    let kind = PickupKind::ALL[rng.index(PickupKind::ALL.len())];
    let x = rng.unit() * (bounds.width - config.size).max(0.0);
    Some(Pickup {
        id: ids.next_id(),
        kind,
        pos: Vec2::new(x, -config.size),
        size: Vec2::splat(config.size),
        speed: config.speed,
    })
}

/// Apply a pickup's effect to the player
pub fn apply(kind: PickupKind, player: &mut Player, player_config: &PlayerConfig, config: &PickupConfig) {
    match kind {
        PickupKind::Health => {
            let healed = player.health.saturating_add(config.heal).min(player_config.max_health);
            player.health = player.health.max(healed);
        }
        PickupKind::Spread => grant_spread(player, player_config.spread_ticks),
        PickupKind::Bomb => {
            let stocked = player.bombs.saturating_add(1).min(player_config.max_bombs);
            player.bombs = player.bombs.max(stocked);
        }
    }
}

/// Move pickups down, collect the ones touching the player, drop the ones
/// that fell out of the world
pub fn advance(
    pickups: &mut Vec<Pickup>,
    player: &mut Player,
    bounds: &Bounds,
    player_config: &PlayerConfig,
    config: &PickupConfig,
    events: &mut Vec<GameEvent>,
) {
    let player_rect = player.rect();
    pickups.retain_mut(|pickup| {
        pickup.pos.y += pickup.speed;
        if rects_overlap(&pickup.rect(), &player_rect) {
            apply(pickup.kind, player, player_config, config);
            events.push(GameEvent::PickupCollected { kind: pickup.kind });
            return false;
        }
        pickup.pos.y <= bounds.height
    });
}

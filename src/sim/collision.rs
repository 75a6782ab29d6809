//! Collision detection and resolution
//!
//! Two intersection tests cover every pair in the game: rectangle vs
//! rectangle and circle vs rectangle. Resolution marks hits first and
//! compacts each collection once afterwards, so nothing is removed twice and
//! nothing is skipped by index shifting.

use glam::Vec2;

use super::pickup;
use super::rng::GameRng;
use super::shape::{Rect, Shape};
use super::state::{EntityIds, GameEvent, PickupKind, Projectile, World};
use crate::config::WorldConfig;

/// Axis-aligned rectangle overlap. All four edge comparisons are strict, so
/// rectangles that only touch do not collide.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.min().x < b.max().x && a.max().x > b.min().x && a.min().y < b.max().y && a.max().y > b.min().y
}

/// Circle vs axis-aligned rectangle (boundary-inclusive).
///
/// Works on the distance from the circle center to the rectangle center:
/// too far on either axis is a miss, within the half-extent on either axis is
/// a hit, otherwise the clamped corner distance decides.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let half = rect.half_extents();
    let delta = (center - rect.center()).abs();

    if delta.x > half.x + radius || delta.y > half.y + radius {
        return false;
    }
    if delta.x <= half.x || delta.y <= half.y {
        return true;
    }

    let corner = delta - half;
    corner.length_squared() <= radius * radius
}

/// Test a projectile against a target rectangle using its own shape
pub fn projectile_hits(projectile: &Projectile, target: &Rect) -> bool {
    match projectile.shape {
        Shape::Rect { .. } => rects_overlap(&projectile.bounds(), target),
        Shape::Circle { radius } => circle_rect_overlap(projectile.pos, radius, target),
    }
}

/// What the resolution pass produced beyond entity mutations
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CollisionOutcome {
    pub score: u64,
    pub kills: u32,
}

/// Resolve all pairwise interactions for one tick, in order:
/// 1. player shots vs enemies
/// 2. enemy bodies vs player
/// 3. enemy shots vs player
pub fn resolve(
    world: &mut World,
    config: &WorldConfig,
    rng: &mut GameRng,
    ids: &mut EntityIds,
    events: &mut Vec<GameEvent>,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    // --- Player shots vs enemies ---
    let mut spent = vec![false; world.player_shots.len()];
    for (shot, spent) in world.player_shots.iter().zip(spent.iter_mut()) {
        // First live enemy in order takes the hit
        if let Some(enemy) = world
            .enemies
            .iter_mut()
            .find(|e| !e.is_dead() && projectile_hits(shot, &e.rect()))
        {
            enemy.health = enemy.health.saturating_sub(shot.damage);
            *spent = true;
        }
    }
    compact(&mut world.player_shots, &spent);

    for enemy in world.enemies.iter().filter(|e| e.is_dead()) {
        outcome.score += enemy.score as u64;
        outcome.kills += 1;
        events.push(GameEvent::EnemyDestroyed {
            id: enemy.id,
            archetype: enemy.archetype,
            score: enemy.score,
        });
        if rng.chance(config.pickups.drop_chance) {
            let kind = PickupKind::ALL[rng.index(PickupKind::ALL.len())];
            world
                .pickups
                .push(pickup::spawn_at(kind, enemy.center(), &config.pickups, ids));
        }
    }
    world.enemies.retain(|e| !e.is_dead());

    // --- Enemy bodies vs player ---
    let invincibility = config.player.invincibility_ticks;
    let player_rect = world.player.rect();
    let mut rammed = vec![false; world.enemies.len()];
    for (enemy, rammed) in world.enemies.iter().zip(rammed.iter_mut()) {
        if !rects_overlap(&enemy.rect(), &player_rect) {
            continue;
        }
        let damage = config.contact.damage;
        if world.player.take_damage(damage, invincibility) {
            events.push(GameEvent::PlayerHit {
                damage,
                health: world.player.health,
            });
        }
        *rammed = config.contact.removes_enemy;
    }
    compact(&mut world.enemies, &rammed);

    // --- Enemy shots vs player ---
    let mut spent = vec![false; world.enemy_shots.len()];
    for (shot, spent) in world.enemy_shots.iter().zip(spent.iter_mut()) {
        if !projectile_hits(shot, &player_rect) {
            continue;
        }
        if world.player.take_damage(shot.damage, invincibility) {
            events.push(GameEvent::PlayerHit {
                damage: shot.damage,
                health: world.player.health,
            });
        }
        *spent = true;
    }
    compact(&mut world.enemy_shots, &spent);

    outcome
}

/// Drop every element whose mark is set, preserving order
fn compact<T>(items: &mut Vec<T>, marks: &[bool]) {
    debug_assert_eq!(items.len(), marks.len());
    let mut marks = marks.iter();
    items.retain(|_| !marks.next().copied().unwrap_or(false));
}

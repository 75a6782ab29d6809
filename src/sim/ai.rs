//! Enemy movement patterns and firing
//!
//! Each pattern reads only its own enemy and the player's position, so
//! enemies can be advanced in any order with identical results.

use glam::Vec2;

use super::rng::GameRng;
use super::shape::Shape;
use super::state::{Enemy, EntityIds, Movement, Owner, Player, Projectile};
use crate::config::{Bounds, EnemyShotConfig, ShotKind};
use crate::{approach, heading};

/// Divers always keep at least this much downward component
const DIVE_MIN_DESCENT: f32 = 0.5;

/// Move one enemy by its pattern and age it by a tick
pub fn advance(enemy: &mut Enemy, player: &Player, bounds: &Bounds) {
    let max_x = (bounds.width - enemy.size.x).max(0.0);
    let speed = enemy.speed;

    match enemy.movement {
        Movement::Straight => {
            enemy.pos.y += speed;
        }
        Movement::Zigzag {
            step,
            ref mut direction,
        } => {
            enemy.pos.y += speed;
            enemy.pos.x += *direction * step;
            if enemy.pos.x <= 0.0 {
                enemy.pos.x = 0.0;
                *direction = 1.0;
            } else if enemy.pos.x >= max_x {
                enemy.pos.x = max_x;
                *direction = -1.0;
            }
        }
        Movement::Dive {
            trigger_ticks,
            boost,
            ref mut committed,
        } => match *committed {
            Some(vel) => enemy.pos += vel,
            None if enemy.lifetime > trigger_ticks => {
                // Commit once; the heading never changes after this
                let vel = dive_heading(enemy.pos + enemy.size * 0.5, player.center()) * speed * boost;
                *committed = Some(vel);
                enemy.pos += vel;
            }
            None => enemy.pos.y += speed,
        },
        Movement::Follow { rate } => {
            enemy.pos.y += speed;
            let half_w = enemy.size.x / 2.0;
            let center_x = approach(enemy.pos.x + half_w, player.center().x, speed.abs() * rate);
            enemy.pos.x = (center_x - half_w).clamp(0.0, max_x);
        }
        Movement::BossWeave {
            amplitude,
            wavelength,
            anchor_x,
        } => {
            enemy.pos.y += speed;
            let sweep = amplitude * (enemy.pos.y / wavelength).sin();
            enemy.pos.x = (anchor_x + sweep).clamp(0.0, max_x);
        }
    }

    enemy.lifetime = enemy.lifetime.saturating_add(1);
}

/// Direction toward the player, bent so the dive always descends
fn dive_heading(from: Vec2, to: Vec2) -> Vec2 {
    let mut dir = heading(from, to);
    if dir.y < DIVE_MIN_DESCENT {
        dir.y = DIVE_MIN_DESCENT;
        dir = dir.normalize();
    }
    dir
}

/// Roll the enemy's fire chance; emit a shot on success
pub fn try_fire(
    enemy: &Enemy,
    player: &Player,
    config: &EnemyShotConfig,
    rng: &mut GameRng,
    ids: &mut EntityIds,
) -> Option<Projectile> {
    if enemy.lifetime <= enemy.fire_delay || !rng.chance(enemy.shoot_chance) {
        return None;
    }

    let muzzle = Vec2::new(enemy.pos.x + enemy.size.x / 2.0, enemy.pos.y + enemy.size.y);
    let (pos, vel, shape) = match enemy.shot {
        ShotKind::Straight => (
            Vec2::new(muzzle.x - config.width / 2.0, muzzle.y),
            Vec2::new(0.0, config.speed),
            Shape::Rect {
                width: config.width,
                height: config.height,
            },
        ),
        ShotKind::Aimed => {
            let center = muzzle + Vec2::new(0.0, config.radius);
            (
                center,
                heading(center, player.center()) * config.speed,
                Shape::Circle {
                    radius: config.radius,
                },
            )
        }
    };

    Some(Projectile {
        id: ids.next_id(),
        pos,
        vel,
        shape,
        owner: Owner::Enemy,
        damage: config.damage,
    })
}

/// True once an enemy has left the world (below, beside, or well above it)
pub fn is_offscreen(enemy: &Enemy, bounds: &Bounds) -> bool {
    let rect = enemy.rect();
    rect.min().y > bounds.height
        || rect.max().x < 0.0
        || rect.min().x > bounds.width
        || rect.max().y < -enemy.size.y
}

/// Advance every enemy, collect their shots, drop the ones that left the world
pub fn update_enemies(
    enemies: &mut Vec<Enemy>,
    player: &Player,
    bounds: &Bounds,
    shot_config: &EnemyShotConfig,
    rng: &mut GameRng,
    ids: &mut EntityIds,
) -> Vec<Projectile> {
    let mut shots = Vec::new();
    for enemy in enemies.iter_mut() {
        advance(enemy, player, bounds);
        if let Some(shot) = try_fire(enemy, player, shot_config, rng, ids) {
            shots.push(shot);
        }
    }
    enemies.retain(|e| !is_offscreen(e, bounds));
    shots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Archetype, PatternKind, PlayerConfig};

    fn bounds() -> Bounds {
        Bounds::default()
    }

    fn player_at(x: f32, y: f32) -> Player {
        let mut player = Player::new(&PlayerConfig::default(), 800.0, 600.0);
        player.pos = Vec2::new(x, y);
        player
    }

    fn enemy(pattern: PatternKind, x: f32, y: f32) -> Enemy {
        let archetype = Archetype::default();
        Enemy {
            id: 1,
            archetype: 0,
            pos: Vec2::new(x, y),
            size: Vec2::new(50.0, 50.0),
            speed: 2.0,
            health: 1,
            movement: Movement::from_pattern(pattern, x),
            lifetime: 0,
            shoot_chance: 0.0,
            fire_delay: 0,
            shot: archetype.shot,
            score: archetype.score,
        }
    }

    #[test]
    fn test_straight_falls() {
        let mut e = enemy(PatternKind::Straight, 100.0, 0.0);
        advance(&mut e, &player_at(0.0, 500.0), &bounds());
        assert_eq!(e.pos, Vec2::new(100.0, 2.0));
        assert_eq!(e.lifetime, 1);
    }

    #[test]
    fn test_zigzag_bounces_off_edges() {
        let mut e = enemy(PatternKind::Zigzag { step: 10.0 }, 745.0, 0.0);
        let player = player_at(0.0, 500.0);
        advance(&mut e, &player, &bounds());
        assert_eq!(e.pos.x, 750.0);
        assert!(matches!(e.movement, Movement::Zigzag { direction, .. } if direction < 0.0));
        advance(&mut e, &player, &bounds());
        assert_eq!(e.pos.x, 740.0);
        assert_eq!(e.pos.y, 4.0);
    }

    #[test]
    fn test_follow_steps_toward_player_without_overshoot() {
        let mut e = enemy(PatternKind::Follow { rate: 0.5 }, 0.0, 0.0);
        let player = player_at(400.0, 500.0);
        advance(&mut e, &player, &bounds());
        assert_eq!(e.pos.x, 1.0);

        // Half a step away: lands exactly on the player's center line
        e.pos.x = 399.5;
        advance(&mut e, &player, &bounds());
        assert_eq!(e.pos.x, 400.0);
        advance(&mut e, &player, &bounds());
        assert_eq!(e.pos.x, 400.0);
    }

    #[test]
    fn test_dive_commits_to_heading() {
        let mut e = enemy(
            PatternKind::Dive {
                trigger_ticks: 2,
                boost: 2.0,
            },
            100.0,
            0.0,
        );
        let player = player_at(400.0, 500.0);
        // Falls straight while its age has not passed the trigger
        for _ in 0..3 {
            advance(&mut e, &player, &bounds());
        }
        assert_eq!(e.pos, Vec2::new(100.0, 6.0));
        assert!(matches!(e.movement, Movement::Dive { committed: None, .. }));

        advance(&mut e, &player, &bounds());
        let Movement::Dive {
            committed: Some(vel),
            ..
        } = e.movement
        else {
            panic!("dive should have committed");
        };
        assert!((vel.length() - 4.0).abs() < 1e-4);
        assert!(vel.x > 0.0 && vel.y > 0.0);

        // Player moves away; heading stays fixed
        let moved = player_at(0.0, 0.0);
        let before = e.pos;
        advance(&mut e, &moved, &bounds());
        assert!((e.pos - before - vel).length() < 1e-4);
    }

    #[test]
    fn test_dive_never_climbs() {
        let mut e = enemy(
            PatternKind::Dive {
                trigger_ticks: 0,
                boost: 1.0,
            },
            100.0,
            300.0,
        );
        // Player above the diver
        let player = player_at(100.0, 0.0);
        advance(&mut e, &player, &bounds());
        let before = e.pos.y;
        advance(&mut e, &player, &bounds());
        assert!(matches!(e.movement, Movement::Dive { committed: Some(_), .. }));
        assert!(e.pos.y > before);
    }

    #[test]
    fn test_boss_weave_ignores_player() {
        let pattern = PatternKind::BossWeave {
            amplitude: 50.0,
            wavelength: 20.0,
        };
        let mut a = enemy(pattern, 300.0, 0.0);
        let mut b = enemy(pattern, 300.0, 0.0);
        for _ in 0..40 {
            advance(&mut a, &player_at(0.0, 500.0), &bounds());
            advance(&mut b, &player_at(700.0, 100.0), &bounds());
        }
        assert_eq!(a.pos, b.pos);
        assert!((a.pos.x - 300.0).abs() <= 50.0);
    }

    #[test]
    fn test_aimed_shot_points_at_player() {
        let mut e = enemy(PatternKind::Straight, 100.0, 100.0);
        e.shoot_chance = 1.0;
        e.shot = ShotKind::Aimed;
        e.lifetime = 1;
        let player = player_at(375.0, 500.0);
        let mut rng = GameRng::new(1);
        let mut ids = EntityIds::default();
        let shot = try_fire(&e, &player, &EnemyShotConfig::default(), &mut rng, &mut ids).unwrap();
        assert_eq!(shot.owner, Owner::Enemy);
        assert!(matches!(shot.shape, Shape::Circle { .. }));
        let expected = heading(shot.pos, player.center());
        assert!((shot.vel.normalize() - expected).length() < 1e-4);
    }

    #[test]
    fn test_fire_delay_blocks_shots() {
        let mut e = enemy(PatternKind::Straight, 100.0, 100.0);
        e.shoot_chance = 1.0;
        e.fire_delay = 5;
        let player = player_at(0.0, 500.0);
        let mut rng = GameRng::new(1);
        let mut ids = EntityIds::default();
        let config = EnemyShotConfig::default();
        assert!(try_fire(&e, &player, &config, &mut rng, &mut ids).is_none());
        // Reaching the delay is not enough, it has to be passed
        e.lifetime = 5;
        assert!(try_fire(&e, &player, &config, &mut rng, &mut ids).is_none());
        e.lifetime = 6;
        let shot = try_fire(&e, &player, &config, &mut rng, &mut ids).unwrap();
        assert_eq!(shot.vel, Vec2::new(0.0, config.speed));
    }

    #[test]
    fn test_offscreen_enemies_removed() {
        let mut enemies = vec![
            enemy(PatternKind::Straight, 100.0, 599.0),
            enemy(PatternKind::Straight, 100.0, 100.0),
        ];
        let mut rng = GameRng::new(1);
        let mut ids = EntityIds::default();
        update_enemies(
            &mut enemies,
            &player_at(0.0, 500.0),
            &bounds(),
            &EnemyShotConfig::default(),
            &mut rng,
            &mut ids,
        );
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].pos.y, 102.0);
    }
}

//! Projectile integration and pruning

use super::state::{Owner, Projectile};
use crate::config::Bounds;

/// Whether a projectile has left the world.
///
/// Player shots are gone once their top crosses y = 0. Enemy shots are gone
/// once they fall past the bottom; angled ones also expire off either side
/// or off the top.
pub fn is_out_of_world(projectile: &Projectile, bounds: &Bounds) -> bool {
    let b = projectile.bounds();
    let off_sides = b.max().x < 0.0 || b.min().x > bounds.width;
    match projectile.owner {
        Owner::Player => b.min().y < 0.0 || off_sides,
        Owner::Enemy => b.min().y > bounds.height || b.max().y < 0.0 || off_sides,
    }
}

/// Integrate every projectile by its velocity, then compact out the ones
/// that left the world in a single pass
pub fn advance(projectiles: &mut Vec<Projectile>, bounds: &Bounds) {
    for projectile in projectiles.iter_mut() {
        projectile.pos += projectile.vel;
    }
    projectiles.retain(|p| !is_out_of_world(p, bounds));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::shape::Shape;
    use glam::Vec2;

    fn shot(id: u32, owner: Owner, pos: Vec2, vel: Vec2) -> Projectile {
        Projectile {
            id,
            pos,
            vel,
            shape: Shape::Rect {
                width: 5.0,
                height: 10.0,
            },
            owner,
            damage: 1,
        }
    }

    #[test]
    fn test_player_shots_move_up_and_expire() {
        let bounds = Bounds::default();
        let mut shots = vec![
            shot(1, Owner::Player, Vec2::new(10.0, 5.0), Vec2::new(0.0, -7.0)),
            shot(2, Owner::Player, Vec2::new(10.0, 100.0), Vec2::new(0.0, -7.0)),
        ];
        advance(&mut shots, &bounds);
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].id, 2);
        assert_eq!(shots[0].pos.y, 93.0);
    }

    #[test]
    fn test_adjacent_expired_shots_all_removed() {
        // Consecutive expiring entries must not shield each other
        let bounds = Bounds::default();
        let mut shots: Vec<Projectile> = (0..6)
            .map(|i| {
                let y = if i < 4 { 595.0 } else { 300.0 };
                shot(i, Owner::Enemy, Vec2::new(10.0, y), Vec2::new(0.0, 10.0))
            })
            .collect();
        advance(&mut shots, &bounds);
        let ids: Vec<u32> = shots.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn test_angled_enemy_shot_expires_off_side() {
        let bounds = Bounds::default();
        let mut shots = vec![Projectile {
            id: 1,
            pos: Vec2::new(12.0, 300.0),
            vel: Vec2::new(-10.0, 1.0),
            shape: Shape::Circle { radius: 5.0 },
            owner: Owner::Enemy,
            damage: 1,
        }];
        advance(&mut shots, &bounds);
        assert_eq!(shots.len(), 1);
        advance(&mut shots, &bounds);
        assert!(shots.is_empty());
    }
}

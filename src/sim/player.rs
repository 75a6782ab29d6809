//! Player controller
//!
//! Turns the per-tick action snapshot into movement, shots and bomb use.
//! Health is never touched here; damage only arrives through collisions.

use glam::Vec2;

use super::shape::{Shape, clamp_into};
use super::state::{EntityIds, Owner, Player, Projectile, WeaponTier};
use super::tick::TickInput;
use crate::config::{Bounds, PlayerConfig};

/// What the player did this tick that affects the rest of the world
#[derive(Debug, Default)]
pub struct PlayerOutput {
    /// Newly fired projectiles
    pub shots: Vec<Projectile>,
    /// A bomb was consumed and should clear all hostiles
    pub bomb: bool,
}

/// Advance the player by one tick
pub fn update(
    player: &mut Player,
    input: &TickInput,
    config: &PlayerConfig,
    bounds: &Bounds,
    ids: &mut EntityIds,
) -> PlayerOutput {
    let mut output = PlayerOutput::default();

    // Horizontal: inertia decays, held directions nudge it
    player.inertia *= config.inertia_decay;
    if input.move_left {
        player.inertia -= config.inertia_nudge;
    }
    if input.move_right {
        player.inertia += config.inertia_nudge;
    }
    player.pos.x += player.inertia;

    // Vertical: direct
    if input.move_up {
        player.pos.y -= config.speed;
    }
    if input.move_down {
        player.pos.y += config.speed;
    }
    player.pos = clamp_into(player.pos, player.size, bounds);

    if input.use_bomb && player.bombs > 0 {
        player.bombs -= 1;
        output.bomb = true;
    }

    if input.fire && player.fire_cooldown >= player.fire_rate {
        output.shots = fire(player, config, ids);
        player.fire_cooldown = 0;
    }
    player.fire_cooldown = player.fire_cooldown.saturating_add(1);

    if player.invincible_ticks > 0 {
        player.invincible_ticks -= 1;
    }
    if player.weapon_ticks > 0 {
        player.weapon_ticks -= 1;
        if player.weapon_ticks == 0 {
            player.weapon = WeaponTier::Single;
        }
    }

    output
}

/// Grant the spread weapon for `ticks`, refreshing any running timer
pub fn grant_spread(player: &mut Player, ticks: u32) {
    if ticks == 0 {
        return;
    }
    player.weapon = WeaponTier::Spread;
    player.weapon_ticks = ticks;
}

/// Emit the shot pattern for the current weapon tier
fn fire(player: &Player, config: &PlayerConfig, ids: &mut EntityIds) -> Vec<Projectile> {
    let shot = &config.shot;
    let x = player.pos.x;
    let w = player.size.x;

    let mut offsets = vec![w / 2.0 - shot.width / 2.0];
    if player.weapon == WeaponTier::Spread {
        offsets.push(w * 0.2);
        offsets.push(w * 0.8 - shot.width);
    }

    offsets
        .into_iter()
        .map(|dx| Projectile {
            id: ids.next_id(),
            pos: Vec2::new(x + dx, player.pos.y),
            vel: Vec2::new(0.0, -shot.speed),
            shape: Shape::Rect {
                width: shot.width,
                height: shot.height,
            },
            owner: Owner::Player,
            damage: shot.damage,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Player, PlayerConfig, Bounds, EntityIds) {
        let config = PlayerConfig::default();
        let bounds = Bounds::default();
        let player = Player::new(&config, bounds.width, bounds.height);
        (player, config, bounds, EntityIds::default())
    }

    #[test]
    fn test_inertia_accumulates_and_decays() {
        let (mut player, config, bounds, mut ids) = setup();
        let start_x = player.pos.x;
        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        update(&mut player, &right, &config, &bounds, &mut ids);
        assert!((player.inertia - 0.5).abs() < 1e-6);
        update(&mut player, &right, &config, &bounds, &mut ids);
        assert!((player.inertia - 0.95).abs() < 1e-6);
        assert!(player.pos.x > start_x);

        // Coasting: decays but keeps moving right
        let before = player.pos.x;
        update(&mut player, &TickInput::default(), &config, &bounds, &mut ids);
        assert!((player.inertia - 0.855).abs() < 1e-5);
        assert!(player.pos.x > before);
    }

    #[test]
    fn test_clamped_to_world() {
        let (mut player, config, bounds, mut ids) = setup();
        let input = TickInput {
            move_left: true,
            move_up: true,
            ..Default::default()
        };
        for _ in 0..500 {
            update(&mut player, &input, &config, &bounds, &mut ids);
        }
        assert_eq!(player.pos.x, 0.0);
        assert_eq!(player.pos.y, 0.0);

        let input = TickInput {
            move_right: true,
            move_down: true,
            ..Default::default()
        };
        for _ in 0..500 {
            update(&mut player, &input, &config, &bounds, &mut ids);
        }
        assert_eq!(player.pos.x, bounds.width - player.size.x);
        assert_eq!(player.pos.y, bounds.height - player.size.y);
    }

    #[test]
    fn test_fire_cooldown() {
        let (mut player, config, bounds, mut ids) = setup();
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        let mut shots = 0;
        for tick in 1..=20 {
            shots += update(&mut player, &fire, &config, &bounds, &mut ids)
                .shots
                .len();
            if tick == 10 {
                assert_eq!(shots, 1);
            }
        }
        assert_eq!(shots, 2);
    }

    #[test]
    fn test_spread_fires_three_and_expires() {
        let (mut player, config, bounds, mut ids) = setup();
        grant_spread(&mut player, 3);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        let out = update(&mut player, &fire, &config, &bounds, &mut ids);
        assert_eq!(out.shots.len(), 3);
        assert!(out.shots.iter().all(|s| s.owner == Owner::Player && s.vel.y < 0.0));

        update(&mut player, &TickInput::default(), &config, &bounds, &mut ids);
        update(&mut player, &TickInput::default(), &config, &bounds, &mut ids);
        assert_eq!(player.weapon, WeaponTier::Single);
    }

    #[test]
    fn test_bomb_consumes_one() {
        let (mut player, config, bounds, mut ids) = setup();
        let bomb = TickInput {
            use_bomb: true,
            ..Default::default()
        };
        assert!(update(&mut player, &bomb, &config, &bounds, &mut ids).bomb);
        assert_eq!(player.bombs, 2);

        player.bombs = 0;
        assert!(!update(&mut player, &bomb, &config, &bounds, &mut ids).bomb);
        assert_eq!(player.bombs, 0);
    }

    #[test]
    fn test_invincibility_counts_down() {
        let (mut player, config, bounds, mut ids) = setup();
        player.invincible_ticks = 2;
        update(&mut player, &TickInput::default(), &config, &bounds, &mut ids);
        assert!(player.is_invincible());
        update(&mut player, &TickInput::default(), &config, &bounds, &mut ids);
        assert!(!player.is_invincible());
    }
}

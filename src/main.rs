//! Sky Raid headless driver
//!
//! Runs a seeded session with a scripted autopilot and prints the final
//! snapshot as JSON.
//!
//! Usage: `sky-raid [config.json] [ticks]`

use sky_raid::sim::{GameState, TickInput, tick};
use sky_raid::{ConfigError, WorldConfig};

const DEFAULT_TICKS: u64 = 3_600;
const DEFAULT_SEED: u64 = 0x5eed;

/// Enemies on screen before the autopilot reaches for a bomb
const BOMB_THRESHOLD: usize = 8;

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => WorldConfig::load(path)?,
        None => WorldConfig::with_seed(DEFAULT_SEED),
    };
    let ticks = match args.next().map(|t| t.parse::<u64>()) {
        None => DEFAULT_TICKS,
        Some(Ok(ticks)) => ticks,
        Some(Err(e)) => {
            log::error!("Invalid tick count: {}", e);
            std::process::exit(2);
        }
    };

    log::info!("Sky Raid starting (seed {}, {} ticks)", config.seed, ticks);
    let mut state = GameState::new(config)?;

    for _ in 0..ticks {
        let input = autopilot(&state);
        tick(&mut state, &input);
        if state.is_game_over() {
            break;
        }
    }

    log::info!(
        "Finished at tick {}: score {}, {} kills, health {}",
        state.tick_count(),
        state.score,
        state.kills,
        state.world.player.health
    );
    println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
    Ok(())
}

/// Always fire, chase the nearest enemy's column, bomb when swarmed
fn autopilot(state: &GameState) -> TickInput {
    let player = &state.world.player;
    let center = player.center();
    let target = state
        .world
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|e| e.center().x);

    let mut input = TickInput {
        fire: true,
        use_bomb: state.world.enemies.len() >= BOMB_THRESHOLD,
        ..Default::default()
    };
    if let Some(x) = target {
        input.move_left = x < center.x - player.size.x * 0.25;
        input.move_right = x > center.x + player.size.x * 0.25;
    }
    input
}

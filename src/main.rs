//! Tileward: a tiny top-down tile world
//!
//! Walk the player around with WASD while the camera eases after it.
//! Trolls and goblins stand on the tile grid; hovering the mouse over an
//! entity highlights the nearest one.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod error;
mod game;
mod geometry;
mod input;

use macroquad::prelude::{next_frame, prevent_quit, screen_height, screen_width, vec2, Conf};
use rand::rngs::StdRng;
use rand::SeedableRng;

use config::{GameConfig, CONFIG_PATH};
use error::GameError;
use game::{draw_world, update, SpriteTable, World};
use input::InputState;

fn window_conf() -> Conf {
    // Runs before the logger exists; problems are reported again from `run`.
    let config = GameConfig::load_or_default(CONFIG_PATH);
    Conf {
        window_title: config.window_title,
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), GameError> {
    log::info!("=== Tileward v{} ===", VERSION);

    let config = GameConfig::load_or_default(CONFIG_PATH);

    let sprites = SpriteTable::load(&config.resource_dir).await;
    log::info!("{} sprite images loaded", sprites.loaded_count());

    let screen_center = vec2(screen_width(), screen_height()) / 2.0;
    let mut world = World::new(sprites, config.camera_zoom, screen_center)?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    world.populate(&config, &mut rng);

    // Escape and the close button both end the loop below
    prevent_quit();
    let input = InputState::new();

    while !input.close_requested() {
        let frame_input = input.poll();
        let frame = update(&mut world, &frame_input);
        draw_world(&world, &frame, config.debug_bounds);

        next_frame().await;
    }

    log::info!("Shutting down");
    Ok(())
}

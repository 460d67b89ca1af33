use std::path::Path;

use anyhow::{Result, anyhow};
use life_panel::{
    Config, FrameLimiter, Renderer, SimulationState,
    input::EventPump,
};
use macroquad::prelude::*;

fn window_conf(config: &Config) -> Conf {
    let (width, height) = config.window_size();
    Conf {
        window_title: config.window_title.clone(),
        window_width: width.round() as i32,
        window_height: height.round() as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn load_font(path: &Path) -> Result<Font> {
    load_ttf_font(&path.to_string_lossy())
        .await
        .map_err(|e| anyhow!("loading font {}: {e:?}", path.display()))
}

async fn simulate(config: Config) -> Result<()> {
    let font = match &config.theme.font_path {
        Some(path) => Some(load_font(path).await?),
        None => None,
    };

    let renderer = Renderer::new(&config, font);
    let mut pump = EventPump::new();
    let mut limiter = FrameLimiter::new(config.simulation.fps);
    let mut state = SimulationState::new(&config);

    let (width, height) = config.window_size();
    log::info!(
        "Started: window={}x{} grid={}x{} fps={}",
        width,
        height,
        config.grid.width,
        config.grid.height,
        config.simulation.fps
    );

    while state.is_running() {
        // Draws the pre-step grid, steps, throttles, then applies input;
        // the drawn frame is presented by next_frame
        state.run_frame(
            &mut pump,
            |state, pointer| renderer.render_frame(state, pointer),
            || limiter.delay(),
        );
        next_frame().await;

        log::trace!(
            "generation={} population={} fps={:.1}",
            state.generation,
            state.grid.population(),
            limiter.fps()
        );
    }

    log::info!("Stopped at generation {}", state.generation);
    Ok(())
}

/// Startup failures are not recoverable: log and exit
fn fatal(err: anyhow::Error) -> ! {
    log::error!("{err:#}");
    std::process::exit(1);
}

async fn run(config: Config) {
    if let Err(err) = simulate(config).await {
        fatal(err);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load().unwrap_or_else(|err| fatal(err));
    macroquad::Window::from_config(window_conf(&config), run(config));
}

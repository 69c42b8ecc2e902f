//! Headless Life: step the configured grid and print it as text.

use demo_games::{GridRenderer, LifeState, config::LifeConfig, rendering::TextRenderer, telemetry};

const DEFAULT_GENERATIONS: u64 = 50;

fn main() {
    telemetry::init();

    let config = LifeConfig::from_env();
    let mut state = match LifeState::new(&config) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, ?config, "cannot start headless life");
            std::process::exit(2);
        }
    };

    let generations = config.headless_generations.unwrap_or(DEFAULT_GENERATIONS);
    let start = std::time::Instant::now();
    for _ in 0..generations {
        state.step();
    }
    tracing::info!(
        generations,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        live = state.grid.live_count(),
        "headless run finished"
    );

    let mut renderer = TextRenderer::new();
    renderer.draw_grid(&state.grid);
    println!("{}", renderer.frame());
}

use macroquad::prelude::*;
use demo_games::{
    FrameLimiter, GridRenderer, LifeState,
    config::{self, LifeConfig},
    input,
    rendering::{MacroquadRenderer, draw_hud},
    telemetry,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config::LIFE_WINDOW_SIZE,
        window_height: config::LIFE_WINDOW_SIZE,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    telemetry::init();

    let settings = LifeConfig::from_env();
    let mut state = match LifeState::new(&settings) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, ?settings, "cannot start life viewer");
            std::process::exit(2);
        }
    };

    let mut renderer = MacroquadRenderer::new(true);
    let mut limiter = FrameLimiter::new(config::LIFE_MAX_FPS);

    loop {
        limiter.start_frame();

        state = input::process_life_keys(state);
        state = state.tick(get_frame_time());

        clear_background(BLACK);
        renderer.draw_grid(&state.grid);

        limiter.wait_for_next_frame();
        draw_hud(&[
            format!(
                "gen {} | live {} | {:.0} gen/s | {}",
                state.generation(),
                state.grid.live_count(),
                state.generations_per_second,
                if state.is_running { "running" } else { "paused" },
            ),
            format!("step {:.2}ms | fps {:.0}", state.last_step_time_ms, limiter.current_fps()),
        ]);

        next_frame().await;
    }
}

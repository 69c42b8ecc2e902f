use macroquad::prelude::*;
use demo_games::{
    FrameLimiter,
    config,
    input,
    rendering::{draw_hud, draw_orchard},
    telemetry,
    toys::Orchard,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Appleseed".to_owned(),
        window_width: config::APPLESEED_WINDOW.0,
        window_height: config::APPLESEED_WINDOW.1,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    telemetry::init();

    let (w, h) = config::APPLESEED_WINDOW;
    let bounds = Rect::new(0.0, 0.0, w as f32 / 2.0, h as f32 / 2.0);
    let mut rng = ::rand::rng();
    let mut orchard = Orchard::new(bounds, &mut rng);
    let mut limiter = FrameLimiter::new(config::APPLESEED_MAX_FPS);
    tracing::info!(apples = orchard.apples.len(), "orchard planted");

    loop {
        limiter.start_frame();

        let before = orchard.score;
        orchard.update(get_frame_time(), input::steering(), &mut rng);
        if orchard.score != before {
            tracing::debug!(score = orchard.score, size = orchard.toon.size, "apple eaten");
        }

        clear_background(BLACK);
        draw_orchard(&orchard);

        limiter.wait_for_next_frame();
        draw_hud(&[format!("score: {} | fps {:.0}", orchard.score, limiter.current_fps())]);

        next_frame().await;
    }
}

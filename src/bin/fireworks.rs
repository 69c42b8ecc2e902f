use macroquad::prelude::*;
use demo_games::{
    FrameLimiter,
    config,
    physics::Update,
    rendering::{draw_explosion, draw_hud},
    telemetry,
    toys::Explosion,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Explosion".to_owned(),
        window_width: config::FIREWORKS_WINDOW.0,
        window_height: config::FIREWORKS_WINDOW.1,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    telemetry::init();

    let mut rng = ::rand::rng();
    let mut explosion = Explosion::new(&mut rng);
    let mut limiter = FrameLimiter::new(config::FIREWORKS_MAX_FPS);
    tracing::info!(particles = explosion.len(), "first burst");

    // The scene is authored for a half-size canvas stretched over the window.
    let canvas_width = config::FIREWORKS_WINDOW.0 as f32 / 2.0;

    loop {
        limiter.start_frame();

        let mut dt = get_frame_time();
        if is_key_down(KeyCode::Space) {
            dt /= config::SLOWMO_FACTOR;
        }
        if is_key_pressed(KeyCode::Enter) {
            explosion = Explosion::new(&mut rng);
            tracing::info!(particles = explosion.len(), "new burst");
        }

        explosion.update(dt);

        clear_background(BLACK);
        draw_explosion(&explosion, screen_width() / canvas_width);

        limiter.wait_for_next_frame();
        draw_hud(&[
            "Press ENTER to explode, hold SPACE to slow down time".to_owned(),
            format!("fps: {:.0}", limiter.current_fps()),
        ]);

        next_frame().await;
    }
}

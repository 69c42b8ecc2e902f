use macroquad::prelude::*;
use demo_games::{
    FrameLimiter,
    config,
    domain::{Board, Star},
    input,
    physics::Update,
    rendering::{draw_board, draw_hud, draw_star},
    telemetry,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Lights Out".to_owned(),
        window_width: config::LIGHTS_OUT_WINDOW_SIZE,
        window_height: config::LIGHTS_OUT_WINDOW_SIZE,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    telemetry::init();

    let mut board = match Board::new(config::LIGHTS_OUT_SIDE) {
        Ok(board) => board,
        Err(e) => {
            tracing::error!(error = %e, "cannot build board");
            std::process::exit(2);
        }
    };
    let mut star = Star::default();
    let mut limiter = FrameLimiter::new(config::LIGHTS_OUT_MAX_FPS);
    tracing::info!(side = board.side(), "lights out started");

    loop {
        limiter.start_frame();
        let dt = get_frame_time();

        if is_key_pressed(KeyCode::R) {
            board.reset();
            star = Star::default();
            tracing::info!("board reset");
        }

        if input::handle_board_click(&mut board) && board.is_solved() {
            tracing::info!(moves = board.moves(), "board solved");
        }

        star.update(dt);

        clear_background(BLACK);
        if board.is_solved() {
            draw_star(&star);
        } else {
            draw_board(&board);
        }

        limiter.wait_for_next_frame();
        draw_hud(&[format!("moves: {} | fps {:.0}", board.moves(), limiter.current_fps())]);

        next_frame().await;
    }
}

//! Badge Pong entry point
//!
//! Headless demo: starts a match, drives the player paddle with a reactive
//! autopilot (input computed outside the sim, like any other input source),
//! and dumps a state snapshot when done. The real device build swaps
//! [`Headless`] for the display/button/buzzer drivers.

use badge_pong::headless::Headless;
use badge_pong::sim::GameState;
use badge_pong::{Game, Settings};

fn main() {
    env_logger::init();

    let settings = Settings::from_env();
    log::info!(
        "Badge Pong (headless) starting: seed {}, {} ticks",
        settings.seed,
        settings.ticks
    );

    let mut game = Game::new(
        GameState::new(settings.seed),
        Headless::new(settings.realtime),
    );

    // One pressed frame to leave the menu
    game.platform_mut().up_pressed = true;
    game.run_frame();
    game.platform_mut().up_pressed = false;

    for _ in 0..settings.ticks {
        autopilot(&mut game);
        game.run_frame();
    }

    log::info!(
        "final score {}-{} after {} ticks",
        game.state.player_score,
        game.state.bot_score,
        game.state.time_ticks
    );

    match serde_json::to_string_pretty(&game.state.snapshot()) {
        Ok(json) => println!("{json}"),
        Err(err) => log::warn!("snapshot serialization failed: {err}"),
    }
}

/// Reactive player autopilot: hold whichever button closes the vertical
/// gap to the ball, release both when aligned.
fn autopilot(game: &mut Game<Headless>) {
    let ball_y = game.state.ball.rect.y;
    let paddle_center = game.state.player.center_y();
    let platform = game.platform_mut();
    platform.up_pressed = ball_y < paddle_center;
    platform.down_pressed = ball_y > paddle_center;
}

//! Per-tick simulation advance
//!
//! One call to [`tick`] resolves one tick of the match, in a fixed order:
//! horizontal boundary scoring, vertical wall bounce, paddle collisions,
//! then movement and paddle control. The boundary and collision checks run
//! every tick; only the movement step is gated on the pause flag.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{GameState, HorizontalDir};
use crate::consts::*;
use crate::platform::{Button, Buttons, Feedback};

/// Player input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move the player paddle up this tick
    pub move_up: bool,
    /// Move the player paddle down this tick
    pub move_down: bool,
}

impl TickInput {
    /// Read both buttons from the input collaborator.
    pub fn poll<B: Buttons>(buttons: &mut B) -> Self {
        Self {
            move_up: buttons.is_pressed(Button::Up),
            move_down: buttons.is_pressed(Button::Down),
        }
    }
}

/// Which paddle the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    Player,
    Bot,
}

/// Events raised while resolving a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball crossed the right edge
    PlayerScored,
    /// Ball crossed the left edge
    BotScored,
    /// Ball bounced off the top or bottom wall
    WallBounce,
    /// Ball deflected off a paddle
    PaddleBounce(PaddleSide),
}

/// Inclusive-range uniform integer draw.
fn random_int(rng: &mut Pcg32, lo: i32, hi: i32) -> i32 {
    debug_assert!(lo <= hi);
    rng.random_range(lo..=hi)
}

/// Redraw the vertical inclination after a score or paddle hit. The range
/// is [-4, 0]: the ball leaves every event biased toward the top. That
/// asymmetry is part of the game's behavior, not a bug.
fn redraw_inclination(state: &mut GameState) {
    state.inclination = random_int(&mut state.rng, INCLINATION_MIN, INCLINATION_MAX);
}

/// The blocking score feedback: four 100 ms phases of alternating tone
/// frequency and display-invert pulses, then silence. Freezes the whole
/// loop for its duration; the pause flag is raised while it runs.
fn score_feedback<F: Feedback>(state: &mut GameState, fx: &mut F) {
    state.paused = true;

    fx.set_frequency(SCORE_TONE_HZ);
    fx.set_duty(TONE_DUTY);
    fx.invert(true);
    fx.sleep_ms(FEEDBACK_STEP_MS);

    fx.invert(false);
    fx.set_frequency(SCORE_TONE_ALT_HZ);
    fx.sleep_ms(FEEDBACK_STEP_MS);

    fx.invert(true);
    fx.sleep_ms(FEEDBACK_STEP_MS);

    fx.invert(false);
    fx.set_frequency(SCORE_TONE_HZ);
    fx.sleep_ms(FEEDBACK_STEP_MS);

    fx.set_duty(0);
    fx.set_frequency(DEFAULT_TONE_HZ);

    state.paused = false;
}

/// Advance the match by one tick.
///
/// `fx` drives the score feedback when a point lands; everything else is
/// pure state mutation. Returns the events raised this tick.
pub fn tick<F: Feedback>(
    state: &mut GameState,
    input: &TickInput,
    fx: &mut F,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // Horizontal boundary: scoring, evaluated before movement. The ball is
    // not recentered, it turns around at the wall it crossed.
    if state.ball.rect.x + state.ball.rect.w >= WIDTH {
        score_feedback(state, fx);
        redraw_inclination(state);
        state.player_score += 1;
        state.ball.direction = HorizontalDir::Left;
        events.push(GameEvent::PlayerScored);
    } else if state.ball.rect.x <= 0 {
        score_feedback(state, fx);
        redraw_inclination(state);
        state.bot_score += 1;
        state.ball.direction = HorizontalDir::Right;
        events.push(GameEvent::BotScored);
    }

    // Vertical boundary: clamp and invert the inclination. The top clamps
    // to 1 rather than the exact edge.
    if state.ball.rect.y + state.ball.rect.h >= HEIGHT {
        state.ball.rect.y = HEIGHT - state.ball.rect.h;
        state.inclination = -state.inclination;
        events.push(GameEvent::WallBounce);
    } else if state.ball.rect.y <= 0 {
        state.ball.rect.y = 1;
        state.inclination = -state.inclination;
        events.push(GameEvent::WallBounce);
    }

    // Paddle collisions: deflect away, redraw the inclination and arm the
    // beeper. Unlike scoring this never freezes the simulation.
    if state.ball.rect.intersects(&state.player.rect) {
        redraw_inclination(state);
        state.ball.direction = HorizontalDir::Right;
        state.beeping = BEEP_TICKS;
        events.push(GameEvent::PaddleBounce(PaddleSide::Player));
    }
    if state.ball.rect.intersects(&state.bot.rect) {
        redraw_inclination(state);
        state.ball.direction = HorizontalDir::Left;
        state.beeping = BEEP_TICKS;
        events.push(GameEvent::PaddleBounce(PaddleSide::Bot));
    }

    // Movement and control, suppressed while paused.
    if !state.paused {
        state.ball.rect.y += state.inclination;
        state.ball.rect.x += match state.ball.direction {
            HorizontalDir::Right => BALL_SPEED,
            HorizontalDir::Left => -BALL_SPEED,
        };

        // Bot AI: one pixel toward the ball, no smoothing or prediction.
        if state.ball.rect.y > state.bot.center_y() {
            state.bot.move_down();
        } else {
            state.bot.move_up();
        }

        if input.move_up {
            state.player.move_up();
        }
        if input.move_down {
            state.player.move_down();
        }
    }

    events
}

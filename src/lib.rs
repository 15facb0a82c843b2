//! Badge Pong - two-paddle Pong for a 128x64 monochrome display
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, scoring, bot AI)
//! - `platform`: Boundary traits for display, buttons, speaker and clock
//! - `app`: Main loop orchestrator tying input, simulation and drawing together
//! - `headless`: No-hardware platform implementation for demos and harnesses

pub mod app;
pub mod headless;
pub mod platform;
pub mod settings;
pub mod sim;

pub use app::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Display width in pixels
    pub const WIDTH: i32 = 128;
    /// Display height in pixels
    pub const HEIGHT: i32 = 64;

    /// Paddle dimensions
    pub const PADDLE_WIDTH: i32 = 3;
    pub const PADDLE_HEIGHT: i32 = 13;
    /// Pixels a paddle moves per tick
    pub const PADDLE_SPEED: i32 = 1;

    /// Ball edge length (a square standing in for a small circle)
    pub const BALL_SIZE: i32 = 3;
    /// Horizontal pixels the ball moves per tick
    pub const BALL_SPEED: i32 = 2;

    /// Horizontal position of the bot paddle
    pub const BOT_X: i32 = WIDTH - 5;
    /// Horizontal position of the center divider line
    pub const DIVIDER_X: i32 = WIDTH / 2 + 2;

    /// Vertical inclination redraw range (inclusive, biased toward the top)
    pub const INCLINATION_MIN: i32 = -4;
    pub const INCLINATION_MAX: i32 = 0;

    /// Buzzer idle frequency
    pub const DEFAULT_TONE_HZ: u32 = 500;
    /// Buzzer duty level while a tone plays
    pub const TONE_DUTY: u16 = 1000;
    /// Ticks of tone after a paddle hit
    pub const BEEP_TICKS: u32 = 5;

    /// Score feedback tone frequencies
    pub const SCORE_TONE_HZ: u32 = 1000;
    pub const SCORE_TONE_ALT_HZ: u32 = 1500;
    /// Duration of each score feedback phase in milliseconds
    pub const FEEDBACK_STEP_MS: u64 = 100;
}

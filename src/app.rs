//! Main loop orchestrator
//!
//! Ties input polling, the simulation tick and the draw calls together,
//! once per tick: service the beeper, clear the frame, branch on mode,
//! draw, present. The loop has no termination condition of its own.

use crate::consts::*;
use crate::platform::{Button, Platform};
use crate::sim::state::Mode;
use crate::sim::tick::{GameEvent, TickInput, tick};
use crate::sim::{GameState, Rect};

/// Game instance: the state aggregate plus the platform it runs on.
pub struct Game<P: Platform> {
    pub state: GameState,
    platform: P,
}

impl<P: Platform> Game<P> {
    pub fn new(state: GameState, platform: P) -> Self {
        Self { state, platform }
    }

    /// Access the platform, e.g. to script inputs in a harness.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Run frames until the host process is stopped externally.
    pub fn run(&mut self) -> ! {
        loop {
            self.run_frame();
        }
    }

    /// One full tick: beeper, clear, mode branch, present.
    pub fn run_frame(&mut self) -> Vec<GameEvent> {
        self.service_beeper();
        self.platform.clear();

        let events = match self.state.mode {
            Mode::Menu => {
                self.menu_frame();
                Vec::new()
            }
            Mode::Playing => self.playing_frame(),
        };

        self.platform.present();
        events
    }

    /// Drive or silence the paddle-hit tone. Runs every frame, menu
    /// included, so an armed beep expires on schedule.
    fn service_beeper(&mut self) {
        if self.state.beeping > 0 {
            self.platform.set_duty(TONE_DUTY);
            self.state.beeping -= 1;
        } else {
            self.platform.set_duty(0);
        }
    }

    /// Title screen: inverted text, any button starts the match.
    fn menu_frame(&mut self) {
        self.platform
            .draw_text("Pong!", WIDTH / 2 - 15, HEIGHT / 2 - 10);
        self.platform
            .draw_text("Press to start", WIDTH / 2 - 55, HEIGHT / 2 + 10);
        self.platform.invert(true);

        if self.platform.is_pressed(Button::Down) || self.platform.is_pressed(Button::Up) {
            self.state.mode = Mode::Playing;
            self.platform.invert(false);
            log::info!("match started (seed {})", self.state.seed);
        }
    }

    /// One tick of the match plus its frame.
    fn playing_frame(&mut self) -> Vec<GameEvent> {
        self.platform.draw_line(DIVIDER_X, 0, DIVIDER_X, HEIGHT, true);

        let input = TickInput::poll(&mut self.platform);
        let events = tick(&mut self.state, &input, &mut self.platform);
        for event in &events {
            self.log_event(*event);
        }

        self.draw_entity(self.state.player.rect);
        self.draw_entity(self.state.bot.rect);
        self.draw_entity(self.state.ball.rect);

        self.platform
            .draw_text(&self.state.player_score.to_string(), WIDTH / 2 - 20, 5);
        self.platform
            .draw_text(&self.state.bot_score.to_string(), WIDTH / 2 + 20, 5);

        events
    }

    fn draw_entity(&mut self, rect: Rect) {
        self.platform.fill_rect(rect.x, rect.y, rect.w, rect.h, true);
    }

    fn log_event(&self, event: GameEvent) {
        match event {
            GameEvent::PlayerScored | GameEvent::BotScored => log::info!(
                "{:?}: {}-{}",
                event,
                self.state.player_score,
                self.state.bot_score
            ),
            GameEvent::WallBounce | GameEvent::PaddleBounce(_) => {
                log::debug!("{:?} at tick {}", event, self.state.time_ticks)
            }
        }
    }
}

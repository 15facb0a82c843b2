//! No-hardware platform implementation
//!
//! Video calls are dropped, buttons are plain fields a harness can script,
//! and the clock optionally sleeps for real so the score feedback keeps its
//! timing. Used by the demo binary; also handy as a soak-test harness.

use crate::platform::{Button, Buttons, Clock, Display, Speaker};

/// Platform that runs the game without a display, buttons or buzzer.
#[derive(Debug, Default)]
pub struct Headless {
    pub up_pressed: bool,
    pub down_pressed: bool,
    /// Honor `sleep_ms` with a real delay instead of returning immediately.
    pub realtime: bool,
    /// Frames pushed so far.
    pub frames_presented: u64,
}

impl Headless {
    pub fn new(realtime: bool) -> Self {
        Self {
            realtime,
            ..Self::default()
        }
    }
}

impl Display for Headless {
    fn clear(&mut self) {}
    fn fill_rect(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _on: bool) {}
    fn draw_line(&mut self, _x0: i32, _y0: i32, _x1: i32, _y1: i32, _on: bool) {}
    fn draw_text(&mut self, _text: &str, _x: i32, _y: i32) {}
    fn invert(&mut self, _on: bool) {}
    fn present(&mut self) {
        self.frames_presented += 1;
    }
}

impl Buttons for Headless {
    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::Up => self.up_pressed,
            Button::Down => self.down_pressed,
        }
    }
}

impl Speaker for Headless {
    fn set_frequency(&mut self, _hz: u32) {}
    fn set_duty(&mut self, _level: u16) {}
}

impl Clock for Headless {
    fn sleep_ms(&mut self, ms: u64) {
        if self.realtime {
            std::thread::sleep(std::time::Duration::from_millis(ms));
        }
    }
}

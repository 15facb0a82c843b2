//! Platform boundary traits
//!
//! The simulation core talks to hardware only through these narrow
//! interfaces. The real implementations (I2C display driver, GPIO buttons,
//! PWM buzzer) live outside this crate; [`crate::headless::Headless`] and
//! the test mock implement them without hardware.
//!
//! All methods are infallible by design: inputs are pre-validated hardware
//! signals and a failed frame present is the implementor's concern, not the
//! simulation's.

/// Monochrome frame buffer sink. Color is 1-bit: `true` lights a pixel.
pub trait Display {
    /// Clear the frame buffer to black.
    fn clear(&mut self);
    /// Fill a rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, on: bool);
    /// Draw a line between two points.
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, on: bool);
    /// Draw text with its top-left corner at (x, y).
    fn draw_text(&mut self, text: &str, x: i32, y: i32);
    /// Invert the whole display.
    fn invert(&mut self, on: bool);
    /// Push the frame buffer to the panel.
    fn present(&mut self);
}

/// The two logical buttons of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
}

/// Button input source. Implementations resolve polarity (the physical
/// lines are active-low) and debounce before reporting.
pub trait Buttons {
    /// Whether the given button is currently held.
    fn is_pressed(&mut self, button: Button) -> bool;
}

/// PWM buzzer sink. Duty 0 is silence; any nonzero duty at the configured
/// frequency is audible.
pub trait Speaker {
    fn set_frequency(&mut self, hz: u32);
    fn set_duty(&mut self, level: u16);
}

/// Blocking delay primitive, used only by the score feedback sequence.
pub trait Clock {
    fn sleep_ms(&mut self, ms: u64);
}

/// What the score feedback sequence needs from the platform.
pub trait Feedback: Display + Speaker + Clock {}
impl<T: Display + Speaker + Clock> Feedback for T {}

/// Everything the main loop needs from the platform.
pub trait Platform: Display + Buttons + Speaker + Clock {}
impl<T: Display + Buttons + Speaker + Clock> Platform for T {}

#[cfg(test)]
pub(crate) mod mock {
    //! Call-recording platform for simulation and app tests.

    use super::*;

    /// Every boundary call, in order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Clear,
        FillRect(i32, i32, i32, i32, bool),
        DrawLine(i32, i32, i32, i32, bool),
        DrawText(String, i32, i32),
        Invert(bool),
        Present,
        SetFrequency(u32),
        SetDuty(u16),
        Sleep(u64),
    }

    /// Records every call and serves scripted button state.
    #[derive(Debug, Default)]
    pub struct MockPlatform {
        pub calls: Vec<Call>,
        pub up_pressed: bool,
        pub down_pressed: bool,
    }

    impl MockPlatform {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn slept_ms(&self) -> u64 {
            self.calls
                .iter()
                .map(|c| if let Call::Sleep(ms) = c { *ms } else { 0 })
                .sum()
        }
    }

    impl Display for MockPlatform {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }
        fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, on: bool) {
            self.calls.push(Call::FillRect(x, y, w, h, on));
        }
        fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, on: bool) {
            self.calls.push(Call::DrawLine(x0, y0, x1, y1, on));
        }
        fn draw_text(&mut self, text: &str, x: i32, y: i32) {
            self.calls.push(Call::DrawText(text.to_string(), x, y));
        }
        fn invert(&mut self, on: bool) {
            self.calls.push(Call::Invert(on));
        }
        fn present(&mut self) {
            self.calls.push(Call::Present);
        }
    }

    impl Buttons for MockPlatform {
        fn is_pressed(&mut self, button: Button) -> bool {
            match button {
                Button::Up => self.up_pressed,
                Button::Down => self.down_pressed,
            }
        }
    }

    impl Speaker for MockPlatform {
        fn set_frequency(&mut self, hz: u32) {
            self.calls.push(Call::SetFrequency(hz));
        }
        fn set_duty(&mut self, level: u16) {
            self.calls.push(Call::SetDuty(level));
        }
    }

    impl Clock for MockPlatform {
        fn sleep_ms(&mut self, ms: u64) {
            self.calls.push(Call::Sleep(ms));
        }
    }
}

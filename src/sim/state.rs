//! Game state and core simulation types
//!
//! All match state (scores, mode flags, ball velocity, random source)
//! lives in one [`GameState`] aggregate owned by the main loop; nothing is
//! ambient or global.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Horizontal travel direction of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizontalDir {
    Left,
    Right,
}

/// Current mode of the machine
///
/// `Menu` is entered once at boot and left once; there is no return path
/// and no win condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Menu,
    Playing,
}

/// A player- or bot-controlled paddle, restricted to vertical movement at
/// a fixed horizontal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, PADDLE_WIDTH, PADDLE_HEIGHT),
        }
    }

    /// Move one step up, clamped at the top edge.
    pub fn move_up(&mut self) {
        if self.rect.y > 0 {
            self.rect.y -= PADDLE_SPEED;
        }
        debug_assert!(self.rect.y >= 0);
    }

    /// Move one step down, clamped so the paddle stays fully on-screen.
    pub fn move_down(&mut self) {
        if self.rect.y + self.rect.h < HEIGHT {
            self.rect.y += PADDLE_SPEED;
        }
        debug_assert!(self.rect.y + self.rect.h <= HEIGHT);
    }

    /// Vertical center of the paddle, used by the bot tracking rule.
    pub fn center_y(&self) -> i32 {
        self.rect.y + self.rect.h / 2
    }
}

/// The ball: a small square with a horizontal direction. Its vertical
/// velocity (the inclination) lives on [`GameState`], since score and
/// paddle events redraw it as a single shared value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub direction: HorizontalDir,
}

impl Ball {
    pub fn new() -> Self {
        let mut ball = Self {
            rect: Rect::new(0, 0, BALL_SIZE, BALL_SIZE),
            direction: HorizontalDir::Right,
        };
        ball.center();
        ball
    }

    /// Reset position to the screen center.
    pub fn center(&mut self) {
        self.rect.x = (WIDTH - BALL_SIZE) / 2;
        self.rect.y = (HEIGHT - BALL_SIZE) / 2;
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete game state (deterministic once seeded)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed for reproducibility
    pub seed: u64,
    /// Seeded RNG for inclination redraws
    pub rng: Pcg32,
    /// Left paddle, driven by the buttons
    pub player: Paddle,
    /// Right paddle, driven by the tracking AI
    pub bot: Paddle,
    pub ball: Ball,
    /// Per-tick vertical displacement of the ball
    pub inclination: i32,
    pub player_score: u32,
    pub bot_score: u32,
    pub mode: Mode,
    /// True for the duration of the score feedback sequence; gates ball and
    /// paddle movement but not boundary/collision checks or rendering.
    pub paused: bool,
    /// Remaining ticks of the paddle-hit tone (fire-and-forget, never
    /// blocks the loop)
    pub beeping: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Paddle::new(0, 0),
            bot: Paddle::new(BOT_X, 0),
            ball: Ball::new(),
            inclination: 0,
            player_score: 0,
            bot_score: 0,
            mode: Mode::Menu,
            paused: false,
            beeping: 0,
            time_ticks: 0,
        }
    }

    /// Serializable view of the observable state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            time_ticks: self.time_ticks,
            mode: self.mode,
            player: self.player,
            bot: self.bot,
            ball: self.ball,
            inclination: self.inclination,
            player_score: self.player_score,
            bot_score: self.bot_score,
        }
    }
}

/// Observable game state, minus the RNG (which is reconstructible from the
/// seed but not replayable from a mid-game snapshot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub time_ticks: u64,
    pub mode: Mode,
    pub player: Paddle,
    pub bot: Paddle,
    pub ball: Ball,
    pub inclination: i32,
    pub player_score: u32,
    pub bot_score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_move_up_clamps_at_top() {
        // Scenario B: paddle at y=0, move_up leaves y at 0
        let mut paddle = Paddle::new(0, 0);
        paddle.move_up();
        assert_eq!(paddle.rect.y, 0);
    }

    #[test]
    fn test_move_down_clamps_at_bottom() {
        let mut paddle = Paddle::new(0, HEIGHT - PADDLE_HEIGHT);
        paddle.move_down();
        assert_eq!(paddle.rect.y, HEIGHT - PADDLE_HEIGHT);
    }

    #[test]
    fn test_paddle_moves_one_pixel() {
        let mut paddle = Paddle::new(0, 10);
        paddle.move_down();
        assert_eq!(paddle.rect.y, 11);
        paddle.move_up();
        assert_eq!(paddle.rect.y, 10);
    }

    #[test]
    fn test_ball_centers_on_screen() {
        let mut ball = Ball::new();
        ball.rect.x = 5;
        ball.rect.y = 40;
        ball.center();
        assert_eq!(ball.rect.x, 62);
        assert_eq!(ball.rect.y, 30);
        assert_eq!(ball.direction, HorizontalDir::Right);
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new(1);
        assert_eq!(state.mode, Mode::Menu);
        assert!(!state.paused);
        assert_eq!(state.beeping, 0);
        assert_eq!((state.player_score, state.bot_score), (0, 0));
        assert_eq!(state.player.rect.x, 0);
        assert_eq!(state.bot.rect.x, BOT_X);
        assert_eq!(state.inclination, 0);
    }

    proptest! {
        #[test]
        fn prop_paddle_never_leaves_screen(
            start_y in 0..=(HEIGHT - PADDLE_HEIGHT),
            moves in proptest::collection::vec(any::<bool>(), 0..200),
        ) {
            let mut paddle = Paddle::new(0, start_y);
            for up in moves {
                if up {
                    paddle.move_up();
                } else {
                    paddle.move_down();
                }
                prop_assert!(paddle.rect.y >= 0);
                prop_assert!(paddle.rect.y + paddle.rect.h <= HEIGHT);
            }
        }
    }
}

//! Deterministic simulation module
//!
//! All gameplay logic lives here. The simulation is deterministic:
//! - Fixed tick only (one tick per main loop iteration)
//! - Seeded RNG only
//! - No rendering or input dependencies
//!
//! The one platform touchpoint is the blocking score feedback: scoring
//! freezes the whole loop for a fixed tone/invert pulse sequence, so `tick`
//! takes a [`crate::platform::Feedback`] collaborator to drive it.

pub mod rect;
pub mod state;
pub mod tick;

pub use rect::Rect;
pub use state::{Ball, GameState, HorizontalDir, Mode, Paddle, Snapshot};
pub use tick::{GameEvent, PaddleSide, TickInput, tick};

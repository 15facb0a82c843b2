//! Axis-aligned rectangle geometry
//!
//! Paddles and the ball share this one shape. Coordinates are integer
//! display pixels, origin at the top-left corner.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle: top-left corner plus positive width/height.
///
/// The rect does not enforce screen bounds itself; its owner does (paddles
/// clamp their own movement, the resolver clamps the ball).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        debug_assert!(w > 0 && h > 0);
        Self { x, y, w, h }
    }

    /// Standard AABB overlap test. Touching edges do not count as overlap.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

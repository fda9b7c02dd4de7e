//! Fundamental time and direction types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Game clock tracking. One frame = one call to the world's clock advance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTime {
    /// Elapsed frames since world creation.
    pub frame: u64,
}

impl GameTime {
    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.frame += 1;
    }
}

/// Compass heading in whole degrees, always normalized to `[0, 359]`.
///
/// 0 = North, 90 = East, 180 = South, 270 = West; positive turns are
/// clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading(i32);

impl Heading {
    pub fn new(degrees: i32) -> Self {
        Self(degrees.rem_euclid(360))
    }

    /// Heading in degrees, guaranteed within `[0, 359]`.
    pub fn degrees(self) -> i32 {
        self.0
    }

    /// Rotate by `delta` degrees (positive = clockwise), wrapping at both
    /// ends so the result stays within `[0, 359]`.
    pub fn turn(self, delta: i32) -> Self {
        Self((self.0 + delta).rem_euclid(360))
    }

    /// Unit direction vector for this heading (x = East, y = North).
    pub fn unit_vector(self) -> DVec2 {
        let radians = f64::from(self.0).to_radians();
        DVec2::new(radians.sin(), radians.cos())
    }
}

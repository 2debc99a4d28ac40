//! Diamond Orbit - steer a ship around the screen and collect the diamonds
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (rotation solving, easing, capture, reset)
//! - `platform`: Input aggregation and event sources
//! - `renderer`: Per-entity draw parameters handed to the rendering collaborator
//! - `ui`: Score overlay text
//! - `settings`: JSON configuration
//! - `game`: The frame loop tying everything together

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{ConfigError, GameError, SimError};
pub use game::Game;
pub use settings::{KeyBindings, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Number of diamonds in a session
    pub const COLLECTIBLE_COUNT: usize = 4;
    /// Score at which the overlay switches to the victory message
    pub const WIN_SCORE: i32 = COLLECTIBLE_COUNT as i32;

    /// Starting scale for every entity
    pub const BASE_SCALE: f32 = 0.125;
    /// Ship growth per capture (multiplicative)
    pub const CAPTURE_GROWTH: f32 = 1.05;
    /// Capture happens strictly inside this distance
    pub const ORBIT_RADIUS: f32 = 0.25;
    /// Where captured diamonds are parked (x), well outside [-1, 1]
    pub const OFFSCREEN_X: f32 = -5.0;

    /// Heading easing: fixed step per frame and snap window
    pub const ANGLE_STEP: f32 = 0.05;
    pub const ANGLE_EPSILON: f32 = 0.005;
    /// Position easing: proportional gain and snap window
    pub const POSITION_GAIN: f32 = 1.0005;
    pub const POSITION_EPSILON: f32 = 0.00005;
    /// Distance the target position moves per frame while thrust is held
    pub const THRUST_STEP: f32 = 0.005;

    /// Ship spawns within [-0.5, 0.5] on both axes
    pub const SHIP_SPAWN_BOUND: f32 = 0.5;
    /// Diamond quadrant centres sit at (+/-0.7, +/-0.7)
    pub const COLLECTIBLE_OFFSET: f32 = 0.7;
    /// Diamond jitter divisor (perturbation of at most 1/6)
    pub const COLLECTIBLE_JITTER: f32 = 6.0;
    /// Resolution of the coarse random generator
    pub const RANDOM_RESOLUTION: u32 = 600;
}

/// Map a cursor position in pixels to device coordinates in [-1, 1].
///
/// Screen-space Y grows downward, so the vertical axis is flipped.
#[inline]
pub fn pixel_to_device(x: f32, y: f32, screen: Vec2) -> Vec2 {
    let mut p = Vec2::new(x, y) / (screen - Vec2::ONE);
    p = p * 2.0 - Vec2::ONE;
    p.y = -p.y;
    p
}

/// Inverse of [`pixel_to_device`]
#[inline]
pub fn device_to_pixel(p: Vec2, screen: Vec2) -> Vec2 {
    let flipped = Vec2::new(p.x, -p.y);
    (flipped + Vec2::ONE) * 0.5 * (screen - Vec2::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_device_corners() {
        let screen = Vec2::new(800.0, 800.0);
        assert_eq!(pixel_to_device(0.0, 0.0, screen), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_device(799.0, 799.0, screen), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_pixel_device_inverse() {
        let screen = Vec2::new(640.0, 480.0);
        let p = Vec2::new(0.25, -0.6);
        let px = device_to_pixel(p, screen);
        let back = pixel_to_device(px.x, px.y, screen);
        assert!((back - p).length() < 1e-5);
    }
}

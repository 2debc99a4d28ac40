//! Proximity capture between the ship and the diamonds

use glam::Vec2;

use super::state::{Collectible, Ship};
use crate::consts::{CAPTURE_GROWTH, OFFSCREEN_X, ORBIT_RADIUS};

/// Strictly closer than the orbit threshold
#[inline]
pub fn within_orbit(a: Vec2, b: Vec2) -> bool {
    a.distance(b) < ORBIT_RADIUS
}

/// Capture `diamond` if the ship is in orbit of it.
///
/// On capture the diamond is parked off screen and the ship grows. The caller
/// owns the score.
pub fn check_capture(ship: &mut Ship, diamond: &mut Collectible) -> bool {
    if !within_orbit(ship.position, diamond.position) {
        return false;
    }
    diamond.position.x = OFFSCREEN_X;
    diamond.active = false;
    ship.scale *= CAPTURE_GROWTH;
    true
}

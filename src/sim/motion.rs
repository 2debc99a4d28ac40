//! Per-frame easing of the ship toward its commanded state
//!
//! Two regimes:
//! - heading turns at a constant rate
//! - position closes a fixed fraction of the remaining gap each frame
//!
//! Both snap to the target once inside their epsilon window.

use crate::consts::{ANGLE_EPSILON, ANGLE_STEP, POSITION_EPSILON, POSITION_GAIN};

use super::state::Ship;

/// True when `a` lies strictly inside the open window around `b`
#[inline]
pub fn close_enough(a: f32, b: f32, epsilon: f32) -> bool {
    a < b + epsilon && a > b - epsilon
}

/// Constant-rate step for the heading channel
pub fn step_heading(current: f32, target: f32) -> f32 {
    if close_enough(current, target, ANGLE_EPSILON) {
        return target;
    }
    // Clamp so a step can't carry the heading past its target and oscillate
    if current < target {
        (current + ANGLE_STEP).min(target)
    } else {
        (current - ANGLE_STEP).max(target)
    }
}

/// Proportional step for one position axis
pub fn step_position(current: f32, target: f32) -> f32 {
    if close_enough(current, target, POSITION_EPSILON) {
        return target;
    }
    let step = (current - target).abs() * POSITION_GAIN;
    if current < target {
        current + step
    } else {
        current - step
    }
}

/// Advance the ship's heading and position by one frame
pub fn animate_ship(ship: &mut Ship) {
    ship.heading = step_heading(ship.heading, ship.target_heading);
    ship.position.x = step_position(ship.position.x, ship.target_position.x);
    ship.position.y = step_position(ship.position.y, ship.target_position.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_heading_reaches_target_then_snaps() {
        let target = 0.2;
        let mut heading = 0.0;
        for _ in 0..4 {
            heading = step_heading(heading, target);
        }
        assert!((heading - target).abs() < ANGLE_EPSILON);
        heading = step_heading(heading, target);
        assert_eq!(heading, target);
    }

    #[test]
    fn test_heading_turns_down() {
        assert!((step_heading(1.0, 0.0) - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_heading_does_not_overshoot() {
        // 0.07 isn't a multiple of the step; the heading must still settle
        let mut heading = 0.0;
        for _ in 0..10 {
            heading = step_heading(heading, 0.07);
        }
        assert_eq!(heading, 0.07);
    }

    #[test]
    fn test_position_snaps_inside_epsilon() {
        assert_eq!(step_position(0.50003, 0.5), 0.5);
        assert_eq!(step_position(0.5, 0.5), 0.5);
    }

    #[test]
    fn test_animate_ship_leaves_target_alone() {
        let mut ship = Ship {
            target_position: Vec2::new(0.1, -0.1),
            target_heading: 1.0,
            ..Ship::default()
        };
        animate_ship(&mut ship);
        assert_eq!(ship.target_position, Vec2::new(0.1, -0.1));
        assert_eq!(ship.target_heading, 1.0);
        assert!((ship.heading - ANGLE_STEP).abs() < 1e-6);
        assert!((ship.position - ship.target_position).length() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_position_gap_never_grows(current in -1.0f32..1.0, target in -1.0f32..1.0) {
            let mut value = current;
            let mut gap = (value - target).abs();
            for _ in 0..16 {
                value = step_position(value, target);
                let next_gap = (value - target).abs();
                prop_assert!(next_gap <= gap);
                gap = next_gap;
            }
            prop_assert_eq!(value, target);
        }

        #[test]
        fn prop_heading_converges(current in -10.0f32..10.0, target in -10.0f32..10.0) {
            let mut value = current;
            let frames = ((current - target).abs() / ANGLE_STEP) as usize + 2;
            for _ in 0..frames {
                value = step_heading(value, target);
            }
            prop_assert_eq!(value, target);
        }
    }
}

//! Turning the ship toward an aim point
//!
//! Headings are measured clockwise from north and accumulate instead of
//! wrapping, so the same physical facing can have several numeric values.
//! The animator always turns toward the numeric target at a fixed rate.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::error::SimError;

/// Reference heading (north)
const NORTH: Vec2 = Vec2::Y;

/// Result of solving for a new aim point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub target_heading: f32,
    pub direction: Vec2,
}

/// Positive when `b` lies clockwise of `a`
#[inline]
fn clockwise(a: Vec2, b: Vec2) -> f32 {
    a.y * b.x - a.x * b.y
}

/// Unsigned angle between two unit vectors
#[inline]
fn angle_between(a: Vec2, b: Vec2) -> f32 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// Compute the heading that points the ship from `position` at `aim`.
///
/// When the new facing matches `direction` exactly, the current target
/// heading is returned unchanged.
pub fn solve_rotation(
    direction: Vec2,
    target_heading: f32,
    position: Vec2,
    aim: Vec2,
) -> Result<Rotation, SimError> {
    let new_direction = (aim - position)
        .try_normalize()
        .ok_or(SimError::DegenerateAim { aim, position })?;

    if new_direction == direction {
        return Ok(Rotation {
            target_heading,
            direction,
        });
    }

    let theta1 = angle_between(direction, new_direction);
    let mut theta2 = angle_between(NORTH, direction);

    let heading = if clockwise(direction, new_direction) > 0.0 {
        // Current facing is in the western half: measure from north the long way
        if NORTH.x > direction.x {
            theta2 = TAU - theta2;
        }
        theta1 + theta2
    } else if clockwise(NORTH, direction) < 0.0 {
        TAU - (theta2 + theta1)
    } else {
        theta2 - theta1
    };

    Ok(Rotation {
        target_heading: heading,
        direction: new_direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_north_to_east_turns_clockwise() {
        let r = solve_rotation(Vec2::Y, 0.0, Vec2::ZERO, Vec2::new(0.5, 0.0)).unwrap();
        assert!(close(r.target_heading, FRAC_PI_2));
        assert!((r.direction - Vec2::X).length() < 1e-6);
    }

    #[test]
    fn test_north_to_west_turns_counterclockwise() {
        let r = solve_rotation(Vec2::Y, 0.0, Vec2::ZERO, Vec2::new(-0.5, 0.0)).unwrap();
        assert!(close(r.target_heading, -FRAC_PI_2));
    }

    #[test]
    fn test_east_to_south() {
        let r = solve_rotation(Vec2::X, FRAC_PI_2, Vec2::ZERO, Vec2::new(0.0, -0.3)).unwrap();
        assert!(close(r.target_heading, PI));
    }

    #[test]
    fn test_south_to_west() {
        let r = solve_rotation(Vec2::NEG_Y, PI, Vec2::ZERO, Vec2::new(-0.3, 0.0)).unwrap();
        assert!(close(r.target_heading, 3.0 * FRAC_PI_2));
    }

    #[test]
    fn test_same_direction_keeps_target() {
        let r = solve_rotation(Vec2::Y, 4.2, Vec2::new(0.1, 0.25), Vec2::new(0.1, 0.75)).unwrap();
        assert_eq!(r.target_heading, 4.2);
        assert_eq!(r.direction, Vec2::Y);
    }

    #[test]
    fn test_degenerate_aim_rejected() {
        let pos = Vec2::new(0.2, -0.1);
        let err = solve_rotation(Vec2::Y, 0.0, pos, pos).unwrap_err();
        assert_eq!(err, SimError::DegenerateAim { aim: pos, position: pos });
    }

    proptest! {
        #[test]
        fn prop_direction_stays_unit(
            start in 0.0f32..TAU,
            px in -0.5f32..0.5, py in -0.5f32..0.5,
            ax in -1.0f32..1.0, ay in -1.0f32..1.0,
        ) {
            let position = Vec2::new(px, py);
            let aim = Vec2::new(ax, ay);
            prop_assume!((aim - position).length() > 1e-3);
            let direction = Vec2::new(start.sin(), start.cos());
            let r = solve_rotation(direction, start, position, aim).unwrap();
            prop_assert!((r.direction.length() - 1.0).abs() < 1e-4);
            prop_assert!(r.target_heading.is_finite());
        }

        #[test]
        fn prop_repeated_aim_is_idempotent(
            px in -0.5f32..0.5, py in -0.5f32..0.5,
            ax in -1.0f32..1.0, ay in -1.0f32..1.0,
        ) {
            let position = Vec2::new(px, py);
            let aim = Vec2::new(ax, ay);
            prop_assume!((aim - position).length() > 1e-3);
            let first = solve_rotation(Vec2::Y, 0.0, position, aim).unwrap();
            let second =
                solve_rotation(first.direction, first.target_heading, position, aim).unwrap();
            prop_assert_eq!(first, second);
        }
    }
}

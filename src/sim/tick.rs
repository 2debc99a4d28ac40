//! Per-frame simulation step
//!
//! Order within a frame: reset check, input commands, easing, capture.

use super::collision::check_capture;
use super::motion::animate_ship;
use super::rotation::solve_rotation;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::THRUST_STEP;
use crate::error::SimError;
use crate::platform::input::InputSnapshot;

/// What a frame did, so the caller knows which input flags to clear
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickOutcome {
    /// The session was reinitialized and the frame ended early
    pub reset: bool,
    /// A click or thrust command was applied
    pub command_handled: bool,
    pub events: Vec<GameEvent>,
}

/// Advance the session by one frame
pub fn tick(state: &mut GameState, input: &InputSnapshot) -> Result<TickOutcome, SimError> {
    let mut outcome = TickOutcome::default();

    if input.reset {
        state.phase = GamePhase::Resetting;
        state.reset()?;
        outcome.reset = true;
        outcome.events.push(GameEvent::Reset);
        return Ok(outcome);
    }
    state.phase = GamePhase::Playing;

    if input.has_command() {
        let ship = &mut state.ship;

        if input.clicked {
            match solve_rotation(
                ship.direction,
                ship.target_heading,
                ship.position,
                input.cursor,
            ) {
                Ok(rotation) => {
                    if rotation.target_heading != ship.target_heading {
                        log::debug!(
                            "Rotate: heading {:.3} -> {:.3}",
                            ship.target_heading,
                            rotation.target_heading
                        );
                    }
                    ship.target_heading = rotation.target_heading;
                    ship.direction = rotation.direction;
                }
                Err(err) => log::warn!("Ignoring click: {err}"),
            }
        }

        let thrust = ship.direction * THRUST_STEP;
        if input.move_forward {
            ship.target_position += thrust;
        }
        if input.move_backward {
            ship.target_position -= thrust;
        }

        outcome.command_handled = true;
    }

    animate_ship(&mut state.ship);

    for (index, diamond) in state.collectibles.iter_mut().enumerate() {
        if check_capture(&mut state.ship, diamond) {
            state.score += 1;
            log::debug!("Captured diamond {index}, score {}", state.score);
            outcome.events.push(GameEvent::Captured { index });
        }
    }

    state.frame += 1;
    Ok(outcome)
}

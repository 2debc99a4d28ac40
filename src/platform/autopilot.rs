//! Demo mode - an event source that plays the game
//!
//! Aims at the nearest remaining diamond with a click and holds thrust.
//! Re-aims whenever the target changes and periodically to correct drift.

use std::collections::VecDeque;

use glam::Vec2;

use super::input::{Action, EventSource, InputEvent, Key, MouseButton};
use crate::device_to_pixel;
use crate::settings::{KeyBindings, Settings};
use crate::sim::GameState;

/// Frames between corrective clicks on the same target
const RETARGET_INTERVAL: u64 = 30;

#[derive(Debug, Clone)]
pub struct Autopilot {
    screen: Vec2,
    bindings: KeyBindings,
    pending: VecDeque<InputEvent>,
    target: Option<usize>,
    thrusting: bool,
    frames: u64,
    budget: u64,
    done: bool,
}

impl Autopilot {
    /// Plays for at most `budget` frames
    pub fn new(settings: &Settings, budget: u64) -> Self {
        Self {
            screen: Vec2::new(settings.screen_width as f32, settings.screen_height as f32),
            bindings: settings.bindings.clone(),
            pending: VecDeque::new(),
            target: None,
            thrusting: false,
            frames: 0,
            budget,
            done: false,
        }
    }

    fn key(&mut self, key: Key, action: Action) {
        self.pending.push_back(InputEvent::KeyChanged { key, action });
    }

    fn click_at(&mut self, target: Vec2) {
        let px = device_to_pixel(target, self.screen);
        self.pending
            .push_back(InputEvent::CursorMoved { x: px.x, y: px.y });
        self.pending.push_back(InputEvent::ButtonChanged {
            button: MouseButton::Left,
            action: Action::Press,
        });
        self.pending.push_back(InputEvent::ButtonChanged {
            button: MouseButton::Left,
            action: Action::Release,
        });
    }

    fn stop(&mut self) {
        if self.thrusting {
            self.key(self.bindings.thrust_forward, Action::Release);
            self.thrusting = false;
        }
        self.done = true;
    }
}

impl EventSource for Autopilot {
    fn poll(&mut self, state: &GameState) {
        if self.done {
            return;
        }
        self.frames += 1;

        if state.has_won() {
            log::info!("Autopilot finished after {} frames", self.frames);
            self.stop();
            return;
        }
        if self.frames > self.budget {
            log::warn!("Autopilot ran out of frames with score {}", state.score);
            self.stop();
            return;
        }

        let ship = state.ship.position;
        let nearest = state.active_collectibles().min_by(|(_, a), (_, b)| {
            a.position
                .distance_squared(ship)
                .partial_cmp(&b.position.distance_squared(ship))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if let Some((index, diamond)) = nearest {
            if self.target != Some(index) || self.frames % RETARGET_INTERVAL == 0 {
                if self.target != Some(index) {
                    log::debug!("Autopilot targeting diamond {index}");
                }
                self.target = Some(index);
                self.click_at(diamond.position);
            }
        }

        if !self.thrusting {
            self.key(self.bindings.thrust_forward, Action::Press);
            self.thrusting = true;
        }
    }

    fn next_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    fn should_close(&self) -> bool {
        self.done && self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Game;
    use crate::renderer::LogRenderer;

    #[test]
    fn test_first_poll_aims_and_thrusts() {
        let settings = Settings::default();
        let state = GameState::new(3).unwrap();
        let mut pilot = Autopilot::new(&settings, 100);
        pilot.poll(&state);

        let events: Vec<_> = std::iter::from_fn(|| pilot.next_event()).collect();
        assert!(matches!(events[0], InputEvent::CursorMoved { .. }));
        assert!(events.contains(&InputEvent::KeyChanged {
            key: settings.bindings.thrust_forward,
            action: Action::Press,
        }));
        assert!(!pilot.should_close());
    }

    #[test]
    fn test_autopilot_wins() {
        for seed in [1, 2, 3] {
            let settings = Settings::default();
            let mut game = Game::new(&settings, seed).unwrap();
            let mut pilot = Autopilot::new(&settings, 4000);
            let mut renderer = LogRenderer::default();

            game.run(&mut pilot, &mut renderer).unwrap();

            assert!(game.state.has_won(), "seed {seed} scored {}", game.state.score);
            assert!(game.state.collectibles.iter().all(|c| !c.active));
        }
    }

    #[test]
    fn test_budget_closes_source() {
        let settings = Settings::default();
        let state = GameState::new(3).unwrap();
        let mut pilot = Autopilot::new(&settings, 0);
        pilot.poll(&state);
        while pilot.next_event().is_some() {}
        assert!(pilot.should_close());
    }
}

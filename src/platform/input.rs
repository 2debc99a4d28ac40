//! Input events and the per-frame snapshot
//!
//! The platform delivers key, button and cursor events through an
//! [`EventSource`]. [`InputAggregator`] folds them into an [`InputSnapshot`]
//! which the simulation reads once per frame.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::pixel_to_device;
use crate::settings::{KeyBindings, Settings};
use crate::sim::GameState;

/// Logical keyboard keys the game can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Escape,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Press,
    Release,
    /// Auto-repeat while held (ignored)
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyChanged { key: Key, action: Action },
    ButtonChanged { button: MouseButton, action: Action },
    /// Raw cursor position in pixels, origin top-left
    CursorMoved { x: f32, y: f32 },
    Resized { width: u32, height: u32 },
}

impl InputEvent {
    /// Route the event to the matching handler method
    pub fn dispatch(self, handler: &mut dyn InputHandler) {
        match self {
            InputEvent::KeyChanged { key, action } => handler.on_key(key, action),
            InputEvent::ButtonChanged { button, action } => handler.on_mouse_button(button, action),
            InputEvent::CursorMoved { x, y } => handler.on_cursor_moved(x, y),
            InputEvent::Resized { width, height } => handler.on_resize(width, height),
        }
    }
}

/// Receiver for platform input notifications
pub trait InputHandler {
    fn on_key(&mut self, key: Key, action: Action);
    fn on_mouse_button(&mut self, button: MouseButton, action: Action);
    fn on_cursor_moved(&mut self, x: f32, y: f32);
    fn on_resize(&mut self, _width: u32, _height: u32) {}
}

/// Pull-based source of platform events
pub trait EventSource {
    /// Pump the platform queue once per frame. Sources that synthesize input
    /// may inspect the state they are playing against.
    fn poll(&mut self, _state: &GameState) {}

    /// Next pending event, `None` once the queue is drained for this frame
    fn next_event(&mut self) -> Option<InputEvent>;

    /// Checked once per loop iteration
    fn should_close(&self) -> bool;
}

/// Consolidated input state for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Cursor in device coordinates, [-1, 1] on both axes
    pub cursor: Vec2,
    pub move_forward: bool,
    pub move_backward: bool,
    pub reset: bool,
    /// Set on press, cleared only when consumed
    pub clicked: bool,
}

impl InputSnapshot {
    /// A click or a thrust key needs the simulation's attention
    pub fn has_command(&self) -> bool {
        self.clicked || self.move_forward || self.move_backward
    }
}

/// Folds platform events into an [`InputSnapshot`]
#[derive(Debug, Clone)]
pub struct InputAggregator {
    snapshot: InputSnapshot,
    screen: Vec2,
    bindings: KeyBindings,
    recompile_requested: bool,
}

impl InputAggregator {
    /// `width` and `height` must be at least 2 pixels
    pub fn new(width: u32, height: u32, bindings: KeyBindings) -> Self {
        Self {
            snapshot: InputSnapshot::default(),
            screen: Vec2::new(width as f32, height as f32),
            bindings,
            recompile_requested: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.screen_width,
            settings.screen_height,
            settings.bindings.clone(),
        )
    }

    pub fn snapshot(&self) -> &InputSnapshot {
        &self.snapshot
    }

    pub fn screen(&self) -> Vec2 {
        self.screen
    }

    /// Acknowledge the pending click
    pub fn consume_click(&mut self) {
        self.snapshot.clicked = false;
    }

    /// Drop every sticky and one-shot flag, keeping the cursor
    pub fn clear(&mut self) {
        self.snapshot = InputSnapshot {
            cursor: self.snapshot.cursor,
            ..Default::default()
        };
    }

    /// Returns true once per press of the recompile-shader key
    pub fn take_recompile_request(&mut self) -> bool {
        std::mem::take(&mut self.recompile_requested)
    }

    /// Drain every pending event from `source`, returning how many were handled
    pub fn pump(&mut self, source: &mut dyn EventSource) -> usize {
        let mut handled = 0;
        while let Some(event) = source.next_event() {
            event.dispatch(&mut *self);
            handled += 1;
        }
        handled
    }
}

impl InputHandler for InputAggregator {
    fn on_key(&mut self, key: Key, action: Action) {
        let held = match action {
            Action::Press => true,
            Action::Release => false,
            Action::Repeat => return,
        };

        if key == self.bindings.recompile_shader {
            if held {
                self.recompile_requested = true;
            }
        } else if key == self.bindings.thrust_forward {
            self.snapshot.move_forward = held;
        } else if key == self.bindings.thrust_backward {
            self.snapshot.move_backward = held;
        } else if key == self.bindings.reset {
            self.snapshot.reset = held;
        }
    }

    fn on_mouse_button(&mut self, button: MouseButton, action: Action) {
        if button == MouseButton::Left && action == Action::Press {
            self.snapshot.clicked = true;
        }
    }

    fn on_cursor_moved(&mut self, x: f32, y: f32) {
        self.snapshot.cursor = pixel_to_device(x, y, self.screen);
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        if width < 2 || height < 2 {
            log::warn!("Ignoring degenerate resize to {width}x{height}");
            return;
        }
        self.screen = Vec2::new(width as f32, height as f32);
    }
}

/// Replays a fixed list of per-frame event batches, then asks to close
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<InputEvent>>,
    pending: VecDeque<InputEvent>,
}

impl ScriptedEvents {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            pending: VecDeque::new(),
        }
    }

    /// Append a batch for a later frame
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }
}

impl EventSource for ScriptedEvents {
    fn poll(&mut self, _state: &GameState) {
        if let Some(batch) = self.frames.pop_front() {
            self.pending.extend(batch);
        }
    }

    fn next_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    fn should_close(&self) -> bool {
        self.frames.is_empty() && self.pending.is_empty()
    }
}

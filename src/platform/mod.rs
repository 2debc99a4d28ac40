//! Platform abstraction layer
//!
//! The windowing collaborator is reached only through these traits:
//! - `input`: event delivery, aggregation into a per-frame snapshot
//! - `autopilot`: a synthetic event source that plays the game

pub mod autopilot;
pub mod input;

pub use autopilot::Autopilot;
pub use input::{
    Action, EventSource, InputAggregator, InputEvent, InputHandler, InputSnapshot, Key,
    MouseButton, ScriptedEvents,
};

//! Error types for the simulation core, configuration and the frame loop

use glam::Vec2;
use thiserror::Error;

/// Preconditions the simulation refuses to run past
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Aim point coincides with the ship, so there is no direction to face
    #[error("aim point {aim} coincides with ship position {position}")]
    DegenerateAim { aim: Vec2, position: Vec2 },
    /// Rejection sampling would never terminate for this bound
    #[error("bounded sampling needs a positive bound, got {0}")]
    InvalidSampleBound(f32),
    /// A facing direction could not be normalized
    #[error("cannot derive a facing direction from a zero-length vector")]
    DegenerateDirection,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("screen must be at least 2x2 pixels, got {width}x{height}")]
    InvalidScreen { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Sim(#[from] SimError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

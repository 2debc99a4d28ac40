//! Game state and core simulation types

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::SessionRng;
use crate::consts::*;
use crate::error::SimError;
use crate::renderer::{DrawParams, Sprite};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Normal play
    Playing,
    /// Entities were reinitialized this frame
    Resetting,
}

/// Things that happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Captured { index: usize },
    Reset,
}

/// Which corner of the screen a diamond spawns in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quadrant {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl Quadrant {
    /// Spawn order, which is also draw order
    pub const ALL: [Quadrant; COLLECTIBLE_COUNT] = [
        Quadrant::UpperLeft,
        Quadrant::UpperRight,
        Quadrant::LowerLeft,
        Quadrant::LowerRight,
    ];

    pub fn sign(&self) -> Vec2 {
        match self {
            Quadrant::UpperLeft => Vec2::new(-1.0, 1.0),
            Quadrant::UpperRight => Vec2::new(1.0, 1.0),
            Quadrant::LowerLeft => Vec2::new(-1.0, -1.0),
            Quadrant::LowerRight => Vec2::new(1.0, -1.0),
        }
    }

    pub fn centre(&self) -> Vec2 {
        self.sign() * COLLECTIBLE_OFFSET
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub position: Vec2,
    /// Commanded position the animator eases toward
    pub target_position: Vec2,
    /// Accumulated rotation (radians, never wrapped)
    pub heading: f32,
    pub target_heading: f32,
    /// Unit facing vector
    pub direction: Vec2,
    pub scale: f32,
}

impl Default for Ship {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            target_position: Vec2::ZERO,
            heading: 0.0,
            target_heading: 0.0,
            direction: Vec2::Y,
            scale: BASE_SCALE,
        }
    }
}

impl Ship {
    pub fn draw_params(&self) -> DrawParams {
        DrawParams::new(self.position, self.heading, self.scale)
    }
}

/// A stationary diamond
///
/// Captured diamonds are parked off screen rather than removed, so indices
/// stay stable for the whole session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub quadrant: Quadrant,
    pub position: Vec2,
    pub heading: f32,
    pub scale: f32,
    pub active: bool,
}

impl Collectible {
    pub fn new(quadrant: Quadrant) -> Self {
        Self {
            quadrant,
            position: quadrant.centre(),
            heading: 0.0,
            scale: BASE_SCALE,
            active: true,
        }
    }

    pub fn draw_params(&self) -> DrawParams {
        DrawParams::new(self.position, self.heading, self.scale)
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub ship: Ship,
    /// Fixed order: upper-left, upper-right, lower-left, lower-right
    pub collectibles: [Collectible; COLLECTIBLE_COUNT],
    pub score: i32,
    pub phase: GamePhase,
    /// Frames simulated since the last reset
    pub frame: u64,
    rng: SessionRng,
}

impl GameState {
    /// Create a session and run the initial reset
    pub fn new(seed: u64) -> Result<Self, SimError> {
        let mut state = Self {
            ship: Ship::default(),
            collectibles: Quadrant::ALL.map(Collectible::new),
            score: 0,
            phase: GamePhase::Playing,
            frame: 0,
            rng: SessionRng::new(seed),
        };
        state.reset()?;
        Ok(state)
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Reinitialize every entity and the score
    pub fn reset(&mut self) -> Result<(), SimError> {
        for diamond in &mut self.collectibles {
            let jitter = Vec2::new(self.rng.make_random(), self.rng.make_random())
                / COLLECTIBLE_JITTER;
            diamond.position = diamond.quadrant.centre() - diamond.quadrant.sign() * jitter;
            diamond.heading = 0.0;
            diamond.scale = BASE_SCALE;
            diamond.active = true;
        }

        let x = self.rng.keep_within(SHIP_SPAWN_BOUND)?;
        let y = self.rng.keep_within(SHIP_SPAWN_BOUND)?;
        let ship = &mut self.ship;
        ship.position = Vec2::new(x, y);
        ship.target_position = ship.position;
        ship.heading = 0.0;
        ship.target_heading = 0.0;
        // Face north: toward the point straight above the ship on the top edge
        ship.direction = (Vec2::new(x, 1.0) - ship.position)
            .try_normalize()
            .ok_or(SimError::DegenerateDirection)?;
        ship.scale = BASE_SCALE;

        self.score = 0;
        self.frame = 0;
        log::info!("Session reset: ship at ({:.3}, {:.3})", x, y);
        Ok(())
    }

    /// All diamonds collected
    pub fn has_won(&self) -> bool {
        self.score >= WIN_SCORE
    }

    pub fn active_collectibles(&self) -> impl Iterator<Item = (usize, &Collectible)> {
        self.collectibles.iter().enumerate().filter(|(_, c)| c.active)
    }

    /// Draw parameters in draw order: diamonds first, ship on top
    pub fn draw_list(&self) -> Vec<(Sprite, DrawParams)> {
        self.collectibles
            .iter()
            .map(|c| (Sprite::Diamond, c.draw_params()))
            .chain(std::iter::once((Sprite::Ship, self.ship.draw_params())))
            .collect()
    }
}

//! Per-entity draw parameters

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use serde::Serialize;

/// The four scalars the vertex shader needs for one sprite
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable, Serialize)]
pub struct DrawParams {
    pub x: f32,
    pub y: f32,
    /// Rotation in radians
    pub theta: f32,
    pub scale: f32,
}

impl DrawParams {
    pub fn new(position: Vec2, theta: f32, scale: f32) -> Self {
        Self {
            x: position.x,
            y: position.y,
            theta,
            scale,
        }
    }

    /// Raw bytes for a uniform upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Which texture a draw call uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sprite {
    Ship,
    Diamond,
}

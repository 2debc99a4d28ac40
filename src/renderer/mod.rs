//! Rendering boundary
//!
//! Window, shader, texture and buffer management belong to the rendering
//! collaborator. The core only hands it draw parameters and overlay text.

pub mod params;

pub use params::{DrawParams, Sprite};

/// Something that can draw a frame of the game
pub trait Renderer {
    fn draw(&mut self, sprite: Sprite, params: DrawParams);
    fn overlay_text(&mut self, text: &str);
    /// Rebuild shader programs from source
    fn recompile_shaders(&mut self) {}
    /// Swap buffers
    fn present(&mut self) {}
}

/// Headless renderer that traces draw calls
#[derive(Debug, Default)]
pub struct LogRenderer {
    pub frames: u64,
    pub draws: u64,
    pub last_overlay: String,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, sprite: Sprite, params: DrawParams) {
        self.draws += 1;
        log::trace!(
            "draw {:?} at ({:.3}, {:.3}) theta={:.3} scale={:.4}",
            sprite,
            params.x,
            params.y,
            params.theta,
            params.scale
        );
    }

    fn overlay_text(&mut self, text: &str) {
        if self.last_overlay != text {
            log::info!("{text}");
            self.last_overlay = text.to_string();
        }
    }

    fn present(&mut self) {
        self.frames += 1;
    }
}

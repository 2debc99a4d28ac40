//! Frame loop
//!
//! One iteration: pump input, simulate, clear consumed input, render.

use crate::error::GameError;
use crate::platform::input::{EventSource, InputAggregator};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, TickOutcome, tick};
use crate::ui::score_message;

/// Game instance holding all state
#[derive(Debug)]
pub struct Game {
    pub state: GameState,
    pub input: InputAggregator,
    max_frames: Option<u64>,
    frames_run: u64,
}

impl Game {
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, GameError> {
        settings.validate()?;
        let state = GameState::new(seed)?;
        log::info!("Session started with seed {seed}");
        Ok(Self {
            state,
            input: InputAggregator::from_settings(settings),
            max_frames: settings.max_frames,
            frames_run: 0,
        })
    }

    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    /// Run a single frame
    pub fn frame(
        &mut self,
        source: &mut dyn EventSource,
        renderer: &mut dyn Renderer,
    ) -> Result<TickOutcome, GameError> {
        source.poll(&self.state);
        self.input.pump(source);

        if self.input.take_recompile_request() {
            log::info!("Shader recompile requested");
            renderer.recompile_shaders();
        }

        let outcome = tick(&mut self.state, self.input.snapshot())?;

        if outcome.reset {
            self.input.clear();
        } else if outcome.command_handled {
            self.input.consume_click();
        }

        let captured = outcome
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::Captured { .. }));
        if captured && self.state.has_won() {
            log::info!("All diamonds collected in {} frames", self.state.frame);
        }

        self.render(renderer);
        self.frames_run += 1;
        Ok(outcome)
    }

    /// Hand the current frame to the renderer
    pub fn render(&self, renderer: &mut dyn Renderer) {
        for (sprite, params) in self.state.draw_list() {
            renderer.draw(sprite, params);
        }
        renderer.overlay_text(&score_message(self.state.score));
        renderer.present();
    }

    /// Loop until the source asks to close or the frame budget runs out
    pub fn run(
        &mut self,
        source: &mut dyn EventSource,
        renderer: &mut dyn Renderer,
    ) -> Result<u64, GameError> {
        let start = self.frames_run;
        while !source.should_close() {
            if self
                .max_frames
                .is_some_and(|max| self.frames_run - start >= max)
            {
                log::info!("Frame limit reached");
                break;
            }
            self.frame(source, renderer)?;
        }
        Ok(self.frames_run - start)
    }
}

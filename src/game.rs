//! Composition root
//!
//! Owns the simulation state together with the input source and surface it
//! talks to. Hosts build one `Game` and call `frame()` once per refresh.

use crate::consts::*;
use crate::error::GameError;
use crate::input::InputSource;
use crate::renderer::Surface;
use crate::sim::{Field, GameState, Player, Rect, TickInput, tick};
use crate::tuning::Tuning;

/// Everything needed to build a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub field_width: f32,
    pub field_height: f32,
    /// Player start rectangle
    pub player: Rect,
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            player: Rect::new(PLAYER_START_X, PLAYER_START_Y, PLAYER_WIDTH, PLAYER_HEIGHT),
            seed: 0,
            tuning: Tuning::default(),
        }
    }
}

impl GameConfig {
    /// Check every dimension the spawn and clamp math relies on
    pub fn validate(&self) -> Result<(), GameError> {
        let (width, height) = (self.field_width, self.field_height);
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(GameError::InvalidField { width, height });
        }

        let size = self.player.size;
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 || !self.player.pos.is_finite() {
            return Err(GameError::InvalidPlayer {
                width: size.x,
                height: size.y,
            });
        }

        self.tuning.validate()?;

        // Obstacles spawn flush with the right edge and the floor
        let needed = self
            .tuning
            .largest_obstacle()
            .max(size.y)
            .max(self.player.right());
        if width < needed || height < needed {
            return Err(GameError::FieldTooSmall {
                width,
                height,
                needed,
            });
        }

        Ok(())
    }
}

/// A running game instance: simulation + input + surface
pub struct Game<I, S> {
    state: GameState,
    input: I,
    surface: S,
    frames: u64,
}

impl<I: InputSource, S: Surface> Game<I, S> {
    pub fn new(config: GameConfig, input: I, surface: S) -> Result<Self, GameError> {
        config.validate()?;

        let field = Field {
            width: config.field_width,
            height: config.field_height,
        };
        let state = GameState::new(field, Player::new(config.player), config.tuning, config.seed);
        log::info!(
            "Game ready: field {}x{}, seed {}",
            field.width,
            field.height,
            config.seed
        );

        Ok(Self {
            state,
            input,
            surface,
            frames: 0,
        })
    }

    /// Sample input and advance one frame
    pub fn frame(&mut self) {
        let input = TickInput::sample(&self.input);
        self.frame_with(&input);
    }

    /// Advance one frame with an explicit input (demo/replay)
    pub fn frame_with(&mut self, input: &TickInput) {
        tick(&mut self.state, input, &mut self.surface);
        self.frames += 1;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Frames driven since construction, idle ones included
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

//! Rect Runner - A minimal endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `input`: Logical key state and the input-query boundary
//! - `renderer`: Drawing surface boundary (canvas on web, recording elsewhere)
//! - `game`: Composition root wiring simulation, input and surface together
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences (key bindings, seed)

pub mod error;
pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::{Game, GameConfig};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Reference play field (the browser host uses the window size instead)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Player start rectangle
    pub const PLAYER_START_X: f32 = 25.0;
    pub const PLAYER_START_Y: f32 = 0.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;

    /// Scroll speed at the start of every run
    pub const BASE_SPEED: f32 = 3.0;
    /// Speed added every running tick
    pub const SPEED_INCREMENT: f32 = 0.003;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 1.0;

    /// Upward velocity applied when a jump begins
    pub const JUMP_FORCE: f32 = 15.0;
    /// Jump timer cap (ticks of held-jump boost)
    pub const MAX_JUMP_TICKS: u32 = 15;
    /// Divisor for the held-jump boost (`timer / divisor`)
    pub const JUMP_BOOST_DIVISOR: f32 = 50.0;

    /// Spawn countdown after reset, and the base of the recomputed countdown
    pub const INITIAL_SPAWN_TIMER: f32 = 200.0;
    /// Floor for the recomputed spawn countdown
    pub const MINIMUM_SPAWN_COUNTDOWN: f32 = 60.0;
    /// How strongly speed shortens the spawn countdown
    pub const SPAWN_SPEED: f32 = 8.0;

    /// Obstacle size range (inclusive)
    pub const OBSTACLE_MIN_SIZE: i32 = 20;
    pub const OBSTACLE_MAX_SIZE: i32 = 70;
    /// Gap between a flying obstacle's lift and the player's standing height
    pub const FLYING_CLEARANCE: f32 = 10.0;
}

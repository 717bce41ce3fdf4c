//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - Drawing only through the `Surface` boundary

pub mod autopilot;
pub mod entity;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use entity::{Obstacle, Player, Rect};
pub use state::{Field, GamePhase, GameState};
pub use tick::{TickInput, random_int_in_range, spawn_obstacle, tick};

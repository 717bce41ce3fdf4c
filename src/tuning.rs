//! Data-driven game balance
//!
//! Every constant the simulation reads lives here so a settings file can
//! reshape the difficulty curve without a rebuild.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Physics, spawning and difficulty constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Scroll speed restored on every reset
    pub base_speed: f32,
    /// Speed added every running tick
    pub speed_increment: f32,
    pub gravity: f32,

    pub jump_force: f32,
    pub max_jump_ticks: u32,
    pub jump_boost_divisor: f32,

    pub initial_spawn_timer: f32,
    pub minimum_spawn_countdown: f32,
    pub spawn_speed: f32,

    pub obstacle_min_size: i32,
    pub obstacle_max_size: i32,
    pub flying_clearance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            speed_increment: SPEED_INCREMENT,
            gravity: GRAVITY,

            jump_force: JUMP_FORCE,
            max_jump_ticks: MAX_JUMP_TICKS,
            jump_boost_divisor: JUMP_BOOST_DIVISOR,

            initial_spawn_timer: INITIAL_SPAWN_TIMER,
            minimum_spawn_countdown: MINIMUM_SPAWN_COUNTDOWN,
            spawn_speed: SPAWN_SPEED,

            obstacle_min_size: OBSTACLE_MIN_SIZE,
            obstacle_max_size: OBSTACLE_MAX_SIZE,
            flying_clearance: FLYING_CLEARANCE,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation invariants
    pub fn validate(&self) -> Result<(), GameError> {
        let positive = [
            ("base_speed", self.base_speed),
            ("gravity", self.gravity),
            ("jump_force", self.jump_force),
            ("jump_boost_divisor", self.jump_boost_divisor),
            ("initial_spawn_timer", self.initial_spawn_timer),
            ("minimum_spawn_countdown", self.minimum_spawn_countdown),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GameError::InvalidTuning(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("speed_increment", self.speed_increment),
            ("spawn_speed", self.spawn_speed),
            ("flying_clearance", self.flying_clearance),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GameError::InvalidTuning(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if self.max_jump_ticks == 0 {
            return Err(GameError::InvalidTuning("max_jump_ticks must be at least 1".into()));
        }

        if self.obstacle_min_size <= 0 || self.obstacle_min_size > self.obstacle_max_size {
            return Err(GameError::InvalidTuning(format!(
                "obstacle size range {}..={} is empty or non-positive",
                self.obstacle_min_size, self.obstacle_max_size
            )));
        }

        Ok(())
    }

    /// Largest obstacle edge the spawner can produce
    pub fn largest_obstacle(&self) -> f32 {
        self.obstacle_max_size as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "base_speed": 5.0 }"#).unwrap();
        assert_eq!(tuning.base_speed, 5.0);
        assert_eq!(tuning.jump_force, JUMP_FORCE);
        assert_eq!(tuning.minimum_spawn_countdown, MINIMUM_SPAWN_COUNTDOWN);
    }

    #[test]
    fn test_rejects_inverted_size_range() {
        let err = Tuning::from_json(r#"{ "obstacle_min_size": 80, "obstacle_max_size": 70 }"#);
        assert!(matches!(err, Err(GameError::InvalidTuning(_))));
    }

    #[test]
    fn test_rejects_zero_gravity() {
        let tuning = Tuning {
            gravity: 0.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(GameError::InvalidTuning(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(Tuning::from_json("{ nope"), Err(GameError::Settings(_))));
    }
}

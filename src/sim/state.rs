//! Game state and core simulation types

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::entity::{Obstacle, Player};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Waiting for the start input (initial, and after a collision)
    Idle,
    /// Active run
    Running,
}

/// Play field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    pub field: Field,
    pub tuning: Tuning,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: VecDeque<Obstacle>,
    /// Global scroll speed
    pub speed: f32,
    /// Kept for completeness; nothing scores yet
    pub score: f32,
    /// Ticks until the next spawn
    pub spawn_countdown: f32,
    /// 0 = not jumping, otherwise ticks into the jump arc
    pub jump_timer: u32,
    /// Running ticks since the last reset
    pub time_ticks: u64,
    /// Obstacles spawned since the last reset
    pub spawned: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Build an idle state. Dimensions are validated by `Game::new`.
    pub fn new(field: Field, player: Player, tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            field,
            player,
            obstacles: VecDeque::new(),
            speed: tuning.base_speed,
            score: 0.0,
            spawn_countdown: tuning.initial_spawn_timer,
            jump_timer: 0,
            time_ticks: 0,
            spawned: 0,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Restore run-level state.
    ///
    /// The player's position, velocity and jump timer carry over.
    pub fn reset(&mut self) {
        self.speed = self.tuning.base_speed;
        self.score = 0.0;
        self.obstacles.clear();
        self.spawn_countdown = self.tuning.initial_spawn_timer;
        self.time_ticks = 0;
        self.spawned = 0;
    }

    /// Countdown to use after a spawn at the current speed, floored
    pub fn next_spawn_countdown(&self) -> f32 {
        let countdown = self.tuning.initial_spawn_timer - self.speed * self.tuning.spawn_speed;
        countdown.max(self.tuning.minimum_spawn_countdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Rect;
    use proptest::prelude::*;

    fn state() -> GameState {
        GameState::new(
            Field {
                width: 800.0,
                height: 400.0,
            },
            Player::new(Rect::new(25.0, 0.0, 50.0, 50.0)),
            Tuning::default(),
            7,
        )
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = state();
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.speed, 3.0);
        assert_eq!(state.spawn_countdown, 200.0);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_reset_leaves_player_alone() {
        let mut state = state();
        state.player.rect.pos.y = 123.0;
        state.player.vel_y = -4.0;
        state.speed = 9.0;
        state.spawn_countdown = 12.0;
        state.obstacles.push_back(Obstacle::new(Rect::new(1.0, 1.0, 1.0, 1.0), false));

        state.reset();

        assert_eq!(state.speed, 3.0);
        assert_eq!(state.spawn_countdown, 200.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player.rect.pos.y, 123.0);
        assert_eq!(state.player.vel_y, -4.0);
    }

    #[test]
    fn test_snapshot_serializes_without_rng() {
        let json = serde_json::to_string(&state()).unwrap();
        assert!(json.contains("\"phase\":\"Idle\""));
        assert!(!json.contains("rng"));
    }

    proptest! {
        #[test]
        fn prop_spawn_countdown_never_below_floor(speed in 0.0f32..1.0e6) {
            let mut state = state();
            state.speed = speed;
            prop_assert!(state.next_spawn_countdown() >= 60.0);
        }
    }
}

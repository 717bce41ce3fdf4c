//! Idle/demo mode - a simple bot that plays the game
//!
//! Reads the state and produces the input a player would hold this tick:
//! start when idle, squat under flying obstacles, jump over ground ones.

use super::entity::Obstacle;
use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// Ticks of warning before a ground obstacle reaches the player
const JUMP_LOOKAHEAD_TICKS: f32 = 8.0;
/// Squatting needs longer: the shorter body has to fall to the floor first
const SQUAT_LOOKAHEAD_TICKS: f32 = 14.0;

/// Decide this tick's input from the current state
pub fn autopilot(state: &GameState) -> TickInput {
    if state.phase == GamePhase::Idle {
        return TickInput {
            start: true,
            ..Default::default()
        };
    }

    let player = &state.player;
    let grounded = player.is_grounded(state.field.height);

    let threat = |obstacle: &Obstacle, lookahead: f32| {
        let gap = obstacle.rect.left() - player.rect.right();
        obstacle.rect.right() > player.rect.left() && gap < state.speed * lookahead
    };

    let squat = state
        .obstacles
        .iter()
        .filter(|o| o.flying)
        .any(|o| threat(o, SQUAT_LOOKAHEAD_TICKS));

    let ground_threat = state
        .obstacles
        .iter()
        .filter(|o| !o.flying)
        .any(|o| threat(o, JUMP_LOOKAHEAD_TICKS));

    // Let go after landing so the next press can start a fresh jump
    let jump = ground_threat && !(grounded && state.jump_timer > 0);

    TickInput {
        start: false,
        jump,
        squat: squat && !jump,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use crate::sim::entity::{Player, Rect};
    use crate::sim::state::Field;
    use crate::sim::tick::tick;
    use crate::tuning::Tuning;

    fn running() -> GameState {
        let mut state = GameState::new(
            Field {
                width: 800.0,
                height: 400.0,
            },
            Player::new(Rect::new(25.0, 350.0, 50.0, 50.0)),
            Tuning::default(),
            1,
        );
        state.phase = GamePhase::Running;
        state
    }

    #[test]
    fn test_starts_when_idle() {
        let mut state = running();
        state.phase = GamePhase::Idle;
        assert!(autopilot(&state).start);
    }

    #[test]
    fn test_clear_field_holds_nothing() {
        let state = running();
        assert_eq!(autopilot(&state), TickInput::default());
    }

    #[test]
    fn test_jumps_over_near_ground_obstacle() {
        let mut state = running();
        state
            .obstacles
            .push_back(Obstacle::new(Rect::new(90.0, 350.0, 50.0, 50.0), false));
        let input = autopilot(&state);
        assert!(input.jump);
        assert!(!input.squat);
    }

    #[test]
    fn test_ignores_far_obstacle() {
        let mut state = running();
        state
            .obstacles
            .push_back(Obstacle::new(Rect::new(600.0, 350.0, 50.0, 50.0), false));
        assert!(!autopilot(&state).jump);
    }

    #[test]
    fn test_squats_under_flying_obstacle() {
        let mut state = running();
        state
            .obstacles
            .push_back(Obstacle::new(Rect::new(100.0, 310.0, 50.0, 50.0), true));
        let input = autopilot(&state);
        assert!(input.squat);
        assert!(!input.jump);
    }

    #[test]
    fn test_releases_jump_after_landing() {
        let mut state = running();
        state.jump_timer = 15;
        state
            .obstacles
            .push_back(Obstacle::new(Rect::new(90.0, 350.0, 50.0, 50.0), false));
        assert!(!autopilot(&state).jump);
    }

    #[test]
    fn test_drives_a_run() {
        let mut state = running();
        state.phase = GamePhase::Idle;
        let mut surface = RecordingSurface::new();
        let mut longest = 0;
        let mut saw_spawn = false;
        for _ in 0..600 {
            let input = autopilot(&state);
            tick(&mut state, &input, &mut surface);
            surface.reset();
            longest = longest.max(state.time_ticks);
            saw_spawn |= state.spawned > 0;
        }
        // Nothing can end a run before the first spawn at tick 200
        assert!(longest >= 200);
        assert!(saw_spawn);
    }
}

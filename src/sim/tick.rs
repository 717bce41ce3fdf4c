//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by one frame and issues the
//! frame's draw calls.

use rand::Rng;

use super::entity::{Obstacle, Rect};
use super::state::{GamePhase, GameState};
use crate::renderer::Surface;

/// Input intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub start: bool,
    pub jump: bool,
    pub squat: bool,
}

/// Advance the game by one frame
pub fn tick<S: Surface + ?Sized>(state: &mut GameState, input: &TickInput, surface: &mut S) {
    if state.phase == GamePhase::Idle {
        if input.start {
            state.reset();
            state.phase = GamePhase::Running;
            log::info!("Run started (seed {})", state.seed);
        }
        return;
    }

    state.time_ticks += 1;
    surface.clear(state.field.width, state.field.height);

    update_jump(state, input);

    if input.squat {
        state.player.squat();
    } else {
        state.player.stand();
    }

    state.spawn_countdown -= 1.0;
    if state.spawn_countdown <= 0.0 {
        spawn_obstacle(state);
        state.spawn_countdown = state.next_spawn_countdown();
    }

    // Every obstacle still moves and draws on the frame a collision happens
    let mut collided = false;
    for obstacle in state.obstacles.iter_mut() {
        if state.player.touches(obstacle) {
            collided = true;
        }
        obstacle.advance(state.speed);
        obstacle.draw(surface);
    }

    if collided {
        state.phase = GamePhase::Idle;
        log::info!(
            "Run ended after {} ticks at speed {:.3} ({} obstacles spawned)",
            state.time_ticks,
            state.speed,
            state.spawned
        );
    }

    // Spawn order is also right-edge order, so only the front can be off screen
    while state.obstacles.front().is_some_and(Obstacle::is_off_screen) {
        state.obstacles.pop_front();
    }

    state
        .player
        .apply_gravity(state.field.height, state.tuning.gravity);
    state.player.draw(surface);

    state.speed += state.tuning.speed_increment;
}

/// Jump start, held-jump boost, and release cancel
fn update_jump(state: &mut GameState, input: &TickInput) {
    if !input.jump {
        // Releasing cancels the arc even mid-air
        state.jump_timer = 0;
        return;
    }

    let tuning = &state.tuning;
    if state.player.is_grounded(state.field.height) && state.jump_timer == 0 {
        state.jump_timer = 1;
        state.player.vel_y = -tuning.jump_force;
    } else if state.jump_timer > 0 && state.jump_timer < tuning.max_jump_ticks {
        state.jump_timer += 1;
        state.player.vel_y =
            -tuning.jump_force - state.jump_timer as f32 / tuning.jump_boost_divisor;
    }
}

/// Spawn one obstacle at the right edge, floor-aligned or flying
pub fn spawn_obstacle(state: &mut GameState) {
    let tuning = &state.tuning;
    let (min, max) = (tuning.obstacle_min_size, tuning.obstacle_max_size);

    let size = random_int_in_range(&mut state.rng, min, max) as f32;
    let flying = random_int_in_range(&mut state.rng, 0, 1) == 1;

    let mut rect = Rect::new(
        state.field.width - size,
        state.field.height - size,
        size,
        size,
    );
    if flying {
        rect.pos.y -= state.player.original_height - tuning.flying_clearance;
    }

    log::debug!(
        "Spawned {} obstacle {}x{} at ({}, {})",
        if flying { "flying" } else { "ground" },
        size,
        size,
        rect.pos.x,
        rect.pos.y
    );

    state.obstacles.push_back(Obstacle::new(rect, flying));
    state.spawned += 1;
}

/// Rounded scaled uniform draw; endpoints get half the weight of interior values
pub fn random_int_in_range<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    (rng.random::<f32>() * (max - min) as f32 + min as f32).round() as i32
}

//! Entities: the shared rectangle shape, the player and obstacles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::{Color, Surface};

/// Axis-aligned rectangle, top-left origin, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict AABB overlap: rectangles that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// The player-controlled rectangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity (negative is up)
    pub vel_y: f32,
    /// Standing height, fixed at construction
    pub original_height: f32,
}

impl Player {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel_y: 0.0,
            original_height: rect.size.y,
        }
    }

    /// True once the bottom edge reaches (or passes) the ground line
    pub fn is_grounded(&self, ground: f32) -> bool {
        self.rect.bottom() >= ground
    }

    /// Halve height about the top edge; the bottom edge rises
    pub fn squat(&mut self) {
        self.rect.size.y = self.original_height / 2.0;
    }

    pub fn stand(&mut self) {
        self.rect.size.y = self.original_height;
    }

    /// Snap onto the ground and kill vertical motion
    pub fn land(&mut self, ground: f32) {
        self.vel_y = 0.0;
        self.rect.pos.y = ground - self.rect.size.y;
    }

    /// Integrate one tick of vertical motion.
    ///
    /// Position moves by the velocity from the previous tick first; gravity
    /// is added afterwards and only shows up on the next tick.
    pub fn apply_gravity(&mut self, ground: f32, gravity: f32) {
        self.rect.pos.y += self.vel_y;

        if self.is_grounded(ground) {
            self.land(ground);
        } else {
            self.vel_y += gravity;
        }
    }

    pub fn touches(&self, obstacle: &Obstacle) -> bool {
        self.rect.overlaps(&obstacle.rect)
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.rect, Color::Red);
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub rect: Rect,
    /// Horizontal drift; zero until the first move
    pub vel_x: f32,
    /// Raised off the floor
    pub flying: bool,
}

impl Obstacle {
    pub fn new(rect: Rect, flying: bool) -> Self {
        Self {
            rect,
            vel_x: 0.0,
            flying,
        }
    }

    /// Move by the current drift, then match the current global speed
    pub fn advance(&mut self, speed: f32) {
        self.rect.pos.x += self.vel_x;
        self.vel_x = -speed;
    }

    /// Fully past the left edge of the field
    pub fn is_off_screen(&self) -> bool {
        self.rect.right() <= 0.0
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.rect, Color::Blue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(20.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_edge_adjacent_does_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Shares only a corner
        assert!(!a.overlaps(&Rect::new(10.0, 10.0, 10.0, 10.0)));
    }

    #[test]
    fn test_squat_keeps_top_edge() {
        let mut player = Player::new(Rect::new(25.0, 350.0, 50.0, 50.0));
        player.squat();
        assert_eq!(player.rect.top(), 350.0);
        assert_eq!(player.rect.size.y, 25.0);
        assert_eq!(player.rect.bottom(), 375.0);

        player.stand();
        assert_eq!(player.rect.size.y, 50.0);
    }

    #[test]
    fn test_gravity_lags_one_tick() {
        let mut player = Player::new(Rect::new(25.0, 0.0, 50.0, 50.0));

        player.apply_gravity(400.0, 1.0);
        assert_eq!(player.rect.pos.y, 0.0);
        assert_eq!(player.vel_y, 1.0);

        player.apply_gravity(400.0, 1.0);
        assert_eq!(player.rect.pos.y, 1.0);
        assert_eq!(player.vel_y, 2.0);
    }

    #[test]
    fn test_landing_overrides_upward_velocity() {
        // Deep below the floor: even an upward velocity gets zeroed on the snap
        let mut player = Player::new(Rect::new(25.0, 380.0, 50.0, 50.0));
        player.vel_y = -5.0;
        player.apply_gravity(400.0, 1.0);
        assert_eq!(player.vel_y, 0.0);
        assert_eq!(player.rect.bottom(), 400.0);
    }

    #[test]
    fn test_obstacle_first_move_is_still() {
        let mut obstacle = Obstacle::new(Rect::new(750.0, 350.0, 50.0, 50.0), false);
        obstacle.advance(3.0);
        assert_eq!(obstacle.rect.pos.x, 750.0);
        obstacle.advance(4.0);
        assert_eq!(obstacle.rect.pos.x, 747.0);
        obstacle.advance(4.0);
        assert_eq!(obstacle.rect.pos.x, 743.0);
    }

    #[test]
    fn test_draw_colors() {
        let mut surface = RecordingSurface::new();
        Player::new(Rect::new(0.0, 0.0, 1.0, 1.0)).draw(&mut surface);
        Obstacle::new(Rect::new(2.0, 2.0, 1.0, 1.0), false).draw(&mut surface);
        assert_eq!(surface.filled(Color::Red).len(), 1);
        assert_eq!(surface.filled(Color::Blue).len(), 1);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 1.0f32..100.0, ah in 1.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 1.0f32..100.0, bh in 1.0f32..100.0,
        ) {
            let a = Rect::new(ax, ay, aw, ah);
            let b = Rect::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_grounded_player_snaps_to_floor(
            y in 350.0f32..1000.0,
            vel in 0.0f32..50.0,
        ) {
            let ground = 400.0;
            let mut player = Player::new(Rect::new(25.0, y, 50.0, 50.0));
            player.vel_y = vel;
            player.apply_gravity(ground, 1.0);
            prop_assert_eq!(player.vel_y, 0.0);
            prop_assert!((player.rect.bottom() - ground).abs() < 1e-3);
        }
    }
}

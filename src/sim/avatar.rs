//! The player's bird
//!
//! Only the vertical axis is simulated. Integration is one explicit Euler
//! step per frame, so the feel is tied to the display cadence.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BIRD_START_Y, BIRD_X};
use crate::tuning::Tuning;

/// Nose-up/nose-down limit in degrees
pub const MAX_TILT_DEG: f32 = 25.0;
/// Degrees of tilt per unit of vertical speed
pub const TILT_PER_SPEED: f32 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bird {
    /// Center; `pos.x` is fixed for the whole session
    pub pos: Vec2,
    pub radius: f32,
    /// Vertical velocity (positive is down)
    pub velocity: f32,
    pub gravity: f32,
    pub jump_velocity: f32,
    /// Cosmetic wing phase (radians)
    pub wing_angle: f32,
    /// +1.0 or -1.0
    pub wing_direction: f32,
    wing_step: f32,
    wing_limit: f32,
}

impl Bird {
    /// Fresh bird at the start position, at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(BIRD_X, BIRD_START_Y),
            radius: tuning.bird_radius,
            velocity: 0.0,
            gravity: tuning.gravity,
            jump_velocity: tuning.jump_velocity,
            wing_angle: 0.0,
            wing_direction: 1.0,
            wing_step: tuning.wing_step,
            wing_limit: tuning.wing_limit,
        }
    }

    /// Accelerate then move: velocity first, position from the new velocity
    pub fn apply_gravity(&mut self) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;
    }

    /// Flap: velocity is replaced, not added to
    pub fn impulse(&mut self) {
        self.velocity = self.jump_velocity;
    }

    /// Advance the wing oscillation by one frame
    pub fn flap_wings(&mut self) {
        self.wing_angle += self.wing_direction * self.wing_step;
        if self.wing_angle > self.wing_limit || self.wing_angle < -self.wing_limit {
            self.wing_direction = -self.wing_direction;
        }
    }

    /// One simulation frame of avatar motion
    pub fn step(&mut self) {
        self.apply_gravity();
        self.flap_wings();
    }

    /// Body tilt in degrees, derived from vertical speed
    pub fn rotation_deg(&self) -> f32 {
        (self.velocity * TILT_PER_SPEED).clamp(-MAX_TILT_DEG, MAX_TILT_DEG)
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_gravity_step() {
        let mut bird = Bird::new(&Tuning::default());
        bird.apply_gravity();
        assert!(approx(bird.velocity, 0.4));
        assert!(approx(bird.pos.y, 300.4));
    }

    #[test]
    fn test_impulse_then_gravity() {
        let mut bird = Bird::new(&Tuning::default());
        bird.apply_gravity();
        bird.impulse();
        assert_eq!(bird.velocity, -9.0);
        bird.apply_gravity();
        assert!(approx(bird.velocity, -8.6));
    }

    #[test]
    fn test_no_terminal_velocity() {
        let mut bird = Bird::new(&Tuning::default());
        for i in 1..=200 {
            let before = bird.velocity;
            bird.apply_gravity();
            assert!(approx(bird.velocity - before, 0.4), "tick {i}");
        }
    }

    #[test]
    fn test_rotation_clamped() {
        let mut bird = Bird::new(&Tuning::default());
        bird.velocity = 2.0;
        assert!(approx(bird.rotation_deg(), 6.0));
        bird.velocity = 50.0;
        assert_eq!(bird.rotation_deg(), MAX_TILT_DEG);
        bird.impulse();
        assert_eq!(bird.rotation_deg(), -MAX_TILT_DEG);
    }

    #[test]
    fn test_wing_oscillates_within_bounds() {
        let mut bird = Bird::new(&Tuning::default());
        let mut reversals = 0;
        let mut last_dir = bird.wing_direction;
        for _ in 0..100 {
            bird.flap_wings();
            // One step of overshoot is allowed before the reversal
            assert!(bird.wing_angle.abs() <= 0.5 + 0.2 + 1e-4);
            if bird.wing_direction != last_dir {
                reversals += 1;
                last_dir = bird.wing_direction;
            }
        }
        assert!(reversals > 5);
    }

    #[test]
    fn test_x_never_changes() {
        let mut bird = Bird::new(&Tuning::default());
        for _ in 0..50 {
            bird.step();
            bird.impulse();
        }
        assert_eq!(bird.pos.x, BIRD_X);
    }
}

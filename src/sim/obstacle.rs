//! Pipe pairs: generation, scrolling and cleanup

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::FIELD_WIDTH;
use crate::tuning::Tuning;

/// A top and bottom pipe with a passable gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Distance from the ceiling to the top of the gap
    pub gap_top: f32,
    /// Base scroll speed per frame (before the speed multiplier)
    pub speed: f32,
    /// Set once when the bird clears this pipe
    pub passed: bool,
}

impl Pipe {
    /// New pipe entering at the right edge of the field
    pub fn spawn<R: Rng>(rng: &mut R, tuning: &Tuning) -> Self {
        Self {
            x: FIELD_WIDTH,
            width: tuning.pipe_width,
            gap_top: random_gap_top(rng, tuning),
            speed: tuning.pipe_speed,
            passed: false,
        }
    }

    /// Move left by this frame's scroll distance
    pub fn scroll(&mut self, speed_multiplier: f32) {
        self.x -= self.speed * speed_multiplier;
    }

    /// Right edge of the pipe
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_bottom(&self, gap: f32) -> f32 {
        self.gap_top + gap
    }

    /// Entirely left of the field
    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.trailing_edge() < 0.0
    }
}

/// Whole-unit gap height drawn uniformly from the tuning's allowed range
///
/// The range must be non-empty; see [`Tuning::validate`].
pub fn random_gap_top<R: Rng>(rng: &mut R, tuning: &Tuning) -> f32 {
    let (min, max) = tuning.gap_top_range();
    let steps = (max - min).floor().max(0.0) as u32;
    min + rng.random_range(0..=steps) as f32
}

/// Whether enough time has passed since the last spawn
///
/// The interval shrinks as the speed multiplier grows. With no previous
/// spawn in this session a pipe is due immediately.
pub fn spawn_due(last_spawn_ms: Option<f64>, now_ms: f64, interval_ms: f64, speed: f32) -> bool {
    match last_spawn_ms {
        None => true,
        Some(last) => now_ms - last > interval_ms / speed as f64,
    }
}

/// Drop every pipe that has scrolled fully past the left edge
pub fn purge_offscreen(pipes: &mut Vec<Pipe>) {
    pipes.retain(|p| !p.is_offscreen());
}

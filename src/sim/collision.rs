//! Collision predicates
//!
//! Discrete per-frame checks only: the bird moves at most a few units per
//! frame, so overlap tests at frame boundaries are enough. Everything here
//! is a pure function of its arguments.

use super::avatar::Bird;
use super::obstacle::Pipe;
use crate::consts::GROUND_TOP;

/// Which boundary or obstacle ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Ceiling,
    Ground,
    Pipe,
}

/// Bird against the ceiling (y = 0) and the top of the ground band
pub fn bird_bounds_collision(bird: &Bird) -> Option<Impact> {
    if bird.bottom() > GROUND_TOP {
        Some(Impact::Ground)
    } else if bird.top() < 0.0 {
        Some(Impact::Ceiling)
    } else {
        None
    }
}

/// Horizontal extents of the bird and pipe intersect
#[inline]
pub fn overlaps_horizontally(bird: &Bird, pipe: &Pipe) -> bool {
    bird.right() > pipe.x && bird.left() < pipe.trailing_edge()
}

/// Bird's full vertical extent lies in `[gap_top, gap_top + gap]`
#[inline]
pub fn inside_gap(bird: &Bird, pipe: &Pipe, gap: f32) -> bool {
    pipe.gap_top <= bird.top() && bird.bottom() <= pipe.gap_bottom(gap)
}

/// Bird against one pipe pair
pub fn bird_pipe_collision(bird: &Bird, pipe: &Pipe, gap: f32) -> bool {
    overlaps_horizontally(bird, pipe) && !inside_gap(bird, pipe, gap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn bird_at(y: f32) -> Bird {
        let mut bird = Bird::new(&Tuning::default());
        bird.pos.y = y;
        bird
    }

    fn pipe_at(x: f32, gap_top: f32) -> Pipe {
        Pipe {
            x,
            width: 70.0,
            gap_top,
            speed: 3.0,
            passed: false,
        }
    }

    #[test]
    fn test_gap_clearance() {
        let bird = bird_at(50.0); // extent 32..68
        assert!(!bird_pipe_collision(&bird, &pipe_at(90.0, 30.0), 180.0));
        // Gap 40..220 starts below the bird's top edge
        assert!(bird_pipe_collision(&bird, &pipe_at(90.0, 40.0), 180.0));
        assert!(bird_pipe_collision(&bird, &pipe_at(90.0, 60.0), 180.0));
    }

    #[test]
    fn test_gap_boundary_is_closed() {
        let bird = bird_at(50.0);
        // Top flush with gap top
        assert!(!bird_pipe_collision(&bird, &pipe_at(90.0, 32.0), 180.0));
        // Bottom flush with gap bottom: 68 == -112 + 180
        assert!(!bird_pipe_collision(&bird, &pipe_at(90.0, -112.0), 180.0));
        // One unit lower and the bottom pipe is hit
        assert!(bird_pipe_collision(&bird, &pipe_at(90.0, -113.0), 180.0));
    }

    #[test]
    fn test_no_horizontal_overlap() {
        let bird = bird_at(50.0); // x extent 82..118
        assert!(!bird_pipe_collision(&bird, &pipe_at(118.0, 300.0), 180.0));
        assert!(!bird_pipe_collision(&bird, &pipe_at(12.0, 300.0), 180.0));
        assert!(bird_pipe_collision(&bird, &pipe_at(117.0, 300.0), 180.0));
        assert!(bird_pipe_collision(&bird, &pipe_at(13.0, 300.0), 180.0));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(bird_bounds_collision(&bird_at(300.0)), None);
        assert_eq!(bird_bounds_collision(&bird_at(18.0)), None);
        assert_eq!(bird_bounds_collision(&bird_at(17.9)), Some(Impact::Ceiling));
        assert_eq!(bird_bounds_collision(&bird_at(562.0)), None);
        assert_eq!(bird_bounds_collision(&bird_at(562.1)), Some(Impact::Ground));
    }
}

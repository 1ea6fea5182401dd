//! Scoring and difficulty ramp

use super::obstacle::Pipe;
use crate::tuning::Tuning;

/// Mark the pipe passed if its trailing edge is now left of the bird
///
/// Edge-triggered: returns true only on the frame the flag flips.
pub fn check_pass(pipe: &mut Pipe, bird_x: f32) -> bool {
    if !pipe.passed && pipe.trailing_edge() < bird_x {
        pipe.passed = true;
        return true;
    }
    false
}

/// Speed multiplier after the score just changed to `score`
///
/// Bumps by `speed_delta` at every positive multiple of `difficulty_step`,
/// saturating at `max_speed`. Call only on the frame the score changes.
pub fn ramp_speed(score: u32, speed: f32, tuning: &Tuning) -> f32 {
    let step = tuning.difficulty_step;
    if step > 0 && score > 0 && score.is_multiple_of(step) {
        (speed + tuning.speed_delta).min(tuning.max_speed)
    } else {
        speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pipe_at(x: f32) -> Pipe {
        Pipe {
            x,
            width: 70.0,
            gap_top: 100.0,
            speed: 3.0,
            passed: false,
        }
    }

    #[test]
    fn test_pass_is_edge_triggered() {
        let mut pipe = pipe_at(40.0);
        // Trailing edge at 110 is still right of the bird
        assert!(!check_pass(&mut pipe, 100.0));
        pipe.x = 30.0; // trailing edge exactly at bird x
        assert!(!check_pass(&mut pipe, 100.0));
        pipe.x = 29.0;
        assert!(check_pass(&mut pipe, 100.0));
        assert!(pipe.passed);
        pipe.x = 0.0;
        assert!(!check_pass(&mut pipe, 100.0));
    }

    #[test]
    fn test_speed_ramp_milestones() {
        let tuning = Tuning::default();
        let mut speed = 1.0;
        let mut at = Vec::new();
        for score in 1..=60 {
            let next = ramp_speed(score, speed, &tuning);
            if next != speed {
                at.push(score);
            }
            speed = next;
            if score == 5 {
                assert!((speed - 1.05).abs() < 1e-5);
            }
            if score == 10 {
                assert!((speed - 1.10).abs() < 1e-5);
            }
        }
        assert_eq!(speed, 1.5);
        assert_eq!(at.first(), Some(&5));
        assert!(at.iter().all(|s| s % 5 == 0));
    }

    #[test]
    fn test_non_milestone_keeps_speed() {
        let tuning = Tuning::default();
        assert_eq!(ramp_speed(0, 1.0, &tuning), 1.0);
        assert_eq!(ramp_speed(7, 1.2, &tuning), 1.2);
    }
}

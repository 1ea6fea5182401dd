//! Attract-mode pilot
//!
//! Flaps whenever the bird is about to sink below a safe line above the
//! next gap's bottom edge. Good enough to demo the game, not to win it.

use super::obstacle::Pipe;
use super::state::Session;
use crate::consts::BIRD_START_Y;

/// Distance kept between the bird's bottom and the gap's bottom edge
pub const FLAP_MARGIN: f32 = 20.0;

/// First pipe the bird has not yet fully cleared
pub fn next_pipe(session: &Session) -> Option<&Pipe> {
    let left = session.bird.left();
    session.pipes.iter().find(|p| p.trailing_edge() >= left)
}

/// Whether the pilot would flap this frame
pub fn should_flap(session: &Session) -> bool {
    let bird = &session.bird;
    if bird.velocity < 0.0 {
        return false;
    }
    let floor = match next_pipe(session) {
        Some(pipe) => pipe.gap_bottom(session.gap) - bird.radius - FLAP_MARGIN,
        None => BIRD_START_Y,
    };
    bird.pos.y + bird.velocity >= floor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn session_with_pipe(x: f32, gap_top: f32) -> Session {
        let mut session = Session::new(&Tuning::default());
        session.pipes.push(Pipe {
            x,
            width: 70.0,
            gap_top,
            speed: 3.0,
            passed: false,
        });
        session
    }

    #[test]
    fn test_flaps_when_sinking_below_gap() {
        // Gap 100..280; safe line at 280 - 18 - 20 = 242
        let mut session = session_with_pipe(200.0, 100.0);
        session.bird.pos.y = 240.0;
        session.bird.velocity = 3.0;
        assert!(should_flap(&session));
    }

    #[test]
    fn test_never_flaps_while_rising() {
        let mut session = session_with_pipe(200.0, 100.0);
        session.bird.pos.y = 400.0;
        session.bird.velocity = -1.0;
        assert!(!should_flap(&session));
    }

    #[test]
    fn test_ignores_cleared_pipes() {
        let mut session = session_with_pipe(-10.0, 300.0);
        session.pipes.push(Pipe {
            x: 250.0,
            width: 70.0,
            gap_top: 100.0,
            speed: 3.0,
            passed: false,
        });
        assert_eq!(next_pipe(&session).map(|p| p.x), Some(250.0));
    }
}

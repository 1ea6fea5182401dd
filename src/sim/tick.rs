//! Per-frame simulation step
//!
//! One call advances a running session by exactly one frame. The order of
//! the stages is part of the game rules: a pipe is collision-checked right
//! after it moves and before its pass check, so a bird cannot score on the
//! frame it dies.

use rand::Rng;

use super::collision::{Impact, bird_bounds_collision, bird_pipe_collision};
use super::obstacle::{Pipe, purge_offscreen, spawn_due};
use super::particles::{spawn_burst, update_particles};
use super::scoring::{check_pass, ramp_speed};
use super::state::{GameEvent, Session, Sky};
use crate::consts::{GROUND_SCROLL, GROUND_TILE};
use crate::highscores::BestScore;
use crate::tuning::Tuning;

/// Result of one frame
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// The run ended this frame; the session must not be ticked again
    pub crashed: Option<Impact>,
}

/// Advance the session and scenery by one frame
///
/// `now_ms` is the host's monotonically increasing frame timestamp, used only
/// to pace pipe spawns. `best` is raised in place when the score passes it.
pub fn tick<R: Rng>(
    session: &mut Session,
    sky: &mut Sky,
    best: &mut BestScore,
    now_ms: f64,
    tuning: &Tuning,
    rng: &mut R,
) -> TickOutcome {
    let mut out = TickOutcome::default();
    session.frames += 1;

    session.bird.step();

    if let Some(impact) = bird_bounds_collision(&session.bird) {
        crash(session, impact, tuning, rng, &mut out);
        return out;
    }

    sky.drift(rng);

    if spawn_due(
        session.last_spawn_ms,
        now_ms,
        tuning.spawn_interval_ms,
        session.speed,
    ) {
        let pipe = Pipe::spawn(rng, tuning);
        out.events.push(GameEvent::Spawned {
            gap_top: pipe.gap_top,
        });
        session.pipes.push(pipe);
        session.last_spawn_ms = Some(now_ms);
    }

    let bird_x = session.bird.pos.x;
    let mut hit = false;
    for pipe in &mut session.pipes {
        pipe.scroll(session.speed);

        if bird_pipe_collision(&session.bird, pipe, session.gap) {
            hit = true;
            break;
        }

        if check_pass(pipe, bird_x) {
            session.score += 1;
            out.events.push(GameEvent::Scored {
                score: session.score,
            });

            if best.record(session.score) {
                session.new_best = true;
                out.events.push(GameEvent::NewBest { best: best.value });
            }

            let speed = ramp_speed(session.score, session.speed, tuning);
            if speed > session.speed {
                session.speed = speed;
                out.events.push(GameEvent::SpeedUp { speed });
            }
        }
    }
    if hit {
        crash(session, Impact::Pipe, tuning, rng, &mut out);
        return out;
    }
    purge_offscreen(&mut session.pipes);

    update_particles(&mut session.particles);

    session.ground_offset = (session.ground_offset - GROUND_SCROLL * session.speed) % GROUND_TILE;

    out
}

fn crash<R: Rng>(
    session: &mut Session,
    impact: Impact,
    tuning: &Tuning,
    rng: &mut R,
    out: &mut TickOutcome,
) {
    let pos = session.bird.pos;
    spawn_burst(&mut session.particles, pos, tuning.crash_burst, tuning, rng);
    log::info!(
        "Crashed into {:?} at frame {} with score {}",
        impact,
        session.frames,
        session.score
    );
    out.events.push(GameEvent::Crashed { impact, pos });
    out.crashed = Some(impact);
}

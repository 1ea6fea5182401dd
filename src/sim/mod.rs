//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay headless:
//! - One step per frame, no wall-clock reads
//! - Randomness only through an injected `Rng`
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod avatar;
pub mod collision;
pub mod obstacle;
pub mod particles;
pub mod scoring;
pub mod state;
pub mod tick;

pub use avatar::Bird;
pub use collision::{Impact, bird_bounds_collision, bird_pipe_collision};
pub use obstacle::{Pipe, purge_offscreen, random_gap_top, spawn_due};
pub use particles::{Particle, spawn_burst, update_particles};
pub use scoring::{check_pass, ramp_speed};
pub use state::{Cloud, GameEvent, GamePhase, Session, SessionSummary, Sky};
pub use tick::{TickOutcome, tick};

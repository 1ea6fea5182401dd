//! Session state and scenery
//!
//! `Session` holds everything that is reset when a run starts. `Sky` holds
//! the decorative clouds, which live for the whole process.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::avatar::Bird;
use super::collision::Impact;
use super::obstacle::Pipe;
use super::particles::Particle;
use crate::consts::{CLOUD_BAND, FIELD_WIDTH};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first run; start prompt showing
    #[default]
    Idle,
    /// Simulation ticking
    Running,
    /// Run over; summary showing until restart
    Ended,
}

/// Something the host may want to react to (HUD, sound)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Started,
    Jumped,
    /// A pipe entered at the right edge
    Spawned { gap_top: f32 },
    Scored { score: u32 },
    SpeedUp { speed: f32 },
    /// Best score raised; already written to the store
    NewBest { best: u32 },
    Crashed { impact: Impact, pos: Vec2 },
}

/// End-of-run summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub best: u32,
    /// This run raised the best score
    pub new_best: bool,
}

/// Everything owned by a single run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub bird: Bird,
    /// Active pipes in spawn order
    pub pipes: Vec<Pipe>,
    pub particles: Vec<Particle>,
    pub score: u32,
    /// Scales pipe speed, ground scroll and spawn cadence
    pub speed: f32,
    /// Host timestamp of the last pipe spawn, unset until the first frame
    pub last_spawn_ms: Option<f64>,
    /// Ground detail scroll, in (-GROUND_TILE, 0]
    pub ground_offset: f32,
    /// Frames simulated in this run
    pub frames: u64,
    /// Best score was raised during this run
    pub new_best: bool,
    /// Gap size for every pipe in this run
    pub gap: f32,
}

impl Session {
    /// Fresh run with the bird at its start position
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            bird: Bird::new(tuning),
            pipes: Vec::new(),
            particles: Vec::new(),
            score: 0,
            speed: 1.0,
            last_spawn_ms: None,
            ground_offset: 0.0,
            frames: 0,
            new_best: false,
            gap: tuning.pipe_gap,
        }
    }
}

/// Number of puffs drawn per cloud
pub const CLOUD_PUFFS: usize = 5;

/// A decorative cloud drifting left and wrapping around
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub width: f32,
    /// Leftward drift per frame
    pub speed: f32,
    /// Radius scale of each puff, fixed until the next wrap
    pub puffs: [f32; CLOUD_PUFFS],
}

impl Cloud {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0.0..FIELD_WIDTH),
                rng.random_range(0.0..CLOUD_BAND),
            ),
            width: rng.random_range(60.0..100.0),
            speed: rng.random_range(0.2..0.7),
            puffs: random_puffs(rng),
        }
    }

    /// Drift one frame; re-enter at the right edge once fully off the left
    pub fn drift<R: Rng>(&mut self, rng: &mut R) {
        self.pos.x -= self.speed;
        if self.pos.x + self.width < 0.0 {
            self.pos.x = FIELD_WIDTH;
            self.pos.y = rng.random_range(0.0..CLOUD_BAND);
            self.puffs = random_puffs(rng);
        }
    }
}

fn random_puffs<R: Rng>(rng: &mut R) -> [f32; CLOUD_PUFFS] {
    std::array::from_fn(|_| rng.random_range(0.8..1.2))
}

/// Process-wide scenery, untouched by session resets
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sky {
    pub clouds: Vec<Cloud>,
}

impl Sky {
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            clouds: (0..tuning.cloud_count).map(|_| Cloud::random(rng)).collect(),
        }
    }

    pub fn drift<R: Rng>(&mut self, rng: &mut R) {
        for cloud in &mut self.clouds {
            cloud.drift(rng);
        }
    }
}

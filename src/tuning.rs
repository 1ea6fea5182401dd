//! Data-driven game balance
//!
//! Every gameplay constant lives here so hosts can ship a JSON override
//! without recompiling. Values are per-frame quantities: the simulation
//! takes one step per rendered frame.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{FIELD_HEIGHT, GROUND_HEIGHT};

/// Gameplay balance knobs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Avatar ===
    pub bird_radius: f32,
    /// Added to vertical velocity every frame
    pub gravity: f32,
    /// Vertical velocity set by a flap (negative is up)
    pub jump_velocity: f32,
    /// Wing phase change per frame
    pub wing_step: f32,
    /// Wing phase reverses once it leaves [-wing_limit, wing_limit]
    pub wing_limit: f32,

    // === Obstacles ===
    pub pipe_width: f32,
    pub pipe_gap: f32,
    pub pipe_speed: f32,
    /// Smallest allowed pipe segment above and below the gap
    pub pipe_min_height: f32,
    /// Spawn interval at speed multiplier 1
    pub spawn_interval_ms: f64,

    // === Difficulty ===
    /// Speed bumps whenever the score is a positive multiple of this
    pub difficulty_step: u32,
    pub speed_delta: f32,
    pub max_speed: f32,

    // === Particles ===
    pub jump_burst: usize,
    pub crash_burst: usize,
    /// Particle velocity components are drawn from [-max, max)
    pub particle_max_speed: f32,
    pub particle_min_size: f32,
    pub particle_max_size: f32,
    pub particle_gravity: f32,
    pub particle_min_life: f32,
    pub particle_max_life: f32,
    /// Life at which a particle is drawn fully opaque
    pub particle_reference_life: f32,

    // === Scenery ===
    pub cloud_count: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            bird_radius: 18.0,
            gravity: 0.4,
            jump_velocity: -9.0,
            wing_step: 0.2,
            wing_limit: 0.5,

            pipe_width: 70.0,
            pipe_gap: 180.0,
            pipe_speed: 3.0,
            pipe_min_height: 80.0,
            spawn_interval_ms: 1800.0,

            difficulty_step: 5,
            speed_delta: 0.05,
            max_speed: 1.5,

            jump_burst: 10,
            crash_burst: 30,
            particle_max_speed: 3.0,
            particle_min_size: 2.0,
            particle_max_size: 7.0,
            particle_gravity: 0.1,
            particle_min_life: 50.0,
            particle_max_life: 100.0,
            particle_reference_life: 100.0,

            cloud_count: 5,
        }
    }
}

/// Reasons a tuning table cannot be used
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    /// JSON did not parse
    #[error("invalid tuning JSON: {0}")]
    Parse(String),

    /// The gap plus both minimum pipe segments does not fit above the ground
    #[error("gap height range is empty ({min} > {max})")]
    DegenerateGap { min: f32, max: f32 },

    /// A particle attribute would be drawn from an empty range
    #[error("{name} range is empty ({min}..{max})")]
    EmptyRange {
        name: &'static str,
        min: f32,
        max: f32,
    },

    /// The speed cap sits below the starting multiplier
    #[error("max_speed must be at least 1.0, got {0}")]
    SpeedCap(f32),

    #[error("spawn_interval_ms must be positive, got {0}")]
    SpawnInterval(f64),
}

impl Tuning {
    /// Parse a (possibly partial) tuning table; missing keys keep defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning override, falling back to defaults on any problem
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring tuning override: {e}");
                Self::default()
            }
        }
    }

    /// Inclusive range the gap-top height is drawn from
    pub fn gap_top_range(&self) -> (f32, f32) {
        let min = self.pipe_min_height;
        let max = FIELD_HEIGHT - self.pipe_gap - self.pipe_min_height - GROUND_HEIGHT;
        (min, max)
    }

    /// Reject tables the simulation cannot run on
    ///
    /// Every random draw needs a non-empty range, so a table that passes
    /// here never panics inside `random_range`.
    pub fn validate(&self) -> Result<(), TuningError> {
        let (min, max) = self.gap_top_range();
        if min.is_nan() || max.is_nan() || min > max {
            return Err(TuningError::DegenerateGap { min, max });
        }

        let ranges = [
            (
                "particle_max_speed",
                -self.particle_max_speed,
                self.particle_max_speed,
            ),
            (
                "particle size",
                self.particle_min_size,
                self.particle_max_size,
            ),
            (
                "particle life",
                self.particle_min_life,
                self.particle_max_life,
            ),
        ];
        for (name, min, max) in ranges {
            if min.is_nan() || max.is_nan() || min >= max {
                return Err(TuningError::EmptyRange { name, min, max });
            }
        }

        if self.max_speed.is_nan() || self.max_speed < 1.0 {
            return Err(TuningError::SpeedCap(self.max_speed));
        }
        if self.spawn_interval_ms.is_nan() || self.spawn_interval_ms <= 0.0 {
            return Err(TuningError::SpawnInterval(self.spawn_interval_ms));
        }
        Ok(())
    }
}

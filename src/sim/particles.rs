//! Feathers and sparks
//!
//! Visual only: nothing in the simulation reads particle state back.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::rgb;
use crate::tuning::Tuning;

/// Colors a particle can be drawn in (yellow is weighted double)
pub const PARTICLE_PALETTE: [[f32; 4]; 4] = [
    rgb(0xffdd59),
    rgb(0xff9500),
    rgb(0xffcc00),
    rgb(0xffdd59),
];

/// A square particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Top-left corner of the square
    pub pos: Vec2,
    pub vel: Vec2,
    /// Added to `vel.y` every frame
    pub gravity: f32,
    /// Side length
    pub size: f32,
    pub color: [f32; 4],
    /// Frames left; also drives the fade
    pub life: f32,
}

impl Particle {
    /// Position then velocity, one frame
    pub fn step(&mut self) {
        self.pos += self.vel;
        self.vel.y += self.gravity;
        self.life -= 1.0;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    /// Draw opacity in [0, 1]
    pub fn opacity(&self, reference_life: f32) -> f32 {
        (self.life / reference_life).clamp(0.0, 1.0)
    }
}

/// Emit `count` particles at `origin` with randomized motion and looks
pub fn spawn_burst<R: Rng>(
    particles: &mut Vec<Particle>,
    origin: Vec2,
    count: usize,
    tuning: &Tuning,
    rng: &mut R,
) {
    let max_speed = tuning.particle_max_speed;
    particles.reserve(count);
    for _ in 0..count {
        let vel = Vec2::new(
            rng.random_range(-max_speed..max_speed),
            rng.random_range(-max_speed..max_speed),
        );
        let color = PARTICLE_PALETTE[rng.random_range(0..PARTICLE_PALETTE.len())];
        particles.push(Particle {
            pos: origin,
            vel,
            gravity: tuning.particle_gravity,
            size: rng.random_range(tuning.particle_min_size..tuning.particle_max_size),
            color,
            life: rng.random_range(tuning.particle_min_life..tuning.particle_max_life),
        });
    }
}

/// Advance every particle one frame and drop the expired ones
pub fn update_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.step();
    }
    particles.retain(|p| !p.is_dead());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_burst_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut particles = Vec::new();
        let origin = Vec2::new(100.0, 300.0);
        spawn_burst(&mut particles, origin, 30, &tuning, &mut rng);

        assert_eq!(particles.len(), 30);
        for p in &particles {
            assert_eq!(p.pos, origin);
            assert!(p.vel.x >= -3.0 && p.vel.x < 3.0);
            assert!(p.vel.y >= -3.0 && p.vel.y < 3.0);
            assert!(p.size >= 2.0 && p.size < 7.0);
            assert!(p.life >= 50.0 && p.life < 100.0);
            assert!(PARTICLE_PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_step_integrates_position_before_velocity() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -2.0),
            gravity: 0.1,
            size: 3.0,
            color: PARTICLE_PALETTE[0],
            life: 2.0,
        };
        p.step();
        assert_eq!(p.pos, Vec2::new(1.0, -2.0));
        assert!((p.vel.y - -1.9).abs() < 1e-6);
        assert_eq!(p.life, 1.0);
    }

    #[test]
    fn test_expired_particles_are_purged() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut particles = Vec::new();
        spawn_burst(&mut particles, Vec2::ZERO, 10, &tuning, &mut rng);

        for _ in 0..49 {
            update_particles(&mut particles);
        }
        // Minimum life is 50 frames
        assert_eq!(particles.len(), 10);

        for _ in 0..51 {
            update_particles(&mut particles);
        }
        assert!(particles.is_empty());
    }

    #[test]
    fn test_opacity() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            gravity: 0.0,
            size: 2.0,
            color: PARTICLE_PALETTE[1],
            life: 75.0,
        };
        assert_eq!(p.opacity(100.0), 0.75);
        p.life = -1.0;
        assert_eq!(p.opacity(100.0), 0.0);
    }
}

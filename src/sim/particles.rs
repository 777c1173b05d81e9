//! Particle trail that shimmers around a moving entity
//!
//! Purely visual. Uses its own seeded RNG so a replay with the same seed and
//! inputs produces the same particles.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Particles live until their frame counter passes this
pub const PARTICLE_MAX_FRAME: u32 = 10;

/// Particle colours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParticleColor {
    Red,
    Green,
    Blue,
}

/// A single trail particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: IVec2,
    pub frame: u32,
    pub color: ParticleColor,
}

impl Particle {
    /// Spawn near `origin` with a random colour and starting frame
    fn spawn(origin: IVec2, rng: &mut Pcg32) -> Self {
        let offset = IVec2::new(rng.random_range(0..25) - 5, rng.random_range(0..25) - 5);
        let frame = rng.random_range(0..5);
        let color = match rng.random_range(0..3) {
            0 => ParticleColor::Red,
            1 => ParticleColor::Green,
            _ => ParticleColor::Blue,
        };
        Self {
            pos: origin + offset,
            frame,
            color,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.frame > PARTICLE_MAX_FRAME
    }

    /// Shimmer overlay is drawn on even frames
    pub fn shimmering(&self) -> bool {
        self.frame % 2 == 0
    }
}

/// Fixed-size pool of particles following an origin
#[derive(Debug, Clone)]
pub struct ParticleTrail {
    particles: Vec<Particle>,
    rng: Pcg32,
}

impl ParticleTrail {
    pub fn new(count: usize, origin: IVec2, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let particles = (0..count).map(|_| Particle::spawn(origin, &mut rng)).collect();
        Self { particles, rng }
    }

    /// Replace dead particles at `origin`, then advance every particle a frame
    pub fn update(&mut self, origin: IVec2) {
        for particle in self.particles.iter_mut() {
            if particle.is_dead() {
                *particle = Particle::spawn(origin, &mut self.rng);
            }
        }
        for particle in self.particles.iter_mut() {
            particle.frame += 1;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

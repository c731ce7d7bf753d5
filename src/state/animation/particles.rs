//! Drifting particle field drawn behind the hero section

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// How many particles to draw relative to the base count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Low,
    #[default]
    Medium,
    High,
}

impl Density {
    pub fn multiplier(&self) -> f32 {
        match self {
            Density::Low => 0.5,
            Density::Medium => 1.0,
            Density::High => 1.5,
        }
    }

    /// Particle count for a base count, rounded down
    pub fn count(&self, base: usize) -> usize {
        (base as f32 * self.multiplier()).floor() as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub opacity: f32,
}

impl Particle {
    /// Glyph for the particle's brightness
    pub fn glyph(&self) -> char {
        if self.opacity >= 0.45 {
            '•'
        } else if self.opacity >= 0.3 {
            '·'
        } else {
            '.'
        }
    }
}

/// Particles moving upward through an area, wrapping at the edges
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    pub const BASE_COUNT: usize = 50;
    /// Cells moved per tick at unit velocity
    const SPEED: f32 = 0.15;

    pub fn new(density: Density, width: u16, height: u16) -> Self {
        Self::from_rng(StdRng::from_entropy(), density, width, height)
    }

    /// Deterministic field for a given seed
    #[cfg(test)]
    pub fn with_seed(seed: u64, density: Density, width: u16, height: u16) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed), density, width, height)
    }

    fn from_rng(mut rng: StdRng, density: Density, width: u16, height: u16) -> Self {
        let width = f32::from(width);
        let height = f32::from(height);
        let particles = (0..density.count(Self::BASE_COUNT))
            .map(|_| Particle {
                x: rng.gen_range(0.0..=width),
                y: rng.gen_range(0.0..=height),
                vx: rng.gen_range(-0.5..0.5) * Self::SPEED,
                vy: rng.gen_range(-0.8..-0.2) * Self::SPEED,
                opacity: rng.gen_range(0.2..0.6),
            })
            .collect();

        Self {
            particles,
            width,
            height,
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Rescale positions to a new area; a previously empty area gets fresh positions
    pub fn resize(&mut self, width: u16, height: u16) {
        let (new_w, new_h) = (f32::from(width), f32::from(height));
        if new_w == self.width && new_h == self.height {
            return;
        }
        for p in &mut self.particles {
            if self.width > 0.0 && self.height > 0.0 {
                p.x = p.x / self.width * new_w;
                p.y = p.y / self.height * new_h;
            } else {
                p.x = self.rng.gen_range(0.0..=new_w);
                p.y = self.rng.gen_range(0.0..=new_h);
            }
        }
        self.width = new_w;
        self.height = new_h;
    }

    /// Advance one tick, wrapping particles that leave the area
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 {
                p.x = w;
            } else if p.x > w {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = h;
            } else if p.y > h {
                p.y = 0.0;
            }
        }
    }
}

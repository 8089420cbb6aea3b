//! Random number generation for sampling.
//!
//! [`Sampler`] is an explicit handle that owns its generator, so a seeded
//! sampler gives the same sequence on every run. Code that runs on several
//! threads gives each worker its own sampler via [`Sampler::fork`]; nothing
//! here is shared between threads. For call sites without a handle, the
//! free functions draw from a per-thread sampler.

use ember_math::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;

/// Golden-ratio increment used to spread fork streams across seed space.
const STREAM_INCREMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// A uniform random source.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
    seed: Option<u64>,
}

impl Sampler {
    /// Create a deterministic sampler.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a sampler seeded from OS entropy. Not reproducible.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// The seed this sampler was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Derive an independent sampler for `stream` (a worker or tile index).
    ///
    /// Deterministic for seeded samplers; the parent's own state is not
    /// touched.
    pub fn fork(&self, stream: u64) -> Sampler {
        match self.seed {
            Some(seed) => {
                Sampler::new(seed ^ stream.wrapping_add(1).wrapping_mul(STREAM_INCREMENT))
            }
            None => Sampler::from_entropy(),
        }
    }

    /// Draw a seed for a downstream sampler or generator.
    pub fn next_seed(&mut self) -> u64 {
        self.rng.gen()
    }

    /// Uniform value in [0, 1).
    #[inline]
    pub fn uniform01(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Uniform value in [min, max).
    #[inline]
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.uniform01()
    }

    /// Vector with components in [0, 1).
    pub fn vec3(&mut self) -> Vec3 {
        Vec3::new(self.uniform01(), self.uniform01(), self.uniform01())
    }

    /// Vector with components in [min, max).
    pub fn vec3_range(&mut self, min: f64, max: f64) -> Vec3 {
        Vec3::new(
            self.uniform(min, max),
            self.uniform(min, max),
            self.uniform(min, max),
        )
    }

    /// Unit vector uniformly distributed on the sphere.
    pub fn unit_vector(&mut self) -> Vec3 {
        // Rejection sampling in the unit ball, then project
        loop {
            let v = self.vec3_range(-1.0, 1.0);
            let len_sq = v.length_squared();
            if len_sq > 1e-160 && len_sq <= 1.0 {
                return v / len_sq.sqrt();
            }
        }
    }

    /// Unit vector in the hemisphere around `normal`.
    pub fn on_hemisphere(&mut self, normal: Vec3) -> Vec3 {
        let on_unit_sphere = self.unit_vector();
        if on_unit_sphere.dot(normal) > 0.0 {
            on_unit_sphere
        } else {
            -on_unit_sphere
        }
    }

    /// Point inside the unit disk in the XY plane.
    pub fn in_unit_disk(&mut self) -> Vec3 {
        loop {
            let p = Vec3::new(self.uniform(-1.0, 1.0), self.uniform(-1.0, 1.0), 0.0);
            if p.length_squared() < 1.0 {
                return p;
            }
        }
    }

    /// Pixel jitter in the [-0.5, 0.5) x [-0.5, 0.5) square.
    pub fn square_offset(&mut self) -> Vec3 {
        Vec3::new(self.uniform01() - 0.5, self.uniform01() - 0.5, 0.0)
    }
}

thread_local! {
    /// Per-thread sampler backing the free functions below.
    static SAMPLER: RefCell<Sampler> = RefCell::new(Sampler::from_entropy());
}

/// Uniform f64 in [0, 1) from this thread's sampler.
pub fn random_f64() -> f64 {
    SAMPLER.with(|sampler| sampler.borrow_mut().uniform01())
}

/// Uniform f64 in [min, max) from this thread's sampler.
pub fn random_f64_range(min: f64, max: f64) -> f64 {
    SAMPLER.with(|sampler| sampler.borrow_mut().uniform(min, max))
}

/// Reseed this thread's sampler, making the free functions reproducible.
pub fn seed_thread_sampler(seed: u64) {
    SAMPLER.with(|sampler| *sampler.borrow_mut() = Sampler::new(seed));
}

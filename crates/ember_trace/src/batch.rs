//! Parallel traversal of many rays against one world.
//!
//! The world is only read, so it is shared by reference across rayon
//! workers. Anything random gets a per-chunk sampler forked from a root
//! seed, which keeps the output independent of how rayon splits the work.

use crate::hittable::{HitRecord, Hittable};
use crate::random::Sampler;
use ember_math::{Interval, Ray};
use rayon::prelude::*;

/// Rays generated per forked sampler in [`jittered_rays`].
pub const JITTER_CHUNK: usize = 64;

/// Resolve the nearest hit for every ray, in parallel.
///
/// Output order matches `rays`.
pub fn hit_all<'a, H>(world: &'a H, rays: &[Ray], ray_t: Interval) -> Vec<Option<HitRecord<'a>>>
where
    H: Hittable + ?Sized,
{
    let hits: Vec<Option<HitRecord<'a>>> = rays.par_iter().map(|ray| world.hit(ray, ray_t)).collect();

    log::debug!(
        "Traced {} rays, {} hits",
        rays.len(),
        hits.iter().filter(|hit| hit.is_some()).count()
    );
    hits
}

/// Build `count` rays around `base`, each direction perturbed by up to
/// `spread` in a random direction.
///
/// Deterministic for a given `seed`, regardless of thread count.
pub fn jittered_rays(base: &Ray, count: usize, spread: f64, seed: u64) -> Vec<Ray> {
    let root = Sampler::new(seed);
    let chunks = count.div_ceil(JITTER_CHUNK);
    let base = *base;

    (0..chunks)
        .into_par_iter()
        .flat_map_iter(|chunk| {
            let mut sampler = root.fork(chunk as u64);
            let len = JITTER_CHUNK.min(count - chunk * JITTER_CHUNK);
            (0..len).map(move |_| {
                let offset = spread * sampler.uniform01() * sampler.unit_vector();
                Ray::new(base.origin(), base.direction() + offset)
            })
        })
        .collect()
}

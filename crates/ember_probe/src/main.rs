use anyhow::{Context, Result};
use ember_math::{Interval, Point3, Ray, Vec3};
use ember_trace::{
    hit_all, jittered_rays, BoundaryPolicy, Hittable, HittableList, Material, Sphere, Tagged,
    TraceConfig,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Probe settings, read from an optional JSON file given as the first argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ProbeConfig {
    trace: TraceConfig,
    /// Where every probe ray starts
    origin: Point3,
    /// Number of rays in the horizontal fan
    fan: usize,
    /// Jittered rays fired around the center of the fan
    samples: usize,
    /// Maximum jitter added to a sample direction
    spread: f64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            trace: TraceConfig::default(),
            origin: Point3::ZERO,
            fan: 9,
            samples: 1024,
            spread: 0.5,
        }
    }
}

fn load_config(path: &str) -> Result<ProbeConfig> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read probe config {}", path))?;
    let config: ProbeConfig = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse probe config {}", path))?;
    config.trace.validate()?;
    Ok(config)
}

fn build_scene(boundary: BoundaryPolicy) -> Result<HittableList> {
    let near: Arc<dyn Material> = Arc::new(Tagged::new("near"));
    let far: Arc<dyn Material> = Arc::new(Tagged::new("far"));
    let ground: Arc<dyn Material> = Arc::new(Tagged::new("ground"));

    let mut world = HittableList::new();
    for (center, radius, material) in [
        (Point3::new(0.0, 0.0, -1.0), 0.5, near),
        (Point3::new(0.0, 0.0, -5.0), 0.5, far),
        (Point3::new(0.0, -100.5, -1.0), 100.0, ground),
    ] {
        let sphere = Sphere::try_new(center, radius, material)?.with_boundary(boundary);
        world.add(Arc::new(sphere));
    }

    log::info!("Scene built with {} objects", world.len());
    Ok(world)
}

/// Rays from `origin` sweeping left to right across the z = -1 plane.
fn fan_rays(origin: Point3, count: usize) -> Vec<Ray> {
    let step = if count > 1 { 2.0 / (count - 1) as f64 } else { 0.0 };
    (0..count)
        .map(|i| {
            let x = if count > 1 { -1.0 + step * i as f64 } else { 0.0 };
            Ray::new(origin, Vec3::new(x, 0.0, -1.0))
        })
        .collect()
}

fn report_fan(world: &HittableList, rays: &[Ray], window: Interval) {
    for (ray, hit) in rays.iter().zip(hit_all(world, rays, window)) {
        match hit {
            Some(rec) => log::info!(
                "dir {:>6.3}: hit {} at t={:.4} p={:.3} n={:.3} {}",
                ray.direction().x,
                rec.material.name(),
                rec.t,
                rec.point,
                rec.normal,
                if rec.front_face { "front" } else { "back" }
            ),
            None => log::info!("dir {:>6.3}: miss", ray.direction().x),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => ProbeConfig::default(),
    };
    log::info!("Starting Ember probe: {:?}", config);

    let world = build_scene(config.trace.boundary)?;
    let window = config.trace.ray_interval();

    report_fan(&world, &fan_rays(config.origin, config.fan), window);

    let mut sampler = config.trace.sampler();
    let center = Ray::new(config.origin, Vec3::new(0.0, 0.0, -1.0));
    let samples = jittered_rays(&center, config.samples, config.spread, sampler.next_seed());
    let covered = hit_all(&world, &samples, window)
        .iter()
        .filter(|hit| hit.is_some())
        .count();
    log::info!(
        "{} of {} jittered samples hit ({:.1}%)",
        covered,
        samples.len(),
        100.0 * covered as f64 / samples.len().max(1) as f64
    );

    // The same center ray, capped before the first surface
    let capped = world.hit(&center, window.with_max(0.3));
    log::info!("Center ray capped at t=0.3: {}", if capped.is_some() { "hit" } else { "miss" });

    Ok(())
}

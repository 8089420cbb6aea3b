//! Ember trace - ray/scene intersection core.
//!
//! Given a ray and a collection of primitives, find the nearest hit inside
//! a parametric window. Shading, cameras and image output live upstream;
//! they consume [`HitRecord`]s and supply [`Ray`]s.
//!
//! Traversal is a linear scan over a [`HittableList`]. The window's lower
//! bound (see [`DEFAULT_T_MIN`]) keeps secondary rays from re-hitting the
//! surface they start on.

mod batch;
mod config;
mod error;
mod hittable;
mod hittable_list;
mod material;
mod random;
mod sphere;

pub use batch::{hit_all, jittered_rays, JITTER_CHUNK};
pub use config::{BoundaryPolicy, TraceConfig, DEFAULT_T_MIN};
pub use error::{TraceError, TraceResult};
pub use hittable::{HitRecord, Hittable};
pub use hittable_list::HittableList;
pub use material::{same_material, Material, Tagged};
pub use random::{random_f64, random_f64_range, seed_thread_sampler, Sampler};
pub use sphere::Sphere;

/// Re-export the math types from ember_math
pub use ember_math::{Interval, Point3, Ray, Vec3};

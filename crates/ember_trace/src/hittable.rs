//! Hittable trait and HitRecord for ray-object intersection.

use crate::material::{same_material, Material};
use ember_math::{Interval, Point3, Ray, Vec3};
use std::sync::Arc;

/// Record of a ray-object intersection.
///
/// Records are plain values. A composite keeps its best candidate by copying
/// the record, so no two records ever alias each other.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub point: Point3,
    /// Unit surface normal, always pointing against the ray
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
    /// Material of the primitive that was hit
    pub material: &'a dyn Material,
}

impl<'a> HitRecord<'a> {
    /// Build a record at parameter `t`, orienting `outward_normal` against
    /// the ray.
    ///
    /// `outward_normal` must be unit length.
    pub fn from_outward_normal(
        ray: &Ray,
        t: f64,
        outward_normal: Vec3,
        material: &'a dyn Material,
    ) -> Self {
        let mut rec = Self {
            point: ray.at(t),
            normal: outward_normal,
            t,
            front_face: true,
            material,
        };
        rec.set_face_normal(ray, outward_normal);
        rec
    }

    /// Set the face normal based on ray direction and outward normal.
    ///
    /// The normal is always stored pointing against the ray direction,
    /// so we need to track whether we hit the front or back face.
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) {
        // If the ray and normal point in the same direction, we're inside
        self.front_face = ray.direction().dot(outward_normal) < 0.0;

        self.normal = if self.front_face {
            outward_normal
        } else {
            -outward_normal
        };
    }

    /// True if this hit landed on `material`.
    pub fn material_is(&self, material: &dyn Material) -> bool {
        same_material(self.material, material)
    }
}

/// Trait for objects that can be hit by rays.
///
/// Implementations must not mutate anything reachable from `self` during a
/// query; worlds are shared read-only across threads.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection of `ray` with this object alone, with
    /// `ray_t.min < t < ray_t.max`.
    ///
    /// A primitive may opt into also accepting `t == ray_t.max` (see
    /// [`BoundaryPolicy::Contains`](crate::BoundaryPolicy::Contains)); the
    /// lower bound is always strict.
    ///
    /// The lower bound keeps secondary rays from re-hitting the surface they
    /// left. The upper bound lets a composite shrink the search as closer
    /// hits are found. Returns `None` when there is no such intersection;
    /// degenerate geometry always returns `None`.
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>>;
}

impl<T: Hittable + ?Sized> Hittable for Arc<T> {
    #[inline]
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        (**self).hit(ray, ray_t)
    }
}

impl<T: Hittable + ?Sized> Hittable for Box<T> {
    #[inline]
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        (**self).hit(ray, ray_t)
    }
}

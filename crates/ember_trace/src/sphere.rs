//! Sphere primitive for ray tracing.

use crate::{
    config::BoundaryPolicy,
    error::{TraceError, TraceResult},
    hittable::{HitRecord, Hittable},
    Material,
};
use ember_math::{Interval, Point3, Ray};
use std::sync::Arc;

/// A sphere primitive.
#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<dyn Material>,
    boundary: BoundaryPolicy,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Negative radius values are clamped to 0.0; a zero-radius sphere is
    /// never hit.
    pub fn new(center: Point3, radius: f64, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            material,
            boundary: BoundaryPolicy::default(),
        }
    }

    /// Create a sphere, rejecting non-finite or negative input instead of
    /// clamping it.
    pub fn try_new(center: Point3, radius: f64, material: Arc<dyn Material>) -> TraceResult<Self> {
        if !center.is_finite() {
            return Err(TraceError::NonFiniteCenter(center));
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(TraceError::InvalidRadius(radius));
        }
        Ok(Self::new(center, radius, material))
    }

    /// Choose how roots on the interval boundary are treated.
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Get the center point.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Get the radius (never negative).
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Get the material attached to this sphere.
    pub fn material(&self) -> &dyn Material {
        self.material.as_ref()
    }
}

impl Hittable for Sphere {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let oc = self.center - ray.origin();
        let a = ray.direction().length_squared();
        if a == 0.0 || self.radius == 0.0 {
            return None;
        }
        let h = ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range
        let mut root = (h - sqrtd) / a;
        if !self.boundary.accepts(&ray_t, root) {
            root = (h + sqrtd) / a;
            if !self.boundary.accepts(&ray_t, root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::from_outward_normal(
            ray,
            root,
            outward_normal,
            self.material.as_ref(),
        ))
    }
}

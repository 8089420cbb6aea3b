//! Linear composite of hittable objects.

use crate::hittable::{HitRecord, Hittable};
use ember_math::{Interval, Ray};
use std::sync::Arc;

/// A list of hittable objects, itself hittable.
///
/// Objects are shared (`Arc`), so one primitive can sit in several lists.
/// Traversal is a linear scan; insertion order affects speed, never the
/// result.
#[derive(Clone, Default)]
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Create a list holding a single object.
    pub fn with_object(object: Arc<dyn Hittable>) -> Self {
        let mut list = Self::new();
        list.add(object);
        list
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        log::debug!("Clearing hittable list of {} objects", self.objects.len());
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// The objects in insertion order.
    pub fn objects(&self) -> &[Arc<dyn Hittable>] {
        &self.objects
    }
}

impl FromIterator<Arc<dyn Hittable>> for HittableList {
    fn from_iter<I: IntoIterator<Item = Arc<dyn Hittable>>>(iter: I) -> Self {
        let objects: Vec<_> = iter.into_iter().collect();
        log::debug!("Built hittable list with {} objects", objects.len());
        Self { objects }
    }
}

impl Extend<Arc<dyn Hittable>> for HittableList {
    fn extend<I: IntoIterator<Item = Arc<dyn Hittable>>>(&mut self, iter: I) {
        self.objects.extend(iter);
    }
}

impl Hittable for HittableList {
    fn hit<'a>(&'a self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'a>> {
        let mut closest: Option<HitRecord<'a>> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            // Children only search in front of the best hit so far, so a
            // farther surface can never replace it. A child that includes
            // its upper bound can return an equal `t`; the first one found
            // is kept.
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                if closest.is_none() || rec.t < closest_so_far {
                    closest_so_far = rec.t;
                    closest = Some(rec);
                }
            }
        }

        closest
    }
}

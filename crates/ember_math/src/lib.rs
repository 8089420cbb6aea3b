//! Ember math - value types shared by the intersection core.
//!
//! Everything here is double precision. `Point3` and `Vec3` are the same
//! glam type; the alias only documents intent (position vs. displacement).

// Re-export glam for convenience
pub use glam::{dvec3, DVec3};

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;

/// A displacement or direction in 3D space.
pub type Vec3 = DVec3;

/// A position in 3D space.
pub type Point3 = DVec3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_point_and_vector_interoperate() {
        let p: Point3 = dvec3(1.0, 2.0, 3.0);
        let d: Vec3 = dvec3(4.0, 5.0, 6.0);
        assert_eq!(p + d, Point3::new(5.0, 7.0, 9.0));
    }
}

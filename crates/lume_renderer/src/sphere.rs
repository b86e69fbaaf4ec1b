//! Sphere primitive for ray tracing.

use crate::{hit::HitRecord, material::MaterialId};
use lume_math::{Interval, Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    /// Create a new sphere. Radius must be positive.
    pub fn new(center: Vec3, radius: f32, material: MaterialId) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            center,
            radius,
            material,
        }
    }

    /// Test the ray against this sphere within the given interval.
    ///
    /// Fills in the record and returns true on a hit.
    pub fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let oc = self.center - ray.origin;
        let a = ray.direction.length_squared();
        let h = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return false;
        }

        let sqrtd = discriminant.sqrt();

        // Smaller root first; fall back to the larger one when it lies
        // before the near bound.
        let mut root = (h - sqrtd) / a;
        if root < ray_t.min {
            root = (h + sqrtd) / a;
        }
        if !ray_t.contains(root) {
            return false;
        }

        rec.t = root;
        rec.point = ray.at(root);
        rec.normal = (rec.point - self.center).normalize();
        rec.material = self.material;
        rec.did_hit = true;

        true
    }
}

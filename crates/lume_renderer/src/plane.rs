//! Infinite plane primitive.

use crate::{hit::HitRecord, material::MaterialId};
use lume_math::{Interval, Ray, Vec3};

/// An infinite plane through `origin` with unit `normal`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Plane {
    pub fn new(origin: Vec3, normal: Vec3, material: MaterialId) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
            material,
        }
    }

    /// Test the ray against this plane within the given interval.
    ///
    /// The interval's upper bound carries the closest `t` found so far,
    /// so a plane can never overwrite a better hit. A ray parallel to
    /// the plane never hits (the zero denominator is guarded, not
    /// propagated).
    pub fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < 1e-8 {
            return false;
        }

        let t = (self.origin - ray.origin).dot(self.normal) / denom;
        if !ray_t.surrounds(t) {
            return false;
        }

        rec.t = t;
        rec.point = ray.at(t);
        rec.normal = self.normal;
        rec.material = self.material;
        rec.did_hit = true;

        true
    }
}

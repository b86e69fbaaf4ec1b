//! Triangle primitive with face culling.
//!
//! Intersection solves against the triangle's plane (through its
//! centroid) followed by three signed edge tests.

use crate::{hit::HitRecord, material::MaterialId};
use lume_math::{Interval, Ray, Vec3};

/// Which side of a triangle a ray may hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// Hittable from both sides
    #[default]
    None,
    /// Reject hits against the back face (ray along the normal)
    BackFace,
    /// Reject hits against the front face (ray against the normal)
    FrontFace,
}

/// A single triangle.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Face normal (unit length)
    pub normal: Vec3,
    pub cull: CullMode,
    pub material: MaterialId,
}

impl Triangle {
    /// Create a triangle, deriving the face normal from its edges.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, cull: CullMode, material: MaterialId) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        Self {
            v0,
            v1,
            v2,
            normal,
            cull,
            material,
        }
    }

    /// Create a triangle with a precomputed face normal (mesh faces).
    pub fn with_normal(
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        normal: Vec3,
        cull: CullMode,
        material: MaterialId,
    ) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal,
            cull,
            material,
        }
    }

    /// Test the ray against this triangle within the given interval.
    ///
    /// The cull policy is applied before the inside test. On success the
    /// record is unconditionally the best for this primitive; a triangle
    /// is a single polygon with no closer reentry.
    pub fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        let dot = self.normal.dot(ray.direction);
        // Parallel to the triangle's plane
        if dot.abs() < 1e-8 {
            return false;
        }

        match self.cull {
            CullMode::BackFace if dot > 0.0 => return false,
            CullMode::FrontFace if dot < 0.0 => return false,
            _ => {}
        }

        let centroid = (self.v0 + self.v1 + self.v2) / 3.0;
        let t = (centroid - ray.origin).dot(self.normal) / dot;
        if !ray_t.contains(t) {
            return false;
        }

        // The intersection point must lie on the inner side of each
        // directed edge.
        let p = ray.at(t);
        for (a, b) in [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)] {
            if self.normal.dot((b - a).cross(p - a)) < 0.0 {
                return false;
            }
        }

        rec.t = t;
        rec.point = p;
        rec.normal = self.normal;
        rec.material = self.material;
        rec.did_hit = true;

        true
    }
}

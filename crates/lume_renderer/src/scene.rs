//! Scene storage and intersection queries.
//!
//! The scene exclusively owns all geometry, lights, and materials in
//! value arenas. Queries take `&self` and are safe to run from many
//! threads at once as long as nothing mutates the scene mid-frame.

use crate::{
    hit::HitRecord,
    light::Light,
    material::{Color, Material, MaterialId},
    mesh::TriangleMesh,
    plane::Plane,
    sphere::Sphere,
    triangle::CullMode,
};
use lume_core::MeshData;
use lume_math::{Ray, Vec3};

/// Aggregate of everything a frame renders.
pub struct Scene {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    meshes: Vec<TriangleMesh>,
    lights: Vec<Light>,
    materials: Vec<Material>,
}

impl Scene {
    /// Create an empty scene.
    ///
    /// Material slot 0 is a solid red fallback, so geometry registered
    /// without an explicit material still shades visibly.
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            planes: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            materials: vec![Material::SolidColor {
                color: Color::new(1.0, 0.0, 0.0),
            }],
        }
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn add_sphere(&mut self, center: Vec3, radius: f32, material: MaterialId) {
        self.spheres.push(Sphere::new(center, radius, material));
    }

    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material: MaterialId) {
        self.planes.push(Plane::new(origin, normal, material));
    }

    /// Register a mesh and return it for transform setup.
    ///
    /// Call `rebuild_world()` on the returned mesh after changing its
    /// transform and before rendering.
    pub fn add_mesh(
        &mut self,
        data: MeshData,
        cull: CullMode,
        material: MaterialId,
    ) -> &mut TriangleMesh {
        self.meshes.push(TriangleMesh::new(data, cull, material));
        self.meshes.last_mut().unwrap()
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id.0]
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn meshes_mut(&mut self) -> &mut [TriangleMesh] {
        &mut self.meshes
    }

    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.planes.len() + self.meshes.len()
    }

    /// Find the closest intersection along the ray.
    ///
    /// Tests every sphere, then every plane, then every mesh, narrowing
    /// the active range to the best `t` so far; a cleared `did_hit`
    /// means nothing was hit in range.
    pub fn closest_hit(&self, ray: &Ray) -> HitRecord {
        let mut rec = HitRecord::default();
        let mut range = ray.range();

        for sphere in &self.spheres {
            if sphere.hit(ray, range, &mut rec) {
                range = range.with_max(rec.t);
            }
        }
        for plane in &self.planes {
            if plane.hit(ray, range, &mut rec) {
                range = range.with_max(rec.t);
            }
        }
        for mesh in &self.meshes {
            if mesh.hit(ray, range, &mut rec) {
                range = range.with_max(rec.t);
            }
        }

        rec
    }

    /// Existence-only visibility query, short-circuiting on the first
    /// positive test. Same traversal order as `closest_hit`.
    pub fn does_hit(&self, ray: &Ray) -> bool {
        let range = ray.range();
        let mut scratch = HitRecord::default();

        for sphere in &self.spheres {
            if sphere.hit(ray, range, &mut scratch) {
                return true;
            }
        }
        for plane in &self.planes {
            if plane.hit(ray, range, &mut scratch) {
                return true;
            }
        }
        for mesh in &self.meshes {
            if mesh.hit_any(ray, range) {
                return true;
            }
        }

        false
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

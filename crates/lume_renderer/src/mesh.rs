//! Transformed triangle mesh instance.
//!
//! Owns base-space `MeshData` plus a scale/rotate/translate transform and
//! the derived world-space buffers the hit tests actually read. Derived
//! data is rebuilt only by `rebuild_world()`, never during a frame.

use crate::{
    hit::HitRecord,
    material::MaterialId,
    triangle::{CullMode, Triangle},
};
use lume_core::MeshData;
use lume_math::{Aabb, Interval, Mat4, Quat, Ray, Vec3};

/// An indexed triangle mesh placed in the world.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    data: MeshData,
    pub cull: CullMode,
    pub material: MaterialId,

    // Transform components, composed scale -> rotate -> translate
    translation: Vec3,
    rotation: Quat,
    scale: Vec3,

    // Derived world-space data, read-only during a frame
    world_positions: Vec<Vec3>,
    world_normals: Vec<Vec3>,
    world_bounds: Aabb,
}

impl TriangleMesh {
    /// Create a mesh instance with an identity transform.
    pub fn new(data: MeshData, cull: CullMode, material: MaterialId) -> Self {
        let mut mesh = Self {
            data,
            cull,
            material,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            world_positions: Vec::new(),
            world_normals: Vec::new(),
            world_bounds: Aabb::EMPTY,
        };
        mesh.rebuild_world();
        mesh
    }

    pub fn translate(&mut self, translation: Vec3) -> &mut Self {
        self.translation = translation;
        self
    }

    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        self.rotation = Quat::from_rotation_y(angle);
        self
    }

    pub fn scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Recompute world-space positions, face normals, and the bounding
    /// box from the base data and the current transform.
    ///
    /// Must be called after any transform change, before dispatching a
    /// frame; render tasks only ever read the derived buffers.
    pub fn rebuild_world(&mut self) {
        let matrix =
            Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation);

        self.world_positions.clear();
        self.world_positions
            .extend(self.data.positions.iter().map(|&p| matrix.transform_point3(p)));

        // For non-uniform scales the exact normal transform is the
        // inverse-transpose; rotate-and-normalize matches the uniform
        // scales used here.
        let rotation = Mat4::from_quat(self.rotation);
        self.world_normals.clear();
        self.world_normals.extend(
            self.data
                .face_normals
                .iter()
                .map(|&n| rotation.transform_vector3(n).normalize()),
        );

        self.world_bounds = Aabb::from_point_cloud(&self.world_positions);
    }

    pub fn triangle_count(&self) -> usize {
        self.data.triangle_count()
    }

    pub fn world_bounds(&self) -> Aabb {
        self.world_bounds
    }

    /// World-space triangle for face `index`.
    fn face(&self, index: usize) -> Triangle {
        let i = index * 3;
        let indices = &self.data.indices;
        Triangle::with_normal(
            self.world_positions[indices[i] as usize],
            self.world_positions[indices[i + 1] as usize],
            self.world_positions[indices[i + 2] as usize],
            self.world_normals[index],
            self.cull,
            self.material,
        )
    }

    /// Closest-hit test: AABB slab pretest, then an in-order scan over
    /// the faces keeping the minimal-t hit.
    ///
    /// The pretest is purely conservative and can never reject a ray a
    /// brute-force face scan would have hit.
    pub fn hit(&self, ray: &Ray, ray_t: Interval, rec: &mut HitRecord) -> bool {
        if !self.world_bounds.hit(ray, ray_t) {
            return false;
        }

        let mut hit_anything = false;
        let mut range = ray_t;

        for index in 0..self.triangle_count() {
            if self.face(index).hit(ray, range, rec) {
                hit_anything = true;
                range = range.with_max(rec.t);
            }
        }

        hit_anything
    }

    /// Any-hit test: returns on the first intersecting face.
    ///
    /// Used for shadow queries where only existence matters.
    pub fn hit_any(&self, ray: &Ray, ray_t: Interval) -> bool {
        if !self.world_bounds.hit(ray, ray_t) {
            return false;
        }

        let mut scratch = HitRecord::default();
        (0..self.triangle_count()).any(|index| self.face(index).hit(ray, ray_t, &mut scratch))
    }
}

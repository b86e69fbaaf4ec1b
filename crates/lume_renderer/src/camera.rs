//! Camera and per-pixel ray generation.

use lume_math::{Ray, Vec3};

const WORLD_UP: Vec3 = Vec3::Y;

/// Pinhole camera with an orthonormal basis.
///
/// The basis is recomputed from `forward` and a fixed world up whenever
/// the orientation changes; `right` and `up` stay mutually orthogonal
/// unit vectors. Resolve the camera once per frame, then treat it as
/// read-only during dispatch.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub origin: Vec3,
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    fov_angle: f32,
    fov_scale: f32,
}

impl Camera {
    /// Create a camera at `origin` with a vertical field of view in
    /// degrees, looking down +Z.
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        let mut camera = Self {
            origin,
            forward: Vec3::Z,
            up: WORLD_UP,
            right: Vec3::X,
            fov_angle,
            fov_scale: (fov_angle.to_radians() / 2.0).tan(),
        };
        camera.update_basis();
        camera
    }

    /// Point the camera along a new forward direction.
    pub fn look_in(&mut self, forward: Vec3) {
        self.forward = forward.normalize();
        self.update_basis();
    }

    /// Change the field of view (degrees).
    pub fn set_fov(&mut self, fov_angle: f32) {
        self.fov_angle = fov_angle;
        self.fov_scale = (fov_angle.to_radians() / 2.0).tan();
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn fov_scale(&self) -> f32 {
        self.fov_scale
    }

    fn update_basis(&mut self) {
        self.right = WORLD_UP.cross(self.forward).normalize();
        self.up = self.forward.cross(self.right).normalize();
    }

    /// Build the world-space ray through pixel `(px, py)`.
    ///
    /// Pixel centers map to normalized device coordinates, scaled by the
    /// aspect ratio and field-of-view factor, then through the camera
    /// basis with the ray origin at the camera position.
    pub fn generate_ray(&self, px: u32, py: u32, width: u32, height: u32) -> Ray {
        let aspect = width as f32 / height as f32;

        let cx = (2.0 * ((px as f32 + 0.5) / width as f32) - 1.0) * aspect * self.fov_scale;
        let cy = (1.0 - 2.0 * ((py as f32 + 0.5) / height as f32)) * self.fov_scale;

        let direction = (self.right * cx + self.up * cy + self.forward).normalize();
        Ray::new(self.origin, direction)
    }
}

//! Lume Renderer - CPU Ray Tracing
//!
//! A direct-lighting ray tracer: camera rays against analytic and
//! triangulated geometry, shaded with a closed set of reflectance models
//! and point/directional/area lights, dispatched in parallel buckets.

mod bucket;
mod camera;
mod hit;
mod light;
mod material;
mod mesh;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub mod demo;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use hit::HitRecord;
pub use light::{Light, LightSample, AREA_LIGHT_SAMPLES};
pub use material::{Color, Material, MaterialId};
pub use mesh::TriangleMesh;
pub use plane::Plane;
pub use renderer::{
    color_to_rgb8, max_to_one, render, render_pixel, ImageBuffer, LightingMode, RenderConfig,
};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::{CullMode, Triangle};

/// Re-export common math types from lume_math
pub use lume_math::{Aabb, Interval, Ray, Vec3};

//! Direct-lighting shading and frame output.
//!
//! Per pixel: camera ray, closest hit, then one contribution per light
//! sample gated by a shadow query. A debug lighting mode selects which
//! factors of the product are displayed.

use crate::{
    bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE},
    camera::Camera,
    hit::HitRecord,
    material::Color,
    scene::Scene,
};
use lume_math::{Ray, Vec3};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use std::path::Path;

/// Offset applied along the surface normal before a shadow query, so the
/// shadow ray cannot re-hit the surface it leaves.
const SHADOW_BIAS: f32 = 1e-3;

/// Which factors of the lighting product are displayed.
///
/// A debug/inspection switch; `Combined` is the physically shaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightingMode {
    /// Cosine-weighted visibility only
    ObservedArea,
    /// Incident radiance only
    Radiance,
    /// Reflectance factor only
    Brdf,
    /// Radiance x BRDF x cosine
    #[default]
    Combined,
}

/// Frame-level render settings.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub lighting_mode: LightingMode,
    /// Cast shadow rays per light sample
    pub shadows: bool,
    /// Base seed for the per-bucket sample generators
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            lighting_mode: LightingMode::Combined,
            shadows: true,
            seed: 0,
        }
    }
}

/// Shade one hit point with every light in the scene.
fn shade(
    scene: &Scene,
    ray: &Ray,
    rec: &HitRecord,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let material = scene.material(rec.material);
    let view_dir = -ray.direction.normalize();

    let mut color = Color::ZERO;

    for light in scene.lights() {
        let count = light.sample_count();
        let weight = 1.0 / count as f32;

        for _ in 0..count {
            let sample = light.sample(rec.point, rng);

            let cosine = rec.normal.dot(sample.direction);
            if cosine <= 0.0 {
                continue;
            }

            if config.shadows {
                let shadow_ray = Ray::with_range(
                    rec.point + rec.normal * SHADOW_BIAS,
                    sample.direction,
                    lume_math::DEFAULT_T_MIN,
                    sample.distance,
                );
                if scene.does_hit(&shadow_ray) {
                    continue;
                }
            }

            let contribution = match config.lighting_mode {
                LightingMode::ObservedArea => Color::splat(cosine),
                LightingMode::Radiance => sample.radiance,
                LightingMode::Brdf => material.evaluate(sample.direction, view_dir, rec.normal),
                LightingMode::Combined => {
                    sample.radiance
                        * material.evaluate(sample.direction, view_dir, rec.normal)
                        * cosine
                }
            };

            color += contribution * weight;
        }
    }

    color
}

/// Compute the color for pixel `(x, y)`.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let ray = camera.generate_ray(x, y, config.width, config.height);

    let rec = scene.closest_hit(&ray);
    if !rec.did_hit {
        return Color::ZERO;
    }

    shade(scene, &ray, &rec, config, rng)
}

/// Scale a color down uniformly when any channel exceeds 1.
///
/// Preserves hue where a per-channel clamp would shift it.
pub fn max_to_one(color: Color) -> Color {
    let max = color.x.max(color.y).max(color.z);
    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    let c = max_to_one(color).clamp(Vec3::ZERO, Vec3::ONE);
    [
        (c.x * 255.0) as u8,
        (c.y * 255.0) as u8,
        (c.z * 255.0) as u8,
    ]
}

/// Frame buffer of linear colors, row-major.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to 8-bit RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }

    /// Write the frame as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )
    }

    /// Copy a bucket's pixels into place.
    fn blit(&mut self, result: &BucketResult) {
        let bucket = result.bucket;
        for local_y in 0..bucket.height {
            for local_x in 0..bucket.width {
                let color = result.pixels[(local_y * bucket.width + local_x) as usize];
                self.set(bucket.x + local_x, bucket.y + local_y, color);
            }
        }
    }
}

/// Render a full frame in parallel buckets.
///
/// The scene and camera are frozen for the duration of the call; each
/// bucket is an independent task with its own seeded sample generator,
/// writing a disjoint region of the frame buffer after the join.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> ImageBuffer {
    let buckets = generate_buckets(config.width, config.height, DEFAULT_BUCKET_SIZE);

    log::info!(
        "Rendering {}x{} ({} primitives, {} lights, {} buckets) on {} threads",
        config.width,
        config.height,
        scene.primitive_count(),
        scene.lights().len(),
        buckets.len(),
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let mut rng = SmallRng::seed_from_u64(config.seed.wrapping_add(bucket.index as u64));
            let pixels = render_bucket(bucket, scene, camera, config, &mut rng);
            BucketResult::new(*bucket, pixels)
        })
        .collect();

    let mut image = ImageBuffer::new(config.width, config.height);
    for result in &results {
        image.blit(result);
    }

    log::info!("Render complete");
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        light::Light,
        material::{Material, MaterialId},
    };
    use rand::rngs::StdRng;

    fn lit_sphere_scene() -> (Scene, Camera) {
        let mut scene = Scene::new();
        let mat = scene.add_material(Material::Lambert {
            color: Color::ONE,
            diffuse_reflectance: 1.0,
        });
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, mat);
        scene.add_light(Light::point(Vec3::new(0.0, 5.0, 0.0), 50.0, Color::ONE));

        let camera = Camera::new(Vec3::ZERO, 45.0);
        (scene, camera)
    }

    #[test]
    fn test_render_pixel_hit_is_lit() {
        let (scene, camera) = lit_sphere_scene();
        let config = RenderConfig {
            width: 101,
            height: 101,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        let center = render_pixel(&scene, &camera, 50, 50, &config, &mut rng);
        assert!(center.length() > 0.0);

        let corner = render_pixel(&scene, &camera, 0, 0, &config, &mut rng);
        assert_eq!(corner, Color::ZERO);
    }

    #[test]
    fn test_shadowed_point_is_black() {
        let (mut scene, camera) = lit_sphere_scene();
        // Occluder between the light and the sphere
        let mat = MaterialId(0);
        scene.add_sphere(Vec3::new(0.0, 3.0, 2.6), 1.5, mat);

        let config = RenderConfig {
            width: 101,
            height: 101,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        let shadowed = render_pixel(&scene, &camera, 50, 50, &config, &mut rng);
        assert_eq!(shadowed, Color::ZERO);

        // With shadows disabled the light reaches the surface again
        let config = RenderConfig {
            shadows: false,
            ..config
        };
        let unshadowed = render_pixel(&scene, &camera, 50, 50, &config, &mut rng);
        assert!(unshadowed.length() > 0.0);
    }

    #[test]
    fn test_observed_area_mode_is_cosine_only() {
        let (scene, camera) = lit_sphere_scene();
        let config = RenderConfig {
            width: 101,
            height: 101,
            lighting_mode: LightingMode::ObservedArea,
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(42);

        let value = render_pixel(&scene, &camera, 50, 50, &config, &mut rng);
        // A pure cosine is grey and at most 1
        assert!(value.x <= 1.0);
        assert!((value.x - value.y).abs() < 1e-6);
        assert!((value.y - value.z).abs() < 1e-6);
    }

    #[test]
    fn test_max_to_one_preserves_hue() {
        let color = Color::new(2.0, 1.0, 0.5);
        let clamped = max_to_one(color);

        assert!((clamped.x - 1.0).abs() < 1e-6);
        assert!((clamped.y - 0.5).abs() < 1e-6);
        assert!((clamped.z - 0.25).abs() < 1e-6);

        // In-range colors pass through untouched
        let small = Color::new(0.25, 0.5, 0.75);
        assert_eq!(max_to_one(small), small);
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(color_to_rgb8(Color::ZERO), [0, 0, 0]);
        assert_eq!(color_to_rgb8(Color::ONE), [255, 255, 255]);
        assert_eq!(color_to_rgb8(Color::new(-1.0, 0.0, 0.0)), [0, 0, 0]);
    }

    #[test]
    fn test_render_full_frame() {
        let (scene, camera) = lit_sphere_scene();
        let config = RenderConfig {
            width: 96,
            height: 64,
            ..Default::default()
        };

        let image = render(&scene, &camera, &config);
        assert_eq!(image.pixels.len(), 96 * 64);

        // Something in the middle of the frame is lit
        let center = image.get(48, 32);
        assert!(center.length() > 0.0);

        let bytes = image.to_rgb8();
        assert_eq!(bytes.len(), 96 * 64 * 3);
    }

    #[test]
    fn test_render_is_deterministic_for_fixed_seed() {
        let (mut scene, camera) = lit_sphere_scene();
        scene.add_light(Light::area_rect(
            Vec3::new(0.0, 4.0, 5.0),
            Vec3::new(0.0, -1.0, 0.0),
            Vec3::Z,
            2.0,
            2.0,
            30.0,
            Color::ONE,
        ));

        let config = RenderConfig {
            width: 32,
            height: 32,
            seed: 7,
            ..Default::default()
        };

        let a = render(&scene, &camera, &config);
        let b = render(&scene, &camera, &config);
        assert_eq!(a.pixels, b.pixels);
    }
}

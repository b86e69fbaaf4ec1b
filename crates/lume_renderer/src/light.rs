//! Light kinds, radiance, and area-light sampling.
//!
//! Point and directional lights yield a single deterministic sample;
//! area lights are estimated with a fixed number of stochastic samples,
//! each carrying its own radiance so the caller can pair it with its own
//! cosine term and shadow test.

use crate::material::Color;
use lume_math::Vec3;
use rand::{Rng, RngCore};
use std::f32::consts::PI;

/// Samples drawn per shading point for an area light.
pub const AREA_LIGHT_SAMPLES: usize = 16;

/// One incident-light sample at a shading point.
#[derive(Debug, Clone, Copy)]
pub struct LightSample {
    /// Unit direction from the surface toward the light
    pub direction: Vec3,
    /// Distance to the sampled point (unbounded for directional lights)
    pub distance: f32,
    /// Incident radiance along `direction`
    pub radiance: Color,
}

/// A scene light.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    Point {
        origin: Vec3,
        color: Color,
        intensity: f32,
    },
    Directional {
        direction: Vec3,
        color: Color,
        intensity: f32,
    },
    AreaRect {
        origin: Vec3,
        normal: Vec3,
        up: Vec3,
        right: Vec3,
        width: f32,
        height: f32,
        color: Color,
        intensity: f32,
    },
    AreaCircle {
        origin: Vec3,
        normal: Vec3,
        up: Vec3,
        right: Vec3,
        radius: f32,
        color: Color,
        intensity: f32,
    },
    AreaSphere {
        origin: Vec3,
        normal: Vec3,
        up: Vec3,
        right: Vec3,
        radius: f32,
        color: Color,
        intensity: f32,
    },
}

impl Light {
    pub fn point(origin: Vec3, intensity: f32, color: Color) -> Self {
        Light::Point {
            origin,
            color,
            intensity,
        }
    }

    pub fn directional(direction: Vec3, intensity: f32, color: Color) -> Self {
        Light::Directional {
            direction: direction.normalize(),
            color,
            intensity,
        }
    }

    pub fn area_rect(
        origin: Vec3,
        normal: Vec3,
        up_hint: Vec3,
        width: f32,
        height: f32,
        intensity: f32,
        color: Color,
    ) -> Self {
        let (normal, up, right) = orthonormal_basis(normal, up_hint);
        Light::AreaRect {
            origin,
            normal,
            up,
            right,
            width,
            height,
            color,
            intensity,
        }
    }

    pub fn area_circle(
        origin: Vec3,
        normal: Vec3,
        up_hint: Vec3,
        radius: f32,
        intensity: f32,
        color: Color,
    ) -> Self {
        let (normal, up, right) = orthonormal_basis(normal, up_hint);
        Light::AreaCircle {
            origin,
            normal,
            up,
            right,
            radius,
            color,
            intensity,
        }
    }

    pub fn area_sphere(
        origin: Vec3,
        normal: Vec3,
        up_hint: Vec3,
        radius: f32,
        intensity: f32,
        color: Color,
    ) -> Self {
        let (normal, up, right) = orthonormal_basis(normal, up_hint);
        Light::AreaSphere {
            origin,
            normal,
            up,
            right,
            radius,
            color,
            intensity,
        }
    }

    /// How many samples this light needs per shading point.
    pub fn sample_count(&self) -> usize {
        match self {
            Light::Point { .. } | Light::Directional { .. } => 1,
            _ => AREA_LIGHT_SAMPLES,
        }
    }

    /// Draw one incident-light sample for the given shading point.
    ///
    /// Deterministic for point and directional lights; area lights draw
    /// two uniforms and map them onto the light's shape.
    pub fn sample(&self, point: Vec3, rng: &mut dyn RngCore) -> LightSample {
        match *self {
            Light::Point {
                origin,
                color,
                intensity,
            } => sample_from(origin, point, color, intensity),
            Light::Directional {
                direction,
                color,
                intensity,
            } => LightSample {
                direction: -direction,
                distance: f32::MAX,
                radiance: color * intensity,
            },
            Light::AreaRect {
                origin,
                up,
                right,
                width,
                height,
                color,
                intensity,
                ..
            } => {
                let u: f32 = rng.gen();
                let v: f32 = rng.gen();
                let on_light = origin + right * ((u - 0.5) * width) + up * ((v - 0.5) * height);
                sample_from(on_light, point, color, intensity)
            }
            Light::AreaCircle {
                origin,
                up,
                right,
                radius,
                color,
                intensity,
                ..
            } => {
                let u: f32 = rng.gen();
                let v: f32 = rng.gen();
                // Uniform disk: sqrt keeps density constant over area
                let r = u.sqrt() * radius;
                let angle = 2.0 * PI * v;
                let on_light = origin + right * (r * angle.cos()) + up * (r * angle.sin());
                sample_from(on_light, point, color, intensity)
            }
            Light::AreaSphere {
                origin,
                normal,
                up,
                right,
                radius,
                color,
                intensity,
            } => {
                let u: f32 = rng.gen();
                let v: f32 = rng.gen();
                // Uniform sphere via inverse-cosine latitude
                let longitude = 2.0 * PI * u;
                let latitude = (1.0 - 2.0 * v).acos();
                let dir = right * (latitude.sin() * longitude.cos())
                    + up * (latitude.sin() * longitude.sin())
                    + normal * latitude.cos();
                sample_from(origin + dir * radius, point, color, intensity)
            }
        }
    }
}

/// Radiance and geometry of a sample located at `on_light`.
fn sample_from(on_light: Vec3, point: Vec3, color: Color, intensity: f32) -> LightSample {
    let to_light = on_light - point;
    let dist_sq = to_light.length_squared();
    let distance = dist_sq.sqrt();
    LightSample {
        direction: to_light / distance,
        distance,
        radiance: color * (intensity / dist_sq),
    }
}

/// Orthonormal light frame from a normal and an approximate up vector.
fn orthonormal_basis(normal: Vec3, up_hint: Vec3) -> (Vec3, Vec3, Vec3) {
    let normal = normal.normalize();
    let right = up_hint.cross(normal).normalize();
    let up = normal.cross(right);
    (normal, up, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_point_light_inverse_square() {
        // Intensity 100 at distance 10: radiance magnitude color * 1.0
        let light = Light::point(Vec3::new(0.0, 10.0, 0.0), 100.0, Color::ONE);
        let mut rng = StdRng::seed_from_u64(1);

        let sample = light.sample(Vec3::ZERO, &mut rng);
        assert!((sample.radiance - Color::ONE).length() < 1e-5);
        assert!((sample.distance - 10.0).abs() < 1e-5);
        assert!((sample.direction - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_directional_light_has_no_falloff() {
        let light = Light::directional(Vec3::new(0.0, -1.0, 0.0), 2.0, Color::ONE);
        let mut rng = StdRng::seed_from_u64(1);

        let near = light.sample(Vec3::ZERO, &mut rng);
        let far = light.sample(Vec3::new(0.0, -1000.0, 0.0), &mut rng);

        assert_eq!(near.radiance, far.radiance);
        assert!((near.direction - Vec3::Y).length() < 1e-5);
        assert_eq!(near.distance, f32::MAX);
    }

    #[test]
    fn test_degenerate_rect_matches_point_light() {
        // Zero-extent area light collapses to the analytic point formula
        let origin = Vec3::new(0.0, 5.0, 0.0);
        let area = Light::area_rect(origin, Vec3::new(0.0, -1.0, 0.0), Vec3::Z, 0.0, 0.0, 50.0, Color::ONE);
        let point = Light::point(origin, 50.0, Color::ONE);
        let mut rng = StdRng::seed_from_u64(7);

        let shading_point = Vec3::new(1.0, 0.0, 2.0);
        let reference = point.sample(shading_point, &mut rng);

        for _ in 0..AREA_LIGHT_SAMPLES {
            let sample = area.sample(shading_point, &mut rng);
            assert!((sample.radiance - reference.radiance).length() < 1e-5);
            assert!((sample.distance - reference.distance).abs() < 1e-5);
        }
    }

    #[test]
    fn test_rect_samples_stay_on_rectangle() {
        let origin = Vec3::new(0.0, 4.0, 0.0);
        let light = Light::area_rect(origin, Vec3::new(0.0, -1.0, 0.0), Vec3::Z, 2.0, 1.0, 10.0, Color::ONE);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..64 {
            let sample = light.sample(Vec3::ZERO, &mut rng);
            let on_light = sample.direction * sample.distance;
            // Sampled point sits in the light's plane at y=4
            assert!((on_light.y - 4.0).abs() < 1e-4);
            // Within the half extents around the origin
            assert!(on_light.x.abs() <= 1.0 + 1e-4);
            assert!(on_light.z.abs() <= 0.5 + 1e-4);
        }
    }

    #[test]
    fn test_circle_samples_stay_in_disk() {
        let origin = Vec3::new(0.0, 4.0, 0.0);
        let radius = 1.5;
        let light =
            Light::area_circle(origin, Vec3::new(0.0, -1.0, 0.0), Vec3::Z, radius, 10.0, Color::ONE);
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..64 {
            let sample = light.sample(Vec3::ZERO, &mut rng);
            let on_light = sample.direction * sample.distance;
            assert!((on_light.y - 4.0).abs() < 1e-4);
            assert!((on_light - origin).length() <= radius + 1e-4);
        }
    }

    #[test]
    fn test_sphere_samples_stay_on_shell() {
        let origin = Vec3::new(0.0, 4.0, 0.0);
        let radius = 0.75;
        let light =
            Light::area_sphere(origin, Vec3::Y, Vec3::Z, radius, 10.0, Color::ONE);
        let mut rng = StdRng::seed_from_u64(13);

        for _ in 0..64 {
            let sample = light.sample(Vec3::ZERO, &mut rng);
            let on_light = sample.direction * sample.distance;
            assert!(((on_light - origin).length() - radius).abs() < 1e-3);
        }
    }

    #[test]
    fn test_light_basis_is_orthonormal() {
        let (normal, up, right) = orthonormal_basis(Vec3::new(0.3, -0.8, 0.1), Vec3::Y);

        assert!((normal.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!(normal.dot(up).abs() < 1e-5);
        assert!(normal.dot(right).abs() < 1e-5);
        assert!(up.dot(right).abs() < 1e-5);
    }
}

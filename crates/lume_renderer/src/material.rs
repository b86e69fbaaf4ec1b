//! Reflectance models.
//!
//! Materials form a closed set of BRDF kinds evaluated per light sample.
//! `evaluate` returns only the reflectance factor; the caller applies
//! incident radiance and the cosine term.

use lume_math::Vec3;
use std::f32::consts::PI;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Index of a material in the scene's material arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MaterialId(pub usize);

/// A surface reflectance model.
#[derive(Debug, Clone, Copy)]
pub enum Material {
    /// Constant color, independent of directions
    SolidColor { color: Color },
    /// Ideal diffuse reflector
    Lambert {
        color: Color,
        diffuse_reflectance: f32,
    },
    /// Diffuse base with a Phong specular lobe
    LambertPhong {
        color: Color,
        diffuse_reflectance: f32,
        specular_reflectance: f32,
        shininess: f32,
    },
    /// Microfacet model with GGX distribution and Schlick Fresnel
    CookTorrance {
        albedo: Color,
        metalness: f32,
        roughness: f32,
    },
}

impl Material {
    /// Evaluate the reflectance factor for one light sample.
    ///
    /// `light_dir` points from the surface toward the light, `view_dir`
    /// from the surface toward the camera; both unit length.
    pub fn evaluate(&self, light_dir: Vec3, view_dir: Vec3, normal: Vec3) -> Color {
        match *self {
            Material::SolidColor { color } => color,
            Material::Lambert {
                color,
                diffuse_reflectance,
            } => lambert(color, diffuse_reflectance),
            Material::LambertPhong {
                color,
                diffuse_reflectance,
                specular_reflectance,
                shininess,
            } => {
                lambert(color, diffuse_reflectance)
                    + phong(specular_reflectance, shininess, light_dir, view_dir, normal)
            }
            Material::CookTorrance {
                albedo,
                metalness,
                roughness,
            } => cook_torrance(albedo, metalness, roughness, light_dir, view_dir, normal),
        }
    }
}

/// Lambertian diffuse term.
fn lambert(color: Color, diffuse_reflectance: f32) -> Color {
    color * diffuse_reflectance / PI
}

/// Phong specular lobe as a grey reflectance factor.
fn phong(
    specular_reflectance: f32,
    shininess: f32,
    light_dir: Vec3,
    view_dir: Vec3,
    normal: Vec3,
) -> Color {
    let reflected = reflect(-light_dir, normal);
    let alignment = reflected.dot(view_dir).max(0.0);
    Color::splat(specular_reflectance * alignment.powf(shininess))
}

/// Cook-Torrance microfacet reflectance.
///
/// Metals take the base color as Fresnel reflectance and contribute no
/// diffuse term; dielectrics use f0 = 0.04 and keep a Fresnel-weighted
/// Lambert diffuse.
fn cook_torrance(
    albedo: Color,
    metalness: f32,
    roughness: f32,
    light_dir: Vec3,
    view_dir: Vec3,
    normal: Vec3,
) -> Color {
    let half = (view_dir + light_dir).normalize_or_zero();
    let n_dot_v = normal.dot(view_dir).max(0.0);
    let n_dot_l = normal.dot(light_dir).max(0.0);
    let n_dot_h = normal.dot(half).max(0.0);

    let f0 = Vec3::splat(0.04).lerp(albedo, metalness);

    let d = ggx_distribution(n_dot_h, roughness * roughness);
    let f = fresnel_schlick(half.dot(view_dir).max(0.0), f0);
    let g = smith_geometry(n_dot_v, n_dot_l, roughness);

    let specular = d * g * f / (4.0 * n_dot_v * n_dot_l).max(1e-4);

    // Energy not reflected specularly diffuses, except in metals
    let kd = (Vec3::ONE - f) * (1.0 - metalness);
    kd * albedo / PI + specular
}

/// GGX (Trowbridge-Reitz) normal distribution, alpha = roughness^2.
fn ggx_distribution(n_dot_h: f32, alpha: f32) -> f32 {
    let a2 = alpha * alpha;
    let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom).max(1e-8)
}

/// Schlick approximation of the Fresnel term.
fn fresnel_schlick(cos_theta: f32, f0: Vec3) -> Vec3 {
    f0 + (Vec3::ONE - f0) * (1.0 - cos_theta).powi(5)
}

/// Smith joint masking/shadowing with the Schlick k for direct lighting.
fn smith_geometry(n_dot_v: f32, n_dot_l: f32, roughness: f32) -> f32 {
    let k = {
        let t = roughness + 1.0;
        (t * t) * 0.125
    };
    let g1 = |n_dot_x: f32| n_dot_x / (n_dot_x * (1.0 - k) + k).max(1e-8);
    g1(n_dot_v) * g1(n_dot_l)
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    const L: Vec3 = Vec3::new(0.0, 0.0, -1.0);
    const V: Vec3 = Vec3::new(0.0, 0.0, -1.0);
    const N: Vec3 = Vec3::new(0.0, 0.0, -1.0);

    #[test]
    fn test_solid_color_ignores_directions() {
        let mat = Material::SolidColor {
            color: Color::new(1.0, 0.0, 0.0),
        };
        let a = mat.evaluate(L, V, N);
        let b = mat.evaluate(Vec3::Y, Vec3::X, N);
        assert_eq!(a, b);
        assert_eq!(a, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_lambert_is_color_over_pi() {
        let mat = Material::Lambert {
            color: Color::ONE,
            diffuse_reflectance: 1.0,
        };
        let value = mat.evaluate(L, V, N);
        assert!((value.x - 1.0 / PI).abs() < 1e-6);
        assert!((value.y - 1.0 / PI).abs() < 1e-6);
    }

    #[test]
    fn test_lambert_phong_adds_specular_at_mirror_angle() {
        let lambert = Material::Lambert {
            color: Color::ONE,
            diffuse_reflectance: 1.0,
        };
        let phong = Material::LambertPhong {
            color: Color::ONE,
            diffuse_reflectance: 1.0,
            specular_reflectance: 0.5,
            shininess: 60.0,
        };

        // Head-on: reflect(-L, N) == V, full specular alignment
        let diff = phong.evaluate(L, V, N) - lambert.evaluate(L, V, N);
        assert!((diff.x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_phong_specular_vanishes_off_axis() {
        let mat = Material::LambertPhong {
            color: Color::ZERO,
            diffuse_reflectance: 0.0,
            specular_reflectance: 1.0,
            shininess: 30.0,
        };

        // Light reflecting away from the viewer
        let normal = Vec3::Y;
        let light = Vec3::new(-1.0, 1.0, 0.0).normalize();
        let view = Vec3::new(-1.0, 1.0, 0.0).normalize();
        let value = mat.evaluate(light, view, normal);
        assert!(value.x < 0.1);
    }

    #[test]
    fn test_metal_has_no_diffuse() {
        let metal = Material::CookTorrance {
            albedo: Color::new(0.95, 0.93, 0.88),
            metalness: 1.0,
            roughness: 1.0,
        };

        // Rough metal off the specular peak: reflectance is specular only
        // and tinted by the base color, never the flat 1/pi diffuse
        let normal = Vec3::Y;
        let light = Vec3::new(0.8, 0.6, 0.0).normalize();
        let view = Vec3::new(-0.8, 0.6, 0.0).normalize();
        let value = metal.evaluate(light, view, normal);

        let dielectric = Material::CookTorrance {
            albedo: Color::new(0.95, 0.93, 0.88),
            metalness: 0.0,
            roughness: 1.0,
        };
        let dielectric_value = dielectric.evaluate(light, view, normal);

        // The dielectric keeps a diffuse floor the metal lacks
        assert!(dielectric_value.x > value.x);
    }

    #[test]
    fn test_ggx_peaks_at_normal_incidence() {
        let aligned = ggx_distribution(1.0, 0.25);
        let grazing = ggx_distribution(0.1, 0.25);
        assert!(aligned > grazing);
    }

    #[test]
    fn test_fresnel_goes_to_one_at_grazing() {
        let f0 = Vec3::splat(0.04);
        let head_on = fresnel_schlick(1.0, f0);
        let grazing = fresnel_schlick(0.0, f0);

        assert!((head_on.x - 0.04).abs() < 1e-6);
        assert!((grazing.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_smooth_metal_concentrates_highlight() {
        let smooth = Material::CookTorrance {
            albedo: Color::ONE,
            metalness: 1.0,
            roughness: 0.1,
        };

        let normal = Vec3::Y;
        let light = Vec3::new(0.6, 0.8, 0.0).normalize();
        let mirror_view = Vec3::new(-0.6, 0.8, 0.0).normalize();
        let off_view = Vec3::new(-0.99, 0.14, 0.0).normalize();

        let peak = smooth.evaluate(light, mirror_view, normal);
        let off = smooth.evaluate(light, off_view, normal);
        assert!(peak.x > off.x);
    }
}

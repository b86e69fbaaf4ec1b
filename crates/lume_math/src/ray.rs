use crate::{Interval, Vec3};

/// Default minimum parametric distance.
///
/// Keeps secondary rays from re-hitting the surface they start on.
pub const DEFAULT_T_MIN: f32 = 1e-4;

/// A ray in 3D space with a valid parametric range.
///
/// Represents the half-line `origin + t * direction` for `t` in
/// `[t_min, t_max]`. Intersection math assumes the direction keeps a
/// consistent scale; callers are not required to pre-normalize.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub t_min: f32,
    pub t_max: f32,
}

impl Ray {
    /// Create a ray with the default parametric range.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            t_min: DEFAULT_T_MIN,
            t_max: f32::MAX,
        }
    }

    /// Create a ray with an explicit parametric range.
    ///
    /// Invariant: `t_min < t_max`.
    pub fn with_range(origin: Vec3, direction: Vec3, t_min: f32, t_max: f32) -> Self {
        debug_assert!(t_min < t_max);
        Self {
            origin,
            direction,
            t_min,
            t_max,
        }
    }

    /// Get the point along the ray at parameter t.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The ray's valid parametric range as an interval.
    #[inline]
    pub fn range(&self) -> Interval {
        Interval::new(self.t_min, self.t_max)
    }
}

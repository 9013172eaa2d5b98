use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, Mul, MulAssign, Neg};

use super::vector::Vec3;

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Normals.html

/// A surface normal.
///
/// Kept distinct from [Vec3] since normals transform through the inverse
/// transpose instead of the plain linear part.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Normal {
    /// The x component of the normal.
    pub x: f64,
    /// The y component of the normal.
    pub y: f64,
    /// The z component of the normal.
    pub z: f64,
}

impl Normal {
    /// Creates a new `Normal`.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        let ret = Self { x, y, z };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Checks if this `Normal` contains NaNs.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Calculates the dot product of this `Normal` and a [Vec3].
    #[inline]
    pub fn dot_v(&self, v: Vec3) -> f64 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Calculates the dot product of this `Normal` and another `Normal`.
    #[inline]
    pub fn dot(&self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the squared length of this `Normal`.
    #[inline]
    pub fn len_sqr(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Calculates the length of this `Normal`.
    #[inline]
    pub fn len(&self) -> f64 {
        self.len_sqr().sqrt()
    }

    /// Returns this `Normal` normalized to unit length.
    #[inline]
    pub fn normalized(&self) -> Self {
        let l = self.len();
        debug_assert!(l != 0.0);
        Self::new(self.x / l, self.y / l, self.z / l)
    }

    /// Returns this `Normal` flipped, if necessary, into the hemisphere of `v`.
    #[inline]
    pub fn faceforward(&self, v: Vec3) -> Self {
        if self.dot_v(v) < 0.0 {
            -*self
        } else {
            *self
        }
    }
}

impl From<Vec3> for Normal {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Neg for Normal {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Normal {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Mul<f64> for Normal {
    type Output = Self;

    #[inline]
    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl MulAssign<f64> for Normal {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}

impl AbsDiffEq for Normal {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Normal {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

use approx::{AbsDiffEq, RelativeEq};
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Color_and_Radiometry/Spectral_Representation

/// A spectral power distribution stored as RGB.
///
/// The coefficient count is fixed by the type so arithmetic between
/// mismatched spectra is unrepresentable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spectrum {
    /// The r component of the spd.
    pub r: f64,
    /// The g component of the spd.
    pub g: f64,
    /// The b component of the spd.
    pub b: f64,
}

/// sRGB to CIE XYZ, D65 white point.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412453, 0.357580, 0.180423],
    [0.212671, 0.715160, 0.072169],
    [0.019334, 0.119193, 0.950227],
];

/// CIE XYZ to sRGB, D65 white point.
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.240479, -1.537150, -0.498535],
    [-0.969256, 1.875991, 0.041556],
    [0.055648, -0.204043, 1.057311],
];

impl Spectrum {
    /// Creates a new `Spectrum`.
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        let ret = Self { r, g, b };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a new black `Spectrum`.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        }
    }

    /// Creates a new `Spectrum` with all coefficients one.
    #[inline]
    pub fn ones() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        }
    }

    /// Checks if this `Spectrum` contains NaNs.
    #[inline]
    pub fn has_nans(&self) -> bool {
        self.r.is_nan() || self.g.is_nan() || self.b.is_nan()
    }

    /// Checks if all coefficients of this `Spectrum` are zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Finds the value of the maximum coefficient in this `Spectrum`.
    #[inline]
    pub fn max_component(&self) -> f64 {
        self.r.max(self.g.max(self.b))
    }

    /// Calculates the luminance of this `Spectrum` with the CIE luma weights.
    #[inline]
    pub fn luminance(&self) -> f64 {
        0.212671 * self.r + 0.715160 * self.g + 0.072169 * self.b
    }

    /// Converts this `Spectrum` to CIE XYZ.
    pub fn to_xyz(&self) -> [f64; 3] {
        let mut xyz = [0.0; 3];
        for (row, out) in RGB_TO_XYZ.iter().zip(xyz.iter_mut()) {
            *out = row[0] * self.r + row[1] * self.g + row[2] * self.b;
        }
        xyz
    }

    /// Creates a new `Spectrum` from CIE XYZ coefficients.
    pub fn from_xyz(xyz: [f64; 3]) -> Self {
        let mut rgb = [0.0; 3];
        for (row, out) in XYZ_TO_RGB.iter().zip(rgb.iter_mut()) {
            *out = row[0] * xyz[0] + row[1] * xyz[1] + row[2] * xyz[2];
        }
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    /// Returns this `Spectrum` with each coefficient replaced by its square root.
    #[inline]
    pub fn sqrt(&self) -> Self {
        Self::new(self.r.sqrt(), self.g.sqrt(), self.b.sqrt())
    }

    /// Returns this `Spectrum` with each coefficient raised to `e`.
    #[inline]
    pub fn powf(&self, e: f64) -> Self {
        Self::new(self.r.powf(e), self.g.powf(e), self.b.powf(e))
    }

    /// Returns this `Spectrum` with each coefficient exponentiated.
    #[inline]
    pub fn exp(&self) -> Self {
        Self::new(self.r.exp(), self.g.exp(), self.b.exp())
    }

    /// Returns this `Spectrum` with each coefficient clamped to `[min, max]`.
    #[inline]
    pub fn clamp(&self, min: f64, max: f64) -> Self {
        Self::new(
            self.r.clamp(min, max),
            self.g.clamp(min, max),
            self.b.clamp(min, max),
        )
    }
}

impl Neg for Spectrum {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.r, -self.g, -self.b)
    }
}

impl Add for Spectrum {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl Sub for Spectrum {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.r - other.r, self.g - other.g, self.b - other.b)
    }
}

impl Mul for Spectrum {
    type Output = Self;

    #[inline]
    fn mul(self, other: Self) -> Self {
        Self::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Div for Spectrum {
    type Output = Self;

    #[inline]
    fn div(self, other: Self) -> Self {
        Self::new(self.r / other.r, self.g / other.g, self.b / other.b)
    }
}

impl Add<f64> for Spectrum {
    type Output = Self;

    #[inline]
    fn add(self, s: f64) -> Self {
        Self::new(self.r + s, self.g + s, self.b + s)
    }
}

impl Sub<f64> for Spectrum {
    type Output = Self;

    #[inline]
    fn sub(self, s: f64) -> Self {
        Self::new(self.r - s, self.g - s, self.b - s)
    }
}

impl Mul<f64> for Spectrum {
    type Output = Self;

    #[inline]
    fn mul(self, s: f64) -> Self {
        Self::new(self.r * s, self.g * s, self.b * s)
    }
}

impl Div<f64> for Spectrum {
    type Output = Self;

    #[inline]
    fn div(self, s: f64) -> Self {
        debug_assert!(s != 0.0);

        Self::new(self.r / s, self.g / s, self.b / s)
    }
}

impl AddAssign for Spectrum {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.r += other.r;
        self.g += other.g;
        self.b += other.b;
    }
}

impl SubAssign for Spectrum {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.r -= other.r;
        self.g -= other.g;
        self.b -= other.b;
    }
}

impl MulAssign for Spectrum {
    #[inline]
    fn mul_assign(&mut self, other: Self) {
        self.r *= other.r;
        self.g *= other.g;
        self.b *= other.b;
    }
}

impl MulAssign<f64> for Spectrum {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        self.r *= s;
        self.g *= s;
        self.b *= s;
    }
}

impl DivAssign<f64> for Spectrum {
    #[inline]
    fn div_assign(&mut self, s: f64) {
        debug_assert!(s != 0.0);

        self.r /= s;
        self.g /= s;
        self.b /= s;
    }
}

impl Index<usize> for Spectrum {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        match i {
            0 => &self.r,
            1 => &self.g,
            2 => &self.b,
            _ => panic!("Spectrum index {} out of bounds", i),
        }
    }
}

impl IndexMut<usize> for Spectrum {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        match i {
            0 => &mut self.r,
            1 => &mut self.g,
            2 => &mut self.b,
            _ => panic!("Spectrum index {} out of bounds", i),
        }
    }
}

impl AbsDiffEq for Spectrum {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl RelativeEq for Spectrum {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.g.relative_eq(&other.g, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}

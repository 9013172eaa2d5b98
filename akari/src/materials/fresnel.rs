// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Reflection_Models/Fresnel_Incidence_Effects

/// Reflectance at normal incidence for a boundary between refractive indices
/// `n0` and `n1`.
#[inline]
pub fn schlick_r0(n0: f64, n1: f64) -> f64 {
    let r = (n1 - n0) / (n0 + n1);
    r * r
}

/// Schlick's approximation of the Fresnel reflectance for the given cosine of
/// the incident angle.
///
/// Always within `[schlick_r0(n0, n1), 1.0]` for `cos_theta` in `[0, 1]`.
#[inline]
pub fn schlick_reflectance(cos_theta: f64, n0: f64, n1: f64) -> f64 {
    let r0 = schlick_r0(n0, n1);
    let c = 1.0 - cos_theta;
    r0 + (1.0 - r0) * c * c * c * c * c
}

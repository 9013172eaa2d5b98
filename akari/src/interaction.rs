use crate::{
    math::{Normal, Point3, Ray, Spectrum, Vec3},
    textures::Texture,
};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Interactions#SurfaceInteraction

/// A resolved point on a surface.
///
/// Produced by the winning [`crate::shapes::Shape`] of an intersection scan;
/// holds everything material evaluation needs in one immutable record so the
/// point, normal and oriented normal can never be read out of order.
pub struct SurfaceInteraction {
    /// World position.
    pub p: Point3,
    /// Raw geometric surface normal.
    pub n: Normal,
    /// Surface normal oriented to oppose the incident ray.
    ///
    /// Refraction relies on the sign relation between this and [`Self::n`].
    pub ns: Normal,
    /// Surface parameterization at the hit.
    pub uv: (f64, f64),
    /// View direction in world, toward the ray origin.
    pub wo: Vec3,
    /// Texture color at the hit.
    pub color: Spectrum,
}

impl SurfaceInteraction {
    /// Creates a new `SurfaceInteraction` for `ray` hitting a surface with
    /// geometric normal `n` at `p`.
    ///
    /// Samples `texture` at `uv` and applies its tangent-space perturbation to
    /// the oriented normal if it carries one.
    pub fn new(ray: &Ray, p: Point3, n: Normal, uv: (f64, f64), texture: &dyn Texture) -> Self {
        let wo = -ray.d;
        let mut ns = n.faceforward(wo);
        if let Some(t) = texture.normal_at(uv.0, uv.1) {
            ns = perturb(ns, t).faceforward(wo);
        }

        Self {
            p,
            n,
            ns,
            uv,
            wo,
            color: texture.color_at(uv.0, uv.1),
        }
    }
}

/// Recombines a tangent-space direction `t` around the shading normal `ns`.
fn perturb(ns: Normal, t: Vec3) -> Normal {
    let w = Vec3::from(ns);
    let (u, v) = w.coordinate_system();
    Normal::from((u * t.x + v * t.y + w * t.z).normalized())
}

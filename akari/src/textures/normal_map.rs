use std::sync::Arc;

use super::{ImageTexture, Texture};
use crate::math::{Spectrum, Vec3};

/// A color texture paired with a tangent-space normal map.
///
/// Color lookups delegate to the base texture; the normal image is recombined
/// from its `[0, 1]` encoding into a `[-1, 1]` tangent-space direction that
/// the intersection resolution applies around the shading normal.
pub struct NormalMappedTexture {
    base: Arc<dyn Texture>,
    normals: ImageTexture,
}

impl NormalMappedTexture {
    /// Creates a new `NormalMappedTexture`.
    pub fn new(base: Arc<dyn Texture>, normals: ImageTexture) -> Self {
        Self { base, normals }
    }
}

impl Texture for NormalMappedTexture {
    fn color_at(&self, u: f64, v: f64) -> Spectrum {
        self.base.color_at(u, v)
    }

    fn normal_at(&self, u: f64, v: f64) -> Option<Vec3> {
        let c = self.normals.color_at(u, v);
        let t = Vec3::new(c.r * 2.0 - 1.0, c.g * 2.0 - 1.0, c.b * 2.0 - 1.0);
        // A zero-length texel has no usable direction, leave the normal alone
        if t.len_sqr() < 1e-12 {
            None
        } else {
            Some(t.normalized())
        }
    }
}

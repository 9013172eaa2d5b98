mod constant;
mod image;
mod normal_map;

pub use constant::ConstantTexture;
pub use image::ImageTexture;
pub use normal_map::NormalMappedTexture;

use crate::math::{Spectrum, Vec3};

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Texture/Texture_Interface_and_Basic_Textures

pub trait Texture: Send + Sync {
    /// Evaluates this `Texture` at the given surface parameter.
    fn color_at(&self, u: f64, v: f64) -> Spectrum;

    /// Returns the tangent-space normal perturbation at the given surface
    /// parameter, if this `Texture` carries one.
    fn normal_at(&self, _u: f64, _v: f64) -> Option<Vec3> {
        None
    }
}

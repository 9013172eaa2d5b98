mod dielectric;
mod diffuse;
pub mod fresnel;
mod solid;
mod specular;

pub use dielectric::Dielectric;
pub use diffuse::Diffuse;
pub use solid::Solid;
pub use specular::Specular;

use rand_pcg::Pcg32;

use crate::{
    interaction::SurfaceInteraction,
    math::{Ray, Spectrum},
    scene::Scene,
};

/// A stateless scattering strategy.
///
/// Concrete materials differ only in how they turn one incident ray into
/// zero, one or two recursive continuation rays through [`Scene::radiance`].
pub trait Material: Send + Sync {
    /// Estimates the radiance arriving along the incident `ray` at `si`.
    fn radiance(
        &self,
        scene: &Scene,
        ray: &Ray,
        si: &SurfaceInteraction,
        rng: &mut Pcg32,
    ) -> Spectrum;

    /// Returns the emission spectrum of this `Material`.
    fn emission(&self) -> Spectrum;
}

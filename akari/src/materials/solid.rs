use rand_pcg::Pcg32;

use super::Material;
use crate::{
    interaction::SurfaceInteraction,
    math::{Ray, Spectrum},
    scene::Scene,
};

/// A non-physical material that shades with the surface texture alone.
///
/// No recursion; meant for previews and flat-shaded props.
pub struct Solid {
    emission: Spectrum,
}

impl Solid {
    /// Creates a new `Solid` with the given emission.
    pub fn new(emission: Spectrum) -> Self {
        Self { emission }
    }
}

impl Default for Solid {
    fn default() -> Self {
        Self::new(Spectrum::zeros())
    }
}

impl Material for Solid {
    fn radiance(
        &self,
        _scene: &Scene,
        _ray: &Ray,
        si: &SurfaceInteraction,
        _rng: &mut Pcg32,
    ) -> Spectrum {
        si.color
    }

    fn emission(&self) -> Spectrum {
        self.emission
    }
}

use rand_pcg::Pcg32;

use super::Material;
use crate::{
    interaction::SurfaceInteraction,
    math::{Ray, Spectrum, Vec3},
    scene::Scene,
};

/// A perfect mirror.
pub struct Specular {
    emission: Spectrum,
}

impl Specular {
    /// Creates a new `Specular` with the given emission.
    pub fn new(emission: Spectrum) -> Self {
        Self { emission }
    }
}

impl Default for Specular {
    fn default() -> Self {
        Self::new(Spectrum::zeros())
    }
}

impl Material for Specular {
    fn radiance(
        &self,
        scene: &Scene,
        ray: &Ray,
        si: &SurfaceInteraction,
        rng: &mut Pcg32,
    ) -> Spectrum {
        let n = Vec3::from(si.n);
        let d = ray.d - n * (2.0 * n.dot(ray.d));

        scene.radiance(&ray.reflect(si.p, d), rng)
    }

    fn emission(&self) -> Spectrum {
        self.emission
    }
}

use rand::Rng;
use rand_pcg::Pcg32;

use super::Material;
use crate::{
    interaction::SurfaceInteraction,
    math::{Ray, Spectrum, Vec3},
    scene::Scene,
};

/// An ideal Lambertian surface.
pub struct Diffuse {
    emission: Spectrum,
}

impl Diffuse {
    /// Creates a new `Diffuse` with the given emission.
    pub fn new(emission: Spectrum) -> Self {
        Self { emission }
    }
}

impl Default for Diffuse {
    fn default() -> Self {
        Self::new(Spectrum::zeros())
    }
}

impl Material for Diffuse {
    fn radiance(
        &self,
        scene: &Scene,
        ray: &Ray,
        si: &SurfaceInteraction,
        rng: &mut Pcg32,
    ) -> Spectrum {
        // Cosine-weighted hemisphere sample around the oriented normal
        let w = Vec3::from(si.ns);
        let (u, v) = w.coordinate_system();

        let r1 = 2.0 * std::f64::consts::PI * rng.gen::<f64>();
        let r2: f64 = rng.gen();
        let r2s = r2.sqrt();

        let d = (u * (r1.cos() * r2s) + v * (r1.sin() * r2s) + w * (1.0 - r2).sqrt()).normalized();

        scene.radiance(&ray.reflect(si.p, d), rng)
    }

    fn emission(&self) -> Spectrum {
        self.emission
    }
}

use rand::Rng;
use rand_pcg::Pcg32;

use super::{fresnel, Material};
use crate::{
    interaction::SurfaceInteraction,
    math::{Ray, Spectrum, Vec3},
    scene::Scene,
};

/// A clear dielectric with a single refractive index, e.g. glass.
pub struct Dielectric {
    emission: Spectrum,
    ior: f64,
}

impl Dielectric {
    /// Creates a new `Dielectric` with the given emission and refractive index.
    pub fn new(emission: Spectrum, ior: f64) -> Self {
        debug_assert!(ior > 0.0);
        Self { emission, ior }
    }

    /// Returns the refractive index of this `Dielectric`.
    pub fn ior(&self) -> f64 {
        self.ior
    }
}

impl Material for Dielectric {
    fn radiance(
        &self,
        scene: &Scene,
        ray: &Ray,
        si: &SurfaceInteraction,
        rng: &mut Pcg32,
    ) -> Spectrum {
        let n = Vec3::from(si.n);
        let nl = Vec3::from(si.ns);

        // Raw and oriented normals agree when the ray comes from outside
        let entering = n.dot(nl) > 0.0;
        let (n0, n1) = if entering {
            (1.0, self.ior)
        } else {
            (self.ior, 1.0)
        };
        let eta = n0 / n1;

        let reflected = ray.reflect(si.p, ray.d - n * (2.0 * n.dot(ray.d)));

        let ddn = ray.d.dot(nl);
        let cos2t = 1.0 - eta * eta * (1.0 - ddn * ddn);
        if cos2t < 0.0 {
            // Total internal reflection returns black instead of following the
            // reflected ray. Workaround for a non-terminating recursion in the
            // original transport; a known energy-loss approximation.
            return Spectrum::zeros();
        }

        let sign = if entering { 1.0 } else { -1.0 };
        let tdir = (ray.d * eta - n * (sign * (ddn * eta + cos2t.sqrt()))).normalized();

        let cos_theta = if entering { -ddn } else { tdir.dot(n) };
        let re = fresnel::schlick_reflectance(cos_theta, n0, n1);
        let tr = 1.0 - re;

        let transmitted = ray.reflect(si.p, tdir);
        if ray.depth < scene.transport().min_depth {
            // Shallow rays evaluate both branches deterministically
            scene.radiance(&reflected, rng) * re + scene.radiance(&transmitted, rng) * tr
        } else {
            // Deep rays roulette one branch, biased toward reflectance, and
            // rescale by the inverse pick probability to stay unbiased
            let p = 0.25 + 0.5 * re;
            if rng.gen::<f64>() < p {
                scene.radiance(&reflected, rng) * (re / p)
            } else {
                scene.radiance(&transmitted, rng) * (tr / (1.0 - p))
            }
        }
    }

    fn emission(&self) -> Spectrum {
        self.emission
    }
}

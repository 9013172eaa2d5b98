use std::sync::Arc;

use super::{Shape, HIT_EPSILON};
use crate::{
    interaction::SurfaceInteraction,
    materials::Material,
    math::{Bounds3, Normal, Point3, Ray},
    textures::Texture,
};

/// A triangle primitive.
pub struct Triangle {
    v0: Point3,
    v1: Point3,
    v2: Point3,
    material: Arc<dyn Material>,
    texture: Arc<dyn Texture>,
}

impl Triangle {
    /// Creates a new `Triangle` with counter-clockwise winding.
    pub fn new(
        v0: Point3,
        v1: Point3,
        v2: Point3,
        material: Arc<dyn Material>,
        texture: Arc<dyn Texture>,
    ) -> Self {
        Self {
            v0,
            v1,
            v2,
            material,
            texture,
        }
    }

    /// Möller-Trumbore intersection.
    ///
    /// Returns the hit distance with the barycentric coordinates of the hit.
    fn hit(&self, ray: &Ray) -> Option<(f64, f64, f64)> {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;

        let pvec = ray.d.cross(edge2);
        let det = edge1.dot(pvec);
        // Parallel rays have no usable hit, backfaces do
        if det.abs() < 1e-12 {
            return None;
        }
        let inv_det = 1.0 / det;

        let tvec = ray.o - self.v0;
        let u = tvec.dot(pvec) * inv_det;
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let qvec = tvec.cross(edge1);
        let v = ray.d.dot(qvec) * inv_det;
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = edge2.dot(qvec) * inv_det;
        if t > HIT_EPSILON {
            Some((t, u, v))
        } else {
            None
        }
    }
}

impl Shape for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        self.hit(ray).map(|(t, _, _)| t)
    }

    fn interaction(&self, ray: &Ray, t: f64) -> SurfaceInteraction {
        // Barycentrics parameterize the surface
        let (u, v) = self.hit(ray).map_or((0.0, 0.0), |(_, u, v)| (u, v));

        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        let n = Normal::from(edge1.cross(edge2).normalized());

        SurfaceInteraction::new(ray, ray.point(t), n, (u, v), self.texture.as_ref())
    }

    fn material(&self) -> &Arc<dyn Material> {
        &self.material
    }

    fn texture(&self) -> &Arc<dyn Texture> {
        &self.texture
    }

    fn world_bound(&self) -> Bounds3 {
        Bounds3::new(self.v0, self.v1).union_p(self.v2)
    }
}

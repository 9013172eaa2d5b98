use std::sync::Arc;

use super::{Shape, HIT_EPSILON};
use crate::{
    interaction::SurfaceInteraction,
    materials::Material,
    math::{Bounds3, Normal, Point3, Ray, Vec3},
    textures::Texture,
};

/// A sphere primitive.
pub struct Sphere {
    center: Point3,
    radius: f64,
    material: Arc<dyn Material>,
    texture: Arc<dyn Texture>,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(
        center: Point3,
        radius: f64,
        material: Arc<dyn Material>,
        texture: Arc<dyn Texture>,
    ) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            center,
            radius,
            material,
            texture,
        }
    }

    /// Returns the center of this `Sphere`.
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Returns the radius of this `Sphere`.
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        // Solve t^2 + 2bt + c = 0 with b = (C - O) . D
        let op = self.center - ray.o;
        let b = op.dot(ray.d);
        let det = b * b - op.len_sqr() + self.radius * self.radius;
        if det < 0.0 {
            return None;
        }
        let det = det.sqrt();

        // Prefer the near root, fall back to the far one when the near root is
        // inside the self-intersection band
        let t = b - det;
        if t > HIT_EPSILON {
            return Some(t);
        }
        let t = b + det;
        if t > HIT_EPSILON {
            return Some(t);
        }
        None
    }

    fn interaction(&self, ray: &Ray, t: f64) -> SurfaceInteraction {
        let p = ray.point(t);
        let d = (p - self.center) / self.radius;
        let n = Normal::new(d.x, d.y, d.z);

        // Spherical coordinates normalized to [0, 1]
        let u = 0.5 + d.z.atan2(d.x) / (2.0 * std::f64::consts::PI);
        let v = 0.5 - d.y.clamp(-1.0, 1.0).asin() / std::f64::consts::PI;

        SurfaceInteraction::new(ray, p, n, (u, v), self.texture.as_ref())
    }

    fn material(&self) -> &Arc<dyn Material> {
        &self.material
    }

    fn texture(&self) -> &Arc<dyn Texture> {
        &self.texture
    }

    fn world_bound(&self) -> Bounds3 {
        let r = Vec3::new(self.radius, self.radius, self.radius);
        Bounds3::new(self.center - r, self.center + r)
    }
}
